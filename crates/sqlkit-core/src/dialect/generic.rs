//! Generic SQL dialect.
//!
//! Takes every [`Dialect`] default: double-quoted identifiers and the
//! keyword registry's alias reservations unchanged.

use super::Dialect;

/// The ANSI-flavoured baseline dialect. Alias checks defer to
/// [`crate::keywords::is_reserved_for_column_alias`] and
/// [`crate::keywords::is_reserved_for_table_alias`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::Keyword;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.quote_identifier("order").to_string(), "\"order\"");
    }

    #[test]
    fn test_generic_alias_policy() {
        let dialect = GenericDialect::new();
        assert!(!dialect.is_table_alias(Keyword::Join));
        assert!(dialect.is_column_alias(Keyword::Join));
        assert!(!dialect.is_column_alias(Keyword::From));
        assert!(dialect.is_table_alias(Keyword::From));
        assert!(dialect.is_table_alias(Keyword::Undefined));
    }
}
