//! SQL Dialect support.
//!
//! Different databases disagree on which keywords may double as aliases and on
//! how identifiers are quoted. This module provides a trait for that
//! dialect-specific behavior; the defaults follow the shared keyword registry.

mod generic;

pub use generic::GenericDialect;

use crate::ast::Ident;
use crate::keywords::{self, Keyword};

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier with this dialect's quote character.
    fn quote_identifier(&self, name: &str) -> Ident {
        Ident::with_quote(self.identifier_quote(), name)
    }

    /// Returns whether `keyword`, seen right after a select item, may start
    /// its alias (`SELECT expr alias`).
    fn is_column_alias(&self, keyword: Keyword) -> bool {
        !keywords::is_reserved_for_column_alias(keyword)
    }

    /// Returns whether `keyword`, seen right after a table reference, may
    /// start its alias (`FROM table alias`).
    fn is_table_alias(&self, keyword: Keyword) -> bool {
        !keywords::is_reserved_for_table_alias(keyword)
    }
}
