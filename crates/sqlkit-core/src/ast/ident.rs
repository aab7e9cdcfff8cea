//! Identifiers.

use crate::writer::{display_via_write_sql, SqlWriter, WriteSql};

/// An identifier, optionally quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    /// The identifier text, without quotes.
    pub value: String,
    /// The opening quote character, if quoted (`"`, `'`, `` ` `` or `[`).
    pub quote_style: Option<char>,
}

impl Ident {
    /// Creates an unquoted identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quote_style: None,
        }
    }

    /// Creates an identifier quoted with `quote`.
    #[must_use]
    pub fn with_quote(quote: char, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

/// Returns the closing quote for an opening quote character.
const fn closing_quote(open: char) -> char {
    match open {
        '[' => ']',
        other => other,
    }
}

impl WriteSql for Ident {
    fn write_sql(&self, writer: &mut SqlWriter) {
        let Some(open) = self.quote_style else {
            writer.write(&self.value);
            return;
        };
        let close = closing_quote(open);
        let mut escaped = String::with_capacity(self.value.len() + 2);
        escaped.push(open);
        for c in self.value.chars() {
            if c == close {
                escaped.push(close);
            }
            escaped.push(c);
        }
        escaped.push(close);
        writer.write(&escaped);
    }
}

display_via_write_sql!(Ident);

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
