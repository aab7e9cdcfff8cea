//! Error types.

use thiserror::Error;

/// Errors raised when converting text into catalog values.
///
/// Rendering never fails; these only come from `FromStr` conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The word is not in the keyword catalog.
    #[error("unknown keyword: {0}")]
    UnknownKeyword(String),

    /// The word is not ROWS, RANGE or GROUPS.
    #[error("unknown window frame unit: {0}")]
    UnknownFrameUnit(String),
}

/// Result type alias for fallible conversions.
pub type Result<T> = std::result::Result<T, Error>;
