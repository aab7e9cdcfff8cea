//! SQL keyword catalog.
//!
//! [`Keyword`] enumerates every reserved word. The [`KeywordRegistry`] holds
//! the ordered keyword list and the two alias-ambiguity sets a parser consults
//! when it has to decide, with a single token of lookahead, whether a word
//! after an expression or table reference is an alias or the next clause.
//!
//! ```rust
//! use sqlkit_core::keywords::{self, Keyword, WordKind};
//!
//! assert_eq!(keywords::classify("where"), WordKind::Keyword(Keyword::Where));
//! assert!(keywords::is_reserved_for_table_alias(Keyword::Join));
//! assert!(!keywords::is_reserved_for_column_alias(Keyword::Join));
//! ```

mod keyword;
mod registry;

pub use keyword::{Keyword, RENAMED_KEYWORDS};
pub use registry::{
    all_keywords, classify, is_reserved_for_column_alias, is_reserved_for_table_alias,
    KeywordRegistry, WordKind, MAX_KEYWORD_LEN, RESERVED_FOR_COLUMN_ALIAS,
    RESERVED_FOR_TABLE_ALIAS,
};
