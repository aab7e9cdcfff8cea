//! The process-wide keyword registry.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use tracing::debug;

use super::Keyword;

/// Length of the longest keyword text (`CURRENT_TRANSFORM_GROUP_FOR_TYPE`).
pub const MAX_KEYWORD_LEN: usize = 32;

/// Keywords that can't start a column alias, so that `SELECT expr alias`
/// can be parsed unambiguously without looking ahead.
pub const RESERVED_FOR_COLUMN_ALIAS: &[Keyword] = &[
    // Reserved as both a table and a column alias:
    Keyword::With,
    Keyword::Explain,
    Keyword::Analyze,
    Keyword::Select,
    Keyword::Where,
    Keyword::Group,
    Keyword::Sort,
    Keyword::Having,
    Keyword::Order,
    Keyword::Top,
    Keyword::Lateral,
    Keyword::View,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Union,
    Keyword::Except,
    Keyword::Intersect,
    Keyword::Cluster,
    Keyword::Distribute,
    // Reserved only as a column alias in the `SELECT` clause:
    Keyword::From,
    Keyword::Into,
    Keyword::End,
];

/// Keywords that can't start a table alias, so that `FROM table alias`
/// can be parsed unambiguously without looking ahead.
pub const RESERVED_FOR_TABLE_ALIAS: &[Keyword] = &[
    // Reserved as both a table and a column alias:
    Keyword::With,
    Keyword::Explain,
    Keyword::Analyze,
    Keyword::Select,
    Keyword::Where,
    Keyword::Group,
    Keyword::Sort,
    Keyword::Having,
    Keyword::Order,
    Keyword::Pivot,
    Keyword::Top,
    Keyword::Lateral,
    Keyword::View,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Union,
    Keyword::Except,
    Keyword::Intersect,
    // Reserved only as a table alias in the `FROM`/`JOIN` clauses:
    Keyword::On,
    Keyword::Join,
    Keyword::Inner,
    Keyword::Cross,
    Keyword::Full,
    Keyword::Left,
    Keyword::Right,
    Keyword::Natural,
    Keyword::Using,
    Keyword::Cluster,
    Keyword::Distribute,
    // `OUTER APPLY`
    Keyword::Outer,
    Keyword::Set,
    Keyword::Qualify,
    Keyword::Window,
    Keyword::End,
    Keyword::As,
];

static REGISTRY: Lazy<KeywordRegistry> = Lazy::new(KeywordRegistry::build);

/// How a bare word classifies against the keyword catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// The word is a reserved keyword.
    Keyword(Keyword),
    /// The word is an ordinary identifier.
    Identifier,
}

impl WordKind {
    /// Returns the keyword, or [`Keyword::Undefined`] for identifiers.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::Keyword(keyword) => *keyword,
            Self::Identifier => Keyword::Undefined,
        }
    }
}

/// Immutable catalog of every keyword and the two alias-ambiguity sets.
///
/// Built once on first access and shared read-only afterwards.
#[derive(Debug)]
pub struct KeywordRegistry {
    all: Vec<&'static str>,
    by_text: HashMap<&'static str, Keyword>,
    column_alias: HashSet<Keyword>,
    table_alias: HashSet<Keyword>,
}

impl KeywordRegistry {
    /// Returns the process-wide registry, building it on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn build() -> Self {
        let all: Vec<&'static str> = Keyword::VARIANTS.iter().map(Keyword::as_str).collect();
        let by_text = Keyword::VARIANTS
            .iter()
            .map(|keyword| (keyword.as_str(), *keyword))
            .collect();
        let column_alias: HashSet<Keyword> = RESERVED_FOR_COLUMN_ALIAS.iter().copied().collect();
        let table_alias: HashSet<Keyword> = RESERVED_FOR_TABLE_ALIAS.iter().copied().collect();

        debug!(
            keywords = all.len(),
            column_alias = column_alias.len(),
            table_alias = table_alias.len(),
            "keyword registry initialized"
        );

        Self {
            all,
            by_text,
            column_alias,
            table_alias,
        }
    }

    /// Every keyword's SQL text in declaration order, sentinel excluded.
    #[must_use]
    pub fn all(&self) -> &[&'static str] {
        &self.all
    }

    /// Looks up a keyword by its SQL text (case-insensitive).
    ///
    /// Uppercases into a stack buffer, so lookups never allocate.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Keyword> {
        if word.len() > MAX_KEYWORD_LEN {
            return None;
        }
        let mut buf = [0u8; MAX_KEYWORD_LEN];
        let key = &mut buf[..word.len()];
        key.copy_from_slice(word.as_bytes());
        key.make_ascii_uppercase();
        let key = std::str::from_utf8(key).ok()?;
        self.by_text.get(key).copied()
    }

    /// Returns true if `keyword` may not start a column alias.
    #[must_use]
    pub fn is_reserved_for_column_alias(&self, keyword: Keyword) -> bool {
        self.column_alias.contains(&keyword)
    }

    /// Returns true if `keyword` may not start a table alias.
    #[must_use]
    pub fn is_reserved_for_table_alias(&self, keyword: Keyword) -> bool {
        self.table_alias.contains(&keyword)
    }
}

/// Every keyword's SQL text in declaration order.
#[must_use]
pub fn all_keywords() -> &'static [&'static str] {
    KeywordRegistry::global().all()
}

/// Classifies a bare word as a keyword or an identifier.
#[must_use]
pub fn classify(word: &str) -> WordKind {
    KeywordRegistry::global()
        .lookup(word)
        .map_or(WordKind::Identifier, WordKind::Keyword)
}

/// Returns true if `keyword` may not start a column alias.
#[must_use]
pub fn is_reserved_for_column_alias(keyword: Keyword) -> bool {
    KeywordRegistry::global().is_reserved_for_column_alias(keyword)
}

/// Returns true if `keyword` may not start a table alias.
#[must_use]
pub fn is_reserved_for_table_alias(keyword: Keyword) -> bool {
    KeywordRegistry::global().is_reserved_for_table_alias(keyword)
}
