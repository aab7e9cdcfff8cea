//! Tests for the alias-ambiguity sets and the dialect hooks built on them.

mod common;
use common::*;

use std::collections::HashSet;

use sqlkit_core::keywords::{
    classify, is_reserved_for_column_alias, is_reserved_for_table_alias, Keyword,
    RESERVED_FOR_COLUMN_ALIAS, RESERVED_FOR_TABLE_ALIAS,
};
use sqlkit_core::{Dialect, GenericDialect};

#[test]
fn sets_are_duplicate_free() {
    let column: HashSet<_> = RESERVED_FOR_COLUMN_ALIAS.iter().collect();
    let table: HashSet<_> = RESERVED_FOR_TABLE_ALIAS.iter().collect();
    assert_eq!(column.len(), RESERVED_FOR_COLUMN_ALIAS.len());
    assert_eq!(table.len(), RESERVED_FOR_TABLE_ALIAS.len());
}

#[test]
fn clause_keywords_are_reserved_for_both() {
    init_tracing();
    for keyword in [Keyword::Select, Keyword::Where, Keyword::With] {
        assert!(is_reserved_for_column_alias(keyword), "{keyword}");
        assert!(is_reserved_for_table_alias(keyword), "{keyword}");
    }
}

#[test]
fn join_keywords_are_reserved_only_for_tables() {
    for keyword in [
        Keyword::Join,
        Keyword::On,
        Keyword::Natural,
        Keyword::Inner,
        Keyword::Using,
    ] {
        assert!(is_reserved_for_table_alias(keyword), "{keyword}");
        assert!(!is_reserved_for_column_alias(keyword), "{keyword}");
    }
}

#[test]
fn from_and_into_are_reserved_only_for_columns() {
    for keyword in [Keyword::From, Keyword::Into] {
        assert!(is_reserved_for_column_alias(keyword), "{keyword}");
        assert!(!is_reserved_for_table_alias(keyword), "{keyword}");
    }
}

#[test]
fn column_set_is_exactly_the_triaged_keywords() {
    let expected: HashSet<&str> = [
        "WITH", "EXPLAIN", "ANALYZE", "SELECT", "WHERE", "GROUP", "SORT", "HAVING", "ORDER",
        "TOP", "LATERAL", "VIEW", "LIMIT", "OFFSET", "FETCH", "UNION", "EXCEPT", "INTERSECT",
        "CLUSTER", "DISTRIBUTE", "FROM", "INTO", "END",
    ]
    .into_iter()
    .collect();
    let actual: HashSet<&str> = Keyword::VARIANTS
        .iter()
        .filter(|k| is_reserved_for_column_alias(**k))
        .map(Keyword::as_str)
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn table_set_is_exactly_the_triaged_keywords() {
    let expected: HashSet<&str> = [
        "WITH", "EXPLAIN", "ANALYZE", "SELECT", "WHERE", "GROUP", "SORT", "HAVING", "ORDER",
        "PIVOT", "TOP", "LATERAL", "VIEW", "LIMIT", "OFFSET", "FETCH", "UNION", "EXCEPT",
        "INTERSECT", "ON", "JOIN", "INNER", "CROSS", "FULL", "LEFT", "RIGHT", "NATURAL", "USING",
        "CLUSTER", "DISTRIBUTE", "OUTER", "SET", "QUALIFY", "WINDOW", "END", "AS",
    ]
    .into_iter()
    .collect();
    let actual: HashSet<&str> = Keyword::VARIANTS
        .iter()
        .filter(|k| is_reserved_for_table_alias(**k))
        .map(Keyword::as_str)
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn unlisted_keywords_default_to_not_reserved() {
    for keyword in [
        Keyword::Rows,
        Keyword::Range,
        Keyword::Partition,
        Keyword::Over,
        Keyword::Zone,
        Keyword::EndExec,
        Keyword::Undefined,
    ] {
        assert!(!is_reserved_for_column_alias(keyword), "{keyword:?}");
        assert!(!is_reserved_for_table_alias(keyword), "{keyword:?}");
    }
}

/// `FROM t <word>`: decides whether `<word>` is an alias using one token.
fn starts_table_alias(dialect: &dyn Dialect, word: &str) -> bool {
    dialect.is_table_alias(classify(word).keyword())
}

#[test]
fn generic_dialect_resolves_table_alias_lookahead() {
    let dialect = GenericDialect::new();
    assert!(starts_table_alias(&dialect, "cust"));
    assert!(starts_table_alias(&dialect, "rows"));
    assert!(!starts_table_alias(&dialect, "WHERE"));
    assert!(!starts_table_alias(&dialect, "join"));
}

struct JoinAliasDialect;

impl Dialect for JoinAliasDialect {
    fn name(&self) -> &'static str {
        "join-alias"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn is_table_alias(&self, keyword: Keyword) -> bool {
        keyword == Keyword::Join || !is_reserved_for_table_alias(keyword)
    }
}

#[test]
fn dialect_can_override_alias_policy() {
    let dialect = JoinAliasDialect;
    assert!(starts_table_alias(&dialect, "join"));
    assert!(!starts_table_alias(&dialect, "where"));
    assert!(dialect.is_column_alias(Keyword::Join));
    assert_eq!(dialect.quote_identifier("join").to_string(), "`join`");
}
