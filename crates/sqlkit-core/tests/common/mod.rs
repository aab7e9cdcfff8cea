#![allow(dead_code)]

use sqlkit_core::ast::{Expr, OrderByExpr};
use sqlkit_core::WriteSql;

/// Installs a test-writer subscriber so registry events show up with
/// `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn col(name: &str) -> Expr {
    Expr::identifier(name)
}

pub fn asc(name: &str) -> OrderByExpr {
    OrderByExpr::new(col(name)).asc()
}

/// Renders `node` and checks that rendering is repeatable and agrees
/// with `Display`.
pub fn render<T: WriteSql + std::fmt::Display>(node: &T) -> String {
    let first = node.to_sql();
    let second = node.to_sql();
    assert_eq!(first, second, "Rendering is not deterministic");
    assert_eq!(first, node.to_string(), "Display disagrees with to_sql");
    first
}
