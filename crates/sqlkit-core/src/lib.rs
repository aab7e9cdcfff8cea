//! # sqlkit-core
//!
//! Keyword classification and window-function AST for a SQL dialect toolkit.
//!
//! This crate provides:
//! - The reserved-word catalog with the alias-ambiguity sets a parser uses to
//!   tell `FROM t alias` apart from `FROM t WHERE ...`
//! - The window specification model (frames, partitioning, ordering) with
//!   canonical SQL rendering
//! - A small SQL writer that every AST node renders through
//!
//! ## Keywords
//!
//! ```rust
//! use sqlkit_core::keywords::{self, Keyword, WordKind};
//!
//! assert_eq!(keywords::classify("from"), WordKind::Keyword(Keyword::From));
//! assert!(keywords::is_reserved_for_column_alias(Keyword::From));
//! assert!(!keywords::is_reserved_for_table_alias(Keyword::From));
//! ```
//!
//! ## Window functions
//!
//! ```rust
//! use sqlkit_core::ast::{Expr, FunctionCall, OrderByExpr, WindowSpec};
//!
//! let rank = FunctionCall::new("RANK", vec![]).over(
//!     WindowSpec::new()
//!         .partition_by(vec![Expr::identifier("dept")])
//!         .order_by(vec![OrderByExpr::new(Expr::identifier("salary")).desc()]),
//! );
//!
//! assert_eq!(
//!     rank.to_string(),
//!     "RANK() OVER (PARTITION BY dept ORDER BY salary DESC)"
//! );
//! ```

pub mod ast;
pub mod dialect;
pub mod error;
pub mod keywords;
pub mod writer;

pub use ast::{Expr, NamedWindowDefinition, WindowFrame, WindowFrameBound, WindowSpec};
pub use dialect::{Dialect, GenericDialect};
pub use error::{Error, Result};
pub use keywords::{Keyword, KeywordRegistry, WordKind};
pub use writer::{SqlWriter, WriteSql};
