//! Abstract Syntax Tree (AST) types.
//!
//! Every node implements [`WriteSql`](crate::writer::WriteSql) and
//! `Display`, both producing the same canonical SQL text.

mod expression;
mod ident;
mod order;
mod window;

pub use expression::{BinaryOp, Expr, FunctionCall, Literal, UnaryOp};
pub use ident::Ident;
pub use order::{NullOrdering, OrderByExpr, OrderDirection};
pub use window::{
    NamedWindowDefinition, WindowFrame, WindowFrameBound, WindowFrameUnit, WindowSpec, WindowType,
};
