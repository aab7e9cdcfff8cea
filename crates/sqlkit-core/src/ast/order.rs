//! ORDER BY entries.

use super::expression::Expr;
use crate::writer::{display_via_write_sql, SqlWriter, WriteSql};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY entry. Direction and null ordering render only when given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderByExpr {
    /// The expression to order by.
    pub expr: Expr,
    /// ASC or DESC, if written.
    pub direction: Option<OrderDirection>,
    /// NULLS FIRST or NULLS LAST, if written.
    pub nulls: Option<NullOrdering>,
}

impl OrderByExpr {
    /// Creates an entry with no explicit direction.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
        }
    }

    /// Sets ASC.
    #[must_use]
    pub fn asc(mut self) -> Self {
        self.direction = Some(OrderDirection::Asc);
        self
    }

    /// Sets DESC.
    #[must_use]
    pub fn desc(mut self) -> Self {
        self.direction = Some(OrderDirection::Desc);
        self
    }

    /// Sets NULLS FIRST.
    #[must_use]
    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrdering::First);
        self
    }

    /// Sets NULLS LAST.
    #[must_use]
    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrdering::Last);
        self
    }
}

impl WriteSql for OrderByExpr {
    fn write_sql(&self, writer: &mut SqlWriter) {
        writer.write_sql(&self.expr);
        if let Some(direction) = self.direction {
            writer.write(" ").write(direction.as_str());
        }
        if let Some(nulls) = self.nulls {
            writer.write(" ").write(nulls.as_str());
        }
    }
}

display_via_write_sql!(OrderByExpr);

impl From<Expr> for OrderByExpr {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}
