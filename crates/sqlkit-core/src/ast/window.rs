//! Window function specifications.
//!
//! A window is described by up to three sections: partitioning, ordering and
//! a frame. Each type renders to the canonical text a parser would accept
//! back:
//!
//! ```rust
//! use sqlkit_core::ast::{Expr, OrderByExpr, WindowFrame, WindowFrameBound, WindowFrameUnit, WindowSpec};
//! use sqlkit_core::writer::WriteSql;
//!
//! let spec = WindowSpec::new()
//!     .partition_by(vec![Expr::identifier("a")])
//!     .order_by(vec![OrderByExpr::new(Expr::identifier("b")).asc()])
//!     .window_frame(WindowFrame::between(
//!         WindowFrameUnit::Rows,
//!         WindowFrameBound::unbounded_preceding(),
//!         WindowFrameBound::CurrentRow,
//!     ));
//!
//! assert_eq!(
//!     spec.to_sql(),
//!     "PARTITION BY a ORDER BY b ASC ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW"
//! );
//! ```

use core::str::FromStr;

use super::expression::Expr;
use super::ident::Ident;
use super::order::OrderByExpr;
use crate::error::Error;
use crate::keywords::Keyword;
use crate::writer::{display_via_write_sql, SqlWriter, WriteSql};

/// The frame mode of a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowFrameUnit {
    /// `ROWS`: offsets count physical rows.
    Rows,
    /// `RANGE`: offsets are distances in the ordering value.
    Range,
    /// `GROUPS`: offsets count peer groups.
    Groups,
}

impl WindowFrameUnit {
    /// Returns the keyword that introduces this frame mode.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::Rows => Keyword::Rows,
            Self::Range => Keyword::Range,
            Self::Groups => Keyword::Groups,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.keyword().declared_name()
    }
}

impl FromStr for WindowFrameUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Keyword>() {
            Ok(Keyword::Rows) => Ok(Self::Rows),
            Ok(Keyword::Range) => Ok(Self::Range),
            Ok(Keyword::Groups) => Ok(Self::Groups),
            _ => Err(Error::UnknownFrameUnit(s.to_string())),
        }
    }
}

impl WriteSql for WindowFrameUnit {
    fn write_sql(&self, writer: &mut SqlWriter) {
        writer.write(self.as_str());
    }
}

/// One end of a window frame.
///
/// A missing offset on `Preceding`/`Following` means `UNBOUNDED`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowFrameBound {
    /// `CURRENT ROW`
    CurrentRow,
    /// `<offset> PRECEDING` or `UNBOUNDED PRECEDING`
    Preceding(Option<Box<Expr>>),
    /// `<offset> FOLLOWING` or `UNBOUNDED FOLLOWING`
    Following(Option<Box<Expr>>),
}

impl WindowFrameBound {
    /// `UNBOUNDED PRECEDING`
    #[must_use]
    pub const fn unbounded_preceding() -> Self {
        Self::Preceding(None)
    }

    /// `UNBOUNDED FOLLOWING`
    #[must_use]
    pub const fn unbounded_following() -> Self {
        Self::Following(None)
    }

    /// `<offset> PRECEDING`
    #[must_use]
    pub fn preceding(offset: Expr) -> Self {
        Self::Preceding(Some(Box::new(offset)))
    }

    /// `<offset> FOLLOWING`
    #[must_use]
    pub fn following(offset: Expr) -> Self {
        Self::Following(Some(Box::new(offset)))
    }
}

impl WriteSql for WindowFrameBound {
    fn write_sql(&self, writer: &mut SqlWriter) {
        match self {
            Self::CurrentRow => {
                writer.write("CURRENT ROW");
            }
            Self::Preceding(None) => {
                writer.write("UNBOUNDED PRECEDING");
            }
            Self::Preceding(Some(offset)) => {
                writer.write_sql(offset).write(" PRECEDING");
            }
            Self::Following(None) => {
                writer.write("UNBOUNDED FOLLOWING");
            }
            Self::Following(Some(offset)) => {
                writer.write_sql(offset).write(" FOLLOWING");
            }
        }
    }
}

/// A window frame: `<units> <start>` or `<units> BETWEEN <start> AND <end>`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowFrame {
    /// ROWS, RANGE or GROUPS.
    pub units: WindowFrameUnit,
    /// The frame start.
    pub start_bound: WindowFrameBound,
    /// The frame end; `None` for the single-bound form.
    pub end_bound: Option<WindowFrameBound>,
}

impl WindowFrame {
    /// Creates a single-bound frame, e.g. `ROWS UNBOUNDED PRECEDING`.
    #[must_use]
    pub const fn new(units: WindowFrameUnit, start_bound: WindowFrameBound) -> Self {
        Self {
            units,
            start_bound,
            end_bound: None,
        }
    }

    /// Creates a `BETWEEN ... AND ...` frame.
    #[must_use]
    pub const fn between(
        units: WindowFrameUnit,
        start_bound: WindowFrameBound,
        end_bound: WindowFrameBound,
    ) -> Self {
        Self {
            units,
            start_bound,
            end_bound: Some(end_bound),
        }
    }
}

impl Default for WindowFrame {
    /// The frame SQL implies when ORDER BY is given without one:
    /// `RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW`.
    fn default() -> Self {
        Self::between(
            WindowFrameUnit::Range,
            WindowFrameBound::unbounded_preceding(),
            WindowFrameBound::CurrentRow,
        )
    }
}

impl WriteSql for WindowFrame {
    fn write_sql(&self, writer: &mut SqlWriter) {
        writer.write_sql(&self.units);
        match &self.end_bound {
            Some(end_bound) => {
                writer
                    .write(" BETWEEN ")
                    .write_sql(&self.start_bound)
                    .write(" AND ")
                    .write_sql(end_bound);
            }
            None => {
                writer.write(" ").write_sql(&self.start_bound);
            }
        }
    }
}

/// The body of an `OVER (...)` clause or a `WINDOW` definition.
///
/// `partition_by` is emitted only when non-empty, while `order_by` is emitted
/// whenever it is present, even if the list is empty.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSpec {
    /// PARTITION BY expressions.
    pub partition_by: Vec<Expr>,
    /// ORDER BY entries, if an ORDER BY section was written.
    pub order_by: Option<Vec<OrderByExpr>>,
    /// The frame clause.
    pub window_frame: Option<WindowFrame>,
}

impl WindowSpec {
    /// Creates an empty window spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the PARTITION BY expressions.
    #[must_use]
    pub fn partition_by(mut self, exprs: Vec<Expr>) -> Self {
        self.partition_by = exprs;
        self
    }

    /// Sets the ORDER BY section.
    #[must_use]
    pub fn order_by(mut self, order_by: Vec<OrderByExpr>) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Sets the frame clause.
    #[must_use]
    pub fn window_frame(mut self, frame: WindowFrame) -> Self {
        self.window_frame = Some(frame);
        self
    }
}

impl WriteSql for WindowSpec {
    fn write_sql(&self, writer: &mut SqlWriter) {
        let mut delimiter = "";
        if !self.partition_by.is_empty() {
            delimiter = " ";
            writer
                .write("PARTITION BY ")
                .write_comma_separated(&self.partition_by);
        }

        if let Some(order_by) = &self.order_by {
            writer.write(delimiter);
            delimiter = " ";
            writer.write("ORDER BY ").write_comma_separated(order_by);
        }

        if let Some(frame) = &self.window_frame {
            writer.write(delimiter).write_sql(frame);
        }
    }
}

/// A `WINDOW` clause entry binding a name to a spec: `w as (...)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedWindowDefinition {
    /// The window name.
    pub name: Ident,
    /// The window body.
    pub spec: WindowSpec,
}

impl NamedWindowDefinition {
    /// Creates a named window definition.
    #[must_use]
    pub fn new(name: impl Into<Ident>, spec: WindowSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

impl WriteSql for NamedWindowDefinition {
    fn write_sql(&self, writer: &mut SqlWriter) {
        writer
            .write_sql(&self.name)
            .write(" as (")
            .write_sql(&self.spec)
            .write(")");
    }
}

/// The target of a function's `OVER` clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowType {
    /// An inline spec: `OVER (...)`.
    WindowSpec(WindowSpec),
    /// A reference to a named window: `OVER w`.
    NamedWindow(Ident),
}

impl WriteSql for WindowType {
    fn write_sql(&self, writer: &mut SqlWriter) {
        match self {
            Self::WindowSpec(spec) => {
                writer.write("(").write_sql(spec).write(")");
            }
            Self::NamedWindow(name) => {
                writer.write_sql(name);
            }
        }
    }
}

impl From<WindowSpec> for WindowType {
    fn from(spec: WindowSpec) -> Self {
        Self::WindowSpec(spec)
    }
}

impl From<Ident> for WindowType {
    fn from(name: Ident) -> Self {
        Self::NamedWindow(name)
    }
}

display_via_write_sql!(
    WindowFrameUnit,
    WindowFrameBound,
    WindowFrame,
    WindowSpec,
    NamedWindowDefinition,
    WindowType,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> Expr {
        Expr::identifier(name)
    }

    #[test]
    fn test_frame_unit() {
        assert_eq!(WindowFrameUnit::Rows.to_sql(), "ROWS");
        assert_eq!(WindowFrameUnit::Range.to_sql(), "RANGE");
        assert_eq!(WindowFrameUnit::Groups.to_sql(), "GROUPS");
        assert_eq!("groups".parse::<WindowFrameUnit>(), Ok(WindowFrameUnit::Groups));
        assert_eq!(
            "SELECT".parse::<WindowFrameUnit>(),
            Err(Error::UnknownFrameUnit(String::from("SELECT")))
        );
    }

    #[test]
    fn test_bounds() {
        assert_eq!(WindowFrameBound::CurrentRow.to_sql(), "CURRENT ROW");
        assert_eq!(
            WindowFrameBound::unbounded_preceding().to_sql(),
            "UNBOUNDED PRECEDING"
        );
        assert_eq!(
            WindowFrameBound::unbounded_following().to_sql(),
            "UNBOUNDED FOLLOWING"
        );
        assert_eq!(
            WindowFrameBound::preceding(Expr::integer(5)).to_sql(),
            "5 PRECEDING"
        );
        assert_eq!(
            WindowFrameBound::following(Expr::integer(2)).to_sql(),
            "2 FOLLOWING"
        );
    }

    #[test]
    fn test_single_bound_frame() {
        let frame = WindowFrame::new(
            WindowFrameUnit::Rows,
            WindowFrameBound::preceding(Expr::integer(5)),
        );
        assert_eq!(frame.to_sql(), "ROWS 5 PRECEDING");
    }

    #[test]
    fn test_default_frame() {
        assert_eq!(
            WindowFrame::default().to_sql(),
            "RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW"
        );
    }

    #[test]
    fn test_spec_sections() {
        let spec = WindowSpec::new().partition_by(vec![col("a"), col("b")]);
        assert_eq!(spec.to_sql(), "PARTITION BY a, b");

        let spec = WindowSpec::new().order_by(vec![OrderByExpr::new(col("x")).desc()]);
        assert_eq!(spec.to_sql(), "ORDER BY x DESC");

        let spec = WindowSpec::new().window_frame(WindowFrame::new(
            WindowFrameUnit::Groups,
            WindowFrameBound::CurrentRow,
        ));
        assert_eq!(spec.to_sql(), "GROUPS CURRENT ROW");
    }

    #[test]
    fn test_empty_spec() {
        assert_eq!(WindowSpec::new().to_sql(), "");
    }

    #[test]
    fn test_present_but_empty_order_by() {
        let spec = WindowSpec::new().order_by(vec![]);
        assert_eq!(spec.to_sql(), "ORDER BY ");

        let spec = WindowSpec::new()
            .partition_by(vec![col("a")])
            .order_by(vec![]);
        assert_eq!(spec.to_sql(), "PARTITION BY a ORDER BY ");
    }

    #[test]
    fn test_empty_partition_by_emits_nothing() {
        let spec = WindowSpec::new()
            .partition_by(vec![])
            .window_frame(WindowFrame::default());
        assert_eq!(
            spec.to_sql(),
            "RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW"
        );
    }

    #[test]
    fn test_named_window_definition() {
        let def = NamedWindowDefinition::new("w", WindowSpec::new());
        assert_eq!(def.to_sql(), "w as ()");

        let def = NamedWindowDefinition::new(
            "w",
            WindowSpec::new().partition_by(vec![col("dept")]),
        );
        assert_eq!(def.to_string(), "w as (PARTITION BY dept)");
    }

    #[test]
    fn test_window_type() {
        let inline = WindowType::from(WindowSpec::new().order_by(vec![col("x").into()]));
        assert_eq!(inline.to_sql(), "(ORDER BY x)");
        assert_eq!(WindowType::from(Ident::new("w")).to_sql(), "w");
    }
}
