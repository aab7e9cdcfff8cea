//! Expression AST types.

use super::ident::Ident;
use super::window::WindowType;
use crate::writer::{display_via_write_sql, SqlWriter, WriteSql};

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal. NaN and the infinities have no numeric literal form
    /// and render as the quoted strings `'NaN'`, `'Infinity'` and
    /// `'-Infinity'`, which PostgreSQL accepts as float input.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

impl WriteSql for Literal {
    fn write_sql(&self, writer: &mut SqlWriter) {
        match self {
            Self::Integer(value) => {
                writer.write(&value.to_string());
            }
            Self::Float(value) if value.is_nan() => {
                writer.write("'NaN'");
            }
            Self::Float(value) if value.is_infinite() => {
                let text = if value.is_sign_positive() {
                    "'Infinity'"
                } else {
                    "'-Infinity'"
                };
                writer.write(text);
            }
            // Debug keeps the fractional part, so 2.0 stays a float on re-parse.
            Self::Float(value) => {
                writer.write(&format!("{value:?}"));
            }
            Self::String(value) => {
                writer.write("'").write(&value.replace('\'', "''")).write("'");
            }
            Self::Boolean(true) => {
                writer.write("TRUE");
            }
            Self::Boolean(false) => {
                writer.write("FALSE");
            }
            Self::Null => {
                writer.write("NULL");
            }
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // String
    Concat,
    Like,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::Like => "LIKE",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 3,
            Self::Like => 4,
            Self::Add | Self::Sub | Self::Concat => 5,
            Self::Mul | Self::Div | Self::Mod => 6,
        }
    }

    /// Returns true if `a op (b op c)` means the same as `(a op b) op c`.
    #[must_use]
    pub const fn is_associative(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Mul | Self::And | Self::Or | Self::Concat
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Logical NOT
    Not,
    /// Bitwise NOT (~)
    BitNot,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "NOT ",
            Self::BitNot => "~",
        }
    }
}

/// A function call expression, optionally windowed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    /// The function name.
    pub name: String,
    /// The arguments.
    pub args: Vec<Expr>,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// The `OVER` clause, for window function calls.
    pub over: Option<WindowType>,
}

impl FunctionCall {
    /// Creates a plain function call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            distinct: false,
            over: None,
        }
    }

    /// Marks the call as `DISTINCT`.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Attaches an `OVER` clause.
    #[must_use]
    pub fn over(mut self, window: impl Into<WindowType>) -> Self {
        self.over = Some(window.into());
        self
    }
}

impl WriteSql for FunctionCall {
    fn write_sql(&self, writer: &mut SqlWriter) {
        writer.write(&self.name).write("(");
        if self.distinct {
            writer.write("DISTINCT ");
        }
        writer.write_comma_separated(&self.args).write(")");
        if let Some(window) = &self.over {
            writer.write(" OVER ").write_sql(window);
        }
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A bare identifier, e.g. a column name.
    Identifier(Ident),

    /// A qualified identifier, e.g. `t.col`.
    CompoundIdentifier(Vec<Ident>),

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// Parenthesized expression.
    Nested(Box<Expr>),

    /// IS NULL expression.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// BETWEEN expression.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// Wildcard (*), as in `COUNT(*)`.
    Wildcard,
}

impl Expr {
    /// Creates an unquoted identifier.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(Ident::new(name))
    }

    /// Creates a qualified identifier from its parts.
    #[must_use]
    pub fn compound(parts: &[&str]) -> Self {
        Self::CompoundIdentifier(parts.iter().map(|part| Ident::new(*part)).collect())
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a function call expression.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall::new(name, args))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Wraps the expression in parentheses.
    #[must_use]
    pub fn nested(self) -> Self {
        Self::Nested(Box::new(self))
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        }
    }
}

/// Binding strength of `NOT`: looser than comparisons, tighter than `AND`.
const NOT_PRECEDENCE: u8 = 2;

/// Binding strength of anything that never needs parentheses.
const ATOM_PRECEDENCE: u8 = u8::MAX;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Self::Binary { op, .. } => op.precedence(),
            Self::Unary {
                op: UnaryOp::Not, ..
            } => NOT_PRECEDENCE,
            Self::IsNull { .. } => BinaryOp::Eq.precedence(),
            Self::Between { .. } => BinaryOp::Like.precedence(),
            _ => ATOM_PRECEDENCE,
        }
    }
}

/// Writes `operand`, parenthesized when it binds looser than `min_precedence`.
fn write_operand(writer: &mut SqlWriter, operand: &Expr, min_precedence: u8) {
    if operand.precedence() < min_precedence {
        writer.write("(").write_sql(operand).write(")");
    } else {
        writer.write_sql(operand);
    }
}

impl WriteSql for Expr {
    fn write_sql(&self, writer: &mut SqlWriter) {
        match self {
            Self::Literal(literal) => {
                writer.write_sql(literal);
            }
            Self::Identifier(ident) => {
                writer.write_sql(ident);
            }
            Self::CompoundIdentifier(parts) => {
                writer.write_delimited(parts, ".");
            }
            Self::Binary { left, op, right } => {
                let precedence = op.precedence();
                write_operand(writer, left, precedence);
                writer.write(" ").write(op.as_str()).write(" ");
                // Operators are left-associative, so a right operand at the
                // same level keeps its parentheses unless regrouping is harmless.
                let regroups = op.is_associative()
                    && matches!(&**right, Self::Binary { op: inner, .. } if inner == op);
                let right_min = if regroups { precedence } else { precedence + 1 };
                write_operand(writer, right, right_min);
            }
            Self::Unary { op, operand } => {
                let min_precedence = match op {
                    UnaryOp::Not => BinaryOp::Eq.precedence(),
                    UnaryOp::Neg | UnaryOp::BitNot => ATOM_PRECEDENCE,
                };
                let operand_sql = operand.to_sql();
                // `--` would start a line comment.
                let wrap = operand.precedence() < min_precedence
                    || (*op == UnaryOp::Neg && operand_sql.starts_with('-'));
                writer.write(op.as_str());
                if wrap {
                    writer.write("(").write(&operand_sql).write(")");
                } else {
                    writer.write(&operand_sql);
                }
            }
            Self::Function(call) => {
                writer.write_sql(call);
            }
            Self::Nested(inner) => {
                writer.write("(").write_sql(inner).write(")");
            }
            Self::IsNull { expr, negated } => {
                write_operand(writer, expr, BinaryOp::Like.precedence());
                writer.write(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let min_precedence = BinaryOp::Like.precedence() + 1;
                write_operand(writer, expr, min_precedence);
                writer.write(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                write_operand(writer, low, min_precedence);
                writer.write(" AND ");
                write_operand(writer, high, min_precedence);
            }
            Self::Wildcard => {
                writer.write("*");
            }
        }
    }
}

display_via_write_sql!(Literal, FunctionCall, Expr);

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Self::Identifier(ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(Expr::integer(5).to_sql(), "5");
        assert_eq!(Expr::float(2.0).to_sql(), "2.0");
        assert_eq!(Expr::float(1.5).to_sql(), "1.5");
        assert_eq!(Expr::string("it's").to_sql(), "'it''s'");
        assert_eq!(Expr::boolean(true).to_sql(), "TRUE");
        assert_eq!(Expr::null().to_sql(), "NULL");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Expr::float(f64::NAN).to_sql(), "'NaN'");
        assert_eq!(Expr::float(f64::INFINITY).to_sql(), "'Infinity'");
        assert_eq!(Expr::float(f64::NEG_INFINITY).to_sql(), "'-Infinity'");
    }

    #[test]
    fn test_binary_op_precedence() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
        assert!(BinaryOp::Eq.precedence() > BinaryOp::And.precedence());
        assert!(BinaryOp::Add.is_associative());
        assert!(!BinaryOp::Sub.is_associative());
    }

    #[test]
    fn test_binary_parenthesizes_looser_operands() {
        let a = || Expr::identifier("a");
        let b = || Expr::identifier("b");
        let c = || Expr::identifier("c");

        let sum_times_two = a()
            .binary(BinaryOp::Add, b())
            .binary(BinaryOp::Mul, Expr::integer(2));
        assert_eq!(sum_times_two.to_sql(), "(a + b) * 2");

        let times_sum = a().binary(BinaryOp::Mul, b().binary(BinaryOp::Add, c()));
        assert_eq!(times_sum.to_sql(), "a * (b + c)");

        let product_plus = a().binary(BinaryOp::Mul, b()).binary(BinaryOp::Add, c());
        assert_eq!(product_plus.to_sql(), "a * b + c");

        let either_and = a().or(b()).and(c());
        assert_eq!(either_and.to_sql(), "(a OR b) AND c");
    }

    #[test]
    fn test_binary_right_operand_at_same_level() {
        let a = || Expr::identifier("a");
        let b = || Expr::identifier("b");
        let c = || Expr::identifier("c");

        assert_eq!(
            a().binary(BinaryOp::Sub, b().binary(BinaryOp::Sub, c())).to_sql(),
            "a - (b - c)"
        );
        assert_eq!(
            a().binary(BinaryOp::Sub, b()).binary(BinaryOp::Sub, c()).to_sql(),
            "a - b - c"
        );
        assert_eq!(
            a().binary(BinaryOp::Div, b().binary(BinaryOp::Mul, c())).to_sql(),
            "a / (b * c)"
        );
        assert_eq!(
            a().binary(BinaryOp::Mod, b().binary(BinaryOp::Mod, c())).to_sql(),
            "a % (b % c)"
        );
        assert_eq!(
            a().binary(BinaryOp::Add, b().binary(BinaryOp::Add, c())).to_sql(),
            "a + b + c"
        );
    }

    #[test]
    fn test_negation_never_emits_line_comment() {
        let neg = |operand: Expr| Expr::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(operand),
        };
        assert_eq!(neg(Expr::integer(-1)).to_sql(), "-(-1)");
        assert_eq!(neg(Expr::float(-2.5)).to_sql(), "-(-2.5)");
        assert_eq!(neg(neg(Expr::identifier("x"))).to_sql(), "-(-x)");
        assert_eq!(
            neg(Expr::identifier("a").binary(BinaryOp::Add, Expr::integer(1))).to_sql(),
            "-(a + 1)"
        );
        assert!(!neg(neg(Expr::integer(-3))).to_sql().contains("--"));
    }

    #[test]
    fn test_not_over_conjunction() {
        let not = Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(Expr::identifier("a").and(Expr::identifier("b"))),
        };
        assert_eq!(not.to_sql(), "NOT (a AND b)");
    }

    #[test]
    fn test_between_and_is_null_operands() {
        let cond = Expr::identifier("a").eq(Expr::identifier("b"));
        assert_eq!(cond.is_null().to_sql(), "(a = b) IS NULL");

        let ranged = Expr::identifier("x").between(
            Expr::identifier("lo").binary(BinaryOp::Sub, Expr::integer(1)),
            Expr::identifier("p").and(Expr::identifier("q")),
        );
        assert_eq!(ranged.to_sql(), "x BETWEEN lo - 1 AND (p AND q)");
    }

    #[test]
    fn test_expr_chaining() {
        let expr = Expr::identifier("age")
            .gt(Expr::integer(18))
            .and(Expr::identifier("status").eq(Expr::string("active")));
        assert_eq!(expr.to_sql(), "age > 18 AND status = 'active'");
    }

    #[test]
    fn test_compound_identifier() {
        assert_eq!(Expr::compound(&["t", "amount"]).to_sql(), "t.amount");
    }

    #[test]
    fn test_nested_and_unary() {
        let expr = Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(Expr::identifier("a").or(Expr::identifier("b")).nested()),
        };
        assert_eq!(expr.to_sql(), "NOT (a OR b)");

        let neg = Expr::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(Expr::integer(1)),
        };
        assert_eq!(neg.to_string(), "-1");
    }

    #[test]
    fn test_is_null_and_between() {
        assert_eq!(Expr::identifier("x").is_not_null().to_sql(), "x IS NOT NULL");
        assert_eq!(
            Expr::identifier("x")
                .between(Expr::integer(1), Expr::integer(10))
                .to_sql(),
            "x BETWEEN 1 AND 10"
        );
    }

    #[test]
    fn test_function_call() {
        let count = Expr::Function(FunctionCall::new("COUNT", vec![Expr::Wildcard]));
        assert_eq!(count.to_sql(), "COUNT(*)");

        let distinct = FunctionCall::new("COUNT", vec![Expr::identifier("id")]).distinct();
        assert_eq!(distinct.to_sql(), "COUNT(DISTINCT id)");

        assert_eq!(Expr::function("NOW", vec![]).to_sql(), "NOW()");
    }
}
