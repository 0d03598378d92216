//! Expression nodes

use super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "not",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infix operators, all left-associative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    GreaterThan,
    LessThan,
    Equals,
    NotEquals,
    GreaterOrEqual,
    LessOrEqual,
    And,
    Or,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 12] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::GreaterThan,
        BinaryOperator::LessThan,
        BinaryOperator::Equals,
        BinaryOperator::NotEquals,
        BinaryOperator::GreaterOrEqual,
        BinaryOperator::LessOrEqual,
        BinaryOperator::And,
        BinaryOperator::Or,
    ];

    /// Precedence of the loosest and tightest binding operators
    pub const LOWEST_PRECEDENCE: u8 = 1;
    pub const HIGHEST_PRECEDENCE: u8 = 4;

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
        }
    }

    /// Binding strength, higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Multiply | BinaryOperator::Divide => 4,
            BinaryOperator::Add | BinaryOperator::Subtract => 3,
            BinaryOperator::And | BinaryOperator::Or => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expression.
///
/// Integer literals hold the decoded 32-bit value. The notation a literal was written in
/// is kept as the variant, so `DecimalLiteral(8)` and `OctalLiteral(8)` are not equal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    DecimalLiteral(i32),
    OctalLiteral(i32),
    HexadecimalLiteral(i32),
    RealLiteral(f32),
    BooleanLiteral(bool),
    /// Text between the quotes, escape sequences kept as written
    StringLiteral(String),
    NullLiteral,
    /// Four one-byte characters packed little-endian
    FourCCLiteral(i32),
    VariableReference(String),
    ArrayReference {
        name: String,
        index: Box<Expression>,
    },
    /// `function name`
    FunctionReference(String),
    Invocation {
        name: String,
        arguments: Vec<Expression>,
    },
    Parenthesized(Box<Expression>),
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::VariableReference(name.into())
    }

    pub fn array(name: impl Into<String>, index: Expression) -> Self {
        Expression::ArrayReference {
            name: name.into(),
            index: Box::new(index),
        }
    }

    pub fn invocation(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Invocation {
            name: name.into(),
            arguments,
        }
    }

    pub fn parenthesized(inner: Expression) -> Self {
        Expression::Parenthesized(Box::new(inner))
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::DecimalLiteral(_) => "DecimalLiteral",
            Expression::OctalLiteral(_) => "OctalLiteral",
            Expression::HexadecimalLiteral(_) => "HexadecimalLiteral",
            Expression::RealLiteral(_) => "RealLiteral",
            Expression::BooleanLiteral(_) => "BooleanLiteral",
            Expression::StringLiteral(_) => "StringLiteral",
            Expression::NullLiteral => "NullLiteral",
            Expression::FourCCLiteral(_) => "FourCCLiteral",
            Expression::VariableReference(_) => "VariableReference",
            Expression::ArrayReference { .. } => "ArrayReference",
            Expression::FunctionReference(_) => "FunctionReference",
            Expression::Invocation { .. } => "Invocation",
            Expression::Parenthesized(_) => "Parenthesized",
            Expression::Unary { .. } => "Unary",
            Expression::Binary { .. } => "Binary",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Expression::DecimalLiteral(value)
            | Expression::OctalLiteral(value)
            | Expression::HexadecimalLiteral(value)
            | Expression::FourCCLiteral(value) => value.to_string(),
            Expression::RealLiteral(value) => value.to_string(),
            Expression::BooleanLiteral(value) => value.to_string(),
            Expression::StringLiteral(value) => format!("\"{}\"", value),
            Expression::NullLiteral => "null".to_string(),
            Expression::VariableReference(name) | Expression::FunctionReference(name) => {
                name.clone()
            }
            Expression::ArrayReference { name, .. } => format!("{}[]", name),
            Expression::Invocation { name, arguments } => {
                format!("{}({} args)", name, arguments.len())
            }
            Expression::Parenthesized(_) => "(...)".to_string(),
            Expression::Unary { operator, .. } => operator.to_string(),
            Expression::Binary { operator, .. } => operator.to_string(),
        }
    }
}
