//! Testing utilities for comparing the two parsers
//!
//! Every grammar test should run the same source through the character parser and through
//! the lexer plus token parser, then check that both agree. The helpers here do that:
//!
//! - `accept_*` parses with both, asserts that both succeed with equal trees, and returns the
//!   tree.
//! - `reject_*` asserts that both fail and returns the character parser's error.
//! - [`assert_expression`] wraps [`accept_expression`] in a fluent assertion so a whole
//!   expression tree can be checked in one statement:
//!
//! ```rust,ignore
//! use jass::jass::ast::BinaryOperator;
//! use jass::jass::testing::assert_expression;
//!
//! assert_expression("1 + 2 * 3")
//!     .binary(BinaryOperator::Add)
//!     .left(|left| {
//!         left.decimal(1);
//!     })
//!     .right(|right| {
//!         right
//!             .binary(BinaryOperator::Multiply)
//!             .left(|l| {
//!                 l.decimal(2);
//!             })
//!             .right(|r| {
//!                 r.decimal(3);
//!             });
//!     });
//! ```

use std::fmt::Debug;

use crate::jass::ast::{
    BinaryOperator, CompilationUnit, CustomScriptAction, Expression, Function, Statement,
    UnaryOperator,
};
use crate::jass::error::{ParseError, ParseResult};
use crate::jass::lexer::{self, Token};
use crate::jass::parser::api;

/// Parse `source` with both parsers
pub fn parse_both<O>(
    source: &str,
    chars: fn(&str) -> ParseResult<O>,
    tokens: fn(&[Token]) -> ParseResult<O>,
) -> (ParseResult<O>, ParseResult<O>) {
    let from_chars = chars(source);
    let from_tokens = lexer::tokenize(source)
        .map_err(ParseError::from)
        .and_then(|stream| tokens(&stream));
    (from_chars, from_tokens)
}

fn accept<O: PartialEq + Debug>(
    source: &str,
    chars: fn(&str) -> ParseResult<O>,
    tokens: fn(&[Token]) -> ParseResult<O>,
) -> O {
    match parse_both(source, chars, tokens) {
        (Ok(from_chars), Ok(from_tokens)) => {
            assert_eq!(
                from_chars, from_tokens,
                "parsers disagree on {:?}",
                source
            );
            from_chars
        }
        (from_chars, from_tokens) => panic!(
            "expected {:?} to parse\n  chars:  {:?}\n  tokens: {:?}",
            source, from_chars, from_tokens
        ),
    }
}

fn reject<O: Debug>(
    source: &str,
    chars: fn(&str) -> ParseResult<O>,
    tokens: fn(&[Token]) -> ParseResult<O>,
) -> ParseError {
    match parse_both(source, chars, tokens) {
        (Err(from_chars), Err(_)) => from_chars,
        (from_chars, from_tokens) => panic!(
            "expected {:?} to be rejected\n  chars:  {:?}\n  tokens: {:?}",
            source, from_chars, from_tokens
        ),
    }
}

pub fn accept_expression(source: &str) -> Expression {
    accept(source, api::parse_expression, api::parse_expression_tokens)
}

pub fn reject_expression(source: &str) -> ParseError {
    reject(source, api::parse_expression, api::parse_expression_tokens)
}

pub fn accept_custom_script_action(source: &str) -> CustomScriptAction {
    accept(
        source,
        api::parse_custom_script_action,
        api::parse_custom_script_action_tokens,
    )
}

pub fn reject_custom_script_action(source: &str) -> ParseError {
    reject(
        source,
        api::parse_custom_script_action,
        api::parse_custom_script_action_tokens,
    )
}

#[allow(deprecated)]
pub fn accept_statement(source: &str) -> Statement {
    accept(source, api::parse_statement, api::parse_statement_tokens)
}

#[allow(deprecated)]
pub fn reject_statement(source: &str) -> ParseError {
    reject(source, api::parse_statement, api::parse_statement_tokens)
}

pub fn accept_function(source: &str) -> Function {
    accept(source, api::parse_function, api::parse_function_tokens)
}

pub fn reject_function(source: &str) -> ParseError {
    reject(source, api::parse_function, api::parse_function_tokens)
}

pub fn accept_compilation_unit(source: &str) -> CompilationUnit {
    accept(
        source,
        api::parse_compilation_unit,
        api::parse_compilation_unit_tokens,
    )
}

pub fn reject_compilation_unit(source: &str) -> ParseError {
    reject(
        source,
        api::parse_compilation_unit,
        api::parse_compilation_unit_tokens,
    )
}

/// Parse with both parsers and start a fluent assertion on the result
pub fn assert_expression(source: &str) -> ExpressionAssertion {
    ExpressionAssertion {
        expression: accept_expression(source),
        path: "expression".to_string(),
    }
}

/// Fluent assertions over one expression node
pub struct ExpressionAssertion {
    expression: Expression,
    path: String,
}

impl ExpressionAssertion {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            path: "expression".to_string(),
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    fn child(&self, name: &str, expression: &Expression) -> ExpressionAssertion {
        ExpressionAssertion {
            expression: expression.clone(),
            path: format!("{}.{}", self.path, name),
        }
    }

    pub fn is(&self, expected: &Expression) -> &Self {
        assert_eq!(&self.expression, expected, "at {}", self.path);
        self
    }

    pub fn decimal(&self, value: i32) -> &Self {
        self.is(&Expression::DecimalLiteral(value))
    }

    pub fn variable(&self, name: &str) -> &Self {
        self.is(&Expression::VariableReference(name.to_string()))
    }

    pub fn binary(&self, operator: BinaryOperator) -> &Self {
        match &self.expression {
            Expression::Binary { operator: found, .. } => {
                assert_eq!(*found, operator, "at {}", self.path)
            }
            other => panic!("at {}: expected binary {}, found {:?}", self.path, operator, other),
        }
        self
    }

    pub fn unary(&self, operator: UnaryOperator) -> &Self {
        match &self.expression {
            Expression::Unary { operator: found, .. } => {
                assert_eq!(*found, operator, "at {}", self.path)
            }
            other => panic!("at {}: expected unary {}, found {:?}", self.path, operator, other),
        }
        self
    }

    pub fn left(&self, check: impl FnOnce(&ExpressionAssertion)) -> &Self {
        match &self.expression {
            Expression::Binary { left, .. } => check(&self.child("left", left)),
            other => panic!("at {}: expected binary, found {:?}", self.path, other),
        }
        self
    }

    pub fn right(&self, check: impl FnOnce(&ExpressionAssertion)) -> &Self {
        match &self.expression {
            Expression::Binary { right, .. } => check(&self.child("right", right)),
            other => panic!("at {}: expected binary, found {:?}", self.path, other),
        }
        self
    }

    pub fn operand(&self, check: impl FnOnce(&ExpressionAssertion)) -> &Self {
        match &self.expression {
            Expression::Unary { operand, .. } => check(&self.child("operand", operand)),
            Expression::Parenthesized(inner) => check(&self.child("inner", inner)),
            other => panic!("at {}: expected unary or parenthesized, found {:?}", self.path, other),
        }
        self
    }

    pub fn invocation(&self, name: &str, argument_count: usize) -> &Self {
        match &self.expression {
            Expression::Invocation {
                name: found,
                arguments,
            } => {
                assert_eq!(found, name, "at {}", self.path);
                assert_eq!(arguments.len(), argument_count, "at {}", self.path);
            }
            other => panic!("at {}: expected invocation, found {:?}", self.path, other),
        }
        self
    }

    pub fn argument(&self, index: usize, check: impl FnOnce(&ExpressionAssertion)) -> &Self {
        match &self.expression {
            Expression::Invocation { arguments, .. } => match arguments.get(index) {
                Some(argument) => check(&self.child(&format!("arguments[{}]", index), argument)),
                None => panic!("at {}: no argument {}", self.path, index),
            },
            other => panic!("at {}: expected invocation, found {:?}", self.path, other),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_returns_the_shared_tree() {
        assert_eq!(accept_expression("x"), Expression::variable("x"));
    }

    #[test]
    fn test_reject_reports_char_error() {
        let error = reject_expression("1 +");
        assert!(matches!(error, ParseError::Syntax { .. }));
    }

    #[test]
    fn test_lex_failure_counts_as_rejection() {
        let (from_chars, from_tokens) =
            parse_both("x @ y", api::parse_expression, api::parse_expression_tokens);
        assert!(from_chars.is_err());
        assert!(matches!(from_tokens, Err(ParseError::Lex(_))));
    }

    #[test]
    #[should_panic(expected = "expected binary")]
    fn test_assertion_reports_shape_mismatch() {
        assert_expression("x").left(|_| {});
    }
}
