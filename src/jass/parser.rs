//! Parser module for JASS
//!
//! The grammar is written once against [`GrammarInput`] and instantiated twice, over `char`
//! for source text and over [`Token`](crate::jass::lexer::Token) for lexer output. The two
//! instantiations accept the same language and produce the same AST.
//!
//! Productions are composed bottom-up: the expression rule feeds the statement rules, statements
//! feed custom script actions and function bodies, and declarations and functions make up a
//! compilation unit. Entry points parse the whole input and fail on anything left over.
//!
//! ## Testing
//!
//! Grammar tests should go through both input types. See the
//! [testing module](crate::jass::testing) for helpers that do so and compare the results.

pub mod api;
pub(crate) mod combinators;
pub(crate) mod custom_script_action;
pub(crate) mod declaration;
pub(crate) mod expression;
pub mod input;
pub(crate) mod statement;

pub use api::{
    parse_compilation_unit, parse_compilation_unit_tokens, parse_custom_script_action,
    parse_custom_script_action_tokens, parse_expression, parse_expression_tokens,
    parse_function, parse_function_tokens, Grammar,
};
#[allow(deprecated)]
pub use api::{parse_statement, parse_statement_tokens};
pub use input::{GrammarInput, LiteralKind, Rule};
