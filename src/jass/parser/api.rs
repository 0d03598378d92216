//! Public API for the parser.
//!
//! [`Grammar`] holds the five entry rules for one input type. Building one composes the whole
//! grammar, so the free functions below keep a per-thread engine for each input type and
//! reuse it. Build a [`Grammar`] yourself to parse with a non-default [`ParserConfig`].

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use tracing::debug;

use crate::jass::ast::{
    AstNode, CompilationUnit, CustomScriptAction, Expression, Function, Statement,
};
use crate::jass::config::ParserConfig;
use crate::jass::error::{Found, ParseError, ParseResult};
use crate::jass::lexer::Token;
use crate::jass::parser::combinators::{line_end, newlines};
use crate::jass::parser::custom_script_action::custom_script_action;
use crate::jass::parser::declaration::{compilation_unit, function};
use crate::jass::parser::expression::expression;
use crate::jass::parser::input::{GrammarInput, Rule};
use crate::jass::parser::statement::statement;

/// The entry rules of the grammar over input items `I`
pub struct Grammar<I: GrammarInput> {
    config: ParserConfig,
    expression: Rule<I, Expression>,
    custom_script_action: Rule<I, CustomScriptAction>,
    statement: Rule<I, Statement>,
    function: Rule<I, Function>,
    compilation_unit: Rule<I, CompilationUnit>,
}

impl<I: GrammarInput> Grammar<I> {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        let expression = expression::<I>();
        let statement = statement(expression.clone());
        let trailing_comment = || I::comment().or_not().ignored();

        Self {
            config,
            expression: I::leading_trivia()
                .ignore_then(expression.clone())
                .then_ignore(end())
                .boxed(),
            custom_script_action: I::leading_trivia()
                .ignore_then(custom_script_action(expression.clone()))
                .then_ignore(trailing_comment())
                .then_ignore(end())
                .boxed(),
            statement: I::leading_trivia()
                .ignore_then(line_end::<I>().to(Statement::Empty).or(statement.clone()))
                .then_ignore(newlines::<I>().or_not())
                .then_ignore(trailing_comment())
                .then_ignore(end())
                .boxed(),
            function: I::leading_trivia()
                .ignore_then(function(statement.clone()))
                .then_ignore(newlines::<I>().or_not())
                .then_ignore(trailing_comment())
                .then_ignore(end())
                .boxed(),
            compilation_unit: I::leading_trivia()
                .ignore_then(compilation_unit(expression, statement))
                .then_ignore(trailing_comment())
                .then_ignore(end())
                .boxed(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse_expression(&self, input: &[I]) -> ParseResult<Expression> {
        self.run("expression", &self.expression, input)
    }

    /// One line of script. Trailing content other than a comment is an error.
    pub fn parse_custom_script_action(&self, input: &[I]) -> ParseResult<CustomScriptAction> {
        self.run("custom script action", &self.custom_script_action, input)
    }

    /// A single statement, including block statements with their bodies. Superseded by
    /// [`Grammar::parse_custom_script_action`].
    pub fn parse_statement(&self, input: &[I]) -> ParseResult<Statement> {
        self.run("statement", &self.statement, input)
    }

    pub fn parse_function(&self, input: &[I]) -> ParseResult<Function> {
        self.run("function", &self.function, input)
    }

    pub fn parse_compilation_unit(&self, input: &[I]) -> ParseResult<CompilationUnit> {
        self.run("compilation unit", &self.compilation_unit, input)
    }

    fn run<O: AstNode>(
        &self,
        production: &'static str,
        rule: &Rule<I, O>,
        input: &[I],
    ) -> ParseResult<O> {
        let length = input.len();
        let nesting = I::nesting(input);
        let limit = self.config.max_nesting_depth;
        if nesting.depth > limit {
            debug!(
                production,
                input = I::NAME,
                depth = nesting.depth,
                limit,
                "nesting limit exceeded"
            );
            return Err(ParseError::NestingTooDeep {
                depth: nesting.depth,
                limit,
            });
        }
        let limit = self.config.max_operator_chain;
        if nesting.operator_chain > limit {
            debug!(
                production,
                input = I::NAME,
                chain = nesting.operator_chain,
                limit,
                "operator chain limit exceeded"
            );
            return Err(ParseError::OperatorChainTooLong {
                length: nesting.operator_chain,
                limit,
            });
        }

        match rule.parse(input.to_vec()) {
            Ok(output) => {
                debug!(
                    production,
                    input = I::NAME,
                    length,
                    node = output.node_type(),
                    label = %output.display_label(),
                    "parsed"
                );
                Ok(output)
            }
            Err(errors) => {
                let error = deepest_error(errors);
                debug!(production, input = I::NAME, length, %error, "parse failed");
                Err(error)
            }
        }
    }
}

impl<I: GrammarInput> Default for Grammar<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// The error that got furthest into the input
fn deepest_error<I: GrammarInput>(errors: Vec<Simple<I>>) -> ParseError {
    match errors.into_iter().max_by_key(|error| error.span().start) {
        Some(error) => syntax_error(error),
        None => ParseError::Syntax {
            span: 0..0,
            label: None,
            expected: Vec::new(),
            found: Found::EndOfInput,
            message: None,
        },
    }
}

fn syntax_error<I: GrammarInput>(error: Simple<I>) -> ParseError {
    let message = match error.reason() {
        SimpleReason::Custom(message) => Some(message.clone()),
        _ => None,
    };

    let mut expected: Vec<String> = error
        .expected()
        .map(|item| match item {
            Some(item) => format!("'{}'", item),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();

    let found = match error.found() {
        Some(item) => Found::Item(item.to_string()),
        None => Found::EndOfInput,
    };

    ParseError::Syntax {
        span: error.span(),
        label: error.label(),
        expected,
        found,
        message,
    }
}

thread_local! {
    static CHAR_GRAMMAR: Grammar<char> = Grammar::new();
    static TOKEN_GRAMMAR: Grammar<Token> = Grammar::new();
}

fn with_chars<O>(source: &str, parse: impl FnOnce(&Grammar<char>, &[char]) -> O) -> O {
    let chars: Vec<char> = source.chars().collect();
    CHAR_GRAMMAR.with(|grammar| parse(grammar, &chars))
}

fn with_tokens<O>(tokens: &[Token], parse: impl FnOnce(&Grammar<Token>, &[Token]) -> O) -> O {
    TOKEN_GRAMMAR.with(|grammar| parse(grammar, tokens))
}

/// Parse an expression from source text
pub fn parse_expression(source: &str) -> ParseResult<Expression> {
    with_chars(source, Grammar::parse_expression)
}

/// Parse one line of script from source text
pub fn parse_custom_script_action(source: &str) -> ParseResult<CustomScriptAction> {
    with_chars(source, Grammar::parse_custom_script_action)
}

#[deprecated(note = "use parse_custom_script_action")]
pub fn parse_statement(source: &str) -> ParseResult<Statement> {
    with_chars(source, Grammar::parse_statement)
}

/// Parse a function from source text
pub fn parse_function(source: &str) -> ParseResult<Function> {
    with_chars(source, Grammar::parse_function)
}

/// Parse a whole script from source text
pub fn parse_compilation_unit(source: &str) -> ParseResult<CompilationUnit> {
    with_chars(source, Grammar::parse_compilation_unit)
}

pub fn parse_expression_tokens(tokens: &[Token]) -> ParseResult<Expression> {
    with_tokens(tokens, Grammar::parse_expression)
}

pub fn parse_custom_script_action_tokens(tokens: &[Token]) -> ParseResult<CustomScriptAction> {
    with_tokens(tokens, Grammar::parse_custom_script_action)
}

#[deprecated(note = "use parse_custom_script_action_tokens")]
pub fn parse_statement_tokens(tokens: &[Token]) -> ParseResult<Statement> {
    with_tokens(tokens, Grammar::parse_statement)
}

pub fn parse_function_tokens(tokens: &[Token]) -> ParseResult<Function> {
    with_tokens(tokens, Grammar::parse_function)
}

pub fn parse_compilation_unit_tokens(tokens: &[Token]) -> ParseResult<CompilationUnit> {
    with_tokens(tokens, Grammar::parse_compilation_unit)
}
