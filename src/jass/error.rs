//! Error types for lexing and parsing

use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// The tokenizer met text that starts no token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized input {text:?} at {span:?}")]
pub struct LexError {
    pub span: Range<usize>,
    pub text: String,
}

/// What the parser found where it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Item(String),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Item(item) => write!(f, "{:?}", item),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// The deepest failure met while backtracking. The span indexes the parsed input: chars
    /// for text entry points, tokens for token entry points.
    #[error("{}", describe_syntax(.span, .label, .expected, .found, .message))]
    Syntax {
        span: Range<usize>,
        label: Option<&'static str>,
        expected: Vec<String>,
        found: Found,
        message: Option<String>,
    },

    #[error("nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("a chain of {length} operators exceeds the limit of {limit}")]
    OperatorChainTooLong { length: usize, limit: usize },
}

impl ParseError {
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            ParseError::Lex(error) => Some(error.span.clone()),
            ParseError::Syntax { span, .. } => Some(span.clone()),
            ParseError::NestingTooDeep { .. } | ParseError::OperatorChainTooLong { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            ParseError::Syntax { label, .. } => *label,
            _ => None,
        }
    }
}

fn describe_syntax(
    span: &Range<usize>,
    label: &Option<&'static str>,
    expected: &[String],
    found: &Found,
    message: &Option<String>,
) -> String {
    let mut text = match label {
        Some(label) => format!("invalid {} at {:?}", label, span),
        None => format!("syntax error at {:?}", span),
    };
    if let Some(message) = message {
        text.push_str(": ");
        text.push_str(message);
        return text;
    }
    text.push_str(&format!(": found {}", found));
    if !expected.is_empty() {
        text.push_str(&format!(", expected one of {}", expected.join(", ")));
    }
    text
}

pub type ParseResult<T> = Result<T, ParseError>;
