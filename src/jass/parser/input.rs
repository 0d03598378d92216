//! The input item abstraction the grammar is written against
//!
//! The grammar never matches characters or tokens directly. It asks its input type for the
//! primitive rules (a keyword, a symbol, an identifier, the raw text of a literal, a comment,
//! a line break) and composes everything else from those. `char` and [`Token`] both implement
//! [`GrammarInput`], so one grammar definition serves both entry surfaces.
//!
//! Every primitive consumes the inline whitespace that follows it, which is all the
//! whitespace handling the grammar needs: `leading_trivia` covers the start of the input.

pub mod chars;
pub mod tokens;

use chumsky::prelude::Simple;
use chumsky::BoxedParser;
use std::fmt;
use std::hash::Hash;

use crate::jass::lexer::{Keyword, Nesting, Symbol};

#[cfg(doc)]
use crate::jass::lexer::Token;

/// A type-erased grammar rule over input items `I`
pub type Rule<I, O> = BoxedParser<'static, I, O, Simple<I>>;

/// Literal categories whose raw text the grammar decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Decimal,
    Octal,
    Hexadecimal,
    Real,
    /// Text between single quotes, without the quotes
    FourCC,
    /// Text between double quotes, without the quotes
    String,
}

impl LiteralKind {
    pub fn name(&self) -> &'static str {
        match self {
            LiteralKind::Decimal => "decimal",
            LiteralKind::Octal => "octal",
            LiteralKind::Hexadecimal => "hexadecimal",
            LiteralKind::Real => "real",
            LiteralKind::FourCC => "fourCC",
            LiteralKind::String => "string",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LiteralKind::Decimal => "decimal literal",
            LiteralKind::Octal => "octal literal",
            LiteralKind::Hexadecimal => "hexadecimal literal",
            LiteralKind::Real => "real literal",
            LiteralKind::FourCC => "fourCC literal",
            LiteralKind::String => "string literal",
        }
    }
}

pub trait GrammarInput: Clone + Hash + Eq + fmt::Debug + fmt::Display + 'static {
    /// Short name used in log events
    const NAME: &'static str;

    fn keyword(keyword: Keyword) -> Rule<Self, ()>;

    fn symbol(symbol: Symbol) -> Rule<Self, ()>;

    /// A name that is not a reserved word
    fn identifier() -> Rule<Self, String>;

    /// The raw text of a literal of the given kind
    fn literal(kind: LiteralKind) -> Rule<Self, String>;

    /// Any numeric literal, classified by its notation
    fn number() -> Rule<Self, (LiteralKind, String)>;

    /// `//` and the rest of the line, returning the text after `//`
    fn comment() -> Rule<Self, String>;

    /// A single line feed
    fn line_break() -> Rule<Self, ()>;

    /// Whatever may precede the first item of an input
    fn leading_trivia() -> Rule<Self, ()>;

    /// How deeply `input` nests, measured before parsing
    fn nesting(input: &[Self]) -> Nesting;
}
