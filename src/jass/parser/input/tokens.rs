//! Token input: the grammar reads the stream produced by the lexer

use chumsky::prelude::*;

use super::{GrammarInput, LiteralKind, Rule};
use crate::jass::lexer::{self, Keyword, Nesting, Symbol, Token};

/// The text a token carries when it belongs to the wanted literal kind
fn literal_text(kind: LiteralKind, token: &Token) -> Option<String> {
    match (kind, token) {
        (LiteralKind::Decimal, Token::DecimalNumber(text))
        | (LiteralKind::Octal, Token::OctalNumber(text))
        | (LiteralKind::Hexadecimal, Token::HexadecimalNumber(text))
        | (LiteralKind::Real, Token::RealNumber(text))
        | (LiteralKind::FourCC, Token::FourCCNumber(text))
        | (LiteralKind::String, Token::StringLiteral(text)) => Some(text.clone()),
        _ => None,
    }
}

fn literal_body(kind: LiteralKind) -> Rule<Token, String> {
    filter_map(move |span, token: Token| match literal_text(kind, &token) {
        Some(text) => Ok(text),
        None => Err(Simple::expected_input_found(span, Vec::new(), Some(token))),
    })
    .boxed()
}

impl GrammarInput for Token {
    const NAME: &'static str = "tokens";

    fn keyword(keyword: Keyword) -> Rule<Token, ()> {
        just(Token::Keyword(keyword))
            .ignored()
            .labelled(keyword.label())
            .boxed()
    }

    fn symbol(symbol: Symbol) -> Rule<Token, ()> {
        just(Token::Symbol(symbol))
            .ignored()
            .labelled(symbol.label())
            .boxed()
    }

    fn identifier() -> Rule<Token, String> {
        filter_map(|span, token: Token| match token {
            Token::Identifier(name) => Ok(name),
            other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
        })
        .labelled("identifier")
        .boxed()
    }

    fn literal(kind: LiteralKind) -> Rule<Token, String> {
        match kind {
            LiteralKind::FourCC => literal_body(kind)
                .delimited_by(just(Token::SingleQuote), just(Token::SingleQuote))
                .boxed(),
            LiteralKind::String => literal_body(kind)
                .delimited_by(just(Token::DoubleQuote), just(Token::DoubleQuote))
                .boxed(),
            _ => literal_body(kind),
        }
    }

    fn number() -> Rule<Token, (LiteralKind, String)> {
        filter_map(|span, token: Token| match token {
            Token::DecimalNumber(text) => Ok((LiteralKind::Decimal, text)),
            Token::OctalNumber(text) => Ok((LiteralKind::Octal, text)),
            Token::HexadecimalNumber(text) => Ok((LiteralKind::Hexadecimal, text)),
            Token::RealNumber(text) => Ok((LiteralKind::Real, text)),
            other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
        })
        .boxed()
    }

    fn comment() -> Rule<Token, String> {
        just(Token::CommentStart)
            .ignore_then(filter_map(|span, token: Token| match token {
                Token::Comment(text) => Ok(text),
                other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
            }))
            .boxed()
    }

    fn line_break() -> Rule<Token, ()> {
        just(Token::Newline).ignored().boxed()
    }

    fn leading_trivia() -> Rule<Token, ()> {
        empty().boxed()
    }

    fn nesting(input: &[Token]) -> Nesting {
        lexer::nesting(input)
    }
}
