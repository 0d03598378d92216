//! Implementation of the JASS lexer

use super::tokens::{Keyword, Symbol, Token};
use crate::jass::error::LexError;
use logos::Logos;
use std::ops::Range;
use tracing::trace;

/// Lexemes as logos sees them, before compound lexemes are split
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Word(String),

    #[regex(r"\$[0-9A-Fa-f]+|0[xX][0-9A-Fa-f]+", |lex| lex.slice().to_owned())]
    Hexadecimal(String),
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+", |lex| lex.slice().to_owned())]
    Real(String),
    #[regex(r"0[0-7]*", |lex| lex.slice().to_owned())]
    Octal(String),
    #[regex(r"[1-9][0-9]*", |lex| lex.slice().to_owned())]
    Decimal(String),

    #[regex(r"'[^']*'", |lex| inner(lex.slice(), 1, 1))]
    FourCC(String),
    #[regex(r#""([^"\\]|\\["rnt\\])*""#, |lex| inner(lex.slice(), 1, 1))]
    String(String),
    #[regex(r"//[^\n]*", |lex| inner(lex.slice(), 2, 0))]
    Comment(String),

    #[token("\n")]
    Newline,

    #[token("(")]
    LeftParenthesis,
    #[token(")")]
    RightParenthesis,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(",")]
    Comma,
    #[token("=")]
    Assign,
    #[token("==")]
    Equals,
    #[token("!=")]
    NotEquals,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("<=")]
    LessOrEqual,
    #[token(">=")]
    GreaterOrEqual,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
}

fn inner(slice: &str, open: usize, close: usize) -> String {
    slice[open..slice.len() - close].to_owned()
}

fn symbol(raw: &RawToken) -> Option<Symbol> {
    let symbol = match raw {
        RawToken::LeftParenthesis => Symbol::LeftParenthesis,
        RawToken::RightParenthesis => Symbol::RightParenthesis,
        RawToken::LeftBracket => Symbol::LeftBracket,
        RawToken::RightBracket => Symbol::RightBracket,
        RawToken::Comma => Symbol::Comma,
        RawToken::Assign => Symbol::Assign,
        RawToken::Equals => Symbol::Equals,
        RawToken::NotEquals => Symbol::NotEquals,
        RawToken::LessThan => Symbol::LessThan,
        RawToken::GreaterThan => Symbol::GreaterThan,
        RawToken::LessOrEqual => Symbol::LessOrEqual,
        RawToken::GreaterOrEqual => Symbol::GreaterOrEqual,
        RawToken::Plus => Symbol::Plus,
        RawToken::Minus => Symbol::Minus,
        RawToken::Asterisk => Symbol::Asterisk,
        RawToken::Slash => Symbol::Slash,
        _ => return None,
    };
    Some(symbol)
}

/// Split one raw lexeme into the tokens the parser sees, with their byte spans
fn expand(raw: RawToken, span: Range<usize>, out: &mut Vec<(Token, Range<usize>)>) {
    let (start, end) = (span.start, span.end);
    match raw {
        RawToken::Word(word) => {
            let token = match Keyword::from_word(&word) {
                Some(keyword) => Token::Keyword(keyword),
                None => Token::Identifier(word),
            };
            out.push((token, span));
        }
        RawToken::Hexadecimal(text) => out.push((Token::HexadecimalNumber(text), span)),
        RawToken::Real(text) => out.push((Token::RealNumber(text), span)),
        RawToken::Octal(text) => out.push((Token::OctalNumber(text), span)),
        RawToken::Decimal(text) => out.push((Token::DecimalNumber(text), span)),
        RawToken::FourCC(body) => {
            out.push((Token::SingleQuote, start..start + 1));
            out.push((Token::FourCCNumber(body), start + 1..end - 1));
            out.push((Token::SingleQuote, end - 1..end));
        }
        RawToken::String(body) => {
            out.push((Token::DoubleQuote, start..start + 1));
            out.push((Token::StringLiteral(body), start + 1..end - 1));
            out.push((Token::DoubleQuote, end - 1..end));
        }
        RawToken::Comment(body) => {
            out.push((Token::CommentStart, start..start + 2));
            out.push((Token::Comment(body), start + 2..end));
        }
        RawToken::Newline => out.push((Token::Newline, span)),
        other => {
            if let Some(symbol) = symbol(&other) {
                out.push((Token::Symbol(symbol), span));
            }
        }
    }
}

/// Tokenize a string, failing on the first unrecognized input
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize a string and keep the byte span of every token
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                trace!(?raw, ?span, "lexeme");
                expand(raw, span, &mut tokens);
            }
            Err(()) => {
                return Err(LexError {
                    text: lexer.slice().to_owned(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}

/// How deeply a token stream nests, measured before parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nesting {
    /// Deepest count of open groups: parentheses, brackets, `if` and `loop` blocks
    pub depth: usize,
    /// Longest run of operators feeding one expression tree, counting the operators of
    /// every enclosing parenthesis or bracket plus one per group
    pub operator_chain: usize,
}

fn is_operator(token: &Token) -> bool {
    matches!(
        token,
        Token::Symbol(
            Symbol::Plus
                | Symbol::Minus
                | Symbol::Asterisk
                | Symbol::Slash
                | Symbol::Equals
                | Symbol::NotEquals
                | Symbol::LessThan
                | Symbol::GreaterThan
                | Symbol::LessOrEqual
                | Symbol::GreaterOrEqual
        ) | Token::Keyword(Keyword::And | Keyword::Or | Keyword::Not)
    )
}

pub fn nesting(tokens: &[Token]) -> Nesting {
    let mut nesting = Nesting::default();
    let mut depth: usize = 0;
    // Operators seen in each open parenthesis or bracket, outermost first
    let mut operators: Vec<usize> = vec![0];
    let mut chain: usize = 0;

    for token in tokens {
        match token {
            Token::Symbol(Symbol::LeftParenthesis | Symbol::LeftBracket) => {
                depth += 1;
                operators.push(0);
                chain += 1;
            }
            Token::Keyword(Keyword::If | Keyword::Loop) => depth += 1,
            Token::Symbol(Symbol::RightParenthesis | Symbol::RightBracket) => {
                depth = depth.saturating_sub(1);
                if operators.len() > 1 {
                    chain -= operators.pop().unwrap_or(0) + 1;
                }
            }
            Token::Keyword(Keyword::EndIf | Keyword::EndLoop) => {
                depth = depth.saturating_sub(1);
            }
            Token::Symbol(Symbol::Comma) | Token::Newline => {
                if let Some(top) = operators.last_mut() {
                    chain -= *top;
                    *top = 0;
                }
            }
            token if is_operator(token) => {
                if let Some(top) = operators.last_mut() {
                    *top += 1;
                    chain += 1;
                }
            }
            _ => {}
        }
        nesting.depth = nesting.depth.max(depth);
        nesting.operator_chain = nesting.operator_chain.max(chain);
    }
    nesting
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = tokenize("local integer count").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Local),
                Token::Keyword(Keyword::Integer),
                ident("count"),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(tokenize("iffy").unwrap(), vec![ident("iffy")]);
        assert_eq!(tokenize("and_1").unwrap(), vec![ident("and_1")]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("0 017 42 $fF 0x1A 1.5 .5 3.").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::OctalNumber("0".into()),
                Token::OctalNumber("017".into()),
                Token::DecimalNumber("42".into()),
                Token::HexadecimalNumber("$fF".into()),
                Token::HexadecimalNumber("0x1A".into()),
                Token::RealNumber("1.5".into()),
                Token::RealNumber(".5".into()),
                Token::RealNumber("3.".into()),
            ]
        );
    }

    #[test]
    fn test_string_and_fourcc_are_split() {
        let tokens = tokenize(r#""a\"b" 'hfoo'"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::DoubleQuote,
                Token::StringLiteral(r#"a\"b"#.into()),
                Token::DoubleQuote,
                Token::SingleQuote,
                Token::FourCCNumber("hfoo".into()),
                Token::SingleQuote,
            ]
        );
    }

    #[test]
    fn test_empty_string_keeps_body() {
        assert_eq!(
            tokenize(r#""""#).unwrap(),
            vec![
                Token::DoubleQuote,
                Token::StringLiteral(String::new()),
                Token::DoubleQuote
            ]
        );
    }

    #[test]
    fn test_comment_and_newline() {
        let tokens = tokenize("x // note\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                ident("x"),
                Token::CommentStart,
                Token::Comment(" note".into()),
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_symbols_use_longest_match() {
        let tokens = tokenize("a<=b==c=d/e").unwrap();
        assert_eq!(
            tokens,
            vec![
                ident("a"),
                Token::Symbol(Symbol::LessOrEqual),
                ident("b"),
                Token::Symbol(Symbol::Equals),
                ident("c"),
                Token::Symbol(Symbol::Assign),
                ident("d"),
                Token::Symbol(Symbol::Slash),
                ident("e"),
            ]
        );
    }

    #[test]
    fn test_spans_of_split_tokens() {
        let tokens = tokenize_with_spans("x = 'ABCD'").unwrap();
        let spans: Vec<_> = tokens.into_iter().map(|(_, span)| span).collect();
        assert_eq!(spans, vec![0..1, 2..3, 4..5, 5..9, 9..10]);
    }

    #[test]
    fn test_unrecognized_input() {
        let error = tokenize("set x = @").unwrap_err();
        assert_eq!(error.span, 8..9);
        assert_eq!(error.text, "@");
    }

    #[test]
    fn test_invalid_escape_is_rejected() {
        assert!(tokenize(r#""\q""#).is_err());
    }

    #[test]
    fn test_nesting_depth() {
        let tokens = tokenize("if (a[(1)]) then\nloop\nendloop\nendif").unwrap();
        assert_eq!(nesting(&tokens).depth, 4);
        assert_eq!(nesting(&tokenize("f(1) + g(2)").unwrap()).depth, 1);
        assert_eq!(nesting(&[]), Nesting::default());
    }

    #[test]
    fn test_operator_chain() {
        let chain = |source: &str| nesting(&tokenize(source).unwrap()).operator_chain;
        assert_eq!(chain("1 + 2 + 3"), 2);
        assert_eq!(chain("a * (b + c - d)"), 4);
        // Arguments and lines are separate trees
        assert_eq!(chain("f(1 + 2, 3 + 4)"), 2);
        assert_eq!(chain("set x = a + b\nset y = c + d"), 1);
        assert_eq!(chain("(1) + (2) + (3)"), 3);
    }
}
