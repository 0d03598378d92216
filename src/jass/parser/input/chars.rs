//! Character input: the grammar reads source text directly

use chumsky::prelude::*;
use chumsky::BoxedParser;

use super::{GrammarInput, LiteralKind, Rule};
use crate::jass::lexer::{self, Keyword, Nesting, Symbol};

type CharError = Simple<char>;

fn inline_whitespace() -> impl Parser<char, (), Error = CharError> + Clone {
    filter(|c: &char| matches!(c, ' ' | '\t' | '\r'))
        .repeated()
        .ignored()
}

fn word() -> impl Parser<char, String, Error = CharError> + Clone {
    filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// At least `min` digits of the given radix
fn digits(radix: u32, min: usize) -> impl Parser<char, Vec<char>, Error = CharError> + Clone {
    filter(move |c: &char| c.is_digit(radix))
        .repeated()
        .at_least(min)
}

/// Succeeds without consuming anything unless `c` comes next
fn not_followed_by(c: char) -> impl Parser<char, (), Error = CharError> + Clone {
    just(c)
        .rewind()
        .or_not()
        .try_map(move |next, span| match next {
            Some(found) => Err(Simple::expected_input_found(span, Vec::new(), Some(found))),
            None => Ok(()),
        })
}

fn raw_literal(kind: LiteralKind) -> BoxedParser<'static, char, String, CharError> {
    match kind {
        LiteralKind::Decimal => filter(|c: &char| ('1'..='9').contains(c))
            .chain(digits(10, 0))
            .collect::<String>()
            .boxed(),
        LiteralKind::Octal => just('0').chain(digits(8, 0)).collect::<String>().boxed(),
        LiteralKind::Hexadecimal => {
            let prefix = just('$')
                .map(String::from)
                .or(just('0')
                    .chain(one_of("xX"))
                    .collect::<String>());
            prefix
                .then(digits(16, 1).collect::<String>())
                .map(|(prefix, digits)| prefix + &digits)
                .boxed()
        }
        LiteralKind::Real => digits(10, 1)
            .chain(just('.'))
            .chain(digits(10, 0))
            .or(just('.').chain(digits(10, 1)))
            .collect::<String>()
            .boxed(),
        LiteralKind::FourCC => filter(|c: &char| *c != '\'')
            .repeated()
            .collect::<String>()
            .delimited_by(just('\''), just('\''))
            .boxed(),
        LiteralKind::String => {
            let plain = filter(|c: &char| *c != '"' && *c != '\\').map(String::from);
            let escape = just('\\').chain(one_of("\"rnt\\")).collect::<String>();
            plain
                .or(escape)
                .repeated()
                .collect::<String>()
                .delimited_by(just('"'), just('"'))
                .boxed()
        }
    }
}

impl GrammarInput for char {
    const NAME: &'static str = "chars";

    fn keyword(keyword: Keyword) -> Rule<char, ()> {
        word()
            .try_map(move |word, span| {
                if word == keyword.as_str() {
                    Ok(())
                } else {
                    Err(Simple::expected_input_found(
                        span,
                        Vec::new(),
                        word.chars().next(),
                    ))
                }
            })
            .then_ignore(inline_whitespace())
            .labelled(keyword.label())
            .boxed()
    }

    fn symbol(symbol: Symbol) -> Rule<char, ()> {
        let text = just(symbol.as_str()).ignored();
        let exact = match symbol {
            Symbol::Assign | Symbol::LessThan | Symbol::GreaterThan => {
                text.then_ignore(not_followed_by('=')).boxed()
            }
            Symbol::Slash => text.then_ignore(not_followed_by('/')).boxed(),
            _ => text.boxed(),
        };
        exact
            .then_ignore(inline_whitespace())
            .labelled(symbol.label())
            .boxed()
    }

    fn identifier() -> Rule<char, String> {
        word()
            .try_map(|word, span| {
                let leads_with_letter = word
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic());
                if leads_with_letter && Keyword::from_word(&word).is_none() {
                    Ok(word)
                } else {
                    Err(Simple::expected_input_found(
                        span,
                        Vec::new(),
                        word.chars().next(),
                    ))
                }
            })
            .then_ignore(inline_whitespace())
            .labelled("identifier")
            .boxed()
    }

    fn literal(kind: LiteralKind) -> Rule<char, String> {
        raw_literal(kind).then_ignore(inline_whitespace()).boxed()
    }

    fn number() -> Rule<char, (LiteralKind, String)> {
        let notation = |kind| raw_literal(kind).map(move |text| (kind, text));
        // Hexadecimal and real before octal, which would take their leading `0` or digits
        choice((
            notation(LiteralKind::Hexadecimal),
            notation(LiteralKind::Real),
            notation(LiteralKind::Octal),
            notation(LiteralKind::Decimal),
        ))
        .then_ignore(inline_whitespace())
        .boxed()
    }

    fn comment() -> Rule<char, String> {
        just("//")
            .ignore_then(filter(|c: &char| *c != '\n').repeated().collect::<String>())
            .boxed()
    }

    fn line_break() -> Rule<char, ()> {
        just('\n').ignore_then(inline_whitespace()).boxed()
    }

    fn leading_trivia() -> Rule<char, ()> {
        inline_whitespace().boxed()
    }

    fn nesting(input: &[char]) -> Nesting {
        let source: String = input.iter().collect();
        // Text the lexer rejects is a parse failure anyway, so only the part before it
        // needs measuring.
        let tokens = match lexer::tokenize(&source) {
            Ok(tokens) => tokens,
            Err(error) => lexer::tokenize(&source[..error.span.start]).unwrap_or_default(),
        };
        lexer::nesting(&tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<O>(rule: Rule<char, O>, text: &str) -> Option<O> {
        rule.then_ignore(end()).parse(text.chars().collect::<Vec<_>>()).ok()
    }

    #[test]
    fn test_keyword_requires_whole_word() {
        assert!(parse(char::keyword(Keyword::If), "if  ").is_some());
        assert!(parse(char::keyword(Keyword::If), "iffy").is_none());
    }

    #[test]
    fn test_identifier_excludes_keywords() {
        assert_eq!(parse(char::identifier(), "unit_1 "), Some("unit_1".to_string()));
        assert_eq!(parse(char::identifier(), "returns"), None);
        assert_eq!(parse(char::identifier(), "1abc"), None);
    }

    #[test]
    fn test_symbols_do_not_split_longer_symbols() {
        assert!(parse(char::symbol(Symbol::LessThan), "<").is_some());
        assert!(parse(
            char::symbol(Symbol::LessThan).then_ignore(just('=')).boxed(),
            "<="
        )
        .is_none());
        assert!(parse(char::symbol(Symbol::LessOrEqual), "<= ").is_some());
    }

    #[test]
    fn test_raw_literals() {
        assert_eq!(
            parse(char::literal(LiteralKind::Hexadecimal), "0XfF "),
            Some("0XfF".to_string())
        );
        assert_eq!(
            parse(char::literal(LiteralKind::Real), ".5"),
            Some(".5".to_string())
        );
        assert_eq!(
            parse(char::literal(LiteralKind::String), r#""a\nb""#),
            Some(r"a\nb".to_string())
        );
        assert_eq!(parse(char::literal(LiteralKind::String), r#""\q""#), None);
        assert_eq!(
            parse(char::literal(LiteralKind::FourCC), "'AB'"),
            Some("AB".to_string())
        );
    }

    #[test]
    fn test_nesting_depth_ignores_unlexable_tail() {
        let input: Vec<char> = "((1)) @ (((".chars().collect();
        assert_eq!(char::nesting(&input).depth, 2);
    }
}
