//! Parser combinator functions shared by the expression, statement and declaration grammars.

use chumsky::prelude::*;

use crate::jass::ast::{Expression, ReturnType, Type, VariableDeclarator};
use crate::jass::lexer::{Keyword, Symbol};
use crate::jass::parser::input::{GrammarInput, Rule};

pub(crate) fn keyword<I: GrammarInput>(keyword: Keyword) -> Rule<I, ()> {
    I::keyword(keyword)
}

pub(crate) fn symbol<I: GrammarInput>(symbol: Symbol) -> Rule<I, ()> {
    I::symbol(symbol)
}

pub(crate) fn identifier<I: GrammarInput>() -> Rule<I, String> {
    I::identifier()
}

/// An optional trailing comment followed by a line feed
pub(crate) fn newline<I: GrammarInput>() -> Rule<I, ()> {
    I::comment()
        .or_not()
        .ignore_then(I::line_break())
        .labelled("newline")
        .boxed()
}

pub(crate) fn newlines<I: GrammarInput>() -> Rule<I, ()> {
    newline()
        .repeated()
        .at_least(1)
        .ignored()
        .labelled("newlines")
        .boxed()
}

/// Looks ahead for the end of a line, which is a newline or the end of input. Consumes nothing.
pub(crate) fn line_end<I: GrammarInput>() -> Rule<I, ()> {
    I::comment()
        .or_not()
        .ignore_then(I::line_break().or(end()))
        .rewind()
        .boxed()
}

/// Optional `constant` qualifier
pub(crate) fn constant<I: GrammarInput>() -> Rule<I, bool> {
    keyword(Keyword::Constant).or_not().map(|c| c.is_some()).boxed()
}

/// Comma separated items between parentheses, possibly none
pub(crate) fn argument_list<I: GrammarInput, O: 'static>(item: Rule<I, O>) -> Rule<I, Vec<O>> {
    item.separated_by(symbol(Symbol::Comma))
        .delimited_by(
            symbol(Symbol::LeftParenthesis),
            symbol(Symbol::RightParenthesis),
        )
        .boxed()
}

pub(crate) fn type_reference<I: GrammarInput>() -> Rule<I, Type> {
    choice((
        keyword(Keyword::Code).to(Type::Code),
        keyword(Keyword::Handle).to(Type::Handle),
        keyword(Keyword::Integer).to(Type::Integer),
        keyword(Keyword::Real).to(Type::Real),
        keyword(Keyword::Boolean).to(Type::Boolean),
        keyword(Keyword::String).to(Type::String),
        identifier().map(Type::Named),
    ))
    .labelled("type")
    .boxed()
}

/// The base of a `type` declaration: `handle` or a user type
pub(crate) fn base_type<I: GrammarInput>() -> Rule<I, Type> {
    keyword(Keyword::Handle)
        .to(Type::Handle)
        .or(identifier().map(Type::Named))
        .labelled("base type")
        .boxed()
}

pub(crate) fn return_type<I: GrammarInput>() -> Rule<I, ReturnType> {
    keyword(Keyword::Nothing)
        .to(ReturnType::Nothing)
        .or(type_reference().map(ReturnType::Type))
        .labelled("return type")
        .boxed()
}

/// `type name = expression`, `type name` or `type array name`
pub(crate) fn variable_declarator<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, VariableDeclarator> {
    let scalar = type_reference()
        .then(identifier())
        .then(
            symbol(Symbol::Assign)
                .ignore_then(expression)
                .or_not(),
        )
        .map(|((ty, name), initializer)| VariableDeclarator::Scalar {
            ty,
            name,
            initializer,
        });

    let array = type_reference()
        .then_ignore(keyword(Keyword::Array))
        .then(identifier())
        .map(|(ty, name)| VariableDeclarator::Array { ty, name });

    scalar
        .or(array)
        .labelled("variable declaration")
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jass::parser::expression::expression;

    fn parse<O>(rule: Rule<char, O>, text: &str) -> Option<O> {
        rule.then_ignore(end())
            .parse(text.chars().collect::<Vec<_>>())
            .ok()
    }

    #[test]
    fn test_newline_accepts_trailing_comment() {
        assert!(parse(newline(), "// done\n").is_some());
        assert!(parse(newline(), "\n").is_some());
        assert!(parse(newline(), "// no line feed").is_none());
    }

    #[test]
    fn test_line_end_consumes_nothing() {
        let rule = line_end().ignore_then(newline()).boxed();
        assert!(parse(rule, "// c\n").is_some());
    }

    #[test]
    fn test_type_reference() {
        assert_eq!(parse(type_reference(), "integer"), Some(Type::Integer));
        assert_eq!(parse(type_reference(), "unit"), Some(Type::named("unit")));
        assert!(parse(type_reference(), "nothing").is_none());
    }

    #[test]
    fn test_base_type_rejects_other_primitives() {
        assert_eq!(parse(base_type(), "handle"), Some(Type::Handle));
        assert_eq!(parse(base_type(), "widget"), Some(Type::named("widget")));
        assert!(parse(base_type(), "integer").is_none());
    }

    #[test]
    fn test_declarators() {
        assert_eq!(
            parse(variable_declarator(expression()), "real x = 1."),
            Some(VariableDeclarator::scalar(
                Type::Real,
                "x",
                Some(Expression::RealLiteral(1.0))
            ))
        );
        assert_eq!(
            parse(variable_declarator(expression()), "unit array units"),
            Some(VariableDeclarator::array(Type::named("unit"), "units"))
        );
        assert!(parse(variable_declarator(expression()), "integer array x = 1").is_none());
    }
}
