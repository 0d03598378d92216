//! Expression grammar
//!
//! Atoms are tried in a fixed order: literals, then function references, then names, then
//! parenthesized expressions. A name followed by an argument list is an invocation, followed
//! by a bracketed index an array reference, and otherwise a plain variable reference. A
//! suffix that fails to parse rewinds to just after the name.
//!
//! Operators, tightest first:
//!
//! | tier       | operators                  | shape                       |
//! |------------|----------------------------|-----------------------------|
//! | negation   | `not`                      | prefix, at most one         |
//! | sign       | `+` `-`                    | prefix, at most one         |
//! | product    | `*` `/`                    | infix, left associative     |
//! | sum        | `+` `-`                    | infix, left associative     |
//! | comparison | `==` `!=` `>=` `<=` `>` `<`| infix, left associative     |
//! | logical    | `and` `or`                 | infix, left associative     |

use chumsky::prelude::*;
use std::ops::Range;

use crate::jass::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::jass::lexer::{Keyword, Symbol};
use crate::jass::literal;
use crate::jass::parser::combinators::{argument_list, identifier, keyword, symbol};
use crate::jass::parser::input::{GrammarInput, LiteralKind, Rule};

fn undecodable<I: GrammarInput>(kind: LiteralKind, text: &str, span: Range<usize>) -> Simple<I> {
    Simple::custom(span, format!("{} is not a valid {} number", text, kind.name()))
        .with_label(kind.label())
}

/// Numeric literal text decoded according to its notation
fn number_literal<I: GrammarInput>() -> Rule<I, Expression> {
    I::number()
        .try_map(|(kind, text), span| {
            let value = match kind {
                LiteralKind::Hexadecimal => {
                    literal::decode_hexadecimal(&text).map(Expression::HexadecimalLiteral)
                }
                LiteralKind::Real => literal::decode_real(&text).map(Expression::RealLiteral),
                LiteralKind::Octal => literal::decode_octal(&text).map(Expression::OctalLiteral),
                LiteralKind::Decimal => {
                    literal::decode_decimal(&text).map(Expression::DecimalLiteral)
                }
                LiteralKind::FourCC | LiteralKind::String => None,
            };
            value.ok_or_else(|| undecodable(kind, &text, span))
        })
        .boxed()
}

fn fourcc_literal<I: GrammarInput>() -> Rule<I, Expression> {
    I::literal(LiteralKind::FourCC)
        .try_map(|text, span| {
            literal::decode_fourcc(&text)
                .map(Expression::FourCCLiteral)
                .ok_or_else(|| undecodable(LiteralKind::FourCC, &text, span))
        })
        .labelled(LiteralKind::FourCC.label())
        .boxed()
}

pub(crate) fn literal_expression<I: GrammarInput>() -> Rule<I, Expression> {
    choice((
        fourcc_literal(),
        number_literal(),
        keyword(Keyword::True)
            .to(true)
            .or(keyword(Keyword::False).to(false))
            .map(Expression::BooleanLiteral)
            .labelled("boolean literal"),
        I::literal(LiteralKind::String)
            .map(Expression::StringLiteral)
            .labelled(LiteralKind::String.label()),
        keyword(Keyword::Null)
            .to(Expression::NullLiteral)
            .labelled("null literal"),
    ))
    .boxed()
}

/// What follows a name in an invocation or an array reference
enum Suffix {
    Arguments(Vec<Expression>),
    Index(Expression),
}

fn prefixed((operator, operand): (Option<UnaryOperator>, Expression)) -> Expression {
    match operator {
        Some(operator) => Expression::unary(operator, operand),
        None => operand,
    }
}

/// `operand (operator operand)*`, folded to the left
fn binary_tier<I: GrammarInput>(
    operand: Rule<I, Expression>,
    operator: Rule<I, BinaryOperator>,
) -> Rule<I, Expression> {
    operand
        .clone()
        .then(operator.then(operand).repeated())
        .foldl(|left, (operator, right)| Expression::binary(operator, left, right))
        .boxed()
}

/// An infix operator as spelled in the input
fn binary_operator<I: GrammarInput>(operator: BinaryOperator) -> Rule<I, BinaryOperator> {
    let spelling = match operator {
        BinaryOperator::Add => symbol(Symbol::Plus),
        BinaryOperator::Subtract => symbol(Symbol::Minus),
        BinaryOperator::Multiply => symbol(Symbol::Asterisk),
        BinaryOperator::Divide => symbol(Symbol::Slash),
        BinaryOperator::GreaterThan => symbol(Symbol::GreaterThan),
        BinaryOperator::LessThan => symbol(Symbol::LessThan),
        BinaryOperator::Equals => symbol(Symbol::Equals),
        BinaryOperator::NotEquals => symbol(Symbol::NotEquals),
        BinaryOperator::GreaterOrEqual => symbol(Symbol::GreaterOrEqual),
        BinaryOperator::LessOrEqual => symbol(Symbol::LessOrEqual),
        BinaryOperator::And => keyword(Keyword::And),
        BinaryOperator::Or => keyword(Keyword::Or),
    };
    spelling.to(operator).boxed()
}

/// Every operator of one precedence tier
fn operators_at<I: GrammarInput>(precedence: u8) -> Rule<I, BinaryOperator> {
    let operators: Vec<_> = BinaryOperator::ALL
        .iter()
        .filter(|operator| operator.precedence() == precedence)
        .map(|operator| binary_operator(*operator))
        .collect();
    choice(operators).boxed()
}

pub(crate) fn expression<I: GrammarInput>() -> Rule<I, Expression> {
    recursive(|expression: Recursive<'static, I, Expression, Simple<I>>| {
        let expression = expression.boxed();

        let function_reference = keyword(Keyword::Function)
            .ignore_then(identifier())
            .map(Expression::FunctionReference)
            .labelled("function reference");

        let arguments = argument_list(expression.clone())
            .map(Suffix::Arguments)
            .labelled("argument list");
        let index = expression
            .clone()
            .delimited_by(symbol(Symbol::LeftBracket), symbol(Symbol::RightBracket))
            .map(Suffix::Index)
            .labelled("array index");

        // A failed suffix falls back to a plain reference but keeps its error, so a broken
        // argument list is reported where it breaks.
        let named = identifier()
            .then(arguments.or(index).or_not())
            .map(|(name, suffix)| match suffix {
                Some(Suffix::Arguments(arguments)) => Expression::Invocation { name, arguments },
                Some(Suffix::Index(index)) => Expression::array(name, index),
                None => Expression::VariableReference(name),
            });

        let parenthesized = expression
            .delimited_by(
                symbol(Symbol::LeftParenthesis),
                symbol(Symbol::RightParenthesis),
            )
            .map(Expression::parenthesized)
            .labelled("parenthesized expression");

        let atom = choice((
            literal_expression(),
            function_reference.boxed(),
            named.boxed(),
            parenthesized.boxed(),
        ));

        let negation = keyword(Keyword::Not)
            .to(UnaryOperator::Not)
            .or_not()
            .then(atom)
            .map(prefixed);

        let sign = symbol(Symbol::Plus)
            .to(UnaryOperator::Plus)
            .or(symbol(Symbol::Minus).to(UnaryOperator::Minus));
        let signed = sign.or_not().then(negation).map(prefixed).boxed();

        let mut tier = signed;
        for precedence in
            (BinaryOperator::LOWEST_PRECEDENCE..=BinaryOperator::HIGHEST_PRECEDENCE).rev()
        {
            tier = binary_tier(tier, operators_at(precedence));
        }
        tier
    })
    .labelled("expression")
    .boxed()
}
