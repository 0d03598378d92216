//! Expression parsing through both parsers

use jass::jass::ast::{BinaryOperator, Expression, UnaryOperator};
use jass::jass::error::ParseError;
use jass::jass::testing::{accept_expression, assert_expression, reject_expression};
use rstest::rstest;

#[rstest]
#[case("42", Expression::DecimalLiteral(42))]
#[case("0", Expression::OctalLiteral(0))]
#[case("0777", Expression::OctalLiteral(511))]
#[case("$ff", Expression::HexadecimalLiteral(255))]
#[case("0XFFFFFFFF", Expression::HexadecimalLiteral(-1))]
#[case("3.", Expression::RealLiteral(3.0))]
#[case(".25", Expression::RealLiteral(0.25))]
#[case("false", Expression::BooleanLiteral(false))]
#[case("null", Expression::NullLiteral)]
#[case("\"\"", Expression::StringLiteral(String::new()))]
#[case("'Aloc'", Expression::FourCCLiteral(i32::from_le_bytes(*b"Aloc")))]
fn test_literal(#[case] source: &str, #[case] expected: Expression) {
    assert_eq!(accept_expression(source), expected);
}

#[rstest]
#[case("'AB'")]
#[case("'ABCDE'")]
#[case("''")]
#[case("4294967296")]
#[case("$100000000")]
#[case("08")]
#[case("1..2")]
fn test_malformed_literal(#[case] source: &str) {
    reject_expression(source);
}

#[rstest]
#[case("a + b", BinaryOperator::Add)]
#[case("a - b", BinaryOperator::Subtract)]
#[case("a * b", BinaryOperator::Multiply)]
#[case("a / b", BinaryOperator::Divide)]
#[case("a > b", BinaryOperator::GreaterThan)]
#[case("a < b", BinaryOperator::LessThan)]
#[case("a == b", BinaryOperator::Equals)]
#[case("a != b", BinaryOperator::NotEquals)]
#[case("a >= b", BinaryOperator::GreaterOrEqual)]
#[case("a <= b", BinaryOperator::LessOrEqual)]
#[case("a and b", BinaryOperator::And)]
#[case("a or b", BinaryOperator::Or)]
fn test_binary_operator(#[case] source: &str, #[case] operator: BinaryOperator) {
    assert_eq!(
        accept_expression(source),
        Expression::binary(operator, Expression::variable("a"), Expression::variable("b"))
    );
}

#[test]
fn test_precedence_climbs_through_every_tier() {
    // a or b == c + d * -e
    assert_expression("a or b == c + d * -e")
        .binary(BinaryOperator::Or)
        .left(|left| {
            left.variable("a");
        })
        .right(|right| {
            right
                .binary(BinaryOperator::Equals)
                .right(|sum| {
                    sum.binary(BinaryOperator::Add).right(|product| {
                        product
                            .binary(BinaryOperator::Multiply)
                            .right(|negated| {
                                negated.unary(UnaryOperator::Minus).operand(|e| {
                                    e.variable("e");
                                });
                            });
                    });
                });
        });
}

#[test]
fn test_and_or_share_a_tier() {
    assert_eq!(
        accept_expression("a or b and c"),
        Expression::binary(
            BinaryOperator::And,
            Expression::binary(
                BinaryOperator::Or,
                Expression::variable("a"),
                Expression::variable("b")
            ),
            Expression::variable("c"),
        )
    );
}

#[test]
fn test_whitespace_is_insignificant_within_a_line() {
    assert_eq!(
        accept_expression("  f ( 1 ,x [ 2 ] )  "),
        accept_expression("f(1,x[2])")
    );
}

#[test]
fn test_newline_ends_an_expression() {
    reject_expression("1 +\n2");
}

#[test]
fn test_keyword_prefixed_names_are_identifiers() {
    assert_eq!(accept_expression("notx"), Expression::variable("notx"));
    assert_eq!(
        accept_expression("nullify(truely)"),
        Expression::invocation("nullify", vec![Expression::variable("truely")])
    );
}

#[test]
fn test_fourcc_error_names_the_literal() {
    match reject_expression("'AB'") {
        ParseError::Syntax {
            span,
            label,
            message,
            ..
        } => {
            assert_eq!(span.start, 0);
            assert_eq!(label, Some("fourCC literal"));
            assert_eq!(message.as_deref(), Some("AB is not a valid fourCC number"));
        }
        other => panic!("expected syntax error, found {:?}", other),
    }
}
