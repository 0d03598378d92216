//! Statement grammar
//!
//! Every statement ends at a newline, which the enclosing statement list consumes. Block
//! statements hold their bodies as nested statement lists, so an `if` without `endif` or an
//! `elseif` after `else` fails here rather than later.

use chumsky::prelude::*;

use crate::jass::ast::{
    CallStatement, ElseIfClause, Expression, IfStatement, SetStatement, Statement,
    VariableDeclarator,
};
use crate::jass::lexer::{Keyword, Symbol};
use crate::jass::parser::combinators::{
    argument_list, identifier, keyword, newline, symbol, variable_declarator,
};
use crate::jass::parser::input::{GrammarInput, Rule};

pub(crate) fn local_declaration<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, VariableDeclarator> {
    keyword(Keyword::Local)
        .ignore_then(variable_declarator(expression))
        .labelled("local variable declaration")
        .boxed()
}

pub(crate) fn set_statement<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, SetStatement> {
    let index = expression
        .clone()
        .delimited_by(symbol(Symbol::LeftBracket), symbol(Symbol::RightBracket));

    keyword(Keyword::Set)
        .ignore_then(identifier())
        .then(index.or_not())
        .then_ignore(symbol(Symbol::Assign))
        .then(expression)
        .map(|((name, index), value)| SetStatement { name, index, value })
        .labelled("set statement")
        .boxed()
}

pub(crate) fn call_statement<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, CallStatement> {
    keyword(Keyword::Call)
        .ignore_then(identifier())
        .then(argument_list(expression))
        .map(|(name, arguments)| CallStatement { name, arguments })
        .labelled("call statement")
        .boxed()
}

pub(crate) fn exit_statement<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, Expression> {
    keyword(Keyword::ExitWhen)
        .ignore_then(expression)
        .labelled("exitwhen statement")
        .boxed()
}

pub(crate) fn return_statement<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, Option<Expression>> {
    keyword(Keyword::Return)
        .ignore_then(expression.or_not())
        .labelled("return statement")
        .boxed()
}

/// `if condition then`
pub(crate) fn if_header<I: GrammarInput>(expression: Rule<I, Expression>) -> Rule<I, Expression> {
    keyword(Keyword::If)
        .ignore_then(expression)
        .then_ignore(keyword(Keyword::Then))
        .labelled("if statement")
        .boxed()
}

/// `elseif condition then`
pub(crate) fn elseif_header<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, Expression> {
    keyword(Keyword::ElseIf)
        .ignore_then(expression)
        .then_ignore(keyword(Keyword::Then))
        .labelled("elseif statement")
        .boxed()
}

/// Zero or more statements, each with its newline
pub(crate) fn statement_list<I: GrammarInput>(
    statement: Rule<I, Statement>,
) -> Rule<I, Vec<Statement>> {
    statement.then_ignore(newline()).repeated().boxed()
}

pub(crate) fn statement<I: GrammarInput>(expression: Rule<I, Expression>) -> Rule<I, Statement> {
    recursive(|statement: Recursive<'static, I, Statement, Simple<I>>| {
        let body = statement_list(statement.boxed());

        let else_if = elseif_header(expression.clone())
            .then_ignore(newline())
            .then(body.clone())
            .map(|(condition, body)| ElseIfClause { condition, body });

        let else_clause = keyword(Keyword::Else)
            .ignore_then(newline())
            .ignore_then(body.clone())
            .labelled("else clause");

        let if_statement = if_header(expression.clone())
            .then_ignore(newline())
            .then(body.clone())
            .then(else_if.repeated())
            .then(else_clause.or_not())
            .then_ignore(keyword(Keyword::EndIf))
            .map(|(((condition, body), else_ifs), else_body)| {
                Statement::If(IfStatement {
                    condition,
                    body,
                    else_ifs,
                    else_body,
                })
            })
            .labelled("if statement");

        let loop_statement = keyword(Keyword::Loop)
            .ignore_then(newline())
            .ignore_then(body)
            .then_ignore(keyword(Keyword::EndLoop))
            .map(Statement::Loop)
            .labelled("loop statement");

        choice((
            newline().rewind().to(Statement::Empty),
            local_declaration(expression.clone()).map(Statement::LocalVariableDeclaration),
            set_statement(expression.clone()).map(Statement::Set),
            call_statement(expression.clone()).map(Statement::Call),
            if_statement.boxed(),
            loop_statement.boxed(),
            exit_statement(expression.clone()).map(Statement::Exit),
            return_statement(expression.clone()).map(Statement::Return),
        ))
    })
    .labelled("statement")
    .boxed()
}
