//! Declaration, function and compilation unit grammar

use chumsky::prelude::*;

use crate::jass::ast::{
    CompilationUnit, Declaration, Expression, Function, FunctionDeclaration, GlobalDeclaration,
    NativeFunctionDeclaration, Parameter, Statement, TypeDeclaration, VariableDeclarator,
};
use crate::jass::lexer::{Keyword, Symbol};
use crate::jass::parser::combinators::{
    base_type, constant, identifier, keyword, line_end, newline, newlines, return_type,
    symbol, type_reference, variable_declarator,
};
use crate::jass::parser::input::{GrammarInput, Rule};
use crate::jass::parser::statement::statement_list;

/// `name takes (nothing | type name, ...) returns (nothing | type)`
pub(crate) fn function_declaration<I: GrammarInput>() -> Rule<I, FunctionDeclaration> {
    let parameter = type_reference()
        .then(identifier())
        .map(|(ty, name)| Parameter { ty, name })
        .labelled("parameter");

    let parameters = keyword(Keyword::Nothing)
        .to(Vec::new())
        .or(parameter.separated_by(symbol(Symbol::Comma)).at_least(1));

    identifier()
        .then_ignore(keyword(Keyword::Takes))
        .then(parameters)
        .then_ignore(keyword(Keyword::Returns))
        .then(return_type())
        .map(|((name, parameters), return_type)| FunctionDeclaration {
            name,
            parameters,
            return_type,
        })
        .labelled("function declaration")
        .boxed()
}

/// A constant needs an initializer and cannot be an array
pub(crate) fn global_declaration<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, GlobalDeclaration> {
    let constant_global = keyword(Keyword::Constant)
        .ignore_then(type_reference())
        .then(identifier())
        .then_ignore(symbol(Symbol::Assign))
        .then(expression.clone())
        .map(|((ty, name), value)| GlobalDeclaration {
            is_constant: true,
            declarator: VariableDeclarator::Scalar {
                ty,
                name,
                initializer: Some(value),
            },
        });

    let variable_global = variable_declarator(expression).map(|declarator| GlobalDeclaration {
        is_constant: false,
        declarator,
    });

    constant_global
        .or(variable_global)
        .labelled("global declaration")
        .boxed()
}

pub(crate) fn type_declaration<I: GrammarInput>() -> Rule<I, TypeDeclaration> {
    keyword(Keyword::Type)
        .ignore_then(identifier())
        .then_ignore(keyword(Keyword::Extends))
        .then(base_type())
        .map(|(name, base)| TypeDeclaration { name, base })
        .labelled("type declaration")
        .boxed()
}

pub(crate) fn native_declaration<I: GrammarInput>() -> Rule<I, NativeFunctionDeclaration> {
    constant()
        .then_ignore(keyword(Keyword::Native))
        .then(function_declaration())
        .map(|(is_constant, declaration)| NativeFunctionDeclaration {
            is_constant,
            declaration,
        })
        .labelled("native function declaration")
        .boxed()
}

pub(crate) fn globals_block<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, Vec<GlobalDeclaration>> {
    keyword(Keyword::Globals)
        .ignore_then(newlines())
        .ignore_then(global_declaration(expression).then_ignore(newlines()).repeated())
        .then_ignore(keyword(Keyword::EndGlobals))
        .labelled("globals block")
        .boxed()
}

pub(crate) fn declaration<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, Declaration> {
    choice((
        type_declaration().map(Declaration::Type),
        globals_block(expression).map(Declaration::Globals),
        native_declaration().map(Declaration::Native),
    ))
    .labelled("declaration")
    .boxed()
}

/// `[constant] function header`, the body, then `endfunction`
pub(crate) fn function<I: GrammarInput>(statement: Rule<I, Statement>) -> Rule<I, Function> {
    constant()
        .then_ignore(keyword(Keyword::Function))
        .then(function_declaration())
        .then_ignore(newline())
        .then(statement_list(statement))
        .then_ignore(keyword(Keyword::EndFunction))
        .map(|((is_constant, declaration), body)| Function {
            is_constant,
            declaration,
            body,
        })
        .labelled("function")
        .boxed()
}

/// Declarations, then functions. Leaves a comment on the last line and the end of input to
/// the caller.
pub(crate) fn compilation_unit<I: GrammarInput>(
    expression: Rule<I, Expression>,
    statement: Rule<I, Statement>,
) -> Rule<I, CompilationUnit> {
    let declarations = declaration(expression)
        .then_ignore(newlines().or(line_end()))
        .repeated();

    let functions = function(statement)
        .then_ignore(newlines().or_not())
        .repeated();

    newlines()
        .or_not()
        .ignore_then(declarations)
        .then(functions)
        .map(|(declarations, functions)| CompilationUnit {
            declarations,
            functions,
        })
        .labelled("compilation unit")
        .boxed()
}
