//! Custom script action grammar
//!
//! The single-line statements are shared with the statement grammar. Block keywords are
//! matched on their own, with no body, and the line may be empty or hold only a comment.

use chumsky::prelude::*;

use crate::jass::ast::{CustomScriptAction, Expression};
use crate::jass::lexer::Keyword;
use crate::jass::parser::combinators::{constant, keyword, line_end};
use crate::jass::parser::declaration::function_declaration;
use crate::jass::parser::input::{GrammarInput, Rule};
use crate::jass::parser::statement::{
    call_statement, elseif_header, exit_statement, if_header, local_declaration,
    return_statement, set_statement,
};

pub(crate) fn custom_script_action<I: GrammarInput>(
    expression: Rule<I, Expression>,
) -> Rule<I, CustomScriptAction> {
    let function = constant()
        .then_ignore(keyword(Keyword::Function))
        .then(function_declaration())
        .map(|(is_constant, declaration)| CustomScriptAction::Function {
            is_constant,
            declaration,
        });

    choice((
        line_end().to(CustomScriptAction::Empty),
        local_declaration(expression.clone()).map(CustomScriptAction::LocalVariableDeclaration),
        set_statement(expression.clone()).map(CustomScriptAction::Set),
        call_statement(expression.clone()).map(CustomScriptAction::Call),
        if_header(expression.clone()).map(CustomScriptAction::If),
        elseif_header(expression.clone()).map(CustomScriptAction::ElseIf),
        keyword(Keyword::Else).to(CustomScriptAction::Else),
        keyword(Keyword::EndIf).to(CustomScriptAction::EndIf),
        keyword(Keyword::Loop).to(CustomScriptAction::Loop),
        keyword(Keyword::EndLoop).to(CustomScriptAction::EndLoop),
        exit_statement(expression.clone()).map(CustomScriptAction::Exit),
        return_statement(expression).map(CustomScriptAction::Return),
        function.boxed(),
        keyword(Keyword::EndFunction).to(CustomScriptAction::EndFunction),
    ))
    .labelled("custom script action")
    .boxed()
}
