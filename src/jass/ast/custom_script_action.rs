//! Custom script actions
//!
//! A custom script action is one physical line of script. Block openers and closers are
//! separate actions with no body, the caller reassembles blocks from a sequence of them.

use super::declaration::FunctionDeclaration;
use super::expression::Expression;
use super::statement::{CallStatement, SetStatement, VariableDeclarator};
use super::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CustomScriptAction {
    Empty,
    LocalVariableDeclaration(VariableDeclarator),
    Set(SetStatement),
    Call(CallStatement),
    /// `if condition then`
    If(Expression),
    /// `elseif condition then`
    ElseIf(Expression),
    Else,
    EndIf,
    Loop,
    EndLoop,
    Exit(Expression),
    Return(Option<Expression>),
    /// `[constant] function name takes ... returns ...`
    Function {
        is_constant: bool,
        declaration: FunctionDeclaration,
    },
    EndFunction,
}

impl CustomScriptAction {
    /// True for actions that open a block the caller must close
    pub fn opens_block(&self) -> bool {
        matches!(
            self,
            CustomScriptAction::If(_)
                | CustomScriptAction::Loop
                | CustomScriptAction::Function { .. }
        )
    }

    /// True for actions that close a block
    pub fn closes_block(&self) -> bool {
        matches!(
            self,
            CustomScriptAction::EndIf
                | CustomScriptAction::EndLoop
                | CustomScriptAction::EndFunction
        )
    }
}

impl AstNode for CustomScriptAction {
    fn node_type(&self) -> &'static str {
        match self {
            CustomScriptAction::Empty => "EmptyAction",
            CustomScriptAction::LocalVariableDeclaration(_) => "LocalVariableDeclarationAction",
            CustomScriptAction::Set(_) => "SetAction",
            CustomScriptAction::Call(_) => "CallAction",
            CustomScriptAction::If(_) => "IfAction",
            CustomScriptAction::ElseIf(_) => "ElseIfAction",
            CustomScriptAction::Else => "ElseAction",
            CustomScriptAction::EndIf => "EndIfAction",
            CustomScriptAction::Loop => "LoopAction",
            CustomScriptAction::EndLoop => "EndLoopAction",
            CustomScriptAction::Exit(_) => "ExitAction",
            CustomScriptAction::Return(_) => "ReturnAction",
            CustomScriptAction::Function { .. } => "FunctionAction",
            CustomScriptAction::EndFunction => "EndFunctionAction",
        }
    }

    fn display_label(&self) -> String {
        match self {
            CustomScriptAction::LocalVariableDeclaration(declarator) => {
                format!("local {}", declarator.name())
            }
            CustomScriptAction::Set(set) => format!("set {}", set.name),
            CustomScriptAction::Call(call) => format!("call {}", call.name),
            CustomScriptAction::Function { declaration, .. } => {
                format!("function {}", declaration.name)
            }
            CustomScriptAction::If(_) => "if".to_string(),
            CustomScriptAction::ElseIf(_) => "elseif".to_string(),
            CustomScriptAction::Else => "else".to_string(),
            CustomScriptAction::EndIf => "endif".to_string(),
            CustomScriptAction::Loop => "loop".to_string(),
            CustomScriptAction::EndLoop => "endloop".to_string(),
            CustomScriptAction::Exit(_) => "exitwhen".to_string(),
            CustomScriptAction::Return(_) => "return".to_string(),
            CustomScriptAction::EndFunction => "endfunction".to_string(),
            CustomScriptAction::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_markers() {
        assert!(CustomScriptAction::Loop.opens_block());
        assert!(CustomScriptAction::If(Expression::BooleanLiteral(true)).opens_block());
        assert!(CustomScriptAction::EndIf.closes_block());
        assert!(!CustomScriptAction::Else.opens_block());
        assert!(!CustomScriptAction::Else.closes_block());
        assert!(!CustomScriptAction::Empty.opens_block());
    }
}
