//! Custom script actions parsed line by line

use jass::jass::ast::{
    AstNode, CallStatement, CustomScriptAction, Expression, ReturnType, SetStatement, Type,
    VariableDeclarator,
};
use jass::jass::testing::{accept_custom_script_action, reject_custom_script_action};
use rstest::rstest;

const SCRIPT: &str = "function OnTick takes nothing returns nothing
    local integer i = 0
    loop
        exitwhen i > 3
        if IsReady(i) then
            call Tick(i)
        elseif i == 2 then
            // skip
        else
            set i = i + 1
        endif
    endloop
    return
endfunction";

#[test]
fn test_script_lines_reassemble_into_balanced_blocks() {
    let actions: Vec<CustomScriptAction> =
        SCRIPT.lines().map(accept_custom_script_action).collect();

    let mut depth = 0usize;
    for action in &actions {
        if action.closes_block() {
            depth = depth.checked_sub(1).expect("closer without opener");
        }
        if action.opens_block() {
            depth += 1;
        }
    }
    assert_eq!(depth, 0);

    let kinds: Vec<&str> = actions.iter().map(|a| a.node_type()).collect();
    assert_eq!(
        kinds,
        vec![
            "FunctionAction",
            "LocalVariableDeclarationAction",
            "LoopAction",
            "ExitAction",
            "IfAction",
            "CallAction",
            "ElseIfAction",
            "EmptyAction",
            "ElseAction",
            "SetAction",
            "EndIfAction",
            "EndLoopAction",
            "ReturnAction",
            "EndFunctionAction",
        ]
    );
}

#[rstest]
#[case("", CustomScriptAction::Empty)]
#[case("   ", CustomScriptAction::Empty)]
#[case("// note", CustomScriptAction::Empty)]
#[case("else", CustomScriptAction::Else)]
#[case("endloop // done", CustomScriptAction::EndLoop)]
#[case("return", CustomScriptAction::Return(None))]
#[case("return null", CustomScriptAction::Return(Some(Expression::NullLiteral)))]
#[case(
    "local unit array units",
    CustomScriptAction::LocalVariableDeclaration(
        VariableDeclarator::array(Type::named("unit"), "units")
    )
)]
#[case(
    "set units[0] = u",
    CustomScriptAction::Set(SetStatement {
        name: "units".to_string(),
        index: Some(Expression::OctalLiteral(0)),
        value: Expression::variable("u"),
    })
)]
#[case(
    "call Reset()",
    CustomScriptAction::Call(CallStatement { name: "Reset".to_string(), arguments: vec![] })
)]
fn test_single_action(#[case] line: &str, #[case] expected: CustomScriptAction) {
    assert_eq!(accept_custom_script_action(line), expected);
}

#[test]
fn test_constant_function_action() {
    match accept_custom_script_action("constant function Id takes integer x returns integer") {
        CustomScriptAction::Function {
            is_constant,
            declaration,
        } => {
            assert!(is_constant);
            assert_eq!(declaration.name, "Id");
            assert_eq!(declaration.parameters.len(), 1);
            assert_eq!(declaration.return_type, ReturnType::Type(Type::Integer));
        }
        other => panic!("expected function action, found {:?}", other),
    }
}

#[rstest]
#[case("if x")]
#[case("if x then call F()")]
#[case("loop loop")]
#[case("set = 1")]
#[case("call F")]
#[case("local integer")]
#[case("endif\n")]
#[case("function F takes returns nothing")]
fn test_malformed_action(#[case] line: &str) {
    reject_custom_script_action(line);
}
