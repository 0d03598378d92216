//! Sample scripts parsed through both parsers

use jass::jass::ast::{Declaration, Expression, ReturnType, Statement, Type};
use jass::jass::literal::decode_fourcc;
use jass::jass::testing::accept_compilation_unit;
use std::fs;

fn read_sample(name: &str) -> String {
    fs::read_to_string(format!("docs/samples/{}", name)).expect("Failed to read sample script")
}

#[test]
fn test_010_declarations() {
    let unit = accept_compilation_unit(&read_sample("010-declarations.j"));
    assert!(unit.functions.is_empty());
    assert_eq!(unit.declarations.len(), 7);

    match &unit.declarations[0] {
        Declaration::Type(declaration) => {
            assert_eq!(declaration.name, "agent");
            assert_eq!(declaration.base, Type::Handle);
        }
        other => panic!("expected type declaration, found {:?}", other),
    }

    match &unit.declarations[3] {
        Declaration::Globals(globals) => {
            assert_eq!(globals.len(), 6);
            assert!(globals[0].is_constant);
            assert!(globals[1].is_constant);
            assert!(!globals[2].is_constant);
            assert_eq!(globals[3].declarator.name(), "heroes");
        }
        other => panic!("expected globals, found {:?}", other),
    }

    match &unit.declarations[6] {
        Declaration::Native(native) => {
            assert!(native.is_constant);
            assert_eq!(native.declaration.name, "OrderId");
            assert_eq!(
                native.declaration.return_type,
                ReturnType::Type(Type::Integer)
            );
        }
        other => panic!("expected native, found {:?}", other),
    }
}

#[test]
fn test_020_functions() {
    let unit = accept_compilation_unit(&read_sample("020-functions.j"));
    assert_eq!(unit.declarations.len(), 1);
    let names: Vec<_> = unit
        .functions
        .iter()
        .map(|f| f.declaration.name.as_str())
        .collect();
    assert_eq!(names, vec!["Sum", "Grade", "Main"]);

    let grade = unit.function("Grade").unwrap();
    assert!(grade.is_constant);
    match &grade.body[0] {
        Statement::If(statement) => {
            assert_eq!(statement.else_ifs.len(), 2);
            assert!(statement.else_body.is_some());
        }
        other => panic!("expected if statement, found {:?}", other),
    }

    let main = unit.function("Main").unwrap();
    assert_eq!(main.body.len(), 6);
    match &main.body[0] {
        Statement::LocalVariableDeclaration(declarator) => assert_eq!(
            *declarator,
            jass::jass::ast::VariableDeclarator::scalar(
                Type::Integer,
                "id",
                Some(Expression::FourCCLiteral(decode_fourcc("hfoo").unwrap()))
            )
        ),
        other => panic!("expected local, found {:?}", other),
    }
}
