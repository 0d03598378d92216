//! Statement nodes

use super::expression::Expression;
use super::traits::AstNode;
use super::types::Type;
use serde::Serialize;

/// Declares one variable. Arrays never carry an initializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VariableDeclarator {
    Scalar {
        ty: Type,
        name: String,
        initializer: Option<Expression>,
    },
    Array {
        ty: Type,
        name: String,
    },
}

impl VariableDeclarator {
    pub fn scalar(ty: Type, name: impl Into<String>, initializer: Option<Expression>) -> Self {
        VariableDeclarator::Scalar {
            ty,
            name: name.into(),
            initializer,
        }
    }

    pub fn array(ty: Type, name: impl Into<String>) -> Self {
        VariableDeclarator::Array {
            ty,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            VariableDeclarator::Scalar { name, .. } | VariableDeclarator::Array { name, .. } => {
                name
            }
        }
    }

    pub fn ty(&self) -> &Type {
        match self {
            VariableDeclarator::Scalar { ty, .. } | VariableDeclarator::Array { ty, .. } => ty,
        }
    }
}

/// `set name[index] = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetStatement {
    pub name: String,
    pub index: Option<Expression>,
    pub value: Expression,
}

/// `call name(arguments)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallStatement {
    pub name: String,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseIfClause {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

/// An if block. `else_ifs` keeps source order; there is at most one else body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub else_ifs: Vec<ElseIfClause>,
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// A blank line, or a line holding only a comment
    Empty,
    LocalVariableDeclaration(VariableDeclarator),
    Set(SetStatement),
    Call(CallStatement),
    If(IfStatement),
    /// Unconditional loop, left through `exitwhen`
    Loop(Vec<Statement>),
    Exit(Expression),
    Return(Option<Expression>),
}

impl AstNode for Statement {
    fn node_type(&self) -> &'static str {
        match self {
            Statement::Empty => "EmptyStatement",
            Statement::LocalVariableDeclaration(_) => "LocalVariableDeclaration",
            Statement::Set(_) => "SetStatement",
            Statement::Call(_) => "CallStatement",
            Statement::If(_) => "IfStatement",
            Statement::Loop(_) => "LoopStatement",
            Statement::Exit(_) => "ExitStatement",
            Statement::Return(_) => "ReturnStatement",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Statement::Empty => String::new(),
            Statement::LocalVariableDeclaration(declarator) => {
                format!("local {} {}", declarator.ty(), declarator.name())
            }
            Statement::Set(set) => format!("set {}", set.name),
            Statement::Call(call) => format!("call {}", call.name),
            Statement::If(statement) => format!(
                "if ({} statements, {} elseif)",
                statement.body.len(),
                statement.else_ifs.len()
            ),
            Statement::Loop(body) => format!("loop ({} statements)", body.len()),
            Statement::Exit(_) => "exitwhen".to_string(),
            Statement::Return(value) => match value {
                Some(_) => "return <value>".to_string(),
                None => "return".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarator_accessors() {
        let scalar =
            VariableDeclarator::scalar(Type::Integer, "i", Some(Expression::OctalLiteral(0)));
        assert_eq!(scalar.name(), "i");
        assert_eq!(scalar.ty(), &Type::Integer);

        let array = VariableDeclarator::array(Type::named("unit"), "units");
        assert_eq!(array.name(), "units");
        assert_eq!(array.ty(), &Type::named("unit"));
    }

    #[test]
    fn test_statement_labels() {
        let statement = Statement::If(IfStatement {
            condition: Expression::BooleanLiteral(true),
            body: vec![Statement::Empty],
            else_ifs: vec![],
            else_body: None,
        });
        assert_eq!(statement.node_type(), "IfStatement");
        assert_eq!(statement.display_label(), "if (1 statements, 0 elseif)");
        assert_eq!(Statement::Return(None).display_label(), "return");
    }
}
