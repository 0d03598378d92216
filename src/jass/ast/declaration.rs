//! Declarations, functions and the compilation unit

use super::statement::{Statement, VariableDeclarator};
use super::traits::AstNode;
use super::types::{ReturnType, Type};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// `name takes parameters returns type`. An empty parameter list means `takes nothing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: ReturnType,
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} takes ", self.name)?;
        if self.parameters.is_empty() {
            f.write_str("nothing")?;
        } else {
            for (i, parameter) in self.parameters.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} {}", parameter.ty, parameter.name)?;
            }
        }
        write!(f, " returns {}", self.return_type)
    }
}

/// One line of a `globals` block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalDeclaration {
    pub is_constant: bool,
    pub declarator: VariableDeclarator,
}

/// `type name extends base`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub base: Type,
}

/// `[constant] native name takes ... returns ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeFunctionDeclaration {
    pub is_constant: bool,
    pub declaration: FunctionDeclaration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Declaration {
    Globals(Vec<GlobalDeclaration>),
    Type(TypeDeclaration),
    Native(NativeFunctionDeclaration),
}

impl AstNode for Declaration {
    fn node_type(&self) -> &'static str {
        match self {
            Declaration::Globals(_) => "GlobalDeclarationList",
            Declaration::Type(_) => "TypeDeclaration",
            Declaration::Native(_) => "NativeFunctionDeclaration",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Declaration::Globals(globals) => format!("globals ({} items)", globals.len()),
            Declaration::Type(declaration) => {
                format!("type {} extends {}", declaration.name, declaration.base)
            }
            Declaration::Native(native) => format!("native {}", native.declaration),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub is_constant: bool,
    pub declaration: FunctionDeclaration,
    pub body: Vec<Statement>,
}

impl AstNode for Function {
    fn node_type(&self) -> &'static str {
        "Function"
    }

    fn display_label(&self) -> String {
        self.declaration.to_string()
    }
}

/// A whole script: every declaration comes before the first function
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompilationUnit {
    pub declarations: Vec<Declaration>,
    pub functions: Vec<Function>,
}

impl CompilationUnit {
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.declaration.name == name)
    }
}

impl AstNode for CompilationUnit {
    fn node_type(&self) -> &'static str {
        "CompilationUnit"
    }

    fn display_label(&self) -> String {
        format!(
            "{} declarations, {} functions",
            self.declarations.len(),
            self.functions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_declaration_display() {
        let declaration = FunctionDeclaration {
            name: "Add".to_string(),
            parameters: vec![
                Parameter::new(Type::Integer, "a"),
                Parameter::new(Type::Integer, "b"),
            ],
            return_type: ReturnType::Type(Type::Integer),
        };
        assert_eq!(
            declaration.to_string(),
            "Add takes integer a, integer b returns integer"
        );

        let main = FunctionDeclaration {
            name: "main".to_string(),
            parameters: vec![],
            return_type: ReturnType::Nothing,
        };
        assert_eq!(main.to_string(), "main takes nothing returns nothing");
    }

    #[test]
    fn test_function_lookup() {
        let unit = CompilationUnit {
            declarations: vec![],
            functions: vec![Function {
                is_constant: false,
                declaration: FunctionDeclaration {
                    name: "main".to_string(),
                    parameters: vec![],
                    return_type: ReturnType::Nothing,
                },
                body: vec![],
            }],
        };
        assert!(unit.function("main").is_some());
        assert!(unit.function("config").is_none());
        assert_eq!(unit.display_label(), "0 declarations, 1 functions");
    }
}
