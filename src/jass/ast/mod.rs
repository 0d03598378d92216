//! AST definitions for JASS
//!
//! Every node is an owned value type. Equality is structural, and literal nodes compare by
//! their decoded value rather than their spelling, so `$10`, `0x10` and `16` are different
//! variants but `0x10` and `0X10` are equal.
//!
//! ## Modules
//!
//! - `expression` - Expressions and the unary/binary operator sets
//! - `types` - Built-in and user type names, return types
//! - `statement` - Statements, variable declarators and block statements
//! - `custom_script_action` - Single-line actions with standalone block markers
//! - `declaration` - Top-level declarations, functions and the compilation unit
//! - `traits` - The `AstNode` trait shared by every node family

pub mod custom_script_action;
pub mod declaration;
pub mod expression;
pub mod statement;
pub mod traits;
pub mod types;

pub use custom_script_action::CustomScriptAction;
pub use declaration::{
    CompilationUnit, Declaration, Function, FunctionDeclaration, GlobalDeclaration,
    NativeFunctionDeclaration, Parameter, TypeDeclaration,
};
pub use expression::{BinaryOperator, Expression, UnaryOperator};
pub use statement::{
    CallStatement, ElseIfClause, IfStatement, SetStatement, Statement, VariableDeclarator,
};
pub use traits::AstNode;
pub use types::{ReturnType, Type};
