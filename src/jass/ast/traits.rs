//! Common traits for AST nodes

/// Common interface for every AST node family
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
