//! Parser configuration

/// Limits applied before a parse starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of parentheses, brackets, `if` and `loop` blocks
    pub max_nesting_depth: usize,
    /// Longest allowed run of operators building one expression tree. Each operator adds a
    /// level to the tree, so this bounds how deep an expression can grow.
    pub max_operator_chain: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;
    pub const DEFAULT_MAX_OPERATOR_CHAIN: usize = 256;

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_max_operator_chain(mut self, length: usize) -> Self {
        self.max_operator_chain = length;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
            max_operator_chain: Self::DEFAULT_MAX_OPERATOR_CHAIN,
        }
    }
}
