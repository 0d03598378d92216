//! # jass
//!
//! A parser for JASS, the scripting language behind Warcraft III map logic.
//!
//! File Layout
//!
//! The crate carries two ways of feeding the grammar. The character parser reads source text
//! directly, the token parser reads the output of the [lexer](jass::lexer). Both are the same
//! grammar instantiated over a different input item (see [parser](jass::parser)), and the
//! contract is that they accept the same language and build the same AST.
//!
//! src/jass
//!   ├── ast        The AST model, compared structurally
//!   ├── literal    Decoders for numeric and fourCC literal text
//!   ├── lexer      Logos tokenizer producing the token stream
//!   ├── parser     The grammar, its two input adapters and the entry points
//!   └── config     Parser limits
//!
//! For comparison testing of the two parsers, see the [testing module](jass::testing).

pub mod jass;
