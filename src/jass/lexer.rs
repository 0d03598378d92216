//! Lexer module for JASS
//!
//! The token stream is what the token-stream grammar consumes. A logos lexer recognizes the
//! raw lexemes, then `tokenize` splits the compound ones so the stream carries the
//! delimiters separately: a string literal becomes `DoubleQuote`, `StringLiteral(body)`,
//! `DoubleQuote`, a fourCC literal becomes `SingleQuote`, `FourCCNumber(body)`,
//! `SingleQuote`, and a comment becomes `CommentStart`, `Comment(body)`.
//!
//! Spaces, tabs and carriage returns are dropped. Line feeds are significant and are kept as
//! `Newline` tokens.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{nesting, tokenize, tokenize_with_spans, Nesting};
pub use tokens::{Keyword, Symbol, Token};
