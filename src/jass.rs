//! Main module for jass library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod testing;
