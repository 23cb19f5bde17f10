//! Lexer module for the OTT languages

pub mod scanner;
pub mod token;

pub use scanner::*;
pub use token::*;
