//! OTT DSL - Object Type & Transfer language parsers
//!
//! This crate provides the lexer, recursive-descent parsers and pretty-printer
//! for the three OTT dialects:
//!
//! - **schema**: models with attributes, actions and inheritance, plus
//!   closed string-union types;
//! - **request**: fluent filter/relation chains over a model;
//! - **response**: a typed record of literal fields.
//!
//! Architecture:
//! ```text
//! Source text
//!     ↓
//! Lexer (dialect keyword set, positions)
//!     ↓
//! Cursor + dialect parser (recursive descent)
//!     ↓
//! AST (owned, serde-serializable)
//!     ↓
//! Pretty printer (for round-trip testing)
//! ```
//!
//! ```
//! use ott_dsl::{parse_request, Literal};
//!
//! let ast = parse_request(r#"User(id: "123").posts(type: "image").get()"#).unwrap();
//! assert_eq!(ast.model, "User");
//! assert_eq!(ast.filters[0].value, Literal::from("123"));
//! assert_eq!(ast.chain.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod location;
pub mod options;
pub mod parser;
pub mod pretty_printer;

// Re-export key types for convenience
pub use ast::*;
pub use error::{LexError, LexErrorKind, OttError, OttResult, SyntaxError};
pub use lexer::{tokenize, Dialect, Keyword, Lexer, Token, TokenKind};
pub use literal::{Literal, LiteralKind};
pub use location::{Location, Position};
pub use options::{ConfigError, ParseOptions};
pub use parser::*;
pub use pretty_printer::*;
