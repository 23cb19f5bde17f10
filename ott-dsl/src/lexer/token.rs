//! Lexer token types

use crate::location::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DIALECTS AND KEYWORDS
// ============================================================================

/// The three OTT languages. Each one supplies its own reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Schema,
    Request,
    Response,
}

impl Dialect {
    /// Look up a reserved word. Matching is case-sensitive.
    pub fn keyword(self, ident: &str) -> Option<Keyword> {
        match self {
            Dialect::Schema => match ident {
                "Model" => Some(Keyword::Model),
                "extends" => Some(Keyword::Extends),
                "type" => Some(Keyword::Type),
                _ => None,
            },
            Dialect::Request | Dialect::Response => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "schema" => Some(Dialect::Schema),
            "request" => Some(Dialect::Request),
            "response" => Some(Dialect::Response),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Schema => "schema",
            Dialect::Request => "request",
            Dialect::Response => "response",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words of the schema dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Model,
    Extends,
    Type,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Model => "Model",
            Keyword::Extends => "extends",
            Keyword::Type => "type",
        }
    }
}

// ============================================================================
// TOKENS
// ============================================================================

/// Token kinds shared by all dialects.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier(String),

    // Literals
    String(String),
    Number(f64),
    Boolean(bool),
    Null,

    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Eq,
    Pipe,
    Question,
    Lt,
    Gt,

    // Special
    Eof,
}

impl TokenKind {
    /// Human-readable description used in syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(k) => format!("keyword `{}`", k.as_str()),
            TokenKind::Identifier(s) => format!("identifier `{}`", s),
            TokenKind::String(s) => format!("string {:?}", s),
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Boolean(b) => format!("boolean {}", b),
            TokenKind::Null => "null".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            punct => format!("'{}'", punct.punctuation().unwrap_or("?")),
        }
    }

    pub(crate) fn punctuation(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Eq => "=",
            TokenKind::Pipe => "|",
            TokenKind::Question => "?",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            _ => return None,
        };
        Some(text)
    }
}

/// A token with its kind and source span (`end` exclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
}

impl Token {
    /// Source text length of the token in bytes.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
