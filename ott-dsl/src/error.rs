//! Error types shared by the lexer and the dialect parsers.

use crate::location::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// LEX ERRORS
// ============================================================================

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexErrorKind {
    UnterminatedString,
    UnterminatedComment,
    UnexpectedCharacter(char),
    InvalidNumber(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character {:?}", c),
            LexErrorKind::InvalidNumber(text) => write!(f, "invalid number literal `{}`", text),
        }
    }
}

/// Scanner failure at a specific position.
///
/// For unterminated literals and comments the position is where the literal
/// opened, not where input ran out.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

// ============================================================================
// SYNTAX ERRORS
// ============================================================================

/// Grammar failure: the parser wanted `expected` but saw `found`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("expected {expected}, found {found} at {position}")]
pub struct SyntaxError {
    pub expected: String,
    pub found: String,
    pub position: Position,
}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Any failure a parse entry point can report.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum OttError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("nesting too deep: more than {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },

    #[error("input too large: {actual} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { limit: usize, actual: usize },
}

pub type OttResult<T> = Result<T, OttError>;

impl OttError {
    /// Where the error was detected, when it has a source position.
    pub fn position(&self) -> Option<Position> {
        match self {
            OttError::Lex(e) => Some(e.position),
            OttError::Syntax(e) => Some(e.position),
            OttError::NestingTooDeep { position, .. } => Some(*position),
            OttError::InputTooLarge { .. } => None,
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, OttError::Lex(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, OttError::Syntax(_))
    }

    /// Render the error with the offending source line and a caret under
    /// the reported column.
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        let Some(position) = self.position() else {
            return out;
        };
        let Some(line) = source.lines().nth(position.line.saturating_sub(1)) else {
            return out;
        };

        let gutter = position.line.to_string();
        let pad = " ".repeat(gutter.len());
        let caret_pad: String = line
            .chars()
            .take(position.column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        out.push('\n');
        out.push_str(&format!("{} |\n", pad));
        out.push_str(&format!("{} | {}\n", gutter, line));
        out.push_str(&format!("{} | {}^", pad, caret_pad));
        out
    }
}
