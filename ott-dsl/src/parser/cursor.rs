//! Token cursor shared by the dialect parsers.

use crate::error::{OttError, OttResult, SyntaxError};
use crate::lexer::*;
use crate::literal::Literal;
use crate::location::{Location, Position};
use crate::options::ParseOptions;

/// Read position over one token stream, scoped to a single parse call.
pub(crate) struct Cursor<'o> {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    options: &'o ParseOptions,
}

impl<'o> Cursor<'o> {
    /// `tokens` must end with `Eof`, as produced by the lexer.
    pub(crate) fn new(tokens: Vec<Token>, options: &'o ParseOptions) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Eof)
        ));
        Self {
            tokens,
            pos: 0,
            depth: 0,
            options,
        }
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().kind == TokenKind::Keyword(keyword)
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> OttResult<()> {
        if self.eat(&kind) {
            Ok(())
        } else {
            Err(self.error(&kind.describe()))
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> OttResult<()> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!("'{}'", keyword.as_str())))
        }
    }

    pub(crate) fn expect_identifier(&mut self, what: &str) -> OttResult<String> {
        match &self.current().kind {
            TokenKind::Identifier(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.error(what)),
        }
    }

    /// Expect an identifier or a keyword used in name position
    /// (`extends Model`, an attribute called `type`).
    pub(crate) fn expect_name(&mut self, what: &str) -> OttResult<String> {
        let name = match &self.current().kind {
            TokenKind::Identifier(s) => s.clone(),
            TokenKind::Keyword(k) => k.as_str().to_string(),
            _ => return Err(self.error(what)),
        };
        self.advance();
        Ok(name)
    }

    /// Parse a literal. With `bare_words`, an identifier is read as a string
    /// (`gender: Gender = male`).
    pub(crate) fn parse_literal(&mut self, bare_words: bool) -> OttResult<Literal> {
        let literal = match &self.current().kind {
            TokenKind::String(s) => Literal::String(s.clone()),
            TokenKind::Number(n) => Literal::Number(*n),
            TokenKind::Boolean(b) => Literal::Boolean(*b),
            TokenKind::Null => Literal::Null,
            TokenKind::Identifier(s) if bare_words => Literal::String(s.clone()),
            _ => return Err(self.error("literal (string, number, boolean or null)")),
        };
        self.advance();
        Ok(literal)
    }

    /// Consume a `;` or `,` separator if present.
    pub(crate) fn optional_terminator(&mut self) {
        if !self.eat(&TokenKind::Semicolon) {
            self.eat(&TokenKind::Comma);
        }
    }

    pub(crate) fn expect_end(&self) -> OttResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error("end of input"))
        }
    }

    /// Enter one level of recursion, failing past `max_depth`.
    pub(crate) fn descend(&mut self) -> OttResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(OttError::NestingTooDeep {
                limit: self.options.max_depth,
                position: self.current().start,
            });
        }
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Start of the current token; used to open a node's location.
    pub(crate) fn start(&self) -> Position {
        self.current().start
    }

    /// End of the last consumed token.
    pub(crate) fn previous_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].end,
            None => self.current().start,
        }
    }

    /// Location from `start` to the end of the last consumed token.
    pub(crate) fn location_from(&self, start: Position) -> Location {
        Location::new(self.options.source_name.clone(), start, self.previous_end())
    }

    pub(crate) fn error(&self, expected: &str) -> OttError {
        self.error_at(self.current(), expected)
    }

    pub(crate) fn error_at(&self, token: &Token, expected: &str) -> OttError {
        OttError::Syntax(SyntaxError {
            expected: expected.to_string(),
            found: token.kind.describe(),
            position: token.start,
        })
    }
}
