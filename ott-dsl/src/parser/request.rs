//! Request dialect parser.
//!
//! ```text
//! User(id: "123").posts(type: "image", status: "published").get()
//! ```

use super::cursor::Cursor;
use crate::ast::*;
use crate::error::OttResult;
use crate::lexer::*;
use crate::options::ParseOptions;

pub(crate) struct RequestParser<'o> {
    cursor: Cursor<'o>,
}

impl<'o> RequestParser<'o> {
    pub(crate) fn new(tokens: Vec<Token>, options: &'o ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(tokens, options),
        }
    }

    pub(crate) fn parse_document(&mut self) -> OttResult<RequestAst> {
        let start = self.cursor.start();
        let model = self.cursor.expect_identifier("model name")?;

        let filters = if self.cursor.check(&TokenKind::LParen) {
            self.parse_filter_args()?
        } else {
            Vec::new()
        };

        let mut chain = Vec::new();
        while self.cursor.check(&TokenKind::Dot) {
            let step = self.parse_chain_step()?;
            tracing::trace!(relation = %step.relation, filters = step.filters.len(), "parsed chain step");
            chain.push(step);
        }

        self.cursor.expect_end()?;

        Ok(RequestAst {
            model,
            filters,
            chain,
            location: self.cursor.location_from(start),
        })
    }

    /// `.relation(args)?`
    fn parse_chain_step(&mut self) -> OttResult<RequestChain> {
        let start = self.cursor.start();
        self.cursor.expect(TokenKind::Dot)?;
        let relation = self.cursor.expect_identifier("relation name")?;

        let filters = if self.cursor.check(&TokenKind::LParen) {
            self.parse_filter_args()?
        } else {
            Vec::new()
        };

        Ok(RequestChain {
            relation,
            filters,
            method: None,
            location: self.cursor.location_from(start),
        })
    }

    /// `( key: literal, ... )`, allowing a trailing comma.
    fn parse_filter_args(&mut self) -> OttResult<Vec<RequestFilter>> {
        self.cursor.expect(TokenKind::LParen)?;

        let mut filters = Vec::new();
        while !self.cursor.check(&TokenKind::RParen) {
            filters.push(self.parse_filter()?);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }

        self.cursor.expect(TokenKind::RParen)?;
        Ok(filters)
    }

    fn parse_filter(&mut self) -> OttResult<RequestFilter> {
        let start = self.cursor.start();
        let key = self.cursor.expect_identifier("filter name")?;
        self.cursor.expect(TokenKind::Colon)?;
        let value = self.cursor.parse_literal(false)?;

        Ok(RequestFilter {
            key,
            value,
            location: self.cursor.location_from(start),
        })
    }
}
