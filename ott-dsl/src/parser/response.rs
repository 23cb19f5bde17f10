//! Response dialect parser.
//!
//! ```text
//! User {
//!     id: "123"
//!     active: true
//! }
//! ```
//!
//! The least settled of the three grammars: only flat literal fields.

use super::cursor::Cursor;
use crate::ast::*;
use crate::error::OttResult;
use crate::lexer::*;
use crate::options::ParseOptions;

pub(crate) struct ResponseParser<'o> {
    cursor: Cursor<'o>,
}

impl<'o> ResponseParser<'o> {
    pub(crate) fn new(tokens: Vec<Token>, options: &'o ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(tokens, options),
        }
    }

    pub(crate) fn parse_document(&mut self) -> OttResult<ResponseAst> {
        let start = self.cursor.start();
        let type_name = self.cursor.expect_identifier("response type name")?;
        self.cursor.expect(TokenKind::LBrace)?;

        let mut fields = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.error("'}'"));
            }
            fields.push(self.parse_field()?);
            self.cursor.optional_terminator();
        }

        self.cursor.expect(TokenKind::RBrace)?;
        self.cursor.expect_end()?;

        Ok(ResponseAst {
            type_name,
            fields,
            location: self.cursor.location_from(start),
        })
    }

    fn parse_field(&mut self) -> OttResult<ResponseField> {
        let start = self.cursor.start();
        let key = self.cursor.expect_identifier("field name")?;
        self.cursor.expect(TokenKind::Colon)?;
        let value = self.cursor.parse_literal(false)?;

        Ok(ResponseField {
            key,
            value,
            location: self.cursor.location_from(start),
        })
    }
}
