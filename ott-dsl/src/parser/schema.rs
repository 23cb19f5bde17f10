//! Schema dialect parser.
//!
//! ```text
//! Model User extends Model {
//!     id: string;
//!     nickname: string?;
//!     gender: Gender = male;
//!     get(): User;
//!     create(name: string, age: number?): User;
//! }
//!
//! type Gender = male | female
//! ```

use super::cursor::Cursor;
use crate::ast::*;
use crate::error::OttResult;
use crate::lexer::*;
use crate::options::ParseOptions;

pub(crate) struct SchemaParser<'o> {
    cursor: Cursor<'o>,
}

impl<'o> SchemaParser<'o> {
    pub(crate) fn new(tokens: Vec<Token>, options: &'o ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(tokens, options),
        }
    }

    /// Parse every top-level declaration until end of input.
    pub(crate) fn parse_document(&mut self) -> OttResult<SchemaDocument> {
        let mut definitions = Vec::new();

        while !self.cursor.is_at_end() {
            let definition = self.parse_definition()?;
            tracing::trace!(name = definition.name(), "parsed schema declaration");
            definitions.push(definition);
        }

        Ok(definitions)
    }

    fn parse_definition(&mut self) -> OttResult<SchemaDefinition> {
        match &self.cursor.current().kind {
            TokenKind::Keyword(Keyword::Model) => {
                self.parse_model().map(SchemaDefinition::ModelDefinition)
            }
            TokenKind::Keyword(Keyword::Type) => {
                self.parse_union().map(SchemaDefinition::UnionTypeDefinition)
            }
            _ => Err(self.cursor.error("declaration ('Model' or 'type')")),
        }
    }

    fn parse_model(&mut self) -> OttResult<ModelDefinition> {
        self.cursor.expect_keyword(Keyword::Model)?;
        let name = self.cursor.expect_name("model name")?;

        let extends = if self.cursor.check_keyword(Keyword::Extends) {
            self.cursor.advance();
            Some(self.cursor.expect_name("parent model name")?)
        } else {
            None
        };

        self.cursor.expect(TokenKind::LBrace)?;

        let mut attributes = Vec::new();
        let mut actions = Vec::new();

        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.error("'}'"));
            }

            let member = self.cursor.current().clone();
            let member_name = self.cursor.expect_name("attribute or action name")?;

            match self.cursor.current().kind {
                TokenKind::Colon => {
                    if !actions.is_empty() {
                        return Err(self
                            .cursor
                            .error_at(&member, "action (attributes must precede actions)"));
                    }
                    attributes.push(self.parse_attribute(member_name)?);
                }
                TokenKind::LParen => actions.push(self.parse_action(member_name)?),
                _ => return Err(self.cursor.error("':' or '('")),
            }

            self.cursor.optional_terminator();
        }

        self.cursor.expect(TokenKind::RBrace)?;

        Ok(ModelDefinition {
            name,
            extends,
            attributes,
            actions,
        })
    }

    /// `name: Type?  = literal`, name already consumed.
    fn parse_attribute(&mut self, name: String) -> OttResult<AttributeNode> {
        self.cursor.expect(TokenKind::Colon)?;
        let type_name = self.parse_type_ref()?;
        let optional = self.cursor.eat(&TokenKind::Question);

        let default = if self.cursor.eat(&TokenKind::Eq) {
            Some(self.cursor.parse_literal(true)?)
        } else {
            None
        };

        // A default always makes the attribute optional.
        let required = !optional && default.is_none();

        Ok(AttributeNode {
            name,
            type_name,
            required,
            default,
        })
    }

    /// `name(params): ReturnType`, name already consumed.
    fn parse_action(&mut self, name: String) -> OttResult<ActionNode> {
        self.cursor.expect(TokenKind::LParen)?;

        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::Colon)?;
        let return_type = self.parse_type_ref()?;

        Ok(ActionNode {
            name,
            params,
            return_type,
        })
    }

    fn parse_param(&mut self) -> OttResult<ParamNode> {
        let name = self.cursor.expect_name("parameter name")?;
        self.cursor.expect(TokenKind::Colon)?;
        let type_name = self.parse_type_ref()?;
        let optional = self.cursor.eat(&TokenKind::Question);

        Ok(ParamNode {
            name,
            type_name,
            optional,
        })
    }

    /// `type Name = a | "b" | c`
    fn parse_union(&mut self) -> OttResult<UnionTypeDefinition> {
        self.cursor.expect_keyword(Keyword::Type)?;
        let name = self.cursor.expect_name("type name")?;
        self.cursor.expect(TokenKind::Eq)?;

        let mut values = vec![self.parse_union_value()?];
        while self.cursor.eat(&TokenKind::Pipe) {
            values.push(self.parse_union_value()?);
        }
        self.cursor.eat(&TokenKind::Semicolon);

        Ok(UnionTypeDefinition { name, values })
    }

    fn parse_union_value(&mut self) -> OttResult<String> {
        let value = match &self.cursor.current().kind {
            TokenKind::String(s) | TokenKind::Identifier(s) => s.clone(),
            _ => return Err(self.cursor.error("union value (string or identifier)")),
        };
        self.cursor.advance();
        Ok(value)
    }

    /// `Name` or `Name<Arg, ...>`, returned as canonical text.
    fn parse_type_ref(&mut self) -> OttResult<String> {
        self.cursor.descend()?;
        let mut text = self.cursor.expect_name("type name")?;

        if self.cursor.eat(&TokenKind::Lt) {
            let mut args = vec![self.parse_type_ref()?];
            while self.cursor.eat(&TokenKind::Comma) {
                args.push(self.parse_type_ref()?);
            }
            self.cursor.expect(TokenKind::Gt)?;
            text = format!("{}<{}>", text, args.join(", "));
        }

        self.cursor.ascend();
        Ok(text)
    }
}
