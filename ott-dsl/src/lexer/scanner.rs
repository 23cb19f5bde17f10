//! Lexer implementation

use super::token::*;
use crate::error::{LexError, LexErrorKind};
use crate::location::Position;
use std::iter::Peekable;
use std::str::CharIndices;

// ============================================================================
// LEXER IMPLEMENTATION
// ============================================================================

/// Lexer for the OTT languages.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    dialect: Dialect,
    position: Position,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source and dialect.
    pub fn new(source: &'a str, dialect: Dialect) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            dialect,
            position: Position::start(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    ///
    /// The result always ends with exactly one `Eof` token. Lexing stops at
    /// the first error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Get the next token from the source.
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        let start = self.position;

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => match c {
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                ',' => self.single(TokenKind::Comma),
                ':' => self.single(TokenKind::Colon),
                ';' => self.single(TokenKind::Semicolon),
                '.' => self.single(TokenKind::Dot),
                '=' => self.single(TokenKind::Eq),
                '|' => self.single(TokenKind::Pipe),
                '?' => self.single(TokenKind::Question),
                '<' => self.single(TokenKind::Lt),
                '>' => self.single(TokenKind::Gt),

                '"' => self.scan_string(start)?,

                c if c == '-' || c.is_ascii_digit() => self.scan_number(start)?,

                c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

                c => {
                    return Err(LexError {
                        kind: LexErrorKind::UnexpectedCharacter(c),
                        position: start,
                    })
                }
            },
        };

        Ok(Token {
            kind,
            start,
            end: self.position,
        })
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Scan an identifier, keyword or word literal (`true`, `false`, `null`).
    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.position.offset;

        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let ident = &self.source[start..self.position.offset];

        match ident {
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            "null" => TokenKind::Null,
            _ => match self.dialect.keyword(ident) {
                Some(keyword) => TokenKind::Keyword(keyword),
                None => TokenKind::Identifier(ident.to_string()),
            },
        }
    }

    /// Scan a double-quoted string literal with escape sequences.
    fn scan_string(&mut self, start: Position) -> Result<TokenKind, LexError> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek_char() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        position: start,
                    })
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some('n') => {
                            self.advance();
                            value.push('\n');
                        }
                        Some('t') => {
                            self.advance();
                            value.push('\t');
                        }
                        Some('r') => {
                            self.advance();
                            value.push('\r');
                        }
                        Some('\\') => {
                            self.advance();
                            value.push('\\');
                        }
                        Some('"') => {
                            self.advance();
                            value.push('"');
                        }
                        _ => value.push('\\'),
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        Ok(TokenKind::String(value))
    }

    /// Scan a number: `-? digits ('.' digits)?`.
    ///
    /// A `.` only belongs to the number when a digit follows it, so
    /// `User(id: 1).posts` still lexes the dot as a delimiter.
    fn scan_number(&mut self, start: Position) -> Result<TokenKind, LexError> {
        if self.peek_char() == Some('-') {
            self.advance();
        }

        if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.invalid_number(start));
        }
        self.eat_digits();

        if self.peek_char() == Some('.')
            && self.peek_next_char().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.eat_digits();
        }

        // `12abc` is not a number followed by an identifier.
        if self
            .peek_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            while self
                .peek_char()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                self.advance();
            }
            return Err(self.invalid_number(start));
        }

        let text = &self.source[start.offset..self.position.offset];
        // Overflow parses as `inf`, which has no OTT spelling.
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(TokenKind::Number(value)),
            _ => Err(self.invalid_number(start)),
        }
    }

    fn eat_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn invalid_number(&self, start: Position) -> LexError {
        LexError {
            kind: LexErrorKind::InvalidNumber(
                self.source[start.offset..self.position.offset].to_string(),
            ),
            position: start,
        }
    }

    /// Skip whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek_char() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    let next = self.peek_next_char();
                    if next == Some('/') {
                        // Line comment
                        while let Some(c) = self.peek_char() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    } else if next == Some('*') {
                        // Block comment
                        let opened = self.position;
                        self.advance(); // /
                        self.advance(); // *
                        loop {
                            match self.peek_char() {
                                None => {
                                    return Err(LexError {
                                        kind: LexErrorKind::UnterminatedComment,
                                        position: opened,
                                    })
                                }
                                Some('*') if self.peek_next_char() == Some('/') => {
                                    self.advance();
                                    self.advance();
                                    break;
                                }
                                _ => {
                                    self.advance();
                                }
                            }
                        }
                    } else {
                        // A lone '/' is not part of any dialect.
                        return Ok(());
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next_char(&self) -> Option<char> {
        let mut iter = self.source[self.position.offset..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.position.advance(c);
        Some(c)
    }
}

/// Tokenize `source` with the keyword set of `dialect`.
pub fn tokenize(source: &str, dialect: Dialect) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, dialect).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str, dialect: Dialect) -> Vec<TokenKind> {
        tokenize(source, dialect)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lexer_schema_keywords() {
        let tokens = kinds("Model extends type model", Dialect::Schema);
        assert_eq!(tokens[0], TokenKind::Keyword(Keyword::Model));
        assert_eq!(tokens[1], TokenKind::Keyword(Keyword::Extends));
        assert_eq!(tokens[2], TokenKind::Keyword(Keyword::Type));
        assert_eq!(tokens[3], TokenKind::Identifier("model".to_string()));
        assert_eq!(tokens[4], TokenKind::Eof);
    }

    #[test]
    fn test_lexer_request_has_no_keywords() {
        let tokens = kinds("type Model", Dialect::Request);
        assert_eq!(tokens[0], TokenKind::Identifier("type".to_string()));
        assert_eq!(tokens[1], TokenKind::Identifier("Model".to_string()));
    }

    #[test]
    fn test_lexer_word_literals() {
        let tokens = kinds("true false null", Dialect::Response);
        assert_eq!(
            tokens,
            vec![
                TokenKind::Boolean(true),
                TokenKind::Boolean(false),
                TokenKind::Null,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_delimiters() {
        let tokens = kinds("{ } ( ) , : ; . = | ? < >", Dialect::Schema);
        assert_eq!(
            tokens,
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Eq,
                TokenKind::Pipe,
                TokenKind::Question,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_string_literals() {
        let tokens = kinds(r#""hello" "world\ntest" "escaped\"quote" "\q""#, Dialect::Request);
        assert_eq!(tokens[0], TokenKind::String("hello".to_string()));
        assert_eq!(tokens[1], TokenKind::String("world\ntest".to_string()));
        assert_eq!(tokens[2], TokenKind::String("escaped\"quote".to_string()));
        assert_eq!(tokens[3], TokenKind::String("\\q".to_string()));
    }

    #[test]
    fn test_lexer_numbers() {
        let tokens = kinds("42 3.14 -10 0.5", Dialect::Request);
        assert_eq!(tokens[0], TokenKind::Number(42.0));
        assert_eq!(tokens[1], TokenKind::Number(314.0 / 100.0));
        assert_eq!(tokens[2], TokenKind::Number(-10.0));
        assert_eq!(tokens[3], TokenKind::Number(0.5));
    }

    #[test]
    fn test_lexer_number_then_dot() {
        let tokens = kinds("1.posts", Dialect::Request);
        assert_eq!(tokens[0], TokenKind::Number(1.0));
        assert_eq!(tokens[1], TokenKind::Dot);
        assert_eq!(tokens[2], TokenKind::Identifier("posts".to_string()));
    }

    #[test]
    fn test_lexer_invalid_numbers() {
        let err = tokenize("x - y", Dialect::Request).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidNumber("-".to_string()));
        assert_eq!(err.position, Position::new(2, 1, 3));

        let err = tokenize("12abc", Dialect::Request).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidNumber("12abc".to_string()));
    }

    #[test]
    fn test_lexer_comments() {
        let tokens = kinds("Model // line comment\nextends /* block\n comment */ type", Dialect::Schema);
        assert_eq!(tokens[0], TokenKind::Keyword(Keyword::Model));
        assert_eq!(tokens[1], TokenKind::Keyword(Keyword::Extends));
        assert_eq!(tokens[2], TokenKind::Keyword(Keyword::Type));
    }

    #[test]
    fn test_lexer_positions() {
        let tokens = tokenize("User {\n  id: 1\n}", Dialect::Response).unwrap();
        assert_eq!(tokens[0].start, Position::new(0, 1, 1));
        assert_eq!(tokens[0].end, Position::new(4, 1, 5));
        // `id`
        assert_eq!(tokens[2].start, Position::new(9, 2, 3));
        assert_eq!(tokens[2].end, Position::new(11, 2, 5));
        // `}`
        assert_eq!(tokens[5].start, Position::new(15, 3, 1));
        assert_eq!(tokens[6].kind, TokenKind::Eof);
        assert_eq!(tokens[6].start, Position::new(16, 3, 2));
    }

    #[test]
    fn test_lexer_error_on_invalid_char() {
        let err = tokenize("Model @ User", Dialect::Schema).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.position, Position::new(6, 1, 7));
    }

    #[test]
    fn test_lexer_unterminated_string_reports_opening() {
        let err = tokenize("User(id: \"123)\n.get()", Dialect::Request).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position, Position::new(9, 1, 10));
    }

    #[test]
    fn test_lexer_rejects_overflowing_number() {
        let digits = "9".repeat(400);

        let err = tokenize(&format!("a: n = {}", digits), Dialect::Schema).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidNumber(digits.clone()));
        assert_eq!(err.position, Position::new(7, 1, 8));

        let negative = format!("-{}", digits);
        let err = tokenize(&negative, Dialect::Request).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidNumber(negative));
        assert_eq!(err.position, Position::new(0, 1, 1));
    }

    #[test]
    fn test_lexer_unterminated_comment() {
        let err = tokenize("a /* never closed", Dialect::Response).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!(err.position, Position::new(2, 1, 3));
    }

    #[test]
    fn test_lexer_empty_input() {
        let tokens = tokenize("  \n ", Dialect::Schema).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].start, Position::new(4, 2, 2));
    }
}
