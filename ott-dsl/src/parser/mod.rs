//! Parser module for the OTT languages
//!
//! Each entry point lexes the whole source with its dialect's keyword set,
//! then runs a recursive-descent parser scoped to that single call.

mod cursor;
mod request;
mod response;
mod schema;

use crate::ast::*;
use crate::error::{OttError, OttResult};
use crate::lexer::*;
use crate::options::ParseOptions;
use request::RequestParser;
use response::ResponseParser;
use schema::SchemaParser;

// ============================================================================
// CONVENIENCE FUNCTIONS
// ============================================================================

/// Parse a schema document with default options.
///
/// Input longer than [`DEFAULT_MAX_INPUT_BYTES`](crate::options::DEFAULT_MAX_INPUT_BYTES) is rejected with
/// `OttError::InputTooLarge` before lexing; pass
/// `ParseOptions::unlimited()` to the `_with` variant to lift the cap.
pub fn parse_schema(source: &str) -> OttResult<SchemaDocument> {
    parse_schema_with(source, &ParseOptions::default())
}

pub fn parse_schema_with(source: &str, options: &ParseOptions) -> OttResult<SchemaDocument> {
    let tokens = lex(source, Dialect::Schema, options)?;
    let result = SchemaParser::new(tokens, options).parse_document();
    log_outcome(Dialect::Schema, options, &result, |doc| doc.len());
    result
}

/// Parse a request chain with default options.
///
/// Input longer than [`DEFAULT_MAX_INPUT_BYTES`](crate::options::DEFAULT_MAX_INPUT_BYTES) is rejected with
/// `OttError::InputTooLarge` before lexing; pass
/// `ParseOptions::unlimited()` to the `_with` variant to lift the cap.
pub fn parse_request(source: &str) -> OttResult<RequestAst> {
    parse_request_with(source, &ParseOptions::default())
}

pub fn parse_request_with(source: &str, options: &ParseOptions) -> OttResult<RequestAst> {
    let tokens = lex(source, Dialect::Request, options)?;
    let result = RequestParser::new(tokens, options).parse_document();
    log_outcome(Dialect::Request, options, &result, |ast| ast.chain.len());
    result
}

/// Parse a response record with default options.
///
/// Input longer than [`DEFAULT_MAX_INPUT_BYTES`](crate::options::DEFAULT_MAX_INPUT_BYTES) is rejected with
/// `OttError::InputTooLarge` before lexing; pass
/// `ParseOptions::unlimited()` to the `_with` variant to lift the cap.
///
/// The response grammar is the least stable of the three dialects and may
/// grow nested records later.
pub fn parse_response(source: &str) -> OttResult<ResponseAst> {
    parse_response_with(source, &ParseOptions::default())
}

pub fn parse_response_with(source: &str, options: &ParseOptions) -> OttResult<ResponseAst> {
    let tokens = lex(source, Dialect::Response, options)?;
    let result = ResponseParser::new(tokens, options).parse_document();
    log_outcome(Dialect::Response, options, &result, |ast| ast.fields.len());
    result
}

fn lex(source: &str, dialect: Dialect, options: &ParseOptions) -> OttResult<Vec<Token>> {
    if source.len() > options.max_input_bytes {
        return Err(OttError::InputTooLarge {
            limit: options.max_input_bytes,
            actual: source.len(),
        });
    }

    let tokens = Lexer::new(source, dialect).tokenize()?;
    tracing::debug!(
        %dialect,
        source = %options.source_name,
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized"
    );
    Ok(tokens)
}

fn log_outcome<T>(
    dialect: Dialect,
    options: &ParseOptions,
    result: &OttResult<T>,
    items: impl Fn(&T) -> usize,
) {
    match result {
        Ok(ast) => tracing::debug!(
            %dialect,
            source = %options.source_name,
            items = items(ast),
            "parsed"
        ),
        Err(err) => tracing::debug!(
            %dialect,
            source = %options.source_name,
            error = %err,
            "parse failed"
        ),
    }
}
