//! Fuzz test for the OTT lexer
//!
//! Feeds arbitrary UTF-8 through every dialect's keyword set to find:
//! - Panics or crashes
//! - Infinite loops
//! - Tokens with positions outside the input
//!
//! Run with: cargo +nightly fuzz run lexer_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use ott_dsl::{Dialect, Lexer, TokenKind};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    for dialect in [Dialect::Schema, Dialect::Request, Dialect::Response] {
        match Lexer::new(input, dialect).tokenize() {
            Ok(tokens) => {
                assert_eq!(
                    tokens.last().map(|t| &t.kind),
                    Some(&TokenKind::Eof),
                    "token stream must end with Eof"
                );
                for token in &tokens {
                    assert!(token.start.offset <= token.end.offset);
                    assert!(token.end.offset <= input.len());
                    assert!(token.start.line >= 1 && token.start.column >= 1);
                }
            }
            Err(err) => {
                assert!(err.position.offset <= input.len());
                assert!(err.position.line >= 1 && err.position.column >= 1);
            }
        }
    }
});
