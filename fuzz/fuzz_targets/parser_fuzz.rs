//! Fuzz test for the OTT parsers
//!
//! Every entry point must return `Ok` or a positioned error for any input.
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use ott_dsl::{
    parse_request, parse_response, parse_schema, pretty_print_schema, OttError,
};

fn check(input: &str, err: OttError) {
    if let Some(position) = err.position() {
        assert!(position.offset <= input.len(), "error offset past end of input");
        assert!(position.line >= 1 && position.column >= 1);
    }
    // Rendering must cope with any position the parser reports.
    let _ = err.render(input);
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    match parse_schema(input) {
        Ok(doc) => {
            let printed = pretty_print_schema(&doc);
            assert_eq!(parse_schema(&printed).ok(), Some(doc), "schema reprint must round-trip");
        }
        Err(err) => check(input, err),
    }
    if let Err(err) = parse_request(input) {
        check(input, err);
    }
    if let Err(err) = parse_response(input) {
        check(input, err);
    }
});
