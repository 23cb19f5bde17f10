/// OTT Parser Tracer - Shows the flow through Source → Tokens → AST → Canonical text
///
/// Usage: cargo run --features trace-bin --bin ott_trace <schema|request|response> <file> [--options <toml>] [--json]
///
/// Set `OTT_LOG=debug` (or `trace`) to see parser events on stderr.
use ott_dsl::{
    parse_request_with, parse_response_with, parse_schema_with, pretty_print_request,
    pretty_print_response, pretty_print_schema, tokenize, Dialect, OttError, ParseOptions,
};
use serde::Serialize;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

struct Args {
    dialect: Dialect,
    path: String,
    options: Option<String>,
    json: bool,
}

fn usage() -> ! {
    eprintln!("Usage: cargo run --features trace-bin --bin ott_trace <schema|request|response> <file> [--options <toml>] [--json]");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  cargo run --features trace-bin --bin ott_trace request ott-dsl/tests/fixtures/request.ott");
    process::exit(2);
}

fn parse_args() -> Args {
    let mut args = std::env::args().skip(1);
    let dialect = match args.next().as_deref().and_then(Dialect::from_name) {
        Some(dialect) => dialect,
        None => usage(),
    };
    let path = match args.next() {
        Some(path) => path,
        None => usage(),
    };

    let mut options = None;
    let mut json = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--options" => match args.next() {
                Some(file) => options = Some(file),
                None => usage(),
            },
            _ => usage(),
        }
    }

    Args {
        dialect,
        path,
        options,
        json,
    }
}

fn read(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn load_options(args: &Args) -> ParseOptions {
    let options = match &args.options {
        Some(file) => match ParseOptions::from_toml_str(&read(file)) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Invalid options in {}: {}", file, e);
                process::exit(1);
            }
        },
        None => ParseOptions::default(),
    };
    if options.source_name == ott_dsl::options::DEFAULT_SOURCE_NAME {
        options.with_source_name(args.path.clone())
    } else {
        options
    }
}

fn section(title: &str) {
    println!("{}:", title);
    println!("─────────────────────────────────────────────────────────────");
}

fn report<T: Serialize + std::fmt::Debug>(
    result: Result<T, OttError>,
    source: &str,
    json: bool,
    canonical: impl Fn(&T) -> String,
) {
    match result {
        Ok(ast) => {
            section("AST");
            if json {
                match serde_json::to_string_pretty(&ast) {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("Failed to serialize AST: {}", e),
                }
            } else {
                println!("{:#?}", ast);
            }
            println!();

            section("CANONICAL");
            println!("{}", canonical(&ast));
            println!();
            println!("Parse succeeded");
        }
        Err(err) => {
            eprintln!("{}", err.render(source));
            process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("OTT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let options = load_options(&args);
    let source = read(&args.path);

    section("TOKENS");
    match tokenize(&source, args.dialect) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:>4}:{:<3} {}", token.start.line, token.start.column, token.kind.describe());
            }
        }
        Err(e) => println!("(lexing stopped: {})", e),
    }
    println!();

    match args.dialect {
        Dialect::Schema => report(
            parse_schema_with(&source, &options),
            &source,
            args.json,
            |doc| pretty_print_schema(doc),
        ),
        Dialect::Request => report(
            parse_request_with(&source, &options),
            &source,
            args.json,
            |ast| pretty_print_request(ast),
        ),
        Dialect::Response => report(
            parse_response_with(&source, &options),
            &source,
            args.json,
            |ast| pretty_print_response(ast),
        ),
    }
}
