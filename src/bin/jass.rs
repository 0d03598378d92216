//! Command-line interface for jass
//! This binary parses JASS source and prints the resulting AST or token stream.
//!
//! Usage:
//!   jass parse `<path>` [--mode `<mode>`] [--tokens] [--format `<format>`]
//!              [--max-depth `<n>`] [--max-chain `<n>`]
//!   jass tokens `<path>`
//!
//! A path of `-` reads standard input.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fmt::Debug;
use std::io::Read;

use jass::jass::ast::AstNode;
use jass::jass::config::ParserConfig;
use jass::jass::error::ParseResult;
use jass::jass::lexer::{self, Token};
use jass::jass::parser::{Grammar, GrammarInput};
use serde::Serialize;
use tracing::Level;

fn main() {
    let matches = Command::new("jass")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing JASS scripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log parser activity to stderr (-v debug, -vv trace)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print its AST")
                .arg(
                    Arg::new("path")
                        .help("Path to the JASS file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .help("What the input holds")
                        .value_parser(["expression", "action", "statement", "function", "unit"])
                        .default_value("unit"),
                )
                .arg(
                    Arg::new("tokens")
                        .long("tokens")
                        .action(ArgAction::SetTrue)
                        .help("Lex first and parse the token stream"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["debug", "json", "summary"])
                        .default_value("debug"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .help("Deepest allowed nesting of groups and blocks")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("max-chain")
                        .long("max-chain")
                        .help("Longest allowed run of operators in one expression")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the JASS file, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("tokens", tokens_matches)) => {
            let path = required(tokens_matches, "path");
            handle_tokens_command(path);
        }
        _ => unreachable!(),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(&format!("missing argument '{}'", name)))
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| fail(&format!("reading {}: {}", path, e)))
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let source = read_source(required(matches, "path"));
    let mode = required(matches, "mode");
    let format = required(matches, "format");
    let mut config = ParserConfig::default();
    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        config = config.with_max_nesting_depth(*depth);
    }
    if let Some(length) = matches.get_one::<usize>("max-chain") {
        config = config.with_max_operator_chain(*length);
    }

    let output = if matches.get_flag("tokens") {
        let tokens = lexer::tokenize(&source).unwrap_or_else(|e| fail(&e.to_string()));
        render(&Grammar::<Token>::with_config(config), mode, &tokens, format)
    } else {
        let chars: Vec<char> = source.chars().collect();
        render(&Grammar::<char>::with_config(config), mode, &chars, format)
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => fail(&e.to_string()),
    }
}

fn render<I: GrammarInput>(
    grammar: &Grammar<I>,
    mode: &str,
    input: &[I],
    format: &str,
) -> ParseResult<String> {
    match mode {
        "expression" => grammar.parse_expression(input).map(|ast| format_ast(&ast, format)),
        "action" => grammar
            .parse_custom_script_action(input)
            .map(|ast| format_ast(&ast, format)),
        "statement" => grammar.parse_statement(input).map(|ast| format_ast(&ast, format)),
        "function" => grammar.parse_function(input).map(|ast| format_ast(&ast, format)),
        "unit" => grammar
            .parse_compilation_unit(input)
            .map(|ast| format_ast(&ast, format)),
        other => fail(&format!("unknown mode '{}'", other)),
    }
}

fn format_ast<T: AstNode + Debug + Serialize>(ast: &T, format: &str) -> String {
    match format {
        "json" => serde_json::to_string_pretty(ast)
            .unwrap_or_else(|e| fail(&format!("serializing AST: {}", e))),
        "summary" => format!("{}: {}", ast.node_type(), ast.display_label()),
        _ => format!("{:#?}", ast),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let tokens = lexer::tokenize_with_spans(&source).unwrap_or_else(|e| fail(&e.to_string()));
    for (token, span) in tokens {
        println!("{:>5}..{:<5} {:?}", span.start, span.end, token);
    }
}
