//! stache CLI
//!
//! Tokenize, validate and explain Mustache templates.

use stachec::commands::{check_file, explain_error, lex_file, list_error_codes};
use stachec::{init_tracing, parse_options, CliOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => lex_file(&options_or_exit("lex", &args[2..])),
        "check" => check_file(&options_or_exit("check", &args[2..])),
        "--explain" | "explain" => {
            if args.len() < 3 {
                list_error_codes();
                return;
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stache {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn options_or_exit(command: &str, args: &[String]) -> CliOptions {
    match parse_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: stache {command} <file> [--delimiters=OPEN,CLOSE] [--name=ID]");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("stache: Mustache template tokenizer");
    println!();
    println!("Usage: stache <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and print one token per line");
    println!("  check <file>         Validate a template and print its token count");
    println!("  explain [code]       Explain an error code (e.g., E0001), or list all codes");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options (lex, check):");
    println!("  --delimiters=O,C     Start with O and C as tag markers (default: {{{{,}}}})");
    println!("  --name=ID            Template name used in errors (default: the file path)");
    println!();
    println!("Use '-' as the file to read standard input.");
    println!("Set RUST_LOG=stache_lexer=trace to log every token; add STACHE_LOG_TREE=1 for a tree view.");
}
