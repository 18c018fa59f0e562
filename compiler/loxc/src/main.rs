//! Lox CLI.

use std::io;

use loxc::commands::{tokenize_file, TokenizeOptions, EXIT_FAILURE};

fn main() {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_FAILURE);
    }

    let command = &args[1];

    match command.as_str() {
        "tokenize" => {
            let mut options = TokenizeOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--no-trace" {
                    options.trace = false;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: loxc tokenize <file> [--no-trace]");
                    std::process::exit(EXIT_FAILURE);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: loxc tokenize <file> [--no-trace]");
                std::process::exit(EXIT_FAILURE);
            };

            let result = tokenize_file(path, options, &mut io::stdout().lock(), &mut io::stderr());
            match result {
                Ok(code) => std::process::exit(code),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(EXIT_FAILURE);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("loxc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn print_usage() {
    println!("Lox scanner");
    println!();
    println!("Usage: loxc <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokenize <file>     Print the token stream and lexical errors");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Tokenize options:");
    println!("  --no-trace          Only print diagnostics, not tokens");
    println!();
    println!("Exit codes:");
    println!("  0   no lexical errors");
    println!("  65  one or more lexical errors");
    println!("  1   usage error or unreadable file");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lox_lexer=debug) for scanner logs on stderr.");
}
