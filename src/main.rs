mod debug_report;

use rulegram::{check_patterns, samples, split_verbose};
use std::io::{self, IsTerminal};

const DEFAULT_GRAMMAR: &str = "arith";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.list {
        for name in samples::names() {
            println!("{name}");
        }
        return;
    }

    let grammar = match samples::by_name(&config.grammar) {
        Some(grammar) => grammar,
        None => {
            eprintln!("error: unknown grammar \"{}\" (try --list)", config.grammar);
            std::process::exit(2);
        }
    };

    let diagnostics = check_patterns(&grammar);
    let res = split_verbose(grammar);
    debug_report::print_run(&config.grammar, &res, &diagnostics, config.color);
}

struct CliConfig {
    grammar: String,
    list: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut grammar: Option<String> = None;
    let mut list = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("rulegram {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--list" => list = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--grammar" | "-g" => {
                let value = args.next().ok_or_else(|| "error: --grammar expects a value".to_string())?;
                if grammar.is_some() {
                    return Err("error: grammar provided multiple times".to_string());
                }
                grammar = Some(value);
            }
            other if !other.starts_with('-') && grammar.is_none() => {
                grammar = Some(other.to_string());
            }
            other => {
                return Err(format!("error: unrecognized argument \"{other}\" (see --help)"));
            }
        }
    }

    Ok(CliConfig { grammar: grammar.unwrap_or_else(|| DEFAULT_GRAMMAR.to_string()), list, color })
}

fn print_help() {
    println!("rulegram — split a grammar into syntactic and lexical halves");
    println!();
    println!("Usage: rulegram [OPTIONS] [GRAMMAR]");
    println!();
    println!("Options:");
    println!("  -g, --grammar <NAME>  Bundled grammar to split (default: {DEFAULT_GRAMMAR})");
    println!("      --list            List bundled grammar names and exit");
    println!("      --color           Force colored output");
    println!("      --no-color        Disable colored output");
    println!("  -h, --help            Show this help");
    println!("  -V, --version         Show version");
    println!();
    println!("Environment:");
    println!("  RULEGRAM_DEBUG_TOKENS=1  Trace token interning decisions");
}
