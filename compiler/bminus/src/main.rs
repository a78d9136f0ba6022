//! B-Minus CLI

use bminus::commands::{eval_source, parse_file, run_file};
use bminus::RunOptions;
use bminus_diagnostic::emitter::ColorMode;

fn main() {
    bminus::init_tracing();
    bminus::install_panic_hook();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let Some((options, positional)) = parse_options(&args[2..]) else {
        std::process::exit(1);
    };

    let ok = match command.as_str() {
        "run" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: bminus run <file> [--color=auto|always|never]");
                std::process::exit(1);
            };
            run_file(path, &options)
        }
        "parse" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: bminus parse <file>");
                std::process::exit(1);
            };
            parse_file(path, &options)
        }
        "eval" => {
            if positional.is_empty() {
                eprintln!("Usage: bminus eval <source>");
                std::process::exit(1);
            }
            eval_source(&positional.join(" "), &options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("B-Minus {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

/// Split flags from positional arguments. Returns `None` after printing an
/// error for an invalid flag.
fn parse_options(args: &[String]) -> Option<(RunOptions, Vec<&str>)> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid color mode '{value}' (expected auto, always or never)");
                return None;
            };
            options.color = mode;
        } else if arg.starts_with("--") {
            eprintln!("error: unknown option '{arg}'");
            return None;
        } else {
            positional.push(arg.as_str());
        }
    }

    Some((options, positional))
}

fn print_usage() {
    println!("B-Minus");
    println!();
    println!("Usage: bminus <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>        Evaluate a program and print each result");
    println!("  parse <file>      Parse a program and dump its syntax tree");
    println!("  eval <source>     Evaluate source given on the command line");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>    Diagnostic colors: auto, always, never");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=bminus_eval=trace) to trace evaluation.");
}
