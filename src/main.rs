use std::{
    env, fs,
    io::{self, Read, Write},
};

use log::debug;
use pp::{Config, Printer};
use serde_json::Value;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let mut args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return;
    }
    let dot = args.iter().any(|arg| arg == "--dot");
    if dot {
        args.retain(|arg| arg != "--dot");
    }

    let Some(config_path) = extract_value(&mut args, "--config") else {
        exit_usage();
    };
    let Some(indent) = extract_value(&mut args, "--indent") else {
        exit_usage();
    };

    let mut config = match config_path {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(indent) = indent {
        config.indent = indent;
    }

    if args.len() > 2 {
        exit_usage();
    }
    let source = match args.get(1) {
        Some(path) if path != "-" => fs::read_to_string(path).map_err(|e| (path.clone(), e)),
        _ => read_stdin().map_err(|e| ("<stdin>".to_string(), e)),
    };
    let source = match source {
        Ok(source) => source,
        Err((path, err)) => {
            eprintln!("Error reading {}: {}", path, err);
            std::process::exit(1);
        }
    };

    let document: Value = match serde_json::from_str(&source) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("Error: invalid JSON: {}", err);
            std::process::exit(1);
        }
    };
    debug!("rendering document with config {:?}", config);

    let printer = Printer::with_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if dot {
        printer.fdot(&mut out, &document)
    } else {
        printer.fprint(&mut out, &document)
    };
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    if let Err(err) = writeln!(out) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn print_help() {
    println!(
        "\
pp: pretty-print a JSON document

Usage:
  pp [<file.json>]
  pp --dot [<file.json>] | dot -Tsvg > graph.svg

Reads standard input when no file (or `-`) is given.

Flags:
  --dot              Render a Graphviz digraph instead of indented text
  --indent <s>       Indent unit for text output (default: tab)
  --config <file>    Load settings from a JSON file, e.g. {{\"indent\": \"  \"}}
  -h, --help         Show this help message

Set RUST_LOG=debug to trace rendering."
    );
}

fn exit_usage() -> ! {
    eprintln!("Usage: pp [--dot] [--indent <s>] [--config <file.json>] [<file.json>]");
    std::process::exit(2);
}

/// Removes `flag <value>` from `args`. `None` means the flag had no value.
fn extract_value(args: &mut Vec<String>, flag: &str) -> Option<Option<String>> {
    let mut value = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            if i + 1 >= args.len() {
                eprintln!("Error: {} expects a value.", flag);
                return None;
            }
            value = Some(args.remove(i + 1));
            args.remove(i);
            continue;
        }
        i += 1;
    }
    Some(value)
}

fn load_config(path: &str) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {}", path, e))
}

fn read_stdin() -> io::Result<String> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}
