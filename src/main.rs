//! Command-line entry point: runs a script file, or drops into an
//! interactive REPL when no path is given.

use std::fs;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use eval::Environment;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

/// Cantte: lexer, parser and tree-walking evaluator.
#[derive(ClapParser, Debug)]
#[command(name = "cantte", version, about)]
struct Cli {
    /// Script to run. Omit to start the REPL.
    script: Option<String>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.script {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_target(false)
        .init();
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("cantte: could not read '{path}': {error}");
            return ExitCode::FAILURE;
        }
    };

    let env = Environment::new();
    match cantte::run(&source, &env) {
        Ok(value) => {
            println!("{}", value.inspect());
            if value.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
            ExitCode::FAILURE
        }
    }
}

const EXIT_COMMAND: &str = "exit()";

fn run_repl() -> ExitCode {
    println!("Cantte REPL. Type 'exit()' to quit.");

    let env = Environment::new();
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("cantte: could not start line editor: {error}");
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                if line == EXIT_COMMAND {
                    break;
                }

                match cantte::run(line, &env) {
                    Ok(value) => println!("{}", value.inspect()),
                    Err(errors) => {
                        for error in errors {
                            println!("{error}");
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("cantte: readline error: {error}");
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
