use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use lmctl::cli::{Cli, exit_code};
use lmctl::commands::build_grammar;
use lmctl::interpreter::{CommandResult, Interpreter};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match cli.load_config(&cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("lmctl: config error: {e}");
            return ExitCode::from(2);
        }
    };

    let grammar = match build_grammar() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("lmctl: {e}");
            return ExitCode::from(2);
        }
    };

    let command = cli.command_line();
    debug!("interpreting '{command}'");

    let mut interpreter = Interpreter::new(&grammar, config.connector());
    let result = interpreter.interpret_command(&command);
    if result != CommandResult::Success {
        eprintln!("Interpreter error: {}", interpreter.last_error());
    }

    ExitCode::from(exit_code(result))
}
