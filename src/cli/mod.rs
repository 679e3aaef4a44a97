use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{Config, ConfigError, ConfigLoader, DefaultConfigLoader};
use crate::interpreter::CommandResult;

/// Command line typed when no words are given.
pub const DEFAULT_COMMAND: &str = "help";

#[derive(Parser)]
#[command(name = "lmctl", about = "Control layers and surfaces of the compositor")]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Cli {
    /// Read this configuration file instead of the discovered ones
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command words, e.g. `layer 1000 opacity 0.5`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// The words joined into one command line.
    pub fn command_line(&self) -> String {
        if self.words.is_empty() {
            DEFAULT_COMMAND.to_string()
        } else {
            self.words.join(" ")
        }
    }

    pub fn load_config(&self, cwd: &Path) -> Result<Config, ConfigError> {
        let loader = match &self.config {
            Some(path) => DefaultConfigLoader::explicit(path.clone()),
            None => DefaultConfigLoader::new(),
        };
        loader.load(cwd)
    }
}

/// Process exit status for an interpreter result.
pub fn exit_code(result: CommandResult) -> u8 {
    match result {
        CommandResult::Success => 0,
        CommandResult::Invalid | CommandResult::Incomplete | CommandResult::Ambiguous => 1,
        CommandResult::ExecutionFailed => 2,
    }
}
