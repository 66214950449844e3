use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tylam", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a tylam program
    Run {
        /// Path to the file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Give up after this many milliseconds
        #[arg(long, value_name = "MS")]
        timeout: Option<u64>,
        /// Print the value without its type
        #[arg(long, default_value_t = false)]
        no_type: bool,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Check a tylam program and print its type
    Check {
        /// Path to the file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Pretty-print the syntax tree of a tylam program
    Parse {
        /// Path to the file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Start a REPL
    Repl {
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            | Commands::Run { verbose, .. }
            | Commands::Check { verbose, .. }
            | Commands::Repl { verbose } => *verbose,
            | Commands::Parse { .. } => false,
        }
    }
}
