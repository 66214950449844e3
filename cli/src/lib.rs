pub mod cli;
pub mod repl;

pub use repl::Repl;

use colored::Colorize;
use tylam_driver::RunError;
use tylam_utils::span::FileInfo;

/// Print an error to stderr under a red header.
pub fn report(err: &RunError, info: &FileInfo) {
    eprintln!("{} {}", "error:".red().bold(), err.locate(info));
}
