//! One expression per line. Every line is a program of its own; the
//! language has no top-level declarations to carry over.

use crate::report;
use std::io::{self, BufRead, Write};
use tylam_driver::{Worker, check};
use tylam_utils::span::FileInfo;

/// A preprocessed REPL line.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Eval(&'a str),
    TypeOf(&'a str),
    Help,
    Quit,
    Unknown(&'a str),
}

pub const HELP: &str = "\
Enter an expression to evaluate it.
  :t EXPR, :type EXPR   print the type of EXPR
  :h, :help             show this message
  :q, :quit             leave
A line that exceeds `timeout_ms` is abandoned, but its thread keeps
running in the background until the REPL exits.";

pub struct Repl {
    pub worker: Worker,
    pub show_type: bool,
}

impl Repl {
    pub fn preprocess(line: &str) -> Option<Input<'_>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let input = match line.strip_prefix(':') {
            | None => Input::Eval(line),
            | Some("q") | Some("quit") => Input::Quit,
            | Some("h") | Some("help") => Input::Help,
            | Some(rest) => match rest.strip_prefix("t ").or_else(|| rest.strip_prefix("type ")) {
                | Some(expr) => Input::TypeOf(expr.trim()),
                | None => Input::Unknown(line),
            },
        };
        Some(input)
    }

    /// Evaluate or type one line, printing the answer. Returns whether the
    /// line succeeded.
    pub fn run(&self, input: Input<'_>) -> bool {
        match input {
            | Input::Eval(source) => match self.worker.run(source.to_owned()) {
                | Ok(outcome) => {
                    println!("{}", outcome.render(self.show_type));
                    true
                }
                | Err(err) => {
                    report(&err, &FileInfo::new(source, None));
                    false
                }
            },
            | Input::TypeOf(source) => {
                let owned = source.to_owned();
                match self.worker.spawn(move || check(&owned)).and_then(|res| res) {
                    | Ok((_, ty)) => {
                        println!("{}", ty);
                        true
                    }
                    | Err(err) => {
                        report(&err, &FileInfo::new(source, None));
                        false
                    }
                }
            }
            | Input::Unknown(line) => {
                eprintln!("Unknown command `{}`; try `:h`.", line);
                false
            }
            | Input::Help => {
                println!("{}", HELP);
                true
            }
            | Input::Quit => true,
        }
    }

    pub fn launch(&self) -> io::Result<()> {
        println!("Tylam v{}; `:h` for help", env!("CARGO_PKG_VERSION"));
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                println!();
                break;
            }
            match Repl::preprocess(&line) {
                | None => continue,
                | Some(Input::Quit) => break,
                | Some(input) => {
                    self.run(input);
                }
            }
        }
        Ok(())
    }
}
