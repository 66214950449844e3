use std::time::Duration;
use thiserror::Error;
use tylam_dynamics::EvalError;
use tylam_statics::TyckError;
use tylam_surface::{
    scoped::ResolveError,
    textual::{LexError, ParseError},
};
use tylam_utils::span::{FileInfo, Span};

#[derive(Error, Debug)]
pub enum RunError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Lexer error:\n\t{0}")]
    LexError(#[from] LexError),
    #[error("Parse error:\n\t{0}")]
    ParseError(#[from] ParseError),
    #[error("Resolve error:\n\t{0}")]
    ResolveError(#[from] ResolveError),
    #[error("Tyck error:\n\t{0}")]
    TyckError(#[from] TyckError),
    #[error("Eval error:\n\t{0}")]
    EvalError(#[from] EvalError),
    #[error("Evaluation timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    #[error("Worker thread died before reporting a result")]
    WorkerDied,
}

impl RunError {
    /// Only lexing and parsing errors point into the source.
    pub fn span(&self) -> Option<Span> {
        match self {
            | RunError::LexError(err) => Some(err.span()),
            | RunError::ParseError(err) => Some(err.span()),
            | _ => None,
        }
    }
    /// The message, prefixed with `path:line:column` when there is a span.
    pub fn locate(&self, info: &FileInfo) -> String {
        match self.span() {
            | Some(span) => format!("{}: {}", info.locate(span), self),
            | None => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
