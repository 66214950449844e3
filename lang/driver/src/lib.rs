//! The run pipeline for tylam: lex, parse, bound check, type check and
//! evaluate, stopping at the first stage that fails.

pub mod conf;
pub mod err;
pub mod worker;

#[cfg(test)]
mod tests;

pub use conf::Conf;
pub use err::*;
pub use worker::Worker;

use std::{fmt, path::PathBuf, sync::Arc};
use tylam_dynamics::SemValue;
use tylam_surface::{
    syntax::{Expr, Type},
    textual::{self as t, Spanned, Tok},
};
use tylam_utils::span::FileInfo;

/// A program's value together with its static type.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub value: SemValue,
    pub ty: Type,
}

impl Outcome {
    pub fn render(&self, show_type: bool) -> String {
        if show_type { self.to_string() } else { self.value.to_string() }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.value, self.ty)
    }
}

/// Source text read from disk.
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)?;
        Ok(SourceFile { path, text })
    }
    pub fn info(&self) -> FileInfo {
        FileInfo::new(&self.text, Some(Arc::new(self.path.clone())))
    }
}

pub fn lex(source: &str) -> Result<Vec<Spanned<Tok<'_>>>> {
    let toks = t::lex(source)?;
    log::debug!("lexed {} tokens", toks.len());
    Ok(toks)
}

pub fn parse(source: &str) -> Result<Expr> {
    let toks = lex(source)?;
    let expr = t::parse(&toks)?;
    log::debug!("parsed");
    Ok(expr)
}

/// Everything short of evaluation.
pub fn check(source: &str) -> Result<(Expr, Type)> {
    let expr = parse(source)?;
    tylam_surface::scoped::resolve(&expr)?;
    log::debug!("bound check passed");
    let ty = tylam_statics::tyck(&expr)?;
    log::debug!("typed as {}", ty);
    Ok((expr, ty))
}

pub fn run_typed(source: &str) -> Result<Outcome> {
    let (expr, ty) = check(source)?;
    let value = tylam_dynamics::eval(&expr)?;
    log::debug!("evaluated to {}", value);
    Ok(Outcome { value, ty })
}

pub fn run(source: &str) -> Result<SemValue> {
    Ok(run_typed(source)?.value)
}
