use super::lexer::Tok;
use std::fmt::Display;
use thiserror::Error;
use tylam_utils::span::Span;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("illegal character `{found}`")]
    IllegalChar { found: String, span: Span },
    #[error("integer literal `{found}` does not fit in 64 bits")]
    IntOutOfRange { found: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            | LexError::IllegalChar { span, .. } | LexError::IntOutOfRange { span, .. } => *span,
        }
    }
}

/// The token a parse error stopped at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// ran out of tokens; carries the offset just past the last one
    Eof(usize),
    Tok(String, Span),
}

impl Found {
    pub fn span(&self) -> Span {
        match self {
            | Found::Eof(at) => Span::new(*at, *at),
            | Found::Tok(_, span) => *span,
        }
    }
}

impl Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            | Found::Eof(_) => write!(f, "end of input"),
            | Found::Tok(tok, _) => write!(f, "`{}`", tok),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `{expected}`, found {found}")]
    ExpectedToken { expected: Tok<'static>, found: Found },
    #[error("expected an identifier, found {found}")]
    ExpectedIdent { found: Found },
    #[error("expected a type, found {found}")]
    ExpectedType { found: Found },
    #[error("illegal token sequence at {found}")]
    IllegalSequence { found: Found },
}

impl ParseError {
    pub fn found(&self) -> &Found {
        match self {
            | ParseError::ExpectedToken { found, .. }
            | ParseError::ExpectedIdent { found }
            | ParseError::ExpectedType { found }
            | ParseError::IllegalSequence { found } => found,
        }
    }
    pub fn span(&self) -> Span {
        self.found().span()
    }
}
