use super::err::LexError;
use logos::{Logos, SpannedIter};
use std::fmt::{Debug, Display};
use tylam_utils::span::Span;

/// `(start, token, end)` in byte offsets.
pub type Spanned<T> = (usize, T, usize);

/// What went wrong inside logos; the lexer attaches the location.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    #[default]
    IllegalChar,
    IntOutOfRange,
}

#[derive(Logos, Clone, Debug, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \n\r\x08]+")]
pub enum Tok<'input> {
    #[regex(r"[a-z_][a-zA-Z0-9_']*")]
    Ident(&'input str),
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexErrorKind::IntOutOfRange))]
    IntLit(i64),
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    BoolLit(bool),

    #[token("let")]
    Let,
    #[token("rec")]
    Rec,
    #[token("in")]
    In,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("mod")]
    Mod,
    #[token("int")]
    Int,
    #[token("bool")]
    Bool,
    #[token("any")]
    Any,

    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("->")]
    Arrow,
    #[token("<")]
    Lt,
    #[token("<=")]
    Lte,
    #[token(">")]
    Gt,
    #[token(">=")]
    Gte,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
}

impl Display for Tok<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            | Tok::Ident(s) => write!(f, "{}", s),
            | Tok::IntLit(n) => write!(f, "{}", n),
            | Tok::BoolLit(b) => write!(f, "{}", b),
            | Tok::Let => write!(f, "let"),
            | Tok::Rec => write!(f, "rec"),
            | Tok::In => write!(f, "in"),
            | Tok::Fun => write!(f, "fun"),
            | Tok::If => write!(f, "if"),
            | Tok::Then => write!(f, "then"),
            | Tok::Else => write!(f, "else"),
            | Tok::Mod => write!(f, "mod"),
            | Tok::Int => write!(f, "int"),
            | Tok::Bool => write!(f, "bool"),
            | Tok::Any => write!(f, "any"),
            | Tok::ParenOpen => write!(f, "("),
            | Tok::ParenClose => write!(f, ")"),
            | Tok::Colon => write!(f, ":"),
            | Tok::Equals => write!(f, "="),
            | Tok::Arrow => write!(f, "->"),
            | Tok::Lt => write!(f, "<"),
            | Tok::Lte => write!(f, "<="),
            | Tok::Gt => write!(f, ">"),
            | Tok::Gte => write!(f, ">="),
            | Tok::Plus => write!(f, "+"),
            | Tok::Minus => write!(f, "-"),
            | Tok::Star => write!(f, "*"),
            | Tok::Slash => write!(f, "/"),
        }
    }
}

pub struct Lexer<'source> {
    source: &'source str,
    inner: SpannedIter<'source, Tok<'source>>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self { source, inner: Tok::lexer(source).spanned() }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Spanned<Tok<'source>>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (res, range) = self.inner.next()?;
        match res {
            | Ok(tok) => Some(Ok((range.start, tok, range.end))),
            | Err(kind) => {
                let span = Span::new(range.start, range.end);
                let found = self.source.get(range).unwrap_or("\u{fffd}").to_owned();
                Some(Err(match kind {
                    | LexErrorKind::IllegalChar => LexError::IllegalChar { found, span },
                    | LexErrorKind::IntOutOfRange => LexError::IntOutOfRange { found, span },
                }))
            }
        }
    }
}

/// Tokenize the whole source, stopping at the first illegal character.
pub fn lex(source: &str) -> Result<Vec<Spanned<Tok<'_>>>, LexError> {
    Lexer::new(source).collect()
}
