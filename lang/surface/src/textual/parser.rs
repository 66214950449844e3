//! Recursive descent for atoms and keyword forms, precedence climbing for
//! infix operators.
//!
//! Application has no token of its own. Whenever a token that can start an
//! atom directly follows a finished operand, the climber treats the gap as
//! an infix operator with the tightest binding powers, which makes
//! application left-associative and stronger than any explicit operator.

use super::{
    err::{Found, ParseError},
    lexer::{Spanned, Tok},
};
use crate::syntax::*;
use tylam_utils::span::Span;

type Result<T> = std::result::Result<T, ParseError>;

/// Parse a complete token stream into one expression. Leftover tokens are an
/// error.
pub fn parse(tokens: &[Spanned<Tok<'_>>]) -> Result<Expr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expr()?;
    match parser.peek() {
        | None => Ok(expr),
        | Some(_) => Err(ParseError::IllegalSequence { found: parser.found() }),
    }
}

/// What a climbing step combines its two operands with.
#[derive(Clone, Copy, Debug)]
enum Infix {
    Op(BinOp),
    App,
}

pub struct Parser<'t, 'input> {
    tokens: &'t [Spanned<Tok<'input>>],
    pos: usize,
    eof: usize,
}

impl<'t, 'input> Parser<'t, 'input> {
    pub fn new(tokens: &'t [Spanned<Tok<'input>>]) -> Self {
        let eof = tokens.last().map(|(_, _, end)| *end).unwrap_or(0);
        Parser { tokens, pos: 0, eof }
    }

    fn peek(&self) -> Option<&Tok<'input>> {
        self.tokens.get(self.pos).map(|(_, tok, _)| tok)
    }

    fn bump(&mut self) -> Option<&'t Tok<'input>> {
        let (_, tok, _) = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    /// The token at the cursor, for error reporting.
    fn found(&self) -> Found {
        self.found_at(self.pos)
    }

    fn found_at(&self, pos: usize) -> Found {
        match self.tokens.get(pos) {
            | Some((start, tok, end)) => Found::Tok(tok.to_string(), Span::new(*start, *end)),
            | None => Found::Eof(self.eof),
        }
    }

    fn expect(&mut self, expected: Tok<'static>) -> Result<()> {
        match self.peek() {
            | Some(tok) if *tok == expected => {
                self.pos += 1;
                Ok(())
            }
            | _ => Err(ParseError::ExpectedToken { expected, found: self.found() }),
        }
    }

    fn ident(&mut self) -> Result<VarName> {
        match self.peek() {
            | Some(Tok::Ident(id)) => {
                let name = VarName::from(id);
                self.pos += 1;
                Ok(name)
            }
            | _ => Err(ParseError::ExpectedIdent { found: self.found() }),
        }
    }

    /* ------------------------------ Expressions ------------------------------ */

    pub fn expr(&mut self) -> Result<Expr> {
        let lhs = self.atom()?;
        self.climb(lhs, 0)
    }

    /// Binding powers `(left, right)` of the infix position at the cursor.
    fn infix(&self) -> Option<(u8, u8, Infix)> {
        let res = match self.peek()? {
            | Tok::Plus => (2, 3, Infix::Op(BinOp::Add)),
            | Tok::Minus => (2, 3, Infix::Op(BinOp::Sub)),
            | Tok::Star => (4, 5, Infix::Op(BinOp::Mul)),
            | Tok::Slash => (4, 5, Infix::Op(BinOp::Div)),
            | Tok::Mod => (4, 5, Infix::Op(BinOp::Mod)),
            | Tok::Lt => (1, 1, Infix::Op(BinOp::Lt)),
            | Tok::Lte => (1, 1, Infix::Op(BinOp::Lte)),
            | Tok::Gt => (1, 1, Infix::Op(BinOp::Gt)),
            | Tok::Gte => (1, 1, Infix::Op(BinOp::Gte)),
            | Tok::Ident(_) | Tok::ParenOpen | Tok::IntLit(_) | Tok::BoolLit(_) => {
                (6, 7, Infix::App)
            }
            | _ => None?,
        };
        Some(res)
    }

    fn climb(&mut self, mut lhs: Expr, min: u8) -> Result<Expr> {
        while let Some((lbp, rbp, infix)) = self.infix() {
            if lbp < min {
                break;
            }
            if let Infix::Op(_) = infix {
                self.pos += 1;
            }
            let rhs = self.atom()?;
            let rhs = self.climb(rhs, rbp)?;
            lhs = match infix {
                | Infix::Op(op) => Expr::op(op, lhs, rhs),
                | Infix::App => Expr::app(lhs, rhs),
            };
        }
        Ok(lhs)
    }

    fn atom(&mut self) -> Result<Expr> {
        let start = self.pos;
        let Some(tok) = self.bump() else {
            return Err(ParseError::IllegalSequence { found: self.found() });
        };
        match tok {
            | Tok::IntLit(n) => Ok(Expr::Int(*n)),
            | Tok::BoolLit(b) => Ok(Expr::Bool(*b)),
            | Tok::Ident(id) => Ok(Expr::var(*id)),
            | Tok::ParenOpen => {
                let expr = self.expr()?;
                self.expect(Tok::ParenClose)?;
                Ok(expr)
            }
            | Tok::If => {
                let cond = self.expr()?;
                self.expect(Tok::Then)?;
                let thn = self.expr()?;
                self.expect(Tok::Else)?;
                let els = self.expr()?;
                Ok(Expr::ite(cond, thn, els))
            }
            | Tok::Let if self.peek() == Some(&Tok::Rec) => {
                self.pos += 1;
                let func = self.ident()?;
                self.expect(Tok::ParenOpen)?;
                let param = self.ident()?;
                self.expect(Tok::Colon)?;
                let param_ty = self.ty()?;
                self.expect(Tok::ParenClose)?;
                self.expect(Tok::Colon)?;
                let ret = self.ty()?;
                self.expect(Tok::Equals)?;
                let body = self.expr()?;
                self.expect(Tok::In)?;
                let tail = self.expr()?;
                Ok(Expr::let_rec(func, param, param_ty, ret, body, tail))
            }
            | Tok::Let => {
                let binder = self.ident()?;
                self.expect(Tok::Equals)?;
                let bindee = self.expr()?;
                self.expect(Tok::In)?;
                let tail = self.expr()?;
                Ok(Expr::let_(binder, bindee, tail))
            }
            | Tok::Fun => {
                self.expect(Tok::ParenOpen)?;
                let param = self.ident()?;
                self.expect(Tok::Colon)?;
                let ty = self.ty()?;
                self.expect(Tok::ParenClose)?;
                self.expect(Tok::Arrow)?;
                let body = self.expr()?;
                Ok(Expr::abs(param, ty, body))
            }
            | _ => Err(ParseError::IllegalSequence { found: self.found_at(start) }),
        }
    }

    /* --------------------------------- Types --------------------------------- */

    /// `int | bool | any | (T) | T -> T`, arrows to the right.
    pub fn ty(&mut self) -> Result<Type> {
        let start = self.pos;
        let dom = match self.bump() {
            | Some(Tok::Int) => Type::Int,
            | Some(Tok::Bool) => Type::Bool,
            | Some(Tok::Any) => Type::Any,
            | Some(Tok::ParenOpen) => {
                let ty = self.ty()?;
                self.expect(Tok::ParenClose)?;
                ty
            }
            | _ => return Err(ParseError::ExpectedType { found: self.found_at(start) }),
        };
        if self.peek() == Some(&Tok::Arrow) {
            self.pos += 1;
            let cod = self.ty()?;
            Ok(Type::arrow(dom, cod))
        } else {
            Ok(dom)
        }
    }
}
