use crate::syntax::*;
use pretty::RcDoc;
use std::fmt;

pub use tylam_syntax::Pretty;

/// Prints surface expressions back to concrete syntax that re-parses to the
/// same tree.
pub struct Formatter {
    pub width: usize,
    pub indent: isize,
}

impl Formatter {
    pub fn new(width: usize) -> Self {
        Formatter { width, indent: 2 }
    }
    fn operand<'a>(&'a self, expr: &Expr, parens: bool) -> RcDoc<'a> {
        let doc = expr.pretty(self);
        if parens { RcDoc::concat([RcDoc::text("("), doc, RcDoc::text(")")]) } else { doc }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(80)
    }
}

/// How tightly an expression holds together when it appears as an operand.
/// Keyword forms extend as far right as they can, so they sit at the bottom.
fn level(expr: &Expr) -> u8 {
    match expr {
        | Expr::Ite(_) | Expr::Let(_) | Expr::LetRec(_) | Expr::Abs(_) => 0,
        | Expr::Op(Op(op, _, _)) => op_level(*op),
        | Expr::App(_) => 4,
        | Expr::Int(_) | Expr::Bool(_) | Expr::Var(_) => 5,
    }
}

fn op_level(op: BinOp) -> u8 {
    match op {
        | BinOp::Lt | BinOp::Lte | BinOp::Gt | BinOp::Gte => 1,
        | BinOp::Add | BinOp::Sub => 2,
        | BinOp::Mul | BinOp::Div | BinOp::Mod => 3,
    }
}

impl<'a> Pretty<'a, Formatter> for Expr {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Expr::Int(n) => RcDoc::text(n.to_string()),
            | Expr::Bool(b) => RcDoc::text(b.to_string()),
            | Expr::Var(var) => RcDoc::text(var.plain().to_owned()),
            | Expr::Op(Op(op, lhs, rhs)) => {
                let at = op_level(*op);
                // comparisons lean right, the other operators lean left
                let (lhs_parens, rhs_parens) = if op.is_cmp() {
                    (level(lhs) <= at, level(rhs) < at)
                } else {
                    (level(lhs) < at, level(rhs) <= at)
                };
                f.operand(lhs, lhs_parens)
                    .append(RcDoc::line())
                    .append(RcDoc::text(op.to_string()))
                    .append(RcDoc::space())
                    .append(f.operand(rhs, rhs_parens))
                    .group()
            }
            | Expr::App(App(func, arg)) => f
                .operand(func, level(func) < 4)
                .append(RcDoc::line())
                .append(f.operand(arg, level(arg) <= 4))
                .nest(f.indent)
                .group(),
            | Expr::Ite(Ite { cond, thn, els }) => RcDoc::text("if ")
                .append(cond.pretty(f))
                .append(RcDoc::line())
                .append("then ")
                .append(thn.pretty(f))
                .append(RcDoc::line())
                .append("else ")
                .append(els.pretty(f))
                .group(),
            | Expr::Let(PureBind { binder, bindee, tail }) => RcDoc::text("let ")
                .append(RcDoc::text(binder.plain().to_owned()))
                .append(" =")
                .append(RcDoc::line().append(bindee.pretty(f)).nest(f.indent))
                .append(RcDoc::line())
                .append("in")
                .group()
                .append(RcDoc::line())
                .append(tail.pretty(f))
                .group(),
            | Expr::LetRec(RecBind { func, param, ret, body, tail }) => RcDoc::text("let rec ")
                .append(RcDoc::text(format!("{} ({}: {}): {} =", func, param.var, param.ty, ret)))
                .append(RcDoc::line().append(body.pretty(f)).nest(f.indent))
                .append(RcDoc::line())
                .append("in")
                .group()
                .append(RcDoc::line())
                .append(tail.pretty(f))
                .group(),
            | Expr::Abs(Abs(param, body)) => RcDoc::text("fun ")
                .append(RcDoc::text(format!("({}: {}) ->", param.var, param.ty)))
                .append(RcDoc::line().append(body.pretty(f)).nest(f.indent))
                .group(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let f = Formatter::default();
        self.pretty(&f).render_fmt(f.width, out)
    }
}
