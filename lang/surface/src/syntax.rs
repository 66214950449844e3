pub use tylam_syntax::*;

use derive_more::From;
use std::sync::Arc;

pub type ArcExpr = Arc<Expr>;

/* ------------------------------- Expression ------------------------------- */

#[derive(From, Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Int(i64),
    Bool(bool),
    Var(VarName),
    Op(Op<BinOp, ArcExpr>),
    Ite(Ite<ArcExpr>),
    Let(PureBind<VarName, ArcExpr, ArcExpr>),
    LetRec(RecBind<Type, ArcExpr>),
    Abs(Abs<Param<Type>, ArcExpr>),
    App(App<ArcExpr, ArcExpr>),
}

/// Constructors that hide the `Arc` plumbing.
impl Expr {
    pub fn var(name: impl Into<VarName>) -> Expr {
        Expr::Var(name.into())
    }
    pub fn op(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Op(op, Arc::new(lhs), Arc::new(rhs)).into()
    }
    pub fn ite(cond: Expr, thn: Expr, els: Expr) -> Expr {
        Ite { cond: Arc::new(cond), thn: Arc::new(thn), els: Arc::new(els) }.into()
    }
    pub fn let_(binder: impl Into<VarName>, bindee: Expr, tail: Expr) -> Expr {
        PureBind { binder: binder.into(), bindee: Arc::new(bindee), tail: Arc::new(tail) }.into()
    }
    pub fn let_rec(
        func: impl Into<VarName>, param: impl Into<VarName>, param_ty: Type, ret: Type, body: Expr,
        tail: Expr,
    ) -> Expr {
        RecBind {
            func: func.into(),
            param: Param { var: param.into(), ty: param_ty },
            ret,
            body: Arc::new(body),
            tail: Arc::new(tail),
        }
        .into()
    }
    pub fn abs(param: impl Into<VarName>, ty: Type, body: Expr) -> Expr {
        Abs(Param { var: param.into(), ty }, Arc::new(body)).into()
    }
    pub fn app(func: Expr, arg: Expr) -> Expr {
        App(Arc::new(func), Arc::new(arg)).into()
    }
}
