//! Scope checking over the surface AST.
//!
//! `let` and `fun` bring their binder into scope for the tail or body only.
//! `let rec` brings both the function and its parameter into scope for the
//! function body, and only the function for the tail.

use super::err::ResolveError;
use crate::syntax::*;
use tylam_utils::env::Env;

/// The set of names in scope.
pub type Scope = Env<VarName, ()>;

pub trait Resolve {
    /// The first unbound variable in a left-to-right traversal, if any.
    fn free_var(&self, scope: &Scope) -> Option<VarName>;
}

impl Resolve for Expr {
    fn free_var(&self, scope: &Scope) -> Option<VarName> {
        match self {
            | Expr::Int(_) | Expr::Bool(_) => None,
            | Expr::Var(var) => (!scope.contains(var)).then(|| var.clone()),
            | Expr::Op(Op(_, lhs, rhs)) => lhs.free_var(scope).or_else(|| rhs.free_var(scope)),
            | Expr::Ite(Ite { cond, thn, els }) => cond
                .free_var(scope)
                .or_else(|| thn.free_var(scope))
                .or_else(|| els.free_var(scope)),
            | Expr::Let(PureBind { binder, bindee, tail }) => bindee
                .free_var(scope)
                .or_else(|| tail.free_var(&scope.update(binder.clone(), ()))),
            | Expr::LetRec(RecBind { func, param, body, tail, .. }) => {
                let scope = scope.update(func.clone(), ());
                body.free_var(&scope.update(param.var.clone(), ()))
                    .or_else(|| tail.free_var(&scope))
            }
            | Expr::Abs(Abs(param, body)) => body.free_var(&scope.update(param.var.clone(), ())),
            | Expr::App(App(func, arg)) => func.free_var(scope).or_else(|| arg.free_var(scope)),
        }
    }
}

/// Whole-program predicate: does every variable reference have a binder?
pub fn check_bound(expr: &Expr) -> bool {
    expr.free_var(&Scope::new()).is_none()
}

/// Like [`check_bound`], naming the first offending variable on failure.
pub fn resolve(expr: &Expr) -> Result<(), ResolveError> {
    match expr.free_var(&Scope::new()) {
        | None => Ok(()),
        | Some(var) => Err(ResolveError::UnboundVar(var)),
    }
}
