//! Structural type synthesis with `any` as an absorbing top.
//!
//! Every rule first asks whether one of its relevant subterms synthesized
//! `any`; if so the whole term is `any`, even when a sibling failed. Only
//! then are failures and mismatches reported.

use crate::{err::*, surface_syntax::*};
use tylam_utils::env::Env;

/// The typing environment.
pub type Ctx = Env<VarName, Type>;

pub trait TypeCheck {
    fn syn(&self, ctx: &Ctx) -> Result<Type>;
}

impl TypeCheck for Expr {
    fn syn(&self, ctx: &Ctx) -> Result<Type> {
        match self {
            | Expr::Int(_) => Ok(Type::Int),
            | Expr::Bool(_) => Ok(Type::Bool),
            | Expr::Var(var) => {
                ctx.lookup(var).cloned().ok_or_else(|| TyckError::UnboundVar(var.clone()))
            }
            | Expr::Ite(Ite { cond, thn, els }) => {
                match (cond.syn(ctx), thn.syn(ctx), els.syn(ctx)) {
                    | (Ok(Type::Any), _, _) | (_, Ok(Type::Any), _) | (_, _, Ok(Type::Any)) => {
                        Ok(Type::Any)
                    }
                    | (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => Err(err),
                    | (Ok(Type::Bool), Ok(thn), Ok(els)) => {
                        if thn == els {
                            Ok(thn)
                        } else {
                            Err(TyckError::BranchMismatch { thn, els })
                        }
                    }
                    | (Ok(found), _, _) => Err(TyckError::CondNotBool { found }),
                }
            }
            | Expr::Op(Op(op, lhs, rhs)) => match (lhs.syn(ctx), rhs.syn(ctx)) {
                | (Ok(Type::Any), _) | (_, Ok(Type::Any)) => Ok(Type::Any),
                | (Err(err), _) | (_, Err(err)) => Err(err),
                | (Ok(Type::Int), Ok(Type::Int)) if op.is_arith() => Ok(Type::Int),
                | (Ok(Type::Int), Ok(Type::Int)) | (Ok(Type::Bool), Ok(Type::Bool))
                    if op.is_cmp() =>
                {
                    Ok(Type::Bool)
                }
                | (Ok(lhs), Ok(rhs)) => Err(TyckError::OperandMismatch { op: *op, lhs, rhs }),
            },
            | Expr::Let(PureBind { binder, bindee, tail }) => match bindee.syn(ctx)? {
                | Type::Any => Ok(Type::Any),
                | ty => tail.syn(&ctx.update(binder.clone(), ty)),
            },
            | Expr::LetRec(RecBind { func, param, ret, body, tail }) => {
                let arrow = Type::arrow(param.ty.clone(), ret.clone());
                log::trace!("checking `let rec {}: {}`", func, arrow);
                let inner =
                    ctx.update(param.var.clone(), param.ty.clone()).update(func.clone(), arrow.clone());
                match body.syn(&inner)? {
                    | Type::Any => Ok(Type::Any),
                    | found if found == *ret => tail.syn(&ctx.update(func.clone(), arrow)),
                    | found => Err(TyckError::ReturnMismatch {
                        func: func.clone(),
                        expected: ret.clone(),
                        found,
                    }),
                }
            }
            | Expr::Abs(Abs(param, body)) => {
                match body.syn(&ctx.update(param.var.clone(), param.ty.clone()))? {
                    | Type::Any => Ok(Type::Any),
                    | cod => Ok(Type::arrow(param.ty.clone(), cod)),
                }
            }
            | Expr::App(App(func, arg)) => match (func.syn(ctx), arg.syn(ctx)) {
                | (Ok(Type::Any), _) | (_, Ok(Type::Any)) => Ok(Type::Any),
                | (Err(err), _) | (_, Err(err)) => Err(err),
                | (Ok(Type::Arrow(Arrow(dom, cod))), Ok(found)) => {
                    if *dom == found {
                        Ok(cod.as_ref().clone())
                    } else {
                        Err(TyckError::ArgMismatch { expected: dom.as_ref().clone(), found })
                    }
                }
                | (Ok(found), Ok(_)) => Err(TyckError::NotAFunction { found }),
            },
        }
    }
}

/// Synthesize the type of a closed program.
pub fn tyck(expr: &Expr) -> Result<Type> {
    expr.syn(&Ctx::new())
}

/// The bare predicate view: `None` exactly when [`tyck`] fails.
pub fn check_type(expr: &Expr) -> Option<Type> {
    tyck(expr).ok()
}
