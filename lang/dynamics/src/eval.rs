//! Strict, call-by-value evaluation over a persistent environment.
//!
//! Operands are evaluated left to right. Nothing is substituted into the
//! tree; a function body runs under its captured environment extended with
//! the argument.

use crate::{err::*, syntax::*};

pub trait Eval {
    fn eval(&self, env: &RtEnv) -> Result<SemValue>;
}

impl Eval for Expr {
    fn eval(&self, env: &RtEnv) -> Result<SemValue> {
        match self {
            | Expr::Int(n) => Ok(SemValue::Int(*n)),
            | Expr::Bool(b) => Ok(SemValue::Bool(*b)),
            | Expr::Var(var) => {
                env.lookup(var).cloned().ok_or_else(|| EvalError::UnboundVar(var.clone()))
            }
            | Expr::Ite(Ite { cond, thn, els }) => match cond.eval(env)? {
                | SemValue::Bool(true) => thn.eval(env),
                | SemValue::Bool(false) => els.eval(env),
                | found => Err(EvalError::NonBoolGuard { found: found.to_string() }),
            },
            | Expr::Op(Op(op, lhs, rhs)) => {
                let lhs = lhs.eval(env)?;
                let rhs = rhs.eval(env)?;
                operate(*op, lhs, rhs)
            }
            | Expr::Let(PureBind { binder, bindee, tail }) => {
                let value = bindee.eval(env)?;
                tail.eval(&env.update(binder.clone(), value))
            }
            | Expr::LetRec(RecBind { func, param, body, tail, .. }) => {
                let rec = RecClosure {
                    env: env.clone(),
                    func: func.clone(),
                    param: param.var.clone(),
                    body: body.clone(),
                };
                tail.eval(&env.update(func.clone(), rec.into()))
            }
            | Expr::Abs(Abs(param, body)) => Ok(Closure {
                env: env.clone(),
                param: param.var.clone(),
                body: body.clone(),
            }
            .into()),
            | Expr::App(App(func, arg)) => {
                let func = func.eval(env)?;
                let arg = arg.eval(env)?;
                apply(func, arg)
            }
        }
    }
}

/// Call a function value.
pub fn apply(func: SemValue, arg: SemValue) -> Result<SemValue> {
    match func {
        | SemValue::Closure(Closure { env, param, body }) => {
            log::trace!("call closure: {} = {}", param, arg);
            body.eval(&env.update(param, arg))
        }
        | SemValue::RecClosure(rec) => {
            log::trace!("call {}: {} = {}", rec.func, rec.param, arg);
            // the parameter is bound last and shadows a same-named function
            let env = rec
                .env
                .update(rec.func.clone(), rec.clone().into())
                .update(rec.param.clone(), arg);
            rec.body.eval(&env)
        }
        | found => Err(EvalError::NotAFunction { found: found.to_string() }),
    }
}

/// Apply a binary operator to two values.
///
/// Integers use checked arithmetic. `/` truncates toward zero and `mod`
/// takes the sign of the dividend. Comparisons are defined on two integers
/// or two booleans, with `false < true`.
pub fn operate(op: BinOp, lhs: SemValue, rhs: SemValue) -> Result<SemValue> {
    use SemValue::{Bool, Int};
    let overflow = || EvalError::Overflow { op };
    match (op, lhs, rhs) {
        | (BinOp::Add, Int(a), Int(b)) => a.checked_add(b).map(Int).ok_or_else(overflow),
        | (BinOp::Sub, Int(a), Int(b)) => a.checked_sub(b).map(Int).ok_or_else(overflow),
        | (BinOp::Mul, Int(a), Int(b)) => a.checked_mul(b).map(Int).ok_or_else(overflow),
        | (BinOp::Div | BinOp::Mod, Int(_), Int(0)) => Err(EvalError::DivisionByZero),
        | (BinOp::Div, Int(a), Int(b)) => a.checked_div(b).map(Int).ok_or_else(overflow),
        | (BinOp::Mod, Int(a), Int(b)) => a.checked_rem(b).map(Int).ok_or_else(overflow),
        | (BinOp::Lt, Int(a), Int(b)) => Ok(Bool(a < b)),
        | (BinOp::Lte, Int(a), Int(b)) => Ok(Bool(a <= b)),
        | (BinOp::Gt, Int(a), Int(b)) => Ok(Bool(a > b)),
        | (BinOp::Gte, Int(a), Int(b)) => Ok(Bool(a >= b)),
        | (BinOp::Lt, Bool(a), Bool(b)) => Ok(Bool(a < b)),
        | (BinOp::Lte, Bool(a), Bool(b)) => Ok(Bool(a <= b)),
        | (BinOp::Gt, Bool(a), Bool(b)) => Ok(Bool(a > b)),
        | (BinOp::Gte, Bool(a), Bool(b)) => Ok(Bool(a >= b)),
        | (op, lhs, rhs) => {
            Err(EvalError::IllegalOperands { op, lhs: lhs.to_string(), rhs: rhs.to_string() })
        }
    }
}

/// Evaluate a closed program.
pub fn eval(expr: &Expr) -> Result<SemValue> {
    expr.eval(&RtEnv::new())
}
