pub use crate::surface_syntax::*;

use derive_more::From;
use tylam_utils::env::Env;

/// The runtime environment.
pub type RtEnv = Env<VarName, SemValue>;

/// `fun (param: _) -> body` together with the environment it was created in.
#[derive(Clone, Debug)]
pub struct Closure {
    pub env: RtEnv,
    pub param: VarName,
    pub body: ArcExpr,
}

/// A `let rec` function. `env` is the environment *before* `func` was bound;
/// the evaluator re-binds `func` to this very value on every call, so no
/// cycle is ever built.
#[derive(Clone, Debug)]
pub struct RecClosure {
    pub env: RtEnv,
    pub func: VarName,
    pub param: VarName,
    pub body: ArcExpr,
}

#[derive(From, Clone, Debug)]
pub enum SemValue {
    Int(i64),
    Bool(bool),
    Closure(Closure),
    RecClosure(RecClosure),
}

impl SemValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            | SemValue::Int(n) => Some(*n),
            | _ => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            | SemValue::Bool(b) => Some(*b),
            | _ => None,
        }
    }
}
