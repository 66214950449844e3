use crate::surface_syntax::*;
use thiserror::Error;

/// Values are carried in their printed form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Unbound identifier: {0}")]
    UnboundVar(VarName),
    #[error("Condition evaluated to `{found}`, expected a boolean")]
    NonBoolGuard { found: String },
    #[error("Operator `{op}` is undefined on `{lhs}` and `{rhs}`")]
    IllegalOperands { op: BinOp, lhs: String, rhs: String },
    #[error("`{found}` is not a function and cannot be applied")]
    NotAFunction { found: String },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow in `{op}`")]
    Overflow { op: BinOp },
}

pub type Result<T> = std::result::Result<T, EvalError>;
