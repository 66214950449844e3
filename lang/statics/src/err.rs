use crate::surface_syntax::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TyckError {
    #[error("Unbound variable: {0}")]
    UnboundVar(VarName),
    #[error("Condition should be `bool`, found `{found}`")]
    CondNotBool { found: Type },
    #[error("Branches have mismatched types: `{thn}` and `{els}`")]
    BranchMismatch { thn: Type, els: Type },
    #[error("Operator `{op}` cannot be applied to `{lhs}` and `{rhs}`")]
    OperandMismatch { op: BinOp, lhs: Type, rhs: Type },
    #[error("Function `{func}` is declared to return `{expected}`, but its body has type `{found}`")]
    ReturnMismatch { func: VarName, expected: Type, found: Type },
    #[error("Type `{found}` is not a function type")]
    NotAFunction { found: Type },
    #[error("Argument mismatch, expected `{expected}`, found `{found}`")]
    ArgMismatch { expected: Type, found: Type },
}

pub type Result<T> = std::result::Result<T, TyckError>;
