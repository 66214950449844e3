use crate::syntax::VarName;
use thiserror::Error;

/// Errors reported while checking that every variable is bound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unbound variable: {0}")]
    UnboundVar(VarName),
}
