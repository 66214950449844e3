use crate::syntax::*;
use std::fmt;

/// Functions are opaque; they print as `<fun>`.
impl fmt::Display for SemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | SemValue::Int(n) => write!(f, "{}", n),
            | SemValue::Bool(b) => write!(f, "{}", b),
            | SemValue::Closure(_) | SemValue::RecClosure(_) => write!(f, "<fun>"),
        }
    }
}
