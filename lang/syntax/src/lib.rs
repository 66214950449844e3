pub mod fmt;
pub use fmt::*;

mod impls;
use std::sync::Arc;

/* --------------------------------- Binder --------------------------------- */

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarName(pub String);

/* ------------------------------- Structural ------------------------------- */

/// `x : t` as an annotated binder
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Param<Ty> {
    pub var: VarName,
    pub ty: Ty,
}

/// any binding structure
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Abs<S, T>(pub S, pub T);
/// `e1 e2` shaped application
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct App<S, T>(pub S, pub T);

/// a -> b shaped arrow
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Arrow<T>(pub T, pub T);

/// `e1 op e2`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Op<O, T>(pub O, pub T, pub T);

/// `if c then t else e`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Ite<Tm> {
    pub cond: Tm,
    pub thn: Tm,
    pub els: Tm,
}

/// `let x = a in ...`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PureBind<Br, Be, Tail> {
    pub binder: Br,
    pub bindee: Be,
    pub tail: Tail,
}

/// `let rec f (x: A) : B = body in ...`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RecBind<Ty, Tm> {
    pub func: VarName,
    pub param: Param<Ty>,
    pub ret: Ty,
    pub body: Tm,
    pub tail: Tm,
}

/* ---------------------------------- Types --------------------------------- */

pub type ArcType = Arc<Type>;

/// Structural types. `Any` is the top type and is equal only to itself;
/// the checker treats it as absorbing.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
    Any,
    Arrow(Arrow<ArcType>),
}

impl Type {
    pub fn arrow(dom: Type, cod: Type) -> Type {
        Arrow(Arc::new(dom), Arc::new(cod)).into()
    }
}

/* -------------------------------- Operators ------------------------------- */

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl BinOp {
    pub fn is_arith(&self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod)
    }
    pub fn is_cmp(&self) -> bool {
        !self.is_arith()
    }
}
