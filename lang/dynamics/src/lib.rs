#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod surface_syntax {
    pub use tylam_surface::syntax::*;
}

pub mod syntax;
pub use syntax::{RtEnv, SemValue};
pub mod err;
pub use err::*;
pub mod eval;
pub use eval::*;
pub mod fmt;
