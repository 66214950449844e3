#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod surface_syntax {
    pub use tylam_surface::syntax::*;
}

pub mod err;
pub use err::*;
pub mod tyck;
pub use tyck::*;
