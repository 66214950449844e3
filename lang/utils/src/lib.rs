#![allow(clippy::style)]
#![allow(clippy::useless_format)]

/// Persistent lexical environment.
pub mod env;
/// Source code location.
pub mod span;
