#![allow(clippy::style)]
#![allow(clippy::useless_format)]

/// The surface AST shared by every later phase.
pub mod syntax;

pub mod textual {
    /// Logos-based lexer and token definitions.
    pub mod lexer;
    pub use lexer::*;
    /// Precedence-climbing parser over the token stream.
    pub mod parser;
    pub use parser::*;
    /// Lexing and parsing errors.
    pub mod err;
    pub use err::*;

    #[cfg(test)]
    /// Lexer and parser tests.
    mod tests;
}

pub mod scoped {
    /// Bound-variable check.
    pub mod binder;
    pub use binder::*;
    /// Unbound-variable error.
    pub mod err;
    pub use err::*;
}

/// Pretty printer back to concrete syntax.
pub mod fmt;
