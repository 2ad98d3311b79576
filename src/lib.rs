//! Runtime support for programs compiled by the pasquim scheme compiler.
//!
//! A compiled program is a single native function, `scheme_entry`, that
//! returns one tagged machine word. This crate decodes that word into an
//! immediate [runtime::Value] and prints it the way a scheme REPL would.

pub mod cli;
pub mod entry;
pub mod error;
pub mod literal;
pub mod runtime;

pub use error::{DecodeError, Result, RuntimeError};
pub use runtime::{Value, Word};
