//! Definitions of errors that can occur while decoding and printing values.
use miette::Diagnostic;
use thiserror::Error;

use crate::runtime::{HeapTag, Word};

/// A word that holds no immediate value.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("word {word} carries the {kind} tag, which is not an immediate value")]
    #[diagnostic(
        code(pasquim::decode::reserved_tag),
        help("heap objects have no representation in this runtime")
    )]
    ReservedTag { word: Word, kind: HeapTag },

    #[error("word {word} matches no immediate tag")]
    #[diagnostic(
        code(pasquim::decode::unknown_tag),
        help("expected a fixnum (low bits 00), a char (low byte 0x07) or a boolean (low byte 0x0f)")
    )]
    UnknownTag { word: Word },
}

#[derive(Error, Diagnostic, Debug)]
pub enum RuntimeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error("integer {0} does not fit in a fixnum")]
    #[diagnostic(code(pasquim::encode::fixnum_overflow))]
    FixnumOverflow(isize),

    #[error("invalid word '{0}'")]
    #[diagnostic(
        code(pasquim::parse::word),
        help("write the word in decimal, or with a 0x or 0b prefix")
    )]
    InvalidWord(String),

    #[error("invalid literal '{0}'")]
    #[diagnostic(
        code(pasquim::parse::literal),
        help("expected an integer, a character like #\\A, #t or #f")
    )]
    InvalidLiteral(String),

    #[error("cannot write the value")]
    #[diagnostic(code(pasquim::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RuntimeError> = std::result::Result<T, E>;
