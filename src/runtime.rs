//! This module describes the values that compiled pasquim programs hand
//! back to the runtime. [Word] uses a tagging scheme so that every
//! immediate value fits in one machine word, without touching the heap.
//!
//! ```text
//!      type | high bits                low byte
//! ----------+----------------------------------
//!   integer | iiiiiiiiiiiiiiiiiiiiiiiiiiiiii00
//!   boolean | 000000000000000000000000b00001111
//!      char | 0000000000000000cccccccc00000111
//! ```

use std::fmt::Display;

use crate::error::RuntimeError;

pub mod classify;
pub mod display;
pub mod tag;
pub mod tagged;

pub use tag::HeapTag;
pub use tagged::Tagged;

/// The raw word returned by `scheme_entry`, as wide as a general purpose
/// register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Word(pub isize);

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A fixnum: an integer stored in the word itself, two bits narrower than
/// the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(isize);

impl Int {
    pub const MIN: Int = Int(isize::MIN >> tag::FIXNUM_SHIFT);
    pub const MAX: Int = Int(isize::MAX >> tag::FIXNUM_SHIFT);

    /// Creates a fixnum, refusing integers that would lose their top bits
    /// when shifted into a word.
    pub fn new(value: isize) -> crate::Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RuntimeError::FixnumOverflow(value))
        }
    }

    pub fn value(self) -> isize {
        self.0
    }
}

impl TryFrom<isize> for Int {
    type Error = RuntimeError;

    fn try_from(value: isize) -> crate::Result<Self> {
        Int::new(value)
    }
}

/// An 8-bit character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Char(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bool {
    True,
    False,
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        if value {
            Bool::True
        } else {
            Bool::False
        }
    }
}

/// An immediate value recovered from a [Word].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Int(Int),
    Char(Char),
    Bool(Bool),
}

impl Value {
    /// The scheme name of the value's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Char(_) => "char",
            Value::Bool(_) => "boolean",
        }
    }
}

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Value::Int(value)
    }
}

impl From<Char> for Value {
    fn from(value: Char) -> Self {
        Value::Char(value)
    }
}

impl From<Bool> for Value {
    fn from(value: Bool) -> Self {
        Value::Bool(value)
    }
}
