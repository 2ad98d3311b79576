use super::tag::*;
use super::*;

/// An immediate that lives inside a [Word]. `tag` lays the value out the
/// way the code generator does, `untag` reads it back.
pub trait Tagged
where
    Self: Sized + Copy,
{
    const MASK: isize;
    const TAG: isize;

    fn matches(word: Word) -> bool {
        word.0 & Self::MASK == Self::TAG
    }

    fn tag(self) -> Word;

    /// Reads the payload. Only meaningful when [Tagged::matches] holds.
    fn untag(word: Word) -> Self;
}

impl Tagged for Int {
    const MASK: isize = FIXNUM_MASK;
    const TAG: isize = FIXNUM_TAG;

    fn tag(self) -> Word {
        Word((self.0 << FIXNUM_SHIFT) | Self::TAG)
    }

    fn untag(word: Word) -> Self {
        // Signed shift, so negative fixnums keep their sign.
        Int(word.0 >> FIXNUM_SHIFT)
    }
}

impl Tagged for Char {
    const MASK: isize = CHAR_MASK;
    const TAG: isize = CHAR_TAG;

    fn tag(self) -> Word {
        Word(((self.0 as isize) << CHAR_SHIFT) | Self::TAG)
    }

    fn untag(word: Word) -> Self {
        Char((word.0 >> CHAR_SHIFT) as u8)
    }
}

impl Tagged for Bool {
    const MASK: isize = BOOL_MASK;
    const TAG: isize = BOOL_TAG;

    fn tag(self) -> Word {
        match self {
            Bool::False => Word(Self::TAG),
            Bool::True => Word((1 << BOOL_SHIFT) | Self::TAG),
        }
    }

    fn untag(word: Word) -> Self {
        Bool::from(word.0 >> BOOL_SHIFT != 0)
    }
}

impl From<Value> for Word {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(int) => int.tag(),
            Value::Char(char) => char.tag(),
            Value::Bool(bool) => bool.tag(),
        }
    }
}
