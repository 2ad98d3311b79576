use crate::error::DecodeError;

use super::*;

impl Word {
    /// Recovers the immediate this word holds. Tags are tried from the
    /// cheapest test to the most specific one, and a word that matches none
    /// of them is an error rather than being skipped.
    pub fn classify(self) -> Result<Value, DecodeError> {
        if Int::matches(self) {
            Ok(Value::Int(Int::untag(self)))
        } else if Char::matches(self) {
            Ok(Value::Char(Char::untag(self)))
        } else if Bool::matches(self) {
            Ok(Value::Bool(Bool::untag(self)))
        } else if let Some(kind) = HeapTag::of(self) {
            Err(DecodeError::ReservedTag { word: self, kind })
        } else {
            Err(DecodeError::UnknownTag { word: self })
        }
    }
}

impl TryFrom<Word> for Value {
    type Error = DecodeError;

    fn try_from(word: Word) -> Result<Self, Self::Error> {
        word.classify()
    }
}
