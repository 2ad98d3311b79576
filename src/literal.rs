//! Parsers for the text the inspector accepts: raw words and scheme
//! literals for immediate values.

use crate::error::RuntimeError;
use crate::runtime::{Bool, Char, Int, Value, Word};

/// Parses a raw word written in decimal, or in hex or binary with a `0x`
/// or `0b` prefix. Hex and binary words are read as the bit pattern, so
/// `0xfffffffffffffffc` is the same word as `-4` on a 64 bit target.
pub fn parse_word(input: &str) -> crate::Result<Word> {
    let trimmed = input.trim();
    let digits = trimmed.replace('_', "");
    let invalid = || RuntimeError::InvalidWord(trimmed.to_string());

    if let Some(hex) = strip_radix(&digits, "0x") {
        usize::from_str_radix(hex, 16)
            .map(|bits| Word(bits as isize))
            .map_err(|_| invalid())
    } else if let Some(bin) = strip_radix(&digits, "0b") {
        usize::from_str_radix(bin, 2)
            .map(|bits| Word(bits as isize))
            .map_err(|_| invalid())
    } else {
        digits.parse::<isize>().map(Word).map_err(|_| invalid())
    }
}

fn strip_radix<'a>(digits: &'a str, prefix: &str) -> Option<&'a str> {
    digits
        .strip_prefix(prefix)
        .or_else(|| digits.strip_prefix(&prefix.to_uppercase()))
}

/// Character names understood after `#\`, as in R7RS.
const CHAR_NAMES: [(&str, char); 10] = [
    ("alarm", '\x07'),
    ("backspace", '\x08'),
    ("delete", '\x7f'),
    ("escape", '\x1b'),
    ("newline", '\n'),
    ("null", '\0'),
    ("nul", '\0'),
    ("return", '\r'),
    ("space", ' '),
    ("tab", '\t'),
];

/// Parses a scheme literal for an immediate value: an integer, `#t`, `#f`
/// or a character such as `#\A`, `#\space` or `#\ `.
pub fn parse_literal(input: &str) -> crate::Result<Value> {
    let start = input.trim_start();
    let trimmed = start.trim_end();
    let invalid = || RuntimeError::InvalidLiteral(trimmed.to_string());

    match trimmed {
        "#t" => return Ok(Value::Bool(Bool::True)),
        "#f" => return Ok(Value::Bool(Bool::False)),
        _ => {}
    }

    if let Some(rest) = start.strip_prefix("#\\") {
        let name = rest.trim_end();
        let named = CHAR_NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, code)| *code);

        let code = match named {
            Some(code) => code,
            // A whitespace character written as itself, which is how the
            // runtime prints it.
            None if name.is_empty() => rest.chars().next().ok_or_else(invalid)?,
            None => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(invalid()),
                }
            }
        };

        return u8::try_from(u32::from(code))
            .map(|byte| Value::Char(Char(byte)))
            .map_err(|_| invalid());
    }

    let int = trimmed.parse::<isize>().map_err(|_| invalid())?;
    Ok(Value::Int(Int::new(int)?))
}
