use std::fmt::Display;
use std::io::{self, Write};

use super::*;

impl Display for Int {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Char {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#\\{}", char::from(self.0))
    }
}

impl Display for Bool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bool::True => write!(f, "#t"),
            Bool::False => write!(f, "#f"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(int) => write!(f, "{int}"),
            Value::Char(char) => write!(f, "{char}"),
            Value::Bool(bool) => write!(f, "{bool}"),
        }
    }
}

impl Value {
    /// Writes the printed form of the value. Characters go out as the raw
    /// byte, so codes above 0x7f are not re-encoded as UTF-8.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Value::Char(Char(byte)) => {
                out.write_all(b"#\\")?;
                out.write_all(&[*byte])
            }
            value => write!(out, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: Value) -> Vec<u8> {
        let mut out = Vec::new();
        value.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_display_int() {
        assert_eq!(Value::Int(Int::new(-17).unwrap()).to_string(), "-17");
        assert_eq!(Value::Int(Int::new(17).unwrap()).to_string(), "17");
    }

    #[test]
    fn test_display_char() {
        assert_eq!(Value::Char(Char(b'A')).to_string(), "#\\A");
        assert_eq!(Value::Char(Char(0xE9)).to_string(), "#\\é");
    }

    #[test]
    fn test_display_bool() {
        assert_eq!(Value::Bool(Bool::True).to_string(), "#t");
        assert_eq!(Value::Bool(Bool::False).to_string(), "#f");
    }

    #[test]
    fn test_write_char_as_raw_byte() {
        for byte in 0..=u8::MAX {
            assert_eq!(render(Value::Char(Char(byte))), vec![b'#', b'\\', byte]);
        }
    }

    #[test]
    fn test_write_matches_display_for_ascii() {
        let values = [
            Value::Int(Int::MIN),
            Value::Char(Char(b'z')),
            Value::Bool(Bool::True),
        ];

        for value in values {
            assert_eq!(render(value), value.to_string().into_bytes());
        }
    }
}
