use std::io::{self, Write};

use clap::Parser;
use miette::Report;

use crate::literal::{parse_literal, parse_word};
use crate::runtime::Word;

/// Decodes tagged words and encodes scheme literals, the same way the
/// runtime and the compiler do.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Words to decode, in decimal or with a 0x or 0b prefix.
    #[arg(allow_negative_numbers = true)]
    pub words: Vec<String>,

    /// Prints the tagged word for a literal such as 42, #\A or #t.
    #[arg(short, long, allow_hyphen_values = true)]
    pub encode: Option<String>,

    /// Starts a repl session.
    #[arg(short, long)]
    pub repl: bool,

    /// Shows the word and the value's type next to the printed value.
    #[arg(short, long)]
    pub debug: bool,
}

impl Options {
    pub fn decode(&self, input: &str) -> crate::Result<String> {
        let word = parse_word(input)?;
        let value = word.classify()?;

        if self.debug {
            Ok(format!("{word} {} {value}", value.kind()))
        } else {
            Ok(value.to_string())
        }
    }

    pub fn encode(&self, input: &str) -> crate::Result<String> {
        let value = parse_literal(input)?;
        let word = Word::from(value);

        if self.debug {
            Ok(format!("{word} {} {}", value.kind(), word.0))
        } else {
            Ok(word.to_string())
        }
    }

    /// Handles one repl line: `:encode <literal>` or a word to decode. A
    /// blank line gives back an empty answer.
    pub fn eval_line(&self, line: &str) -> crate::Result<String> {
        // Only the front is trimmed, `#\ ` ends in the character it names.
        let line = line.trim_start();

        match line.split_once(char::is_whitespace) {
            Some((":encode", literal)) => self.encode(literal),
            _ if line.is_empty() => Ok(String::new()),
            _ => self.decode(line),
        }
    }

    /// Runs the inputs given on the command line: the literal to encode,
    /// then every word. A failing input does not stop the ones after it.
    pub fn run_inputs<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        let encoded = self.encode.iter().map(|literal| self.encode(literal));
        let decoded = self.words.iter().map(|word| self.decode(word));

        for result in encoded.chain(decoded) {
            report(result, out, err)?;
        }

        Ok(())
    }
}

/// Prints an answer to `out`, or the full diagnostic of a failure, code and
/// help included, to `err`.
pub fn report<O: Write, E: Write>(
    result: crate::Result<String>,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match result {
        Ok(text) => writeln!(out, "{text}"),
        Err(error) => writeln!(err, "{:?}", Report::new(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, RuntimeError};

    #[test]
    fn test_options_parse() {
        let options = Options::parse_from(["pasquim-inspect", "-d", "271", "-4"]);
        assert!(options.debug);
        assert_eq!(options.words, vec!["271", "-4"]);
        assert_eq!(options.encode, None);
    }

    #[test]
    fn test_decode() {
        let options = Options::default();
        assert_eq!(options.decode("4").unwrap(), "1");
        assert_eq!(options.decode("0x4107").unwrap(), "#\\A");
        assert_eq!(options.decode("271").unwrap(), "#t");
        assert_eq!(options.decode("15").unwrap(), "#f");
        assert_eq!(options.decode("-4").unwrap(), "-1");
    }

    #[test]
    fn test_decode_debug() {
        let options = Options {
            debug: true,
            ..Options::default()
        };
        assert_eq!(options.decode("271").unwrap(), "0x10f boolean #t");
    }

    #[test]
    fn test_decode_reserved() {
        let options = Options::default();
        assert!(matches!(
            options.decode("0x1001"),
            Err(RuntimeError::Decode(DecodeError::ReservedTag { .. }))
        ));
    }

    #[test]
    fn test_encode() {
        let options = Options::default();
        assert_eq!(options.encode("1").unwrap(), "0x4");
        assert_eq!(options.encode("#\\A").unwrap(), "0x4107");
        assert_eq!(options.encode("#t").unwrap(), "0x10f");
        assert_eq!(options.encode("#f").unwrap(), "0xf");
    }

    #[test]
    fn test_eval_line() {
        let options = Options::default();
        assert_eq!(options.eval_line(":encode #t").unwrap(), "0x10f");
        assert_eq!(options.eval_line("  0x10f ").unwrap(), "#t");
        assert_eq!(options.eval_line("   ").unwrap(), "");
    }

    #[test]
    fn test_run_inputs_continues_after_failure() {
        let options = Options::parse_from(["pasquim-inspect", "-e", "foo", "271", "0xff", "4"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        options.run_inputs(&mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "#t\n1\n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("invalid literal 'foo'"));
        assert!(err.contains("matches no immediate tag"));
    }

    #[test]
    fn test_report_keeps_diagnostic_code() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failure = Options::default().decode("0x1001");

        report(failure, &mut out, &mut err).unwrap();

        assert!(out.is_empty());
        assert!(String::from_utf8(err)
            .unwrap()
            .contains("pasquim::decode::reserved_tag"));
    }

    #[test]
    fn test_eval_line_encodes_brackets() {
        let options = Options::default();
        assert_eq!(options.eval_line(":encode #\\(").unwrap(), "0x2807");
        assert_eq!(options.eval_line(":encode #\\)").unwrap(), "0x2907");
    }

    #[test]
    fn test_eval_line_encodes_space() {
        let options = Options::default();
        assert_eq!(options.eval_line(":encode #\\ ").unwrap(), "0x2007");
    }

    #[test]
    fn test_eval_line_needs_whole_command() {
        let options = Options::default();
        assert!(matches!(
            options.eval_line(":encodefoo"),
            Err(RuntimeError::InvalidWord(_))
        ));
        assert!(matches!(
            options.eval_line(":encode"),
            Err(RuntimeError::InvalidWord(_))
        ));
    }
}
