//! Runs a compiled program: one call into the generated code, one
//! classification, one line of output.

use std::io::Write;

use crate::runtime::{Value, Word};

/// Calls `entry` once, decodes the word it returns and writes the value
/// followed by a newline to `out`. Nothing is written when the word does
/// not decode.
pub fn run<F, W>(entry: F, out: &mut W) -> crate::Result<Value>
where
    F: FnOnce() -> Word,
    W: Write,
{
    let word = entry();
    log::debug!("scheme_entry returned {word}");

    let value = word.classify().map_err(|err| {
        log::error!("cannot decode {word}: {err}");
        err
    })?;
    log::debug!("decoded {word} as {} {value}", value.kind());

    let mut line = Vec::new();
    value.write_to(&mut line)?;
    line.push(b'\n');

    out.write_all(&line)?;
    out.flush()?;

    Ok(value)
}
