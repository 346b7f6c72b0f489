//! Line-based prompting over any reader/writer pair, so the binary can use
//! stdin/stdout and tests can use in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{SimError, SimResult};
use crate::io::date::days_since_j2000;

/// Write `prompt`, read one line, return it without the line ending.
/// End of input is an `UnexpectedEof` error.
pub fn get_string<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> SimResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no input").into());
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Ask for a date until one parses; returns days since J2000
pub fn get_date<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> SimResult<f64> {
    loop {
        let text = get_string(input, output, "Enter start date (YYYY-MM-DD): ")?;
        match days_since_j2000(&text) {
            Ok(days) => return Ok(days),
            Err(SimError::InvalidDate { reason, .. }) => {
                writeln!(output, "Could not read '{}' as a date: {reason}", text.trim())?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_one_line_after_prompt() {
        let mut input = Cursor::new("Mars\r\nVenus\n");
        let mut out = Vec::new();
        let s = get_string(&mut input, &mut out, "Body: ").unwrap();
        assert_eq!(s, "Mars");
        assert_eq!(String::from_utf8(out).unwrap(), "Body: ");
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(matches!(get_string(&mut input, &mut out, "> "), Err(SimError::Io(_))));
    }

    #[test]
    fn date_prompt_retries_until_valid() {
        let mut input = Cursor::new("not a date\n2000-01-02\n");
        let mut out = Vec::new();
        let days = get_date(&mut input, &mut out).unwrap();
        assert!((days - 0.5).abs() < 1e-6);
        assert!(String::from_utf8(out).unwrap().contains("Could not read 'not a date'"));
    }
}
