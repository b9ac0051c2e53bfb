use crate::buffer::TextBuffer;
use crate::error::JsonTidyError;

/// Spaces emitted per nesting level.
const INDENT_WIDTH: usize = 4;

/// Streaming reindent state: bracket depth plus string-literal tracking.
///
/// The scanner looks at one byte at a time and never backtracks. Inside a
/// string literal every byte is copied untouched; the `escaped` flag only
/// exists so an escaped `"` does not end the literal. Outside a literal,
/// structural punctuation is rewritten into the indented layout and all
/// original whitespace is dropped.
#[derive(Debug, Default)]
struct Scanner {
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl Scanner {
    fn step(&mut self, byte: u8, out: &mut TextBuffer) -> Result<(), JsonTidyError> {
        if self.in_string {
            out.push(byte)?;
            if self.escaped {
                self.escaped = false;
            } else if byte == b'\\' {
                self.escaped = true;
            } else if byte == b'"' {
                self.in_string = false;
            }
            return Ok(());
        }

        match byte {
            b'"' => {
                self.in_string = true;
                out.push(byte)?;
            }
            b'{' | b'[' => {
                out.push(byte)?;
                out.push(b'\n')?;
                self.depth += 1;
                out.pad(self.depth * INDENT_WIDTH)?;
            }
            b'}' | b']' => {
                out.push(b'\n')?;
                // Clamped so stray closers cannot drive the indent negative.
                self.depth = self.depth.saturating_sub(1);
                out.pad(self.depth * INDENT_WIDTH)?;
                out.push(byte)?;
            }
            b',' => {
                out.push(byte)?;
                out.push(b'\n')?;
                out.pad(self.depth * INDENT_WIDTH)?;
            }
            b':' => {
                out.push(byte)?;
                out.push(b' ')?;
            }
            b' ' | b'\t' | b'\n' | b'\r' => {}
            _ => out.push(byte)?,
        }
        Ok(())
    }
}

/// Reindents raw bytes in a single pass.
///
/// The input is treated as opaque 8-bit units: it is not validated as
/// UTF-8 or as JSON, and anything unrecognized passes through untouched.
/// The only possible failure is [`JsonTidyError::OutOfMemory`].
pub fn reformat_bytes(input: &[u8]) -> Result<Vec<u8>, JsonTidyError> {
    let mut scanner = Scanner::default();
    let mut out = TextBuffer::new();
    for &byte in input {
        scanner.step(byte, &mut out)?;
    }
    Ok(out.into_bytes())
}

/// Reindents a string in a single pass.
///
/// Same behavior as [`reformat_bytes`]; empty input yields an empty
/// string, and no trailing newline is appended.
///
/// ```
/// let output = jsontidy::reformat(r#"{"a":1}"#).unwrap();
/// assert_eq!(output, "{\n    \"a\": 1\n}");
/// ```
pub fn reformat(input: &str) -> Result<String, JsonTidyError> {
    let out = reformat_bytes(input.as_bytes())?;
    // SAFETY: the scanner copies input bytes in order and only ever inserts
    // or removes ASCII, so it cannot split a multi-byte sequence: output of
    // str input is always valid UTF-8.
    debug_assert!(std::str::from_utf8(&out).is_ok());
    Ok(unsafe { String::from_utf8_unchecked(out) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_never_goes_negative() {
        assert_eq!(reformat("}}}").unwrap(), "\n}\n}\n}");
        assert_eq!(reformat("]]]").unwrap(), "\n]\n]\n]");
        assert_eq!(reformat("}[1]").unwrap(), "\n}[\n    1\n]");
    }

    #[test]
    fn escaped_quote_keeps_string_open() {
        assert_eq!(reformat(r#""x\"y""#).unwrap(), r#""x\"y""#);
    }

    #[test]
    fn paired_backslashes_do_not_escape_the_closing_quote() {
        // Two backslashes escape each other, so the quote after them ends
        // the literal and the colon beyond it is structural again.
        assert_eq!(reformat(r#""a\\":1"#).unwrap(), "\"a\\\\\": 1");
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        assert_eq!(reformat(r#""abc { , :"#).unwrap(), r#""abc { , :"#);
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let out = reformat_bytes(b"[\"\xFF\"]").unwrap();
        assert_eq!(out, b"[\n    \"\xFF\"\n]");
    }
}
