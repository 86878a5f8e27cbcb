//! Full-line comment removal
//!
//! Configuration files are JSON with `//` comments on their own lines.
//! Only lines whose first non-whitespace characters are `//` are removed;
//! a `//` later in a line (for example inside a string value) is kept.

use crate::error::{Error, Result};

const LINE_COMMENT: &str = "//";

/// Document text with comment lines removed.
///
/// Keeps the original 1-based line number of every surviving line so that
/// parse errors can point at the user's file rather than the stripped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedText {
    text: String,
    origin_lines: Vec<usize>,
}

impl StrippedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Map a 1-based line in the stripped text back to the original document.
    ///
    /// Lines past the end (serde_json reports EOF errors there) map to the
    /// line after the last kept line.
    pub fn original_line(&self, stripped_line: usize) -> usize {
        match stripped_line.checked_sub(1) {
            Some(idx) => match self.origin_lines.get(idx) {
                Some(&line) => line,
                None => self.origin_lines.last().map_or(stripped_line, |last| last + 1),
            },
            None => 0,
        }
    }
}

/// Decode raw configuration bytes.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::Encoding {
        valid_up_to: e.valid_up_to(),
    })
}

/// Split on `\r\n`, `\n`, or a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest.filter(|r| !r.is_empty())?;
        match current.find(['\r', '\n']) {
            Some(idx) => {
                let terminator = if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[idx + terminator..]);
                Some(&current[..idx])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Remove full-line `//` comments. Every kept line ends with `\n`.
pub fn strip_comments(text: &str) -> StrippedText {
    let mut out = String::with_capacity(text.len());
    let mut origin_lines = Vec::new();

    for (idx, line) in split_lines(text).enumerate() {
        if line.trim_start().starts_with(LINE_COMMENT) {
            continue;
        }
        out.push_str(line);
        out.push('\n');
        origin_lines.push(idx + 1);
    }

    StrippedText {
        text: out,
        origin_lines,
    }
}
