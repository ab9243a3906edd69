//! Whitespace-delimited console input
//!
//! Answers are read token by token rather than line by line, so "4 10" on one
//! line answers both setup prompts. Bytes that are not valid UTF-8 are
//! replaced rather than reported, so a bad keystroke only spoils one token.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-separated tokens from a buffered reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying reader fails.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}
