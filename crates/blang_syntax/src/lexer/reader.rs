//! Character reader over a byte stream.
//!
//! Decodes UTF-8 one scalar value at a time from any [`BufRead`] and supports pushing back a single
//! character, which is all the lexer's maximal-munch scanning needs.

use std::io::{self, BufRead};

pub(crate) struct CharReader<R> {
    inner: R,
    pushed_back: Option<char>,
}

impl<R: BufRead> CharReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            pushed_back: None,
        }
    }

    /// Read the next character, or `None` once the stream is exhausted.
    ///
    /// ## Errors
    /// Propagates I/O failures of the underlying reader. Malformed UTF-8 is reported as
    /// [`io::ErrorKind::InvalidData`].
    pub(crate) fn read_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pushed_back.take() {
            return Ok(Some(c));
        }

        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };

        let width = utf8_width(first).ok_or_else(|| invalid_data(format!("invalid UTF-8 lead byte 0x{first:02x}")))?;
        let mut buf = [first, 0, 0, 0];
        for slot in &mut buf[1..width] {
            *slot = self
                .read_byte()?
                .ok_or_else(|| invalid_data("truncated UTF-8 sequence".to_string()))?;
        }

        let decoded = std::str::from_utf8(&buf[..width]).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(decoded.chars().next())
    }

    /// Push `c` back so the next [`read_char`](Self::read_char) returns it again.
    ///
    /// Only one character of push-back is supported.
    pub(crate) fn unread(&mut self, c: char) {
        debug_assert!(self.pushed_back.is_none(), "only one character of push-back is supported");
        self.pushed_back = Some(c);
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.inner.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.inner.consume(1);
            }
            return Ok(byte);
        }
    }
}

/// Encoded length of a UTF-8 sequence, judged by its lead byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
