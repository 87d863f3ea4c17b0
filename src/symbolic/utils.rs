//! Bounded rendering of expressions into caller-owned byte buffers.
//!
//! `Display` gives an unbounded `String`. For callers that hand over a fixed buffer,
//! `write_to_buffer` renders the same text but never writes past the buffer: the text is
//! cut at `len - 1` bytes and a `0` byte is stored right after it.
use crate::symbolic::symbolic_engine::Expr;
use std::fmt::{self, Write};

/// `fmt::Write` sink over a byte slice that silently drops what does not fit.
///
/// One byte of the slice is always kept for the terminating zero. Truncation happens on
/// a character boundary and, once it happened, every later write is ignored, so the
/// stored text is always a prefix of the full rendering.
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        BoundedWriter {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// Bytes available for text, terminator excluded.
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Bytes of text written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Writes the terminating zero and returns the text length.
    pub fn finish(self) -> usize {
        if let Some(terminator) = self.buf.get_mut(self.pos) {
            *terminator = 0;
        }
        self.pos
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let room = self.capacity() - self.pos;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
        if take < s.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

impl Expr {
    /// Renders the expression into `buffer`, zero-terminated, and returns the text length.
    ///
    /// At most `buffer.len() - 1` bytes of text are written. An empty buffer is left
    /// alone and 0 is returned.
    pub fn write_to_buffer(&self, buffer: &mut [u8]) -> usize {
        if buffer.is_empty() {
            return 0;
        }
        let mut writer = BoundedWriter::new(buffer);
        // the writer never fails, overflow is dropped
        let _ = write!(writer, "{}", self);
        writer.finish()
    }

    /// Same text as `write_to_buffer` with a buffer of `capacity` bytes, as a `String`.
    pub fn to_string_bounded(&self, capacity: usize) -> String {
        let mut buffer = vec![0u8; capacity];
        let len = self.write_to_buffer(&mut buffer);
        buffer.truncate(len);
        match String::from_utf8(buffer) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}
