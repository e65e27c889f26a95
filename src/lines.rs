use std::io::{self, BufRead, Read};

/// Size of the line buffer, terminator included
pub const MAX_LINE: usize = 128;

/// Maximum data bytes per line
pub const MAX_LINE_DATA: usize = MAX_LINE - 1;

/// Bounded line reader for the line-oriented engines.
///
/// Yields lines without their trailing `\n`. A line longer than
/// [`MAX_LINE_DATA`] comes out as consecutive chunks of at most that size.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(MAX_LINE),
        }
    }

    /// Read the next line, or `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let read = (&mut self.reader)
            .take(MAX_LINE_DATA as u64)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        } else if self.buf.len() == MAX_LINE_DATA {
            // Split exactly at the terminator: swallow it with this chunk
            let next = self.reader.fill_buf()?;
            if next.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        Ok(Some(self.buf.as_slice()))
    }
}
