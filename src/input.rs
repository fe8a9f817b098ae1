use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{Result, TallyError};

pub type BoxedCursor = LineCursor<Box<dyn BufRead>>;

/// Opens `path` for line reading, decompressing it when it ends with ".gz".
pub fn open_input<P: AsRef<Path>>(path: P) -> io::Result<BoxedCursor> {
    let path = path.as_ref();
    let f = File::open(path)?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        log::debug!("opening {} as gzip", path.display());
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(LineCursor::new(reader))
}

/// Cursor over standard input.
pub fn open_stdin() -> BoxedCursor {
    LineCursor::new(Box::new(io::stdin().lock()))
}

/// A line reader with one line of lookahead.
///
/// Lines are raw bytes with their terminator still attached, so callers
/// decide how to strip it (see [`strip_terminator`]) and whether to decode
/// them as text.
pub struct LineCursor<R> {
    reader: R,
    peeked: Option<Vec<u8>>,
    exhausted: bool,
    /// Number of lines consumed through `next_line`
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            exhausted: false,
            line_number: 0,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.peeked.is_none() && !self.exhausted {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                self.exhausted = true;
            } else {
                self.peeked = Some(line);
            }
        }
        Ok(())
    }

    /// Look at the next line without consuming it.
    pub fn peek_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.fill()?;
        Ok(self.peeked.as_deref())
    }

    /// Consume the next line. `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        self.fill()?;
        let line = self.peeked.take();
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    /// Discard the next line, returning false if there was none.
    pub fn skip_line(&mut self) -> io::Result<bool> {
        Ok(self.next_line()?.is_some())
    }

    pub fn is_exhausted(&mut self) -> io::Result<bool> {
        self.fill()?;
        Ok(self.peeked.is_none())
    }

    /// 1-based number of the line most recently returned by `next_line`.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Removes exactly one line terminator from the end of `line`.
///
/// `\r\n` counts as a single terminator. Errors when the line does not end
/// with `\n`.
pub fn strip_terminator(line: &[u8], line_number: usize) -> Result<&[u8]> {
    match line.strip_suffix(b"\n") {
        Some(body) => Ok(body.strip_suffix(b"\r").unwrap_or(body)),
        None => Err(TallyError::MissingLineTerminator { line: line_number }),
    }
}
