use super::SeekableStream;
use crate::errors::SubDemuxResult;
use std::io::{BufRead, BufReader, Seek, SeekFrom};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Sequential text line input that can be restarted from the beginning.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of stream.
    fn read_line(&mut self) -> SubDemuxResult<Option<String>>;

    /// Go back to the first line.
    fn rewind(&mut self) -> SubDemuxResult<()>;
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn read_line(&mut self) -> SubDemuxResult<Option<String>> {
        (**self).read_line()
    }

    fn rewind(&mut self) -> SubDemuxResult<()> {
        (**self).rewind()
    }
}

/// Splits a seekable byte stream into lines.
///
/// `\n` and `\r\n` terminators are stripped, a UTF-8 byte order mark at the
/// start of the stream is dropped and invalid UTF-8 is replaced lossily.
pub struct LineReader<S: SeekableStream> {
    inner: BufReader<S>,
    at_start: bool,
    buf: Vec<u8>,
}

impl<S: SeekableStream> LineReader<S> {
    pub fn new(stream: S) -> Self {
        Self {
            inner: BufReader::new(stream),
            at_start: true,
            buf: Vec::new(),
        }
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }

    pub fn get_ref(&self) -> &S {
        self.inner.get_ref()
    }
}

impl<S: SeekableStream> LineSource for LineReader<S> {
    fn read_line(&mut self) -> SubDemuxResult<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let mut line: &[u8] = &self.buf;
        if self.at_start {
            self.at_start = false;
            line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
        }
        line = line.strip_suffix(b"\n").unwrap_or(line);
        line = line.strip_suffix(b"\r").unwrap_or(line);

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn rewind(&mut self) -> SubDemuxResult<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.at_start = true;
        Ok(())
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Default)]
pub struct VecLineSource {
    lines: Vec<String>,
    next: usize,
}

impl VecLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// Split `text` on line terminators the same way `LineReader` does.
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        Self::new(
            text.split_inclusive('\n')
                .map(|l| l.strip_suffix('\n').unwrap_or(l))
                .map(|l| l.strip_suffix('\r').unwrap_or(l)),
        )
    }
}

impl LineSource for VecLineSource {
    fn read_line(&mut self) -> SubDemuxResult<Option<String>> {
        let line = self.lines.get(self.next).cloned();
        if line.is_some() {
            self.next += 1;
        }
        Ok(line)
    }

    fn rewind(&mut self) -> SubDemuxResult<()> {
        self.next = 0;
        Ok(())
    }
}
