use std::io::{self, Read, Seek};
use std::path::Path;

/// A seekable byte stream a subtitle file can be read and re-read from.
pub trait SeekableStream: Read + Seek {
    /// Network round trips made so far, zero for local sources.
    fn request_count(&self) -> u64 {
        0
    }
}

use super::SeekableHttpStream;
impl SeekableStream for SeekableHttpStream {
    fn request_count(&self) -> u64 {
        SeekableHttpStream::request_count(self)
    }
}

/// Local file wrapper
#[derive(Debug)]
pub struct LocalSeekableStream(std::fs::File);
impl LocalSeekableStream {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalSeekableStream(std::fs::File::open(path)?))
    }
}
impl Read for LocalSeekableStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}
impl Seek for LocalSeekableStream {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }
}
impl SeekableStream for LocalSeekableStream {}

// In-memory subtitles (tests, callers that already hold the bytes)
impl<T: AsRef<[u8]>> SeekableStream for io::Cursor<T> {}
