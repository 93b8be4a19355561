use crate::errors::{StreamError, SubDemuxError, SubDemuxResult};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_LENGTH, RANGE};
use reqwest::StatusCode;
use std::io::{self, Read, Seek, SeekFrom};
use std::time::Duration;

/// Remote subtitle file read through HTTP range requests.
///
/// Each miss fetches a window of at least `WINDOW_SIZE` bytes starting at the
/// read position. Rewinding into the current window (the sniff then load
/// pattern for small files) is served without another request.
pub struct SeekableHttpStream {
    url: String,
    client: Client,
    length: u64,
    position: u64,
    window: Vec<u8>,
    window_start: u64,
    request_count: u64,
    bytes_fetched: u64,
}

impl SeekableHttpStream {
    const WINDOW_SIZE: usize = 4096;

    /// Connect to `url` and learn the file size with a HEAD request.
    pub fn new(url: String) -> SubDemuxResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StreamError::new(e.to_string()))?;

        let mut stream = Self {
            url,
            client,
            length: 0,
            position: 0,
            window: Vec::new(),
            window_start: 0,
            request_count: 0,
            bytes_fetched: 0,
        };
        stream.length = stream.probe_length()?;
        Ok(stream)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Content length reported by the server.
    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn bytes_fetched(&self) -> u64 {
        self.bytes_fetched
    }

    fn probe_length(&mut self) -> SubDemuxResult<u64> {
        let response = self
            .client
            .head(&self.url)
            .send()
            .map_err(|e| StreamError::new(e.to_string()))?;
        self.request_count += 1;

        if !response.status().is_success() {
            return Err(SubDemuxError::Stream(StreamError::new(format!(
                "HTTP error: {}",
                response.status()
            ))));
        }

        let length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| StreamError::new("Content-Length header not found or invalid"))?;

        debug!("{} reports {} bytes", self.url, length);
        Ok(length)
    }

    /// Fetch up to `count` bytes at `from`, clipped to the content length.
    fn fetch_range(&mut self, from: u64, count: usize) -> SubDemuxResult<Vec<u8>> {
        let count = count.min(self.length.saturating_sub(from) as usize);
        if count == 0 {
            return Ok(Vec::new());
        }

        let to = from + count as u64 - 1;
        let response = self
            .client
            .get(&self.url)
            .header(RANGE, format!("bytes={}-{}", from, to))
            .send()
            .map_err(|e| StreamError::new(e.to_string()))?;
        self.request_count += 1;

        let status = response.status();
        if status == StatusCode::RANGE_NOT_SATISFIABLE {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SubDemuxError::Stream(StreamError::new(format!(
                "HTTP error: {}",
                status
            ))));
        }

        let mut bytes = response
            .bytes()
            .map_err(|e| StreamError::new(e.to_string()))?
            .to_vec();
        bytes.truncate(count);
        self.bytes_fetched += bytes.len() as u64;
        debug!("GET {} bytes={}-{}: {} bytes", self.url, from, to, bytes.len());
        Ok(bytes)
    }

    fn window_covers(&self, position: u64) -> bool {
        position >= self.window_start && position < self.window_start + self.window.len() as u64
    }
}

impl Read for SeekableHttpStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || self.position >= self.length {
            return Ok(0);
        }

        if !self.window_covers(self.position) {
            let want = buf.len().max(Self::WINDOW_SIZE);
            self.window = self.fetch_range(self.position, want)?;
            self.window_start = self.position;
            if self.window.is_empty() {
                return Ok(0);
            }
        }

        let from = (self.position - self.window_start) as usize;
        let count = buf.len().min(self.window.len() - from);
        buf[..count].copy_from_slice(&self.window[from..from + count]);
        self.position += count as u64;
        Ok(count)
    }
}

impl Seek for SeekableHttpStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(offset) => {
                self.position = offset;
                return Ok(offset);
            }
            SeekFrom::End(offset) => (self.length, offset),
            SeekFrom::Current(offset) => (self.position, offset),
        };

        self.position = base.checked_add_signed(offset).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek before start of stream")
        })?;
        Ok(self.position)
    }
}
