use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while opening a subtitle stream
#[derive(Debug)]
pub enum SubDemuxError {
    /// The input produced zero lines
    EmptyInput,
    /// No sniffer rule matched within the detection window
    Unrecognized,
    /// Growing the line or cue buffer failed
    OutOfMemory,
    /// A forced format name that is not in the registry
    UnknownFormat(String),
    Stream(StreamError),
    Io(io::Error),
}

/// Byte source specific errors
#[derive(Debug)]
pub struct StreamError {
    pub message: String,
}

impl StreamError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubDemuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubDemuxError::EmptyInput => write!(f, "empty subtitle input"),
            SubDemuxError::Unrecognized => write!(f, "failed to recognize subtitle type"),
            SubDemuxError::OutOfMemory => write!(f, "out of memory"),
            SubDemuxError::UnknownFormat(name) => write!(f, "unknown subtitle format: {}", name),
            SubDemuxError::Stream(err) => write!(f, "Stream error: {}", err),
            SubDemuxError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SubDemuxError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubDemuxError::Stream(err) => Some(err),
            SubDemuxError::Io(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for StreamError {}

// Conversion implementations
impl From<io::Error> for SubDemuxError {
    fn from(err: io::Error) -> Self {
        SubDemuxError::Io(err)
    }
}

impl From<StreamError> for SubDemuxError {
    fn from(err: StreamError) -> Self {
        SubDemuxError::Stream(err)
    }
}

impl From<std::collections::TryReserveError> for SubDemuxError {
    fn from(_: std::collections::TryReserveError) -> Self {
        SubDemuxError::OutOfMemory
    }
}

// Conversion to io::Error for callers that only deal in io::Result
impl From<SubDemuxError> for io::Error {
    fn from(err: SubDemuxError) -> Self {
        match err {
            SubDemuxError::Io(err) => err,
            other => io::Error::other(other),
        }
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with SubDemuxError
pub type SubDemuxResult<T> = Result<T, SubDemuxError>;
