pub mod line_reader;
pub mod seekable_http_stream;
pub mod seekable_stream;

pub use line_reader::{LineReader, LineSource, VecLineSource};
pub use seekable_http_stream::SeekableHttpStream;
pub use seekable_stream::{LocalSeekableStream, SeekableStream};
