use log::info;

pub mod text;
pub use text::{LineStore, Scanner};

pub mod streams;
pub use streams::{
    seekable_http_stream, seekable_stream, LineReader, LineSource, LocalSeekableStream,
    SeekableHttpStream, SeekableStream, VecLineSource,
};

pub mod formats;
pub use formats::{detect_format, CueCodec, FormatSelection, SubtitleFormat, FORMAT_REGISTRY};

pub mod parsers;
pub use parsers::{CueParser, ParseSession};

pub mod timeline;
pub use timeline::{Cue, CueBlock, CueSink, CueTimeline, PaceStatus};

pub mod demux;
pub use demux::{SubtitleDemuxer, SubtitleOptions};

pub mod errors;
pub use errors::{StreamError, SubDemuxError, SubDemuxResult};

macro_rules! with_line_reader {
    ($source:expr, $body:expr) => {
        if $source.starts_with("http://") || $source.starts_with("https://") {
            let stream = SeekableHttpStream::new($source.to_string())?;
            let mut reader = LineReader::new(stream);
            let result = $body(&mut reader);
            let stream = reader.get_ref();
            info!(
                "Fetched {} bytes of {} in {} HTTP requests",
                stream.bytes_fetched(),
                stream.url(),
                stream.request_count()
            );
            result
        } else {
            let stream = LocalSeekableStream::open($source)?;
            $body(&mut LineReader::new(stream))
        }
    };
}

/// Open a subtitle file from a local path or an `http(s)://` URL and parse it.
pub fn open_subtitles(source: &str, options: &SubtitleOptions) -> SubDemuxResult<SubtitleDemuxer> {
    with_line_reader!(source, |reader| SubtitleDemuxer::open(reader, options))
}

/// Format microseconds as an SRT style `HH:MM:SS,mmm` timestamp.
pub fn format_timestamp(us: i64) -> String {
    let sign = if us < 0 { "-" } else { "" };
    let ms = us.unsigned_abs() / 1_000;
    format!(
        "{}{:02}:{:02}:{:02},{:03}",
        sign,
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}
