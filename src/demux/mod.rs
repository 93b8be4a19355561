pub mod demuxer;
pub mod options;

pub use demuxer::SubtitleDemuxer;
pub use options::SubtitleOptions;
