pub mod detector;
pub mod registry;
pub mod types;

pub use detector::{detect_format, detect_format_from_lines, match_line, sniff_format, LineMatch};
pub use registry::{lookup, FormatDescriptor, FORMAT_REGISTRY};
pub use types::{CueCodec, FormatSelection, SubtitleFormat};
