pub mod cue_timeline;
pub mod pacing;
pub mod types;

pub use cue_timeline::CueTimeline;
pub use types::{Cue, CueBlock, CueSink, PaceStatus};
