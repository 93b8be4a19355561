pub mod aqt;
pub mod dvdsubtitle;
pub mod jacosub;
pub mod microdvd;
pub mod mpl2;
pub mod mpsub;
pub mod pjs;
pub mod sami;
pub mod session;
pub mod ssa;
pub mod subrip;
pub mod vplayer;

#[cfg(test)]
mod unit_test;

pub use aqt::AqTitleParser;
pub use dvdsubtitle::DvdSubtitleParser;
pub use jacosub::JacoSubParser;
pub use microdvd::MicroDvdParser;
pub use mpl2::Mpl2Parser;
pub use mpsub::MpSubParser;
pub use pjs::PjsParser;
pub use sami::SamiParser;
pub use session::{frame_duration_for, ParseSession, DEFAULT_FRAME_DURATION};
pub use ssa::SsaParser;
pub use subrip::{SubRipParser, SubViewerParser};
pub use vplayer::VPlayerParser;

use crate::errors::SubDemuxResult;
use crate::text::LineStore;
use crate::timeline::{Cue, CueTimeline};
use log::info;

/// Grammar of one subtitle format.
///
/// Implementations consume lines from the session's store and return the next
/// cue, or `None` once no further cue can be formed. Lines that fit no part of
/// the grammar are skipped.
pub trait CueParser: Sync {
    /// `index` is the number of cues parsed so far in this session.
    fn parse_one(&self, session: &mut ParseSession, index: usize) -> Option<Cue>;
}

/// Run the session's parser until end of input, appending every cue to `timeline`.
pub fn parse_all(session: &mut ParseSession, timeline: &mut CueTimeline) -> SubDemuxResult<usize> {
    let parser = session.format.parser();
    let before = timeline.len();
    while let Some(cue) = parser.parse_one(session, timeline.len()) {
        timeline.append(cue)?;
    }
    let parsed = timeline.len() - before;
    info!("Loaded {} subtitles", parsed);
    Ok(parsed)
}

/// Read lines into a newline-terminated block until an empty line.
///
/// End of input closes a non-empty block; an empty one yields `None`.
pub(crate) fn read_text_block(lines: &mut LineStore) -> Option<String> {
    let mut text = String::new();
    loop {
        match lines.next_line() {
            Some("") => return Some(text),
            Some(line) => {
                text.push_str(line);
                text.push('\n');
            }
            None if text.is_empty() => return None,
            None => return Some(text),
        }
    }
}

/// `|` is the line separator of the single-line formats.
pub(crate) fn pipes_to_newlines(text: &str) -> String {
    text.replace('|', "\n")
}

/// Microseconds from clock fields, where `millis` is already in milliseconds.
pub(crate) fn clock_to_us(hours: i32, minutes: i32, seconds: i32, millis: i64) -> i64 {
    (i64::from(hours) * 3_600_000 + i64::from(minutes) * 60_000 + i64::from(seconds) * 1_000 + millis)
        * 1_000
}
