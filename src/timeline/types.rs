use serde::Serialize;

/// One timed subtitle record. Times are microseconds; a `stop` of 0 means
/// "until the next cue".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cue {
    pub start: i64,
    pub stop: i64,
    pub text: String,
}

impl Cue {
    pub fn new(start: i64, stop: i64, text: impl Into<String>) -> Self {
        Self {
            start,
            stop,
            text: text.into(),
        }
    }

    /// Known display length, if the cue has an explicit stop.
    pub fn duration(&self) -> Option<i64> {
        (self.stop > 0).then(|| self.stop - self.start)
    }
}

/// A cue as handed downstream: shifted timestamp and UTF-8 payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueBlock {
    /// Presentation time in microseconds, with the configured delay applied
    pub pts: i64,
    pub duration: Option<i64>,
    pub payload: Vec<u8>,
}

/// Outcome of a pacing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceStatus {
    MoreData,
    Exhausted,
}

/// Receiver for emitted cue blocks
#[cfg_attr(test, mockall::automock)]
pub trait CueSink {
    fn send(&mut self, block: CueBlock);
}

impl CueSink for Vec<CueBlock> {
    fn send(&mut self, block: CueBlock) {
        self.push(block);
    }
}
