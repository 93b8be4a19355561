use super::types::Cue;
use crate::errors::SubDemuxResult;
use log::debug;

/// Parsed cues in parse order, with a playback cursor.
///
/// Cues are not re-sorted: seeking assumes start times are non-decreasing,
/// as they are in well-formed files.
#[derive(Debug, Default, Clone)]
pub struct CueTimeline {
    cues: Vec<Cue>,
    cursor: usize,
    duration: i64,
}

impl CueTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cue, reporting allocation failure instead of aborting.
    pub fn append(&mut self, cue: Cue) -> SubDemuxResult<()> {
        self.cues.try_reserve(1)?;
        self.cues.push(cue);
        Ok(())
    }

    /// Compute and cache the total duration.
    ///
    /// The stop of the last cue, or its start + 1 when that stop is unset.
    pub fn finalize(&mut self) -> i64 {
        self.duration = match self.cues.last() {
            Some(last) if last.stop <= 0 => last.start + 1,
            Some(last) => last.stop,
            None => 0,
        };
        debug!(
            "Timeline has {} cues, duration {} us",
            self.cues.len(),
            self.duration
        );
        self.duration
    }

    /// Value computed by the last `finalize`
    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cues.len()
    }

    pub(crate) fn advance(&mut self) {
        self.cursor += 1;
    }

    pub(crate) fn current(&self) -> Option<&Cue> {
        self.cues.get(self.cursor)
    }

    /// Move the cursor to the first cue starting at or after `time`.
    ///
    /// Returns `None` when every cue starts before `time`; the cursor is then
    /// left past the end.
    pub fn seek_to_time(&mut self, time: i64) -> Option<usize> {
        self.cursor = self
            .cues
            .iter()
            .position(|cue| cue.start >= time)
            .unwrap_or(self.cues.len());
        (!self.is_exhausted()).then_some(self.cursor)
    }

    /// Seek to `fraction` of the total duration.
    pub fn seek_to_fraction(&mut self, fraction: f64) -> Option<usize> {
        let target = (fraction * self.duration as f64) as i64;
        self.seek_to_time(target)
    }

    /// Start of the cue under the cursor.
    pub fn current_start_time(&self) -> Option<i64> {
        self.current().map(|cue| cue.start)
    }

    /// Playback position in `[0, 1]`; 1.0 once the cursor is past the end.
    pub fn current_fraction(&self) -> f64 {
        match self.current() {
            Some(cue) if self.duration > 0 => cue.start as f64 / self.duration as f64,
            Some(_) => 0.0,
            None => 1.0,
        }
    }
}
