use super::options::SubtitleOptions;
use crate::errors::SubDemuxResult;
use crate::formats::{detect_format, CueCodec, FormatSelection, SubtitleFormat};
use crate::parsers::{parse_all, ParseSession};
use crate::streams::LineSource;
use crate::text::LineStore;
use crate::timeline::{CueSink, CueTimeline, PaceStatus};
use log::{debug, info};

/// A fully parsed subtitle track ready for clock driven playback.
#[derive(Debug)]
pub struct SubtitleDemuxer {
    format: SubtitleFormat,
    header: Option<String>,
    timeline: CueTimeline,
    delay: i64,
    next_demux_time: i64,
}

impl SubtitleDemuxer {
    /// Detect (or take the forced) format, load every line of `source` and
    /// parse it to the end.
    pub fn open<L: LineSource + ?Sized>(
        source: &mut L,
        options: &SubtitleOptions,
    ) -> SubDemuxResult<Self> {
        let format = match options.format {
            FormatSelection::Forced(format) => {
                info!("Forced subtitle format: {}", format.name());
                format
            }
            FormatSelection::Auto => detect_format(source)?,
        };

        let lines = LineStore::load(source)?;
        let mut session = ParseSession::new(
            lines,
            format,
            options.frame_duration(),
            options.fps_locked(),
        );

        let mut timeline = CueTimeline::new();
        parse_all(&mut session, &mut timeline)?;
        let duration = timeline.finalize();
        debug!("Subtitle track duration: {} us", duration);

        Ok(Self {
            format,
            header: session.header,
            timeline,
            delay: options.delay,
            next_demux_time: 0,
        })
    }

    pub fn format(&self) -> SubtitleFormat {
        self.format
    }

    pub fn codec(&self) -> CueCodec {
        self.format.codec()
    }

    /// Script header of SSA/ASS tracks
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn timeline(&self) -> &CueTimeline {
        &self.timeline
    }

    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    pub fn delay(&self) -> i64 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: i64) {
        self.delay = delay;
    }

    /// Total duration in microseconds
    pub fn length(&self) -> i64 {
        self.timeline.duration()
    }

    /// Start of the next cue to be played
    pub fn time(&self) -> Option<i64> {
        self.timeline.current_start_time()
    }

    /// Seek to the first cue at or after `time`. `false` when there is none.
    pub fn set_time(&mut self, time: i64) -> bool {
        self.timeline.seek_to_time(time).is_some()
    }

    pub fn position(&self) -> f64 {
        self.timeline.current_fraction()
    }

    pub fn set_position(&mut self, fraction: f64) -> bool {
        self.timeline.seek_to_fraction(fraction).is_some()
    }

    /// Deadline used by the next `demux` call
    pub fn set_next_demux_time(&mut self, time: i64) {
        self.next_demux_time = time;
    }

    /// Send every cue due before the stored deadline to `sink`.
    ///
    /// Without a deadline only the cue under the cursor is released.
    pub fn demux<S: CueSink + ?Sized>(&mut self, sink: &mut S) -> PaceStatus {
        let Some(current_start) = self.timeline.current_start_time() else {
            return PaceStatus::Exhausted;
        };

        let mut deadline = self.next_demux_time - self.delay;
        if deadline <= 0 {
            deadline = current_start + 1;
        }

        let status = self.timeline.pace(deadline, self.delay, sink);
        self.next_demux_time = 0;
        status
    }
}
