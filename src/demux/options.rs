use crate::formats::FormatSelection;
use crate::parsers::{frame_duration_for, DEFAULT_FRAME_DURATION};
use serde::Deserialize;

/// User facing knobs of a subtitle demuxer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubtitleOptions {
    /// Force a format instead of sniffing the content
    pub format: FormatSelection,
    /// Frame rate of the video the subtitles belong to
    pub movie_fps: Option<f32>,
    /// Frame rate override for frame based formats
    pub fps: Option<f32>,
    /// Presentation delay in microseconds, may be negative
    pub delay: i64,
}

impl SubtitleOptions {
    /// Set the delay from tenths of a second.
    pub fn with_delay_tenths(mut self, tenths: i64) -> Self {
        self.delay = tenths * 100_000;
        self
    }

    fn usable(fps: Option<f32>) -> Option<f32> {
        fps.filter(|fps| *fps >= 1.0)
    }

    /// Microseconds per frame: user override, then movie rate, then 25 fps.
    pub fn frame_duration(&self) -> i64 {
        Self::usable(self.fps)
            .or(Self::usable(self.movie_fps))
            .map_or(DEFAULT_FRAME_DURATION, frame_duration_for)
    }

    /// In-stream frame rates are ignored once the user picked one.
    pub fn fps_locked(&self) -> bool {
        Self::usable(self.fps).is_some()
    }
}
