use crate::formats::SubtitleFormat;
use crate::text::LineStore;

/// Microseconds per frame when no frame rate is known (25 fps)
pub const DEFAULT_FRAME_DURATION: i64 = 40_000;

/// Running totals of the MPSub cumulative timing scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MpSubState {
    /// Elapsed time in 1/100 s units
    pub total: f32,
    /// 100 for `FORMAT=TIME`, 1 for frame based files
    pub factor: f32,
}

impl Default for MpSubState {
    fn default() -> Self {
        Self {
            total: 0.0,
            factor: 1.0,
        }
    }
}

/// Directive state of a JacoSub script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JacoSubState {
    /// `#SHIFT`, in `time_resolution` units
    pub time_shift: i32,
    /// `#TIMERES`, ticks per second
    pub time_resolution: i32,
    /// Nesting depth of `{...}` comments still open
    pub comment_depth: u32,
}

impl Default for JacoSubState {
    fn default() -> Self {
        Self {
            time_shift: 0,
            time_resolution: 30,
            comment_depth: 0,
        }
    }
}

/// Mutable context threaded through every parser call of one open.
#[derive(Debug)]
pub struct ParseSession {
    pub lines: LineStore,
    pub format: SubtitleFormat,
    /// Microseconds per video frame for frame based formats
    pub frame_duration: i64,
    /// Set when the user forced a frame rate; in-stream rates are then ignored
    pub fps_locked: bool,
    /// SSA/ASS script lines that are not dialogue
    pub header: Option<String>,
    pub mpsub: MpSubState,
    pub jacosub: JacoSubState,
    /// Byte offset to resume the pushed back SAMI line at
    pub sami_resume: usize,
}

impl ParseSession {
    pub fn new(
        lines: LineStore,
        format: SubtitleFormat,
        frame_duration: i64,
        fps_locked: bool,
    ) -> Self {
        Self {
            lines,
            format,
            frame_duration,
            fps_locked,
            header: None,
            mpsub: MpSubState::default(),
            jacosub: JacoSubState::default(),
            sami_resume: 0,
        }
    }

    /// Switch to an in-stream frame rate unless the user locked one.
    pub fn set_stream_fps(&mut self, fps: f32) -> bool {
        if self.fps_locked || fps <= 0.0 {
            return false;
        }
        self.frame_duration = frame_duration_for(fps);
        true
    }

    /// Append one script line to the SSA header.
    pub fn push_header_line(&mut self, line: &str) {
        let header = self.header.get_or_insert_with(String::new);
        header.push_str(line);
        header.push('\n');
    }
}

/// Microseconds per frame at `fps`, truncated.
pub fn frame_duration_for(fps: f32) -> i64 {
    (1_000_000.0 / f64::from(fps)) as i64
}
