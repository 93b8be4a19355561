use super::session::ParseSession;
use super::{read_text_block, CueParser};
use crate::text::{leading_float, Scanner};
use crate::timeline::Cue;
use log::debug;

/// MPlayer sub format: relative `wait duration` pairs accumulated over the file.
///
/// `FORMAT=TIME` counts in seconds, `FORMAT=<fps>` in frames.
pub struct MpSubParser;

fn scan_timing(line: &str) -> Option<(f32, f32)> {
    let mut sc = Scanner::new(line);
    let wait = sc.float()?;
    let duration = sc.float()?;
    Some((wait, duration))
}

impl CueParser for MpSubParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        let (start, stop) = loop {
            let line = session.lines.next_line()?;

            if line.starts_with("FORMAT=TIME") {
                session.mpsub.factor = 100.0;
                continue;
            }
            if let Some(value) = line.strip_prefix("FORMAT=") {
                let fps = leading_float(value);
                session.mpsub.factor = 1.0;
                if session.set_stream_fps(fps) {
                    debug!("MPSub frame rate: {} fps", fps);
                }
                continue;
            }

            if let Some((wait, duration)) = scan_timing(line) {
                let state = &mut session.mpsub;
                state.total += wait * state.factor;
                let start = (10_000.0 * f64::from(state.total)) as i64;
                state.total += duration * state.factor;
                let stop = (10_000.0 * f64::from(state.total)) as i64;
                break (start, stop);
            }
        };

        let text = read_text_block(&mut session.lines)?;
        Some(Cue::new(start, stop, text))
    }
}
