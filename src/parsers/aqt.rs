use super::session::ParseSession;
use super::CueParser;
use crate::text::Scanner;
use crate::timeline::Cue;

/// AQTitle: a `-->> frame` marker followed by free text up to the next marker.
///
/// The frame number is stored as the start as-is, without frame rate scaling.
pub struct AqTitleParser;

fn scan_marker(line: &str) -> Option<i32> {
    let mut sc = Scanner::new(line);
    sc.literal("-->> ").then_some(())?;
    sc.int()
}

impl CueParser for AqTitleParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        let mut start = None;
        let mut text = String::new();

        loop {
            let Some(line) = session.lines.next_line() else {
                // Last block of the file
                return match start {
                    Some(frame) if !text.is_empty() => Some(Cue::new(frame, 0, text)),
                    _ => None,
                };
            };

            match scan_marker(line) {
                Some(frame) if start.is_none() => start = Some(i64::from(frame)),
                Some(_) => {
                    // Marker of the next cue; leave it for the next call
                    session.lines.push_back_one();
                    return start.map(|frame| Cue::new(frame, 0, text));
                }
                None => {
                    text.push_str(line);
                    text.push('\n');
                }
            }
        }
    }
}
