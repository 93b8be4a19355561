use super::session::ParseSession;
use super::{pipes_to_newlines, CueParser};
use crate::text::{leading_float, Scanner};
use crate::timeline::Cue;
use log::debug;

/// `{start}{stop}text` with frame numbers; `{1}{1}<fps>` sets the frame rate.
pub struct MicroDvdParser;

/// Split a MicroDVD line into start frame, stop frame (0 if empty) and text.
fn scan_line(line: &str) -> Option<(i32, i32, &str)> {
    let mut sc = Scanner::new(line);
    if !sc.literal("{") {
        return None;
    }
    let start = sc.int()?;
    if sc.literal("}{}") {
        return sc.rest_of_line().map(|text| (start, 0, text));
    }

    let mut sc = Scanner::new(line);
    sc.literal("{");
    sc.int()?;
    if !sc.literal("}{") {
        return None;
    }
    let stop = sc.int()?;
    if !sc.literal("}") {
        return None;
    }
    sc.rest_of_line().map(|text| (start, stop, text))
}

impl CueParser for MicroDvdParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        loop {
            let line = session.lines.next_line()?;
            let Some((start, stop, text)) = scan_line(line) else {
                continue;
            };

            if start == 1 && stop == 1 {
                let fps = leading_float(text);
                if session.set_stream_fps(fps) {
                    debug!("MicroDVD frame rate line: {} fps", fps);
                }
                continue;
            }

            let text = pipes_to_newlines(text);
            let frame = session.frame_duration;
            return Some(Cue::new(
                i64::from(start).saturating_mul(frame),
                i64::from(stop).saturating_mul(frame),
                text,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_line_forms() {
        assert_eq!(scan_line("{10}{20}Hi|there"), Some((10, 20, "Hi|there")));
        assert_eq!(scan_line("{10}{}Open"), Some((10, 0, "Open")));
        assert_eq!(scan_line("{10}{20}"), None);
        assert_eq!(scan_line("{10}Hi"), None);
        assert_eq!(scan_line("[10][20]Hi"), None);
    }
}
