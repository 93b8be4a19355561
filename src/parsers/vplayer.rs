use super::session::ParseSession;
use super::{clock_to_us, pipes_to_newlines, CueParser};
use crate::text::Scanner;
use crate::timeline::Cue;

/// `h:m:s:text` or `h:m:s text`, one cue per line without stop time.
pub struct VPlayerParser;

fn scan_line(line: &str) -> Option<(i64, &str)> {
    let mut sc = Scanner::new(line);
    let h = sc.int()?;
    sc.literal(":").then_some(())?;
    let m = sc.int()?;
    sc.literal(":").then_some(())?;
    let s = sc.int()?;
    // one separator character, whatever it is
    sc.any_char()?;
    let text = sc.rest_of_line()?;
    Some((clock_to_us(h, m, s, 0), text))
}

impl CueParser for VPlayerParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        loop {
            let line = session.lines.next_line()?;
            if let Some((start, text)) = scan_line(line) {
                return Some(Cue::new(start, 0, pipes_to_newlines(text)));
            }
        }
    }
}
