use super::session::ParseSession;
use super::{clock_to_us, CueParser};
use crate::text::Scanner;
use crate::timeline::Cue;

/// `{T h:m:s:cs` opens a cue, a line holding only `}` closes it.
pub struct DvdSubtitleParser;

fn scan_header(line: &str) -> Option<i64> {
    let mut sc = Scanner::new(line);
    sc.literal("{T ").then_some(())?;
    let h = sc.int()?;
    sc.literal(":").then_some(())?;
    let m = sc.int()?;
    sc.literal(":").then_some(())?;
    let s = sc.int()?;
    sc.literal(":").then_some(())?;
    let cs = sc.int()?;
    Some(clock_to_us(h, m, s, i64::from(cs) * 10))
}

impl CueParser for DvdSubtitleParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        let start = loop {
            if let Some(start) = scan_header(session.lines.next_line()?) {
                break start;
            }
        };

        // An unterminated block at end of input is dropped
        let mut text = String::new();
        loop {
            match session.lines.next_line()? {
                "}" => return Some(Cue::new(start, 0, text)),
                line => {
                    text.push_str(line);
                    text.push('\n');
                }
            }
        }
    }
}
