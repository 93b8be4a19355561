use super::session::ParseSession;
use super::CueParser;
use crate::text::Scanner;
use crate::timeline::Cue;

/// Phoenix Japanimation Society: `start,stop,"text"`.
pub struct PjsParser;

fn scan_line(line: &str) -> Option<(i32, i32, &str)> {
    let mut sc = Scanner::new(line);
    let start = sc.int()?;
    sc.literal(",").then_some(())?;
    let stop = sc.int()?;
    sc.literal(", \"").then_some(())?;
    let text = sc.rest_of_line()?;
    Some((start, stop, text))
}

impl CueParser for PjsParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        loop {
            let line = session.lines.next_line()?;
            let Some((start, stop, text)) = scan_line(line) else {
                continue;
            };

            // drop the closing quote
            let mut text = text.to_owned();
            text.pop();
            return Some(Cue::new(i64::from(start) * 10, i64::from(stop) * 10, text));
        }
    }
}
