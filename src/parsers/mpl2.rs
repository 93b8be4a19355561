use super::session::ParseSession;
use super::CueParser;
use crate::text::Scanner;
use crate::timeline::Cue;

/// `[start][stop] text` in tenths of a second.
pub struct Mpl2Parser;

const DECISECOND_US: i64 = 100_000;

fn scan_line(line: &str) -> Option<(i32, i32, &str)> {
    let mut sc = Scanner::new(line);
    sc.literal("[").then_some(())?;
    let start = sc.int()?;
    if sc.literal("][] ") {
        return sc.rest_of_line().map(|text| (start, 0, text));
    }

    let mut sc = Scanner::new(line);
    sc.literal("[");
    sc.int()?;
    sc.literal("][").then_some(())?;
    let stop = sc.int()?;
    sc.literal("] ").then_some(())?;
    sc.rest_of_line().map(|text| (start, stop, text))
}

/// `|` separates lines and a `/` opening a line marks italics, which is dropped.
fn clean_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = if c == '|' { '\n' } else { c };
        if c == '/' && (text.is_empty() || text.ends_with('\n')) {
            continue;
        }
        text.push(c);
    }
    text
}

impl CueParser for Mpl2Parser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        loop {
            let line = session.lines.next_line()?;
            if let Some((start, stop, text)) = scan_line(line) {
                return Some(Cue::new(
                    i64::from(start) * DECISECOND_US,
                    i64::from(stop) * DECISECOND_US,
                    clean_text(text),
                ));
            }
        }
    }
}
