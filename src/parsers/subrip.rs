use super::session::ParseSession;
use super::{clock_to_us, read_text_block, CueParser};
use crate::text::Scanner;
use crate::timeline::Cue;

/// Numbered blocks with a `h:m:s,ms --> h:m:s,ms` timing line.
pub struct SubRipParser;

/// `h:m:s.ms,h:m:s.ms` timing line, `[br]` breaks inside the text.
pub struct SubViewerParser;

/// Match `h:m:s<frac>h:m:s<frac>` where `frac` and `middle` are the separators
/// used by the format. The fractional field is taken as milliseconds.
fn scan_timing(line: &str, frac: &str, middle: &str) -> Option<(i64, i64)> {
    let mut sc = Scanner::new(line);
    let start = scan_clock(&mut sc, frac)?;
    sc.literal(middle).then_some(())?;
    let stop = scan_clock(&mut sc, frac)?;
    Some((start, stop))
}

fn scan_clock(sc: &mut Scanner, frac: &str) -> Option<i64> {
    let h = sc.int()?;
    sc.literal(":").then_some(())?;
    let m = sc.int()?;
    sc.literal(":").then_some(())?;
    let s = sc.int()?;
    sc.literal(frac).then_some(())?;
    let ms = sc.int()?;
    Some(clock_to_us(h, m, s, i64::from(ms)))
}

fn parse_block(session: &mut ParseSession, frac: &str, middle: &str) -> Option<(i64, i64, String)> {
    let (start, stop) = loop {
        let line = session.lines.next_line()?;
        if let Some(timing) = scan_timing(line, frac, middle) {
            break timing;
        }
    };
    let text = read_text_block(&mut session.lines)?;
    Some((start, stop, text))
}

impl CueParser for SubRipParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        let (start, stop, text) = parse_block(session, ",", " --> ")?;
        Some(Cue::new(start, stop, text))
    }
}

impl CueParser for SubViewerParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        let (start, stop, text) = parse_block(session, ".", ",")?;
        Some(Cue::new(start, stop, text.replace("[br]", "\n")))
    }
}
