use super::session::ParseSession;
use super::{clock_to_us, CueParser};
use crate::formats::SubtitleFormat;
use crate::text::{leading_int, Scanner};
use crate::timeline::Cue;

/// `Dialogue:` events of SSA v1, SSA v2-4 and ASS scripts.
///
/// Every other script line goes to the session header so the decoder can
/// read styles and script info.
pub struct SsaParser;

struct Dialogue<'a> {
    /// `Marked=N` for SSA, the layer number for ASS
    first_field: &'a str,
    start: i64,
    stop: i64,
    /// Style, name, margins, effect and text, still comma separated
    rest: &'a str,
}

fn scan_centis(sc: &mut Scanner) -> Option<i64> {
    let h = sc.int()?;
    sc.literal(":").then_some(())?;
    let m = sc.int()?;
    sc.literal(":").then_some(())?;
    let s = sc.int()?;
    sc.literal(".").then_some(())?;
    let cs = sc.int()?;
    Some(clock_to_us(h, m, s, i64::from(cs) * 10))
}

fn scan_dialogue(line: &str) -> Option<Dialogue<'_>> {
    let mut sc = Scanner::new(line);
    sc.literal("Dialogue: ").then_some(())?;
    let first_field = sc.until(',', 15)?;
    sc.literal(",").then_some(())?;
    let start = scan_centis(&mut sc)?;
    sc.literal(",").then_some(())?;
    let stop = scan_centis(&mut sc)?;
    sc.literal(",").then_some(())?;
    let rest = sc.rest_of_line()?;
    Some(Dialogue {
        first_field,
        start,
        stop,
        rest,
    })
}

impl CueParser for SsaParser {
    fn parse_one(&self, session: &mut ParseSession, index: usize) -> Option<Cue> {
        loop {
            let line = session.lines.next_line()?;
            let Some(dialogue) = scan_dialogue(line) else {
                let line = line.to_owned();
                session.push_header_line(&line);
                continue;
            };

            // The decoder expects ReadOrder,Layer,Style,Name,...,Text
            let text = match session.format {
                SubtitleFormat::Ssa1 => format!(",{}", dialogue.rest),
                SubtitleFormat::Ass => format!(
                    "{},{},{}",
                    index,
                    leading_int(dialogue.first_field),
                    dialogue.rest
                ),
                _ => format!("{},0,{}", index, dialogue.rest),
            };
            return Some(Cue::new(dialogue.start, dialogue.stop, text));
        }
    }
}
