use super::session::ParseSession;
use super::CueParser;
use crate::text::{find_ignore_case, leading_int, starts_with_ignore_case, LineStore};
use crate::timeline::Cue;

/// SAMI (`.smi`): `<SYNC Start=ms><P ...>text` blocks in an HTML-like body.
pub struct SamiParser;

/// Position inside the line currently being read
struct Cursor {
    line: String,
    pos: usize,
}

impl Cursor {
    fn rest(&self) -> &str {
        self.line.get(self.pos..).unwrap_or("")
    }

    /// Move just past the next case-insensitive `needle`, reading more lines as
    /// needed. `false` at end of input.
    fn search(&mut self, lines: &mut LineStore, needle: &str) -> bool {
        loop {
            if let Some(offset) = find_ignore_case(self.rest(), needle) {
                self.pos += offset + needle.len();
                return true;
            }
            match lines.next_line() {
                Some(next) => {
                    self.line = next.to_owned();
                    self.pos = 0;
                }
                None => return false,
            }
        }
    }

    /// Skip to the next non-empty remainder. `false` at end of input.
    fn fill(&mut self, lines: &mut LineStore) -> bool {
        while self.rest().is_empty() {
            match lines.next_line() {
                Some(next) => {
                    self.line = next.to_owned();
                    self.pos = 0;
                }
                None => return false,
            }
        }
        true
    }
}

/// Does the tag at the start of `rest` carry a `Start=` attribute?
fn is_sync_tag(rest: &str) -> bool {
    let tag = rest.find('>').map_or(rest, |end| &rest[..end]);
    find_ignore_case(tag, "Start=").is_some()
}

impl CueParser for SamiParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        let lines = &mut session.lines;

        // Resume a line that was pushed back at its sync tag
        let first = lines.next_line()?.to_owned();
        let resume = std::mem::take(&mut session.sami_resume);
        let mut cursor = Cursor {
            pos: if first.is_char_boundary(resume) { resume } else { 0 },
            line: first,
        };

        if !cursor.search(lines, "Start=") {
            return None;
        }
        let start_ms = leading_int(cursor.rest().trim_start_matches('"'));
        if !cursor.search(lines, "<P") || !cursor.search(lines, ">") {
            return None;
        }

        let mut text = String::new();
        while cursor.fill(lines) {
            let rest = cursor.rest();
            if rest.starts_with('<') {
                if starts_with_ignore_case(rest, "<br") {
                    text.push('\n');
                } else if is_sync_tag(rest) {
                    lines.push_back_one();
                    session.sami_resume = cursor.pos;
                    break;
                }
                if !cursor.search(lines, ">") {
                    break;
                }
            } else if rest.starts_with("&nbsp;") {
                text.push(' ');
                cursor.pos += "&nbsp;".len();
            } else if let Some(c) = rest.chars().next() {
                text.push(if c == '\t' { ' ' } else { c });
                cursor.pos += c.len_utf8();
            }
        }

        Some(Cue::new(i64::from(start_ms) * 1_000, 0, text))
    }
}
