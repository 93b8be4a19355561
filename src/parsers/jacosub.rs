use super::session::{JacoSubState, ParseSession};
use super::CueParser;
use crate::text::{LineStore, Scanner};
use crate::timeline::Cue;
use log::debug;

/// JACOsub scripts.
///
/// Cue lines are `h:m:s.f h:m:s.f [directive] text` or `@f @f [directive] text`,
/// where `f` counts ticks of `#TIMERES` per second shifted by `#SHIFT`.
pub struct JacoSubParser;

struct TimedLine<'a> {
    start_seconds: i64,
    start_ticks: i32,
    stop_seconds: i64,
    stop_ticks: i32,
    text: &'a str,
}

fn scan_clock(sc: &mut Scanner) -> Option<(i64, i32)> {
    let h = sc.int()?;
    sc.literal(":").then_some(())?;
    let m = sc.int()?;
    sc.literal(":").then_some(())?;
    let s = sc.int()?;
    sc.literal(".").then_some(())?;
    let f = sc.int()?;
    Some((i64::from(h) * 3600 + i64::from(m) * 60 + i64::from(s), f))
}

fn scan_timed_line(line: &str) -> Option<TimedLine<'_>> {
    let mut sc = Scanner::new(line);
    if let Some((start_seconds, start_ticks)) = scan_clock(&mut sc) {
        let (stop_seconds, stop_ticks) = scan_clock(&mut sc)?;
        sc.skip_whitespace();
        return Some(TimedLine {
            start_seconds,
            start_ticks,
            stop_seconds,
            stop_ticks,
            text: sc.rest_of_line()?,
        });
    }

    let mut sc = Scanner::new(line);
    sc.literal("@").then_some(())?;
    let start_ticks = sc.int()?;
    sc.literal(" @").then_some(())?;
    let stop_ticks = sc.int()?;
    sc.skip_whitespace();
    Some(TimedLine {
        start_seconds: 0,
        start_ticks,
        stop_seconds: 0,
        stop_ticks,
        text: sc.rest_of_line()?,
    })
}

fn to_us(seconds: i64, ticks: i32, state: &JacoSubState) -> i64 {
    let ticks = f64::from(ticks) + f64::from(state.time_shift);
    ((seconds as f64 + ticks / f64::from(state.time_resolution)) * 1_000_000.0) as i64
}

/// `#S[HIFT] [-][[h:]m:]s[.f]`, in ticks of `resolution`
fn parse_shift(arg: &str, resolution: i32) -> Option<i32> {
    let negative = arg.trim_start().starts_with('-');
    let mut sc = Scanner::new(arg);
    let mut fields = vec![i64::from(sc.int()?).abs()];
    while fields.len() < 3 && sc.literal(":") {
        fields.push(i64::from(sc.int()?).abs());
    }
    let ticks = if sc.literal(".") {
        i64::from(sc.int().unwrap_or(0))
    } else {
        0
    };
    let (h, m, s) = match fields[..] {
        [s] => (0, 0, s),
        [m, s] => (0, m, s),
        [h, m, s, ..] => (h, m, s),
        [] => return None,
    };
    let shift = h
        .checked_mul(3600)?
        .checked_add(m.checked_mul(60)?)?
        .checked_add(s)?
        .checked_mul(i64::from(resolution))?
        .checked_add(ticks)?;
    i32::try_from(if negative { -shift } else { shift }).ok()
}

/// Apply a `#` directive line. Directives other than shift and resolution are ignored.
fn apply_directive(line: &str, state: &mut JacoSubState) {
    let bytes = line.as_bytes();
    let long_form = bytes.get(2).is_some_and(|b| b.is_ascii_alphabetic());
    match bytes.get(1).map(u8::to_ascii_uppercase) {
        Some(b'S') => {
            let arg = line.get(if long_form { 6 } else { 2 }..).unwrap_or("");
            if let Some(shift) = parse_shift(arg, state.time_resolution) {
                debug!("JACOsub time shift {}", shift);
                state.time_shift = shift;
            }
        }
        Some(b'T') => {
            let arg = line.get(if long_form { 8 } else { 2 }..).unwrap_or("");
            if let Some(resolution) = Scanner::new(arg).int().filter(|r| *r > 0) {
                debug!("JACOsub time resolution {}", resolution);
                state.time_resolution = resolution;
            }
        }
        _ => {}
    }
}

/// Drop the leading directive word (`VL`, `[pos]`, ...) that precedes the text.
fn skip_directive(text: &str) -> &str {
    let text = text.trim_start_matches([' ', '\t']);
    let text = match text.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '[' => text.find(' ').map_or("", |i| &text[i..]),
        _ => text,
    };
    text.trim_start_matches([' ', '\t'])
}

/// Expand escapes and strip comments. A trailing `\` pulls in the next line;
/// `None` when that line is missing.
fn render_text(first: &str, lines: &mut LineStore, comment_depth: &mut u32) -> Option<String> {
    let mut out = String::new();
    let mut chars: Vec<char> = first.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let visible = *comment_depth == 0;

        match c {
            '{' => *comment_depth += 1,
            '}' => {
                if *comment_depth > 0 {
                    *comment_depth = 0;
                    if next == Some(' ') {
                        i += 1;
                    }
                }
            }
            '~' if visible => out.push(' '),
            '~' => {}
            ' ' | '\t' => {
                if visible && !matches!(next, Some(' ') | Some('\t')) {
                    out.push(' ');
                }
            }
            '\\' => match next {
                Some('n') => {
                    out.push('\n');
                    i += 1;
                }
                // color and font switches carry one argument character
                Some('C' | 'c' | 'F' | 'f') => i += 2,
                Some('B' | 'b' | 'I' | 'i' | 'U' | 'u' | 'D' | 'N') => i += 1,
                Some(literal @ ('~' | '{' | '\\')) => {
                    if visible {
                        out.push(literal);
                    }
                    i += 1;
                }
                None => {
                    let continuation = lines.next_line()?;
                    chars = continuation.trim_start_matches(' ').chars().collect();
                    i = 0;
                    continue;
                }
                Some(_) => {
                    if visible {
                        out.push('\\');
                    }
                }
            },
            _ => {
                if visible {
                    out.push(c);
                }
            }
        }
        i += 1;
    }

    Some(out)
}

impl CueParser for JacoSubParser {
    fn parse_one(&self, session: &mut ParseSession, _index: usize) -> Option<Cue> {
        loop {
            let line = session.lines.next_line()?.to_owned();

            let Some(timed) = scan_timed_line(&line) else {
                if line.starts_with('#') {
                    apply_directive(&line, &mut session.jacosub);
                }
                continue;
            };

            let state = session.jacosub;
            let start = to_us(timed.start_seconds, timed.start_ticks, &state);
            let stop = to_us(timed.stop_seconds, timed.stop_ticks, &state);

            let text = render_text(
                skip_directive(timed.text),
                &mut session.lines,
                &mut session.jacosub.comment_depth,
            )?;
            return Some(Cue::new(start, stop, text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let mut lines = LineStore::from_lines(["unused"]).unwrap();
        let mut depth = 0;
        render_text(text, &mut lines, &mut depth).unwrap()
    }

    #[test]
    fn test_scan_timed_line() {
        let t = scan_timed_line("0:00:01.15 0:00:02.00 VL Hello").unwrap();
        assert_eq!((t.start_seconds, t.start_ticks), (1, 15));
        assert_eq!((t.stop_seconds, t.stop_ticks), (2, 0));
        assert_eq!(t.text, "VL Hello");

        let t = scan_timed_line("@30 @60 D Hi").unwrap();
        assert_eq!((t.start_ticks, t.stop_ticks), (30, 60));
        assert_eq!(t.text, "D Hi");

        assert!(scan_timed_line("@30 @60").is_none());
        assert!(scan_timed_line("# comment").is_none());
    }

    #[test]
    fn test_to_us_uses_shift_and_resolution() {
        let mut state = JacoSubState::default();
        assert_eq!(to_us(1, 15, &state), 1_500_000);
        state.time_shift = 30;
        assert_eq!(to_us(0, 0, &state), 1_000_000);
        state.time_resolution = 100;
        state.time_shift = 0;
        assert_eq!(to_us(0, 250, &state), 2_500_000);
    }

    #[test]
    fn test_to_us_keeps_fractional_ticks() {
        let state = JacoSubState::default();
        let t = scan_timed_line("@45 @60 D Hi").unwrap();
        assert_eq!(to_us(t.start_seconds, t.start_ticks, &state), 1_500_000);
        assert_eq!(to_us(t.stop_seconds, t.stop_ticks, &state), 2_000_000);
    }

    #[test]
    fn test_shift_overflow_is_rejected() {
        assert_eq!(parse_shift("2000000000:0:0", 2_000_000_000), None);
        assert_eq!(parse_shift("-0:01.05", 30), Some(-35));
    }

    #[test]
    fn test_directives() {
        let mut state = JacoSubState::default();
        apply_directive("#TIMERES 100", &mut state);
        assert_eq!(state.time_resolution, 100);
        apply_directive("#T 0", &mut state);
        assert_eq!(state.time_resolution, 100);
        apply_directive("#SHIFT 2", &mut state);
        assert_eq!(state.time_shift, 200);
        apply_directive("#S -1:00.50", &mut state);
        assert_eq!(state.time_shift, -6050);
        apply_directive("#S 0:00:01.10", &mut state);
        assert_eq!(state.time_shift, 110);
        apply_directive("#TITLE whatever", &mut state);
        assert_eq!(state.time_resolution, 100);
    }

    #[test]
    fn test_skip_directive() {
        assert_eq!(skip_directive("VL Hello world"), "Hello world");
        assert_eq!(skip_directive("  [x] Hi"), "Hi");
        assert_eq!(skip_directive("{c} text"), "{c} text");
        assert_eq!(skip_directive("Word"), "");
        assert_eq!(skip_directive("Élan vital"), "Élan vital");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(render("one\\ntwo"), "one\ntwo");
        assert_eq!(render("a~b"), "a b");
        assert_eq!(render("a   b"), "a b");
        assert_eq!(render("\\Bbold\\b"), "bold");
        assert_eq!(render("\\C1red"), "red");
        assert_eq!(render("x\\{y\\\\"), "x{y\\");
        assert_eq!(render("keep {hidden} shown"), "keep shown");
        assert_eq!(render("\\q"), "\\q");
    }

    #[test]
    fn test_comment_state_spans_calls() {
        let mut lines = LineStore::from_lines(["unused"]).unwrap();
        let mut depth = 0;
        assert_eq!(render_text("open {note", &mut lines, &mut depth).unwrap(), "open ");
        assert_eq!(depth, 1);
        assert_eq!(render_text("still} back", &mut lines, &mut depth).unwrap(), "back");
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_continuation_line() {
        let mut lines = LineStore::from_lines(["   second half"]).unwrap();
        let mut depth = 0;
        assert_eq!(
            render_text("first \\", &mut lines, &mut depth).unwrap(),
            "first second half"
        );

        let mut empty = LineStore::from_lines(["x"]).unwrap();
        empty.next_line();
        assert!(render_text("dangling \\", &mut empty, &mut depth).is_none());
    }
}
