/*
# Line Scanner Module

 Cursor over a single subtitle line for matching the small scanf-style grammars
 every text subtitle format uses ("{%d}{%d}text", "%d:%d:%d,%d --> ...").

 Matching rules:
 - `int()` / `float()` skip leading whitespace, accept an optional sign and need at least one digit
 - `literal()` matches bytes exactly, except that whitespace in the pattern matches any run of
   whitespace in the input (including none)
 - `rest_of_line()` and `until()` never skip whitespace and need at least one character
 - free helpers `leading_int()` / `leading_float()` behave like atoi/strtod and fall back to 0
*/

/// Scanner over one line with byte position tracking.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Unconsumed part of the line.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Match `pattern` at the cursor. Whitespace in the pattern matches any
    /// amount of whitespace. On mismatch the cursor is left where matching stopped.
    pub fn literal(&mut self, pattern: &str) -> bool {
        for expected in pattern.chars() {
            if expected.is_ascii_whitespace() {
                self.skip_whitespace();
                continue;
            }
            match self.peek() {
                Some(c) if c == expected => {
                    self.pos += c.len_utf8();
                }
                _ => return false,
            }
        }
        true
    }

    /// Signed decimal integer (`%d`). Values outside `i32` saturate.
    pub fn int(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut end = start;
        let negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let digits_start = end;
        let mut value: i64 = 0;
        while let Some(b) = bytes.get(end).filter(|b| b.is_ascii_digit()) {
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(*b - b'0'));
            end += 1;
        }
        if end == digits_start {
            return None;
        }
        self.pos = end;
        let value = if negative { -value } else { value };
        Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Decimal floating point number (`%f`).
    pub fn float(&mut self) -> Option<f32> {
        self.skip_whitespace();
        let len = float_prefix_len(self.remaining());
        if len == 0 {
            return None;
        }
        let value = self.remaining()[..len].parse::<f32>().ok()?;
        self.pos += len;
        Some(value)
    }

    /// Exactly one character, whitespace included (`%c`).
    pub fn any_char(&mut self) -> Option<char> {
        self.bump()
    }

    /// Everything up to a carriage return or newline (`%[^\r\n]`); at least one character.
    pub fn rest_of_line(&mut self) -> Option<&'a str> {
        let rest = self.remaining();
        let len = rest.find(['\r', '\n']).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Between one and `max` characters that are not `stop` (`%15[^,]`).
    pub fn until(&mut self, stop: char, max: usize) -> Option<&'a str> {
        let rest = self.remaining();
        let mut len = 0;
        for (count, c) in rest.chars().enumerate() {
            if c == stop || count == max {
                break;
            }
            len += c.len_utf8();
        }
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }
}

/// Length of the longest prefix of `s` that reads as a decimal float.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = bytes[i + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_digits = bytes[j.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

/// atoi: leading integer of `s`, or 0.
pub fn leading_int(s: &str) -> i32 {
    Scanner::new(s).int().unwrap_or(0)
}

/// strtod: leading float of `s`, or 0.0.
pub fn leading_float(s: &str) -> f32 {
    Scanner::new(s).float().unwrap_or(0.0)
}

/// ASCII case-insensitive substring search, returning the byte offset of the match.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() {
        return Some(0);
    }
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// ASCII case-insensitive prefix test.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_skips_whitespace_and_reads_sign() {
        let mut sc = Scanner::new("  -42x");
        assert_eq!(sc.int(), Some(-42));
        assert_eq!(sc.remaining(), "x");
        assert_eq!(Scanner::new("x1").int(), None);
        assert_eq!(Scanner::new("-").int(), None);
        assert_eq!(Scanner::new("99999999999").int(), Some(i32::MAX));
    }

    #[test]
    fn test_literal_whitespace_matches_any_run() {
        let mut sc = Scanner::new("1:2:3   text");
        assert_eq!(sc.int(), Some(1));
        assert!(sc.literal(":"));
        assert_eq!(sc.int(), Some(2));
        assert!(sc.literal(":"));
        assert_eq!(sc.int(), Some(3));
        assert!(sc.literal(" "));
        assert_eq!(sc.remaining(), "text");

        let mut none = Scanner::new("abc");
        assert!(none.literal(" "));
        assert!(!none.literal("b"));
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(Scanner::new("23.976").float(), Some(23.976));
        assert_eq!(Scanner::new(" .5 1").float(), Some(0.5));
        assert_eq!(Scanner::new("7.").float(), Some(7.0));
        assert_eq!(Scanner::new("1e2x").float(), Some(100.0));
        assert_eq!(Scanner::new("1ex").float(), Some(1.0));
        assert_eq!(Scanner::new(".").float(), None);
        assert_eq!(Scanner::new("TIME").float(), None);
    }

    #[test]
    fn test_rest_and_until() {
        let mut sc = Scanner::new("Marked=0,0:00");
        assert_eq!(sc.until(',', 15), Some("Marked=0"));
        assert!(sc.literal(","));
        assert_eq!(sc.rest_of_line(), Some("0:00"));
        assert_eq!(sc.rest_of_line(), None);

        assert_eq!(Scanner::new(",x").until(',', 15), None);
        assert_eq!(Scanner::new("abcdef").until(',', 3), Some("abc"));
        assert_eq!(Scanner::new("ab\rcd").rest_of_line(), Some("ab"));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(leading_int("12abc"), 12);
        assert_eq!(leading_int("Marked=0"), 0);
        assert_eq!(leading_float("25.0 fps"), 25.0);
        assert_eq!(leading_float("none"), 0.0);
        assert_eq!(find_ignore_case("<sync start=10>", "Start="), Some(6));
        assert_eq!(find_ignore_case("abc", "abcd"), None);
        assert!(starts_with_ignore_case("dialogue: 0,", "Dialogue:"));
        assert!(!starts_with_ignore_case("Dia", "Dialogue:"));
    }
}
