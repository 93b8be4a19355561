use super::types::SubtitleFormat;
use crate::errors::{SubDemuxError, SubDemuxResult};
use crate::streams::LineSource;
use crate::text::{find_ignore_case, starts_with_ignore_case, Scanner};
use log::{debug, info, warn};

/// Number of lines inspected before giving up
pub const SNIFF_LINE_LIMIT: usize = 256;

/// Result of matching one line against the sniffing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    pub format: SubtitleFormat,
    /// Decisive matches end the scan. Weak ones (JacoSub, MPSub, AQTitle, PJS)
    /// are remembered but a later line may still override them.
    pub decisive: bool,
}

impl LineMatch {
    fn decisive(format: SubtitleFormat) -> Option<Self> {
        Some(Self {
            format,
            decisive: true,
        })
    }

    fn weak(format: SubtitleFormat) -> Option<Self> {
        Some(Self {
            format,
            decisive: false,
        })
    }
}

fn matches(line: &str, pattern: impl FnOnce(&mut Scanner) -> bool) -> bool {
    pattern(&mut Scanner::new(line))
}

fn ints_separated(sc: &mut Scanner, separators: &[&str]) -> bool {
    if sc.int().is_none() {
        return false;
    }
    separators
        .iter()
        .all(|sep| sc.literal(sep) && sc.int().is_some())
}

/// Apply the ordered rule list to a single line. The first rule that matches wins.
pub fn match_line(s: &str) -> Option<LineMatch> {
    use SubtitleFormat::*;

    if find_ignore_case(s, "<SAMI>").is_some() {
        LineMatch::decisive(Sami)
    } else if matches(s, |sc| {
        sc.literal("{") && sc.int().is_some() && sc.literal("}{") && sc.int().is_some() && sc.literal("}")
    }) || matches(s, |sc| sc.literal("{") && sc.int().is_some() && sc.literal("}{}"))
    {
        LineMatch::decisive(MicroDvd)
    } else if matches(s, |sc| ints_separated(sc, &[":", ":", ",", " --> ", ":", ":", ","])) {
        LineMatch::decisive(SubRip)
    } else if starts_with_ignore_case(s, "!: This is a Sub Station Alpha v1") {
        LineMatch::decisive(Ssa1)
    } else if starts_with_ignore_case(s, "ScriptType: v4.00+") {
        LineMatch::decisive(Ass)
    } else if starts_with_ignore_case(s, "ScriptType: v4.00") {
        LineMatch::decisive(Ssa2To4)
    } else if starts_with_ignore_case(s, "Dialogue: Marked") {
        LineMatch::decisive(Ssa2To4)
    } else if starts_with_ignore_case(s, "Dialogue:") {
        LineMatch::decisive(Ass)
    } else if find_ignore_case(s, "[INFORMATION]").is_some() {
        LineMatch::decisive(SubViewer)
    } else if matches(s, |sc| ints_separated(sc, &[":", ":", ".", " ", ":", ":"]))
        || matches(s, |sc| sc.literal("@") && sc.int().is_some() && sc.literal(" @") && sc.int().is_some())
    {
        LineMatch::weak(JacoSub)
    } else if matches(s, |sc| ints_separated(sc, &[":", ":"])) {
        // "h:m:s:text" or "h:m:s text"; the separator itself is not checked here
        LineMatch::decisive(VPlayer)
    } else if matches(s, |sc| sc.literal("{T ") && ints_separated(sc, &[":", ":", ":"])) {
        LineMatch::decisive(DvdSubtitle)
    } else if matches(s, |sc| {
        sc.literal("[") && sc.int().is_some() && sc.literal("][") && sc.int().is_some() && sc.literal("]")
    }) || matches(s, |sc| sc.literal("[") && sc.int().is_some() && sc.literal("][]"))
    {
        LineMatch::decisive(Mpl2)
    } else if matches(s, |sc| sc.literal("FORMAT=") && sc.int().is_some())
        || s.starts_with("FORMAT=TIME")
    {
        LineMatch::weak(MpSub)
    } else if matches(s, |sc| sc.literal("-->> ") && sc.int().is_some()) {
        LineMatch::weak(AqTitle)
    } else if matches(s, |sc| ints_separated(sc, &[","]) && sc.literal(",")) {
        LineMatch::weak(Pjs)
    } else {
        None
    }
}

/// Sniff the format from the first lines of `lines`.
pub fn detect_format_from_lines<I, S>(lines: I) -> Option<SubtitleFormat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = None;
    for line in lines.into_iter().take(SNIFF_LINE_LIMIT) {
        if let Some(hit) = match_line(line.as_ref()) {
            found = Some(hit.format);
            if hit.decisive {
                break;
            }
        }
    }
    found
}

/// Read up to `SNIFF_LINE_LIMIT` lines from `source`, pick a format, then rewind.
///
/// A source without a single line is `EmptyInput`. A failed rewind is only
/// logged: the caller loses the lines already consumed.
pub fn sniff_format<L: LineSource + ?Sized>(
    source: &mut L,
) -> SubDemuxResult<Option<SubtitleFormat>> {
    info!("Autodetecting subtitle format");

    let mut found = None;
    let mut read = 0;
    for index in 0..SNIFF_LINE_LIMIT {
        let Some(line) = source.read_line()? else {
            break;
        };
        read += 1;
        if let Some(hit) = match_line(&line) {
            debug!("Line {} looks like {}", index + 1, hit.format.name());
            found = Some(hit.format);
            if hit.decisive {
                break;
            }
        }
    }

    if let Err(e) = source.rewind() {
        warn!("Failed to rewind subtitle stream: {}", e);
    }

    if read == 0 {
        return Err(SubDemuxError::EmptyInput);
    }
    Ok(found)
}

/// Like `sniff_format`, but no match is an `Unrecognized` error.
pub fn detect_format<L: LineSource + ?Sized>(source: &mut L) -> SubDemuxResult<SubtitleFormat> {
    match sniff_format(source)? {
        Some(format) => {
            info!("Detected {} format", format.name());
            Ok(format)
        }
        None => Err(SubDemuxError::Unrecognized),
    }
}
