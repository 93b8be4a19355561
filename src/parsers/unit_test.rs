use super::{parse_all, ParseSession, DEFAULT_FRAME_DURATION};
use crate::formats::SubtitleFormat;
use crate::text::LineStore;
use crate::timeline::{Cue, CueTimeline};

fn session(format: SubtitleFormat, text: &str, fps_locked: bool) -> ParseSession {
    let lines = LineStore::from_lines(text.lines()).unwrap();
    ParseSession::new(lines, format, DEFAULT_FRAME_DURATION, fps_locked)
}

fn parse_session(session: &mut ParseSession) -> Vec<Cue> {
    let mut timeline = CueTimeline::new();
    parse_all(session, &mut timeline).unwrap();
    timeline.cues().to_vec()
}

fn parse(format: SubtitleFormat, text: &str) -> Vec<Cue> {
    parse_session(&mut session(format, text, false))
}

#[test]
fn test_subrip() {
    let cues = parse(
        SubtitleFormat::SubRip,
        "1\n00:01:02,500 --> 00:01:05,000\nHello\nWorld\n\n2\n00:01:06,000 --> 00:01:07,250\nLast line",
    );
    assert_eq!(
        cues,
        vec![
            Cue::new(62_500_000, 65_000_000, "Hello\nWorld\n"),
            Cue::new(66_000_000, 67_250_000, "Last line\n"),
        ]
    );
}

#[test]
fn test_subrip_block_without_text_at_end() {
    let cues = parse(
        SubtitleFormat::SubRip,
        "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n00:00:03,000 --> 00:00:04,000",
    );
    assert_eq!(cues, vec![Cue::new(1_000_000, 2_000_000, "A\n")]);
}

#[test]
fn test_subviewer() {
    let cues = parse(
        SubtitleFormat::SubViewer,
        "[INFORMATION]\n[TITLE]Demo\n[END INFORMATION]\n\n00:00:01.20,00:00:03.00\nOne[br]Two\n\n00:00:04.00,00:00:05.00\nThree\n",
    );
    assert_eq!(
        cues,
        vec![
            Cue::new(1_020_000, 3_000_000, "One\nTwo\n"),
            Cue::new(4_000_000, 5_000_000, "Three\n"),
        ]
    );
}

#[test]
fn test_microdvd_frame_rate_sentinel() {
    let cues = parse(SubtitleFormat::MicroDvd, "{1}{1}23.976\n{0}{100}Hello");
    assert_eq!(cues, vec![Cue::new(0, 100 * 41_708, "Hello")]);
}

#[test]
fn test_microdvd_tiny_frame_rate_saturates() {
    let cues = parse(
        SubtitleFormat::MicroDvd,
        "{1}{1}0.00001\n{100000000}{100000001}x",
    );
    assert_eq!(cues, vec![Cue::new(i64::MAX, i64::MAX, "x")]);
}

#[test]
fn test_microdvd_locked_frame_rate_ignores_sentinel() {
    let mut s = session(SubtitleFormat::MicroDvd, "{1}{1}23.976\n{25}{50}A|B\n{75}{}C", true);
    let cues = parse_session(&mut s);
    assert_eq!(
        cues,
        vec![
            Cue::new(1_000_000, 2_000_000, "A\nB"),
            Cue::new(3_000_000, 0, "C"),
        ]
    );
}

#[test]
fn test_ass_script() {
    let mut s = session(
        SubtitleFormat::Ass,
        "[Script Info]\nScriptType: v4.00+\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\nDialogue: 0,0:00:01.00,0:00:02.50,Default,,0,0,0,,Hello\nDialogue: 1,0:00:03.00,0:00:04.00,Default,,0,0,0,,World",
        false,
    );
    let cues = parse_session(&mut s);
    assert_eq!(
        cues,
        vec![
            Cue::new(1_000_000, 2_500_000, "0,0,Default,,0,0,0,,Hello"),
            Cue::new(3_000_000, 4_000_000, "1,1,Default,,0,0,0,,World"),
        ]
    );
    assert_eq!(
        s.header.as_deref(),
        Some("[Script Info]\nScriptType: v4.00+\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n")
    );
}

#[test]
fn test_ssa_variants() {
    let ssa4 = parse(
        SubtitleFormat::Ssa2To4,
        "Dialogue: Marked=0,0:00:01.00,0:00:02.00,Default,NTP,0000,0000,0000,!Effect,Hi",
    );
    assert_eq!(ssa4[0].text, "0,0,Default,NTP,0000,0000,0000,!Effect,Hi");

    let ssa1 = parse(
        SubtitleFormat::Ssa1,
        "Dialogue: Marked=0,0:00:01.00,0:00:02.00,Default,NTP,0000,0000,0000,Hi",
    );
    assert_eq!(ssa1[0].text, ",Default,NTP,0000,0000,0000,Hi");
    assert_eq!((ssa1[0].start, ssa1[0].stop), (1_000_000, 2_000_000));
}

#[test]
fn test_vplayer() {
    let cues = parse(SubtitleFormat::VPlayer, "00:00:12:Hello|World\nnoise\n0:01:00 Second");
    assert_eq!(
        cues,
        vec![
            Cue::new(12_000_000, 0, "Hello\nWorld"),
            Cue::new(60_000_000, 0, "Second"),
        ]
    );
}

#[test]
fn test_sami() {
    let cues = parse(
        SubtitleFormat::Sami,
        "<SAMI>\n<BODY>\n<SYNC Start=1000><P Class=ENCC>Hello<br>World\n<SYNC Start=2500><P Class=ENCC>&nbsp;\n<SYNC Start=3000><P>Tab\there<SYNC Start=4000><P>Last\n</BODY></SAMI>",
    );
    assert_eq!(
        cues,
        vec![
            Cue::new(1_000_000, 0, "Hello\nWorld"),
            Cue::new(2_500_000, 0, " "),
            Cue::new(3_000_000, 0, "Tab here"),
            Cue::new(4_000_000, 0, "Last"),
        ]
    );
}

#[test]
fn test_dvdsubtitle() {
    let cues = parse(
        SubtitleFormat::DvdSubtitle,
        "{HEAD\nDISCID=\n}\n{T 00:00:01:50\nLine one\nLine two\n}\n{T 00:00:05:00\nSecond\n}\n{T 00:00:09:00\nunterminated",
    );
    assert_eq!(
        cues,
        vec![
            Cue::new(1_500_000, 0, "Line one\nLine two\n"),
            Cue::new(5_000_000, 0, "Second\n"),
        ]
    );
}

#[test]
fn test_mpl2() {
    let cues = parse(SubtitleFormat::Mpl2, "[10][25] /Italic|plain\n[30][] Open");
    assert_eq!(
        cues,
        vec![
            Cue::new(1_000_000, 2_500_000, "Italic\nplain"),
            Cue::new(3_000_000, 0, "Open"),
        ]
    );
}

#[test]
fn test_aqtitle() {
    let cues = parse(
        SubtitleFormat::AqTitle,
        "-->> 000100\nFirst line\nsecond\n\n-->> 000200\nNext",
    );
    assert_eq!(
        cues,
        vec![
            Cue::new(100, 0, "First line\nsecond\n\n"),
            Cue::new(200, 0, "Next\n"),
        ]
    );
}

#[test]
fn test_pjs() {
    let cues = parse(SubtitleFormat::Pjs, "1200,1500,\"Hello\"\nbad line\n2000,2600, \"World\"");
    assert_eq!(
        cues,
        vec![Cue::new(12_000, 15_000, "Hello"), Cue::new(20_000, 26_000, "World")]
    );
}

#[test]
fn test_mpsub_accumulates_time() {
    let text = "TITLE=Demo\nFORMAT=TIME\n\n0 2.5\nHello\n\n1 1\nWorld";
    let cues = parse(SubtitleFormat::MpSub, text);
    assert_eq!(
        cues,
        vec![
            Cue::new(0, 2_500_000, "Hello\n"),
            Cue::new(3_500_000, 4_500_000, "World\n"),
        ]
    );

    // state belongs to the session, a second parse starts over
    assert_eq!(parse(SubtitleFormat::MpSub, text), cues);
}

#[test]
fn test_mpsub_frame_header_sets_frame_rate() {
    let mut s = session(SubtitleFormat::MpSub, "FORMAT=25\n\n10 20\nFrames", false);
    let cues = parse_session(&mut s);
    assert_eq!(cues, vec![Cue::new(100_000, 300_000, "Frames\n")]);
    assert_eq!(s.frame_duration, 40_000);
    assert_eq!(s.mpsub.factor, 1.0);
}

#[test]
fn test_jacosub() {
    let cues = parse(
        SubtitleFormat::JacoSub,
        "#TIMERES 100\n0:00:01.50 0:00:03.00 D Hello~there\n@400 @500 VL Line\\none\n# a comment\n@600 @700 D multi \\\n   line",
    );
    assert_eq!(
        cues,
        vec![
            Cue::new(1_500_000, 3_000_000, "Hello there"),
            Cue::new(4_000_000, 5_000_000, "Line\none"),
            Cue::new(6_000_000, 7_000_000, "multi line"),
        ]
    );
}

#[test]
fn test_jacosub_shift() {
    let cues = parse(SubtitleFormat::JacoSub, "#S 1\n@0 @30 D shifted");
    assert_eq!(cues, vec![Cue::new(1_000_000, 2_000_000, "shifted")]);
}

#[test]
fn test_jacosub_oversized_shift_is_ignored() {
    let cues = parse(
        SubtitleFormat::JacoSub,
        "#T 2000000000\n#S 2000000000:0:0\n@1 @2 x",
    );
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "x");
    assert_eq!(cues[0].start, 0);
}

#[test]
fn test_ssa_index_counts_existing_cues() {
    let mut s = session(
        SubtitleFormat::Ass,
        "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,x",
        false,
    );
    let mut timeline = CueTimeline::new();
    timeline.append(Cue::new(1, 2, "earlier")).unwrap();
    parse_all(&mut s, &mut timeline).unwrap();
    assert_eq!(timeline.cues()[1].text, "1,0,Default,,0,0,0,,x");
}
