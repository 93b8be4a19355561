use std::env;
use subdemux::{format_timestamp, open_subtitles, FormatSelection, SubtitleOptions};

fn main() {
    println!("🔍 Subtitle Probe - Format Detection and Cue Dump");
    println!("=================================================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: subtitle_probe <file|url> [format] [fps]");
        println!("Example: subtitle_probe tests/testdata/sample.srt");
        println!("Example: subtitle_probe movie.sub microdvd 23.976");
        return;
    }

    match probe(&args[1], args.get(2), args.get(3)) {
        Ok(_) => println!("\n✅ Probe completed successfully"),
        Err(e) => println!("\n❌ Probe failed: {}", e),
    }
}

fn probe(
    source: &str,
    format: Option<&String>,
    fps: Option<&String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = SubtitleOptions::default();
    if let Some(format) = format {
        options.format = format.parse::<FormatSelection>()?;
    }
    if let Some(fps) = fps {
        options.fps = Some(fps.parse::<f32>()?);
    }

    let demuxer = open_subtitles(source, &options)?;

    println!("📄 Source: {}", source);
    println!("🏷️  Format: {} ({})", demuxer.format(), demuxer.format().type_name());
    println!(
        "🎞️  Codec: {}",
        String::from_utf8_lossy(&demuxer.codec().fourcc())
    );
    println!("⏱️  Duration: {}", format_timestamp(demuxer.length()));
    println!("💬 Cues: {}", demuxer.len());
    if let Some(header) = demuxer.header() {
        println!("📋 Header: {} bytes", header.len());
    }
    println!();

    for (i, cue) in demuxer.timeline().cues().iter().enumerate() {
        let stop = if cue.stop > 0 {
            format_timestamp(cue.stop)
        } else {
            "open".to_string()
        };
        println!(
            "{:>4} [{} --> {}] {:?}",
            i + 1,
            format_timestamp(cue.start),
            stop,
            cue.text
        );
    }

    Ok(())
}
