//! Caption parsing example
//!
//! Demonstrates parsing WebVTT and SRT caption files and following playback.
//!
//! Run with: cargo run -p subline-core --example captions

use subline_core::captions::{format_clock, srt_to_vtt};
use subline_core::{parse_captions, CaptionSession, SegmentationMode};

fn main() {
    println!("Subline Core - Caption Parsing Example");
    println!("======================================\n");

    // Auto-generated captions repeat each line across overlapping cues
    let webvtt = r#"WEBVTT
Kind: captions
Language: en

00:00:00.000 --> 00:00:03.000 align:start position:0%
Welcome<00:00:00.500><c> to</c><00:00:01.000><c> the</c><00:00:01.500><c> show.</c>

00:00:03.000 --> 00:00:03.010 align:start position:0%
Welcome to the show.

00:00:03.500 --> 00:00:07.000
This video demonstrates our player. Captions follow along!

01:30:00.000 --> 01:30:05.000
This caption appears at 1 hour 30 minutes &amp; change.
"#;

    println!("Parsing WebVTT content...\n");

    match parse_captions(webvtt) {
        Ok(track) => {
            println!("Found {} cues ({} skipped):\n", track.len(), track.diagnostics.len());

            for (i, cue) in track.cues.iter().enumerate() {
                println!(
                    "  {}. [{} - {}] {}",
                    i + 1,
                    format_clock(cue.start),
                    format_clock(cue.end),
                    cue.text
                );
            }
            for diagnostic in &track.diagnostics {
                println!("  skipped line {}: {}", diagnostic.line, diagnostic.kind);
            }
        }
        Err(e) => {
            eprintln!("Failed to parse WebVTT: {}", e);
        }
    }

    println!("\n----------------------------------------\n");

    let srt = r#"1
00:00:00,000 --> 00:00:03,000
Welcome to Purple Squirrel Media!

2
00:00:03,500 --> 00:00:07,000
This video demonstrates our
amazing player capabilities.
"#;

    println!("Following playback of an SRT file in sentence mode...\n");

    let mut session = CaptionSession::default();
    if let Err(e) = session.load(srt) {
        eprintln!("Failed to parse SRT: {}", e);
        return;
    }
    session.set_mode(SegmentationMode::Sentence);

    for tick in 0..16 {
        let time = tick as f64 * 0.5;
        if let Some(change) = session.update(time) {
            match session.current() {
                Some(cue) => println!("  {:>5.1}s -> #{} {}", time, cue.index, cue.text),
                None => println!("  {:>5.1}s -> (no caption, left #{:?})", time, change.previous),
            }
        }
    }

    println!("\n----------------------------------------\n");

    let vtt = srt_to_vtt(srt);
    match parse_captions(&vtt) {
        Ok(track) => println!("Converted VTT successfully parsed: {} cues", track.len()),
        Err(e) => eprintln!("Failed to parse converted VTT: {}", e),
    }
}
