//! Benchmark tests for subline-core operations
//!
//! Run with: cargo bench -p subline-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use subline_core::captions::{
    active_index, clean_line, parse_timecode, split_sentences, to_srt, to_webvtt, CueIndex,
};
use subline_core::{parse_captions, CaptionSession, Cue, SegmentationMode};

// ============================================================================
// Helpers
// ============================================================================

fn generate_cues(count: usize) -> Vec<Cue> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 3.0;
            Cue::new(
                start,
                start + 2.5,
                format!("Caption number {}. It has two sentences!", i),
            )
        })
        .collect()
}

/// Rolling auto-caption style: every line appears in two overlapping cues
fn generate_rolling_vtt(count: usize) -> String {
    let mut vtt = String::from("WEBVTT\nKind: captions\nLanguage: en\n\n");
    for i in 0..count {
        let start = i as f64 * 2.0;
        vtt.push_str(&format!(
            "{} --> {} align:start position:0%\nline {}<00:00:00.480><c> with</c><00:00:00.640><c> markup</c>\nline {}\n\n",
            stamp(start),
            stamp(start + 2.0),
            i,
            i + 1
        ));
    }
    vtt
}

fn stamp(seconds: f64) -> String {
    let ms = (seconds * 1000.0) as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1000,
        ms % 1000
    )
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_timecode(c: &mut Criterion) {
    let mut group = c.benchmark_group("TimeCode Parsing");

    for token in ["01:02:03.400", "00:00:05,250", "00:00:01.000 align:start position:0%"] {
        group.bench_with_input(BenchmarkId::new("parse_timecode", token), token, |b, token| {
            b.iter(|| black_box(parse_timecode(black_box(token))))
        });
    }

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let line = "so<00:00:01.480><c> we</c><00:00:01.640><c> start</c> &amp; go";
    c.bench_function("clean_line", |b| b.iter(|| black_box(clean_line(black_box(line)))));
}

fn bench_vtt_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("WebVTT Parsing");

    for &count in &[100, 1_000, 10_000] {
        let content = generate_rolling_vtt(count);
        group.bench_with_input(BenchmarkId::new("parse", count), &content, |b, content| {
            b.iter(|| black_box(parse_captions(black_box(content)).unwrap()))
        });
    }

    group.finish();
}

fn bench_srt_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("SRT Parsing");

    for &count in &[100, 1_000, 10_000] {
        let content = to_srt(&generate_cues(count));
        group.bench_with_input(BenchmarkId::new("parse", count), &content, |b, content| {
            b.iter(|| black_box(parse_captions(black_box(content)).unwrap()))
        });
    }

    group.finish();
}

fn bench_sentence_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sentence Splitting");

    for &count in &[100, 1_000] {
        let cues = generate_cues(count);
        group.bench_with_input(BenchmarkId::new("split", count), &cues, |b, cues| {
            b.iter(|| black_box(split_sentences(black_box(cues), 3)))
        });
    }

    group.finish();
}

// ============================================================================
// Lookup Benchmarks
// ============================================================================

fn bench_active_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Active Cue Lookup");

    for &count in &[100, 10_000, 100_000] {
        let cues = generate_cues(count);
        let index = CueIndex::new(&cues);
        let time = count as f64 * 3.0 * 0.9;

        group.bench_with_input(BenchmarkId::new("linear", count), &time, |b, &time| {
            b.iter(|| black_box(active_index(black_box(&cues), black_box(time))))
        });
        group.bench_with_input(BenchmarkId::new("indexed", count), &time, |b, &time| {
            b.iter(|| black_box(index.active_index(black_box(time))))
        });
    }

    group.finish();
}

fn bench_session_ticks(c: &mut Criterion) {
    let content = to_webvtt(&generate_cues(2_000));
    let mut session = CaptionSession::default();
    session.load(&content).unwrap();
    session.set_mode(SegmentationMode::Sentence);

    // one minute of playback at 4 ticks per second
    c.bench_function("session_update_240_ticks", |b| {
        b.iter(|| {
            for tick in 0..240 {
                black_box(session.update(black_box(tick as f64 * 0.25)));
            }
        })
    });
}

// ============================================================================
// Group Registration
// ============================================================================

criterion_group!(
    parse_benches,
    bench_timecode,
    bench_sanitize,
    bench_vtt_parsing,
    bench_srt_parsing,
    bench_sentence_split,
);

criterion_group!(
    lookup_benches,
    bench_active_lookup,
    bench_session_ticks,
);

criterion_main!(parse_benches, lookup_benches);
