//! CLI command implementations

use anyhow::{anyhow, Context};
use std::path::Path;
use subline_core::{
    captions::{to_srt, to_webvtt, try_parse_timecode},
    CaptionFormat, CaptionSession, CaptionTrack, ParserConfig, SegmentationMode,
};
use tracing::{debug, info};

use crate::output::{self, ActiveCue, OutputFormat, TrackSummary};

/// Load the parser config, or defaults when no path was given
pub async fn load_config(path: Option<&Path>) -> anyhow::Result<ParserConfig> {
    let Some(path) = path else {
        return Ok(ParserConfig::default());
    };
    let raw = read(path).await?;
    let config = ParserConfig::from_json(&raw)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!(?config, "Loaded parser config");
    Ok(config)
}

async fn read(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

async fn load_session(path: &Path, config: &ParserConfig) -> anyhow::Result<CaptionSession> {
    let content = read(path).await?;
    let mut session = CaptionSession::new(config.clone());
    session
        .load(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(session)
}

fn mode(sentences: bool) -> SegmentationMode {
    if sentences {
        SegmentationMode::Sentence
    } else {
        SegmentationMode::Cue
    }
}

/// List the cues (or sentence sub-cues) of a caption file
pub async fn parse(
    path: &Path,
    sentences: bool,
    config: &ParserConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut session = load_session(path, config).await?;
    session.set_mode(mode(sentences));

    println!("{}", output::render_cues(&session.entries(), format)?);
    Ok(())
}

/// Summarize a caption file
pub async fn inspect(path: &Path, config: &ParserConfig, format: OutputFormat) -> anyhow::Result<()> {
    let session = load_session(path, config).await?;
    let track = session
        .track()
        .ok_or_else(|| anyhow!("no track loaded from {}", path.display()))?;

    let summary = TrackSummary {
        file: path.display().to_string(),
        kind: track.kind.to_string(),
        cues: track.len(),
        sentences: session.sentences().len(),
        duration: track.duration(),
        diagnostics: track.diagnostics.clone(),
    };

    println!("{}", output::render_summary(&summary, format)?);
    Ok(())
}

/// Show the entry on screen at `time`
pub async fn at(
    path: &Path,
    time: &str,
    sentences: bool,
    config: &ParserConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let time = try_parse_timecode(time)?;
    let mut session = load_session(path, config).await?;
    session.set_mode(mode(sentences));
    session.update(time);

    let active = ActiveCue {
        time,
        cue: session.current(),
    };
    println!("{}", output::render_active(&active, format)?);
    Ok(())
}

/// Render a track in `format`
pub fn export(track: &CaptionTrack, format: CaptionFormat) -> String {
    match format {
        CaptionFormat::WebVtt => to_webvtt(&track.cues),
        CaptionFormat::Srt => to_srt(&track.cues),
    }
}

async fn emit(content: String, out_path: Option<&Path>) -> anyhow::Result<()> {
    match out_path {
        Some(path) => {
            tokio::fs::write(path, &content)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "Captions written");
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Convert a caption file to another format
pub async fn convert(
    path: &Path,
    to: &str,
    out_path: Option<&Path>,
    config: &ParserConfig,
) -> anyhow::Result<()> {
    let target: CaptionFormat = to.parse().map_err(|e: String| anyhow!(e))?;
    let session = load_session(path, config).await?;
    let track = session
        .track()
        .ok_or_else(|| anyhow!("no track loaded from {}", path.display()))?;

    emit(export(&track, target), out_path).await
}

/// Format implied by an output path's extension, WebVTT by default
pub fn format_for_path(path: &Path) -> CaptionFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
        .unwrap_or(CaptionFormat::WebVtt)
}

/// Normalize a transcript JSON file into cues
pub async fn transcript(
    path: &Path,
    out_path: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let raw = read(path).await?;
    let mut session = CaptionSession::default();
    let track = session
        .load_transcript(&raw)
        .with_context(|| format!("failed to normalize {}", path.display()))?;

    match out_path {
        Some(out) => emit(export(&track, format_for_path(out)), Some(out)).await,
        None => {
            println!("{}", output::render_cues(&session.entries(), format)?);
            Ok(())
        }
    }
}
