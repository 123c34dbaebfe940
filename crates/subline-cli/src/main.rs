//! Subline CLI - Caption toolkit
//!
//! Features:
//! - WebVTT / SRT parsing with sentence splitting
//! - Track inspection (cue count, duration, skipped blocks)
//! - Active cue lookup at a timestamp
//! - Format conversion
//! - Speech-to-text transcript normalization

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use output::OutputFormat;

/// Subline CLI - Caption toolkit
#[derive(Parser)]
#[command(name = "subline")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Caption parsing, lookup, and conversion toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Parser config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cues of a caption file
    Parse {
        /// Path to a .vtt or .srt file
        file: PathBuf,

        /// List sentence sub-cues instead of cues
        #[arg(short, long)]
        sentences: bool,
    },

    /// Summarize a caption file
    Inspect {
        /// Path to a .vtt or .srt file
        file: PathBuf,
    },

    /// Show the cue on screen at a timestamp
    At {
        /// Path to a .vtt or .srt file
        file: PathBuf,

        /// Timestamp (HH:MM:SS.mmm, MM:SS.mmm, or seconds)
        time: String,

        /// Look up sentence sub-cues instead of cues
        #[arg(short, long)]
        sentences: bool,
    },

    /// Convert between caption formats
    Convert {
        /// Path to a .vtt or .srt file
        file: PathBuf,

        /// Target format (vtt, srt)
        #[arg(short, long, default_value = "vtt")]
        to: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize a transcription response or subtitle document
    Transcript {
        /// Path to the JSON file
        file: PathBuf,

        /// Write the result as a caption file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays pipeable
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Parse { file, sentences } => {
            commands::parse(&file, sentences, &config, cli.format).await?;
        }
        Commands::Inspect { file } => {
            commands::inspect(&file, &config, cli.format).await?;
        }
        Commands::At { file, time, sentences } => {
            commands::at(&file, &time, sentences, &config, cli.format).await?;
        }
        Commands::Convert { file, to, output } => {
            commands::convert(&file, &to, output.as_deref(), &config).await?;
        }
        Commands::Transcript { file, output } => {
            commands::transcript(&file, output.as_deref(), cli.format).await?;
        }
    }

    Ok(())
}
