//! Turnover CLI — Command-line interface for EDL turnovers.
//!
//! Usage:
//!   turnover parse <FILE>       List the edit events of an EDL
//!   turnover info <FILE>        Show title, frame code mode, and counts
//!   turnover validate <FILE>    Run strict checks over the video events
//!   turnover shots <FILE>       Suggest shot codes for the video events
//!   turnover export <FILE>      Rewrite the video events as a clean CMX 3600 EDL

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use turnover_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "turnover",
    about = "EDL ingestion for VFX turnovers",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/turnover/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the edit events of an EDL
    Parse {
        /// Path to the EDL
        path: PathBuf,

        /// Frame rate for frame counts (defaults to config)
        #[arg(long)]
        fps: Option<u32>,

        /// Include audio and mixed tracks
        #[arg(long)]
        all_tracks: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show title, frame code mode, and event counts
    Info {
        /// Path to the EDL
        path: PathBuf,

        /// Frame rate for frame counts (defaults to config)
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Run strict checks over the video events
    Validate {
        /// Path to the EDL
        path: PathBuf,

        /// Frame rate for frame counts (defaults to config)
        #[arg(long)]
        fps: Option<u32>,

        /// Exit with an error when issues are found
        #[arg(long)]
        strict: bool,
    },

    /// Suggest shot codes for the video events
    Shots {
        /// Path to the EDL
        path: PathBuf,

        /// Sequence code prefix (defaults to config)
        #[arg(short, long)]
        sequence: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rewrite the video events as a clean CMX 3600 EDL
    Export {
        /// Path to the EDL
        path: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// EDL title (defaults to the source title)
        #[arg(long)]
        title: Option<String>,

        /// Write drop-frame timecodes in the header and defaults
        #[arg(long)]
        drop_frame: bool,

        /// Frame rate for generated timecodes (defaults to config)
        #[arg(long)]
        fps: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    turnover_common::logging::init_logging(&logging)?;
    tracing::debug!(fps = config.edl.fps, "configuration loaded");

    let fps_or_default = |fps: Option<u32>| fps.unwrap_or(config.edl.fps);

    match cli.command {
        Commands::Parse {
            path,
            fps,
            all_tracks,
            json,
        } => commands::parse::run(path, fps_or_default(fps), all_tracks, json),
        Commands::Info { path, fps } => commands::info::run(path, fps_or_default(fps)),
        Commands::Validate { path, fps, strict } => {
            commands::validate::run(path, fps_or_default(fps), strict)
        }
        Commands::Shots {
            path,
            sequence,
            json,
        } => commands::shots::run(
            path,
            config.edl.fps,
            sequence.unwrap_or_else(|| config.edl.sequence_code.clone()),
            json,
        ),
        Commands::Export {
            path,
            output,
            title,
            drop_frame,
            fps,
        } => commands::export::run(
            path,
            output,
            title,
            drop_frame || config.edl.drop_frame,
            fps_or_default(fps),
        ),
    }
}
