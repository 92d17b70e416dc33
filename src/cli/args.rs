//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Format, Preset};

/// Convert an image into a grid of unicode symbols
#[derive(Parser, Debug)]
#[command(name = "symbol-art")]
#[command(version, about = "Convert images into unicode symbol art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file or URL (default: configured source URL)
    pub source: Option<String>,

    /// Gray level (0-255) at or below which a pixel counts as dark
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Rotate the output by 90 degrees
    #[arg(long)]
    pub turn: bool,

    /// Symbol preset
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Symbols for light pixels (overrides the preset)
    #[arg(long)]
    pub light: Option<String>,

    /// Symbols for dark pixels (overrides the preset)
    #[arg(long)]
    pub dark: Option<String>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<Format>,

    /// HTML font size in points
    #[arg(long)]
    pub font_size: Option<u32>,

    /// HTML line height in points
    #[arg(long)]
    pub line_height: Option<u32>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
