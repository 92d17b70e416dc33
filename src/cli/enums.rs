//! CLI enum types for symbol presets and output formats.

use clap::ValueEnum;

use crate::output::OutputFormat;
use crate::symbols::SymbolPreset;

/// Symbol preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    #[default]
    Emoji,
    Blocks,
    Ascii,
}

impl From<Preset> for SymbolPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Emoji => SymbolPreset::Emoji,
            Preset::Blocks => SymbolPreset::Blocks,
            Preset::Ascii => SymbolPreset::Ascii,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Html => OutputFormat::Html,
        }
    }
}
