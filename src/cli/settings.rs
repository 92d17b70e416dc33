//! Merging command-line arguments with the config file.
//!
//! Precedence: CLI args > config file > built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use super::args::Args;
use crate::acquire::{AcquireSettings, ImageSource};
use crate::config::{Config, ConfigError, DEFAULT_SOURCE_URL};
use crate::output::{HtmlStyle, OutputFormat};
use crate::pipeline::RenderSettings;
use crate::raster::Threshold;
use crate::symbols::{Orientation, SymbolPool, SymbolPreset};

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub source: ImageSource,
    pub render: RenderSettings,
    pub format: OutputFormat,
    pub style: HtmlStyle,
    pub acquire: AcquireSettings,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
}

impl RunSettings {
    /// Combine `args` and `cfg`.
    ///
    /// # Errors
    /// `ConfigError::Invalid` for config values that do not parse (unknown
    /// preset or format, threshold outside 0-255).
    pub fn resolve(args: &Args, cfg: &Config) -> Result<Self, ConfigError> {
        let source = args
            .source
            .as_deref()
            .or(cfg.source.url.as_deref())
            .unwrap_or(DEFAULT_SOURCE_URL);

        let threshold = match (args.threshold, cfg.render.threshold) {
            (Some(t), _) => Threshold::from(t),
            (None, Some(t)) => Threshold::new(t).map_err(|e| ConfigError::Invalid {
                field: "render.threshold",
                reason: e.to_string(),
            })?,
            (None, None) => Threshold::default(),
        };

        let preset = match (args.preset, cfg.render.preset.as_deref()) {
            (Some(p), _) => SymbolPreset::from(p),
            (None, Some(name)) => {
                SymbolPreset::from_name(name).ok_or_else(|| ConfigError::Invalid {
                    field: "render.preset",
                    reason: format!("unknown preset '{}' (expected emoji, blocks or ascii)", name),
                })?
            }
            (None, None) => SymbolPreset::default(),
        };
        let (preset_light, preset_dark) = preset.texts();
        let light = args
            .light
            .as_deref()
            .or(cfg.render.light_symbols.as_deref())
            .unwrap_or(preset_light);
        let dark = args
            .dark
            .as_deref()
            .or(cfg.render.dark_symbols.as_deref())
            .unwrap_or(preset_dark);

        let format = match (args.format, cfg.output.format.as_deref()) {
            (Some(f), _) => OutputFormat::from(f),
            (None, Some(name)) => {
                OutputFormat::from_name(name).ok_or_else(|| ConfigError::Invalid {
                    field: "output.format",
                    reason: format!("unknown format '{}' (expected text or html)", name),
                })?
            }
            (None, None) => OutputFormat::default(),
        };

        let defaults = HtmlStyle::default();
        let style = HtmlStyle {
            font_size: args
                .font_size
                .or(cfg.output.font_size)
                .unwrap_or(defaults.font_size),
            line_height: args
                .line_height
                .or(cfg.output.line_height)
                .unwrap_or(defaults.line_height),
        };

        let mut acquire = AcquireSettings::default();
        if let Some(host) = &cfg.acquire.image_host {
            acquire.image_host = host.clone();
        }
        if let Some(retries) = cfg.acquire.network_retries {
            acquire.network_retries = retries;
        }
        if let Some(secs) = cfg.acquire.timeout_secs {
            acquire.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            source: ImageSource::parse(source),
            render: RenderSettings {
                threshold,
                orientation: Orientation::from(args.turn || cfg.render.turn),
                light: SymbolPool::from_text(light),
                dark: SymbolPool::from_text(dark),
            },
            format,
            style,
            acquire,
            output: args.output.clone(),
        })
    }
}
