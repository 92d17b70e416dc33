//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, settings resolution and
//! subcommand handlers.

mod args;
mod commands;
mod enums;
mod settings;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, init_config};
pub use enums::{Format, Preset};
pub use settings::RunSettings;
