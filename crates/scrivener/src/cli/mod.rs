//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scrivener binary.

mod commands;
mod config;
mod progress;
mod titles;
mod write;

pub use commands::{Cli, Commands, TitlesArgs, WriteArgs};
pub use config::{CONFIG_FILE_NAME, build_pipeline, default_config_path, load_config};
pub use progress::BarReporter;
pub use titles::handle_titles_command;
pub use write::handle_write_command;
