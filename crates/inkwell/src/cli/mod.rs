//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the inkwell binary.

mod commands;
mod generate;
mod project;

pub use commands::{Cli, Commands};
pub use generate::{handle_assets, handle_portraits, handle_render, handle_storyboard};
pub use project::{InitOptions, handle_export, handle_init, handle_validate};
