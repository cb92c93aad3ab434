//! Configuration for the Inkwell manga generation library.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from inkwell.toml)
//! - User overrides (./inkwell.toml or ~/.config/inkwell/inkwell.toml)
//! - Automatic merging with user values taking precedence
//!
//! Prompt content lives in configuration too: the [`StyleCatalog`] maps each
//! visual medium and color mode to fixed instruction text, built once at
//! startup and shared read-only by every generation call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod retry;
mod styles;

pub use config::{
    ColorModeConfig, ExtractionConfig, GeminiConfig, InkwellConfig, PromptConfig, StyleConfig,
};
pub use retry::RetryPolicy;
pub use styles::{StyleCatalog, StyleDescriptor};
