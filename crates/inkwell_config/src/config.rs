//! TOML configuration structures.

use crate::RetryPolicy;
use config::{Config, File, FileFormat};
use inkwell_error::{ConfigError, InkwellError, InkwellResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../inkwell.toml");

/// Connection settings for the Gemini REST API.
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// text_model = "gemini-3-pro-preview"
/// image_model = "gemini-2.5-flash-image"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Model used for schema-constrained text (extraction, storyboard)
    pub text_model: String,
    /// Model used for every image call
    pub image_model: String,
    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Asset extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Production context used when a project has no style reference
    pub default_context: String,
}

/// Fixed instruction blocks shared by every medium.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromptConfig {
    /// Continuity directive that opens every page prompt
    pub continuity: String,
}

/// Style protocol for one visual medium.
///
/// ```toml
/// [styles.manga]
/// label = "Professional Japanese Manga (Seinen)"
/// protocol = "ART STYLE: ..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Human-readable name
    pub label: String,
    /// Instruction block appended to every image prompt
    pub protocol: String,
}

/// Color directives for one color mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorModeConfig {
    /// Directive for portraits, plates and covers
    pub asset_directive: String,
    /// Directive for storyboard pages
    pub page_directive: String,
}

/// Top-level Inkwell configuration.
///
/// # Example
///
/// ```no_run
/// use inkwell_config::InkwellConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = InkwellConfig::load()?;
/// println!("Image model: {}", config.gemini.image_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InkwellConfig {
    /// Gemini connection settings
    pub gemini: GeminiConfig,
    /// Retry policy wrapped around every external call
    #[serde(default)]
    pub retry: RetryPolicy,
    /// Asset extraction settings
    pub extraction: ExtractionConfig,
    /// Shared instruction blocks
    pub prompts: PromptConfig,
    /// Style protocol per visual medium, keyed by `VisualMedium::config_key`
    pub styles: HashMap<String, StyleConfig>,
    /// Color directives per color mode, keyed by `ColorMode::config_key`
    pub color_modes: HashMap<String, ColorModeConfig>,
}

impl InkwellConfig {
    /// The configuration shipped with the library, with no user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled TOML cannot be parsed.
    #[instrument]
    pub fn bundled() -> InkwellResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parse a configuration from a TOML string layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if either source cannot be parsed.
    #[instrument(skip(toml))]
    pub fn from_toml_str(toml: &str) -> InkwellResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Load configuration from a specific file path, layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> InkwellResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (inkwell.toml shipped with library)
    /// 2. User config in home directory (~/.config/inkwell/inkwell.toml)
    /// 3. User config in current directory (./inkwell.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> InkwellResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/inkwell/inkwell.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("inkwell").required(false));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> InkwellResult<Self> {
        builder
            .build()
            .map_err(|e| {
                InkwellError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                InkwellError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
