//! Immutable mapping from style selectors to instruction text.

use crate::InkwellConfig;
use inkwell_core::{ColorMode, VisualMedium};
use inkwell_error::{ConfigError, InkwellResult};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Instruction text selected for one `{medium, color mode}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor<'a> {
    /// Medium style protocol (identical for every color mode)
    pub style_block: &'a str,
    /// Color directive for portraits, plates and covers
    pub asset_directive: &'a str,
    /// Color directive for storyboard pages
    pub page_directive: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColorDirectives {
    asset: String,
    page: String,
}

/// Every prompt fragment that depends on project style, validated up front.
///
/// Building the catalog checks that every [`VisualMedium`] and every
/// [`ColorMode`] has an entry, so lookups afterwards cannot fail.
///
/// # Examples
///
/// ```
/// use inkwell_config::{InkwellConfig, StyleCatalog};
/// use inkwell_core::{ColorMode, VisualMedium};
///
/// let catalog = StyleCatalog::from_config(&InkwellConfig::bundled().unwrap()).unwrap();
/// let style = catalog.descriptor(VisualMedium::Manga, ColorMode::BlackAndWhite);
/// assert_eq!(style.asset_directive, "STRICT PURE BLACK AND WHITE INK ONLY.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalog {
    protocols: HashMap<VisualMedium, String>,
    directives: HashMap<ColorMode, ColorDirectives>,
    continuity: String,
    default_context: String,
}

impl StyleCatalog {
    /// Build the catalog from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first medium or color mode
    /// without an entry.
    #[instrument(skip(config))]
    pub fn from_config(config: &InkwellConfig) -> InkwellResult<Self> {
        let mut protocols = HashMap::new();
        for medium in VisualMedium::iter() {
            let style = config.styles.get(medium.config_key()).ok_or_else(|| {
                ConfigError::new(format!(
                    "No [styles.{}] entry for medium {}",
                    medium.config_key(),
                    medium
                ))
            })?;
            protocols.insert(medium, style.protocol.trim().to_string());
        }

        let mut directives = HashMap::new();
        for mode in ColorMode::iter() {
            let entry = config.color_modes.get(mode.config_key()).ok_or_else(|| {
                ConfigError::new(format!(
                    "No [color_modes.{}] entry for color mode {}",
                    mode.config_key(),
                    mode
                ))
            })?;
            directives.insert(
                mode,
                ColorDirectives {
                    asset: entry.asset_directive.trim().to_string(),
                    page: entry.page_directive.trim().to_string(),
                },
            );
        }

        debug!(
            media = protocols.len(),
            color_modes = directives.len(),
            "Style catalog built"
        );

        Ok(Self {
            protocols,
            directives,
            continuity: config.prompts.continuity.trim().to_string(),
            default_context: config.extraction.default_context.clone(),
        })
    }

    /// The catalog built from the bundled configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled configuration is invalid.
    pub fn bundled() -> InkwellResult<Self> {
        Self::from_config(&InkwellConfig::bundled()?)
    }

    /// Instruction text for a medium and color mode.
    pub fn descriptor(&self, medium: VisualMedium, color_mode: ColorMode) -> StyleDescriptor<'_> {
        // Both maps are total over their enums after `from_config`.
        let directives = &self.directives[&color_mode];
        StyleDescriptor {
            style_block: &self.protocols[&medium],
            asset_directive: &directives.asset,
            page_directive: &directives.page,
        }
    }

    /// Continuity directive that opens every page prompt.
    pub fn continuity(&self) -> &str {
        &self.continuity
    }

    /// Production context used when no style reference is given.
    pub fn default_context(&self) -> &str {
        &self.default_context
    }
}
