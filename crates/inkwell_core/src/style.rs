//! Closed style selectors for a project.

use serde::{Deserialize, Serialize};

/// Whether pages are inked in black and white or fully colored.
///
/// # Examples
///
/// ```
/// use inkwell_core::ColorMode;
///
/// let mode: ColorMode = serde_json::from_str("\"B&W\"").unwrap();
/// assert_eq!(mode, ColorMode::BlackAndWhite);
/// assert!(serde_json::from_str::<ColorMode>("\"Sepia\"").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum ColorMode {
    /// Black ink and grey screentones only
    #[default]
    #[display("B&W")]
    #[serde(rename = "B&W")]
    BlackAndWhite,
    /// Full digital color
    #[display("Color")]
    #[serde(rename = "Color")]
    Color,
}

impl ColorMode {
    /// Key used for this mode in configuration tables.
    pub fn config_key(&self) -> &'static str {
        match self {
            ColorMode::BlackAndWhite => "bw",
            ColorMode::Color => "color",
        }
    }
}

/// Visual medium preset the artwork imitates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualMedium {
    /// Japanese seinen manga
    #[default]
    #[display("MANGA")]
    Manga,
    /// American superhero house style
    #[display("DC_COMIC")]
    DcComic,
    /// Painterly high-detail graphic novel
    #[display("DETAILED_COMIC")]
    DetailedComic,
}

impl VisualMedium {
    /// Key used for this medium in configuration tables.
    pub fn config_key(&self) -> &'static str {
        match self {
            VisualMedium::Manga => "manga",
            VisualMedium::DcComic => "dc_comic",
            VisualMedium::DetailedComic => "detailed_comic",
        }
    }
}
