//! The manga project aggregate.

use crate::{
    Character, ColorMode, GenerationStatus, IdAllocator, Location, StoryboardPage, VisualMedium,
};
use serde::{Deserialize, Serialize};

/// Aggregate root for one comic: the script, its style selectors, and every
/// record generated from it.
///
/// # Examples
///
/// ```
/// use inkwell_core::{ColorMode, MangaProject, VisualMedium};
///
/// let project = MangaProject::builder()
///     .title("Neon Ronin")
///     .story("A courier crosses a flooded city.")
///     .color_mode(ColorMode::Color)
///     .visual_medium(VisualMedium::DcComic)
///     .page_count(4u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(project.page_count, 4);
/// assert!(project.characters.is_empty());
/// assert!(project.lead_character().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct MangaProject {
    /// Title rendered on the cover
    pub title: String,
    /// Optional volume name
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
    /// Optional artist credit
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    /// Source prose script
    pub story: String,
    /// Black-and-white or color
    #[builder(default)]
    pub color_mode: ColorMode,
    /// Style preset
    #[builder(default)]
    pub visual_medium: VisualMedium,
    /// Target page count for the storyboard
    #[builder(default = "8")]
    pub page_count: u32,
    /// Extracted characters, in service order
    #[builder(default)]
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Extracted locations, in service order
    #[builder(default)]
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Storyboard pages, in page order
    #[builder(default)]
    #[serde(default)]
    pub storyboard: Vec<StoryboardPage>,
    /// Free-text production context passed to asset extraction
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_references: Option<String>,
    /// Generated cover as a data URI
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Cover render lifecycle
    #[builder(default)]
    #[serde(default)]
    pub cover_status: GenerationStatus,
    /// Identifier counter for characters and locations
    #[builder(default)]
    #[serde(default)]
    pub ids: IdAllocator,
}

impl MangaProject {
    /// Creates a new project builder.
    pub fn builder() -> MangaProjectBuilder {
        MangaProjectBuilder::default()
    }

    /// The first character, featured on the cover.
    pub fn lead_character(&self) -> Option<&Character> {
        self.characters.first()
    }

    /// Location with the given id.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Character whose name matches exactly.
    pub fn character_named(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|character| character.name == name)
    }

    /// Location referenced by a page, if it exists in this project.
    pub fn location_for(&self, page: &StoryboardPage) -> Option<&Location> {
        page.location_id.as_deref().and_then(|id| self.location(id))
    }

    /// Characters cast on a page, in project order.
    ///
    /// Names on the page that match no character are skipped.
    pub fn cast_for(&self, page: &StoryboardPage) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|character| page.characters_in_page.contains(&character.name))
            .collect()
    }

    /// Replace the extracted assets, keeping the id counter ahead of every id.
    pub fn set_assets(&mut self, characters: Vec<Character>, locations: Vec<Location>) {
        for id in characters
            .iter()
            .map(|c| c.id.as_str())
            .chain(locations.iter().map(|l| l.id.as_str()))
        {
            self.ids.observe(id);
        }
        self.characters = characters;
        self.locations = locations;
    }
}
