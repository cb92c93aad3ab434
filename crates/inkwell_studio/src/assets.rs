//! Asset extraction payloads.

use inkwell_core::{Character, IdAllocator, IdPrefix, Location};
use serde::Deserialize;

/// Characters and locations extracted from a script, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters, derive_getters::Dissolve)]
pub struct ExtractedAssets {
    characters: Vec<Character>,
    locations: Vec<Location>,
}

impl ExtractedAssets {
    /// Assemble extracted assets.
    pub fn new(characters: Vec<Character>, locations: Vec<Location>) -> Self {
        Self {
            characters,
            locations,
        }
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.locations.is_empty()
    }
}

/// Raw extraction response, before identifiers are assigned.
///
/// A missing list reads as empty so the other one is still kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ExtractionPayload {
    #[serde(default)]
    characters: Vec<RawCharacter>,
    #[serde(default)]
    locations: Vec<RawLocation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCharacter {
    name: String,
    description: String,
    visual_prompt: String,
    visual_anchor: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawLocation {
    name: String,
    description: String,
}

impl ExtractionPayload {
    /// Assign identifiers in service order, characters first.
    pub(crate) fn into_assets(self, ids: &mut IdAllocator) -> ExtractedAssets {
        let characters = self
            .characters
            .into_iter()
            .map(|raw| Character {
                id: ids.mint(IdPrefix::Character),
                name: raw.name,
                description: raw.description,
                visual_prompt: raw.visual_prompt,
                visual_anchor: raw.visual_anchor,
                image_url: None,
            })
            .collect();

        let locations = self
            .locations
            .into_iter()
            .map(|raw| Location {
                id: ids.mint(IdPrefix::Location),
                name: raw.name,
                description: raw.description,
                image_url: None,
            })
            .collect();

        ExtractedAssets::new(characters, locations)
    }
}
