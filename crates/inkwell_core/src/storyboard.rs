//! Storyboard page records.

use crate::GenerationStatus;
use serde::{Deserialize, Serialize};

/// Page composition preset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageLayout {
    /// One dominant full-page panel
    #[display("SPLASH")]
    Splash,
    /// Dense dynamic panels for action beats
    #[display("ACTION_PANELS")]
    ActionPanels,
    /// Calm sequential panels for dialogue and exposition
    #[display("NARRATIVE_PANELS")]
    NarrativePanels,
    /// Two-page climax composition
    #[display("CLIMAX_SPREAD")]
    ClimaxSpread,
}

/// One page of the storyboard.
///
/// Pages are created as a batch by storyboard generation with
/// [`GenerationStatus::Pending`] and no image; the caller moves each one
/// through its status as it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardPage {
    /// 1-based page number
    pub page_number: u32,
    /// Composition preset
    pub layout_type: PageLayout,
    /// Free-text panel layout
    pub layout_description: String,
    /// Dialogue or narration rendered inside the page
    pub narrative_text: String,
    /// Scene description for the illustrator
    pub visual_prompt: String,
    /// Names of characters appearing on this page
    pub characters_in_page: Vec<String>,
    /// Id of the location the page takes place in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Rendered page as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image_url: Option<String>,
    /// Render lifecycle
    #[serde(default)]
    pub status: GenerationStatus,
}
