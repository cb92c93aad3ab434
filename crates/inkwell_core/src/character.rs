//! Character records extracted from a script.

use serde::{Deserialize, Serialize};

/// A recurring character and the description that keeps it on-model.
///
/// `visual_anchor` is the consistency lock: every later generation call that
/// features the character quotes it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Project-scoped identifier (`char-N`)
    pub id: String,
    /// Display name, matched exactly against storyboard page casts
    pub name: String,
    /// Narrative description
    pub description: String,
    /// Free-text generation prompt
    pub visual_prompt: String,
    /// Hair, eyes and permanent outfit description reused across calls
    pub visual_anchor: String,
    /// Generated portrait as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
