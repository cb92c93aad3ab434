//! Storyboard reference checks.
//!
//! Rendering skips references that do not resolve; this check lets a caller
//! surface them before spending image calls.

use inkwell_core::MangaProject;
use tracing::debug;

/// A storyboard reference that names nothing in the project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReferenceIssue {
    /// Page location id matches no location
    #[display("Page {}: location '{}' is not in the project", page_number, location_id)]
    UnknownLocation {
        /// Page carrying the reference
        page_number: u32,
        /// Unresolved id
        location_id: String,
    },
    /// Page cast name matches no character exactly
    #[display("Page {}: character '{}' is not in the project", page_number, name)]
    UnknownCharacter {
        /// Page carrying the reference
        page_number: u32,
        /// Unresolved name
        name: String,
    },
}

/// List every page reference that does not resolve, in page order.
///
/// # Examples
///
/// ```
/// use inkwell_core::{MangaProject, PageLayout, StoryboardPage};
/// use inkwell_studio::{ReferenceIssue, validate_storyboard};
///
/// let mut project = MangaProject::builder().title("T").story("S").build().unwrap();
/// project.storyboard.push(StoryboardPage {
///     page_number: 1,
///     layout_type: PageLayout::Splash,
///     layout_description: String::new(),
///     narrative_text: String::new(),
///     visual_prompt: String::new(),
///     characters_in_page: vec!["Kai".to_string()],
///     location_id: Some("loc-7".to_string()),
///     generated_image_url: None,
///     status: Default::default(),
/// });
///
/// let issues = validate_storyboard(&project);
/// assert_eq!(issues.len(), 2);
/// assert!(matches!(issues[0], ReferenceIssue::UnknownLocation { page_number: 1, .. }));
/// ```
pub fn validate_storyboard(project: &MangaProject) -> Vec<ReferenceIssue> {
    let mut issues = Vec::new();

    for page in &project.storyboard {
        if let Some(id) = page.location_id.as_deref() {
            if project.location(id).is_none() {
                issues.push(ReferenceIssue::UnknownLocation {
                    page_number: page.page_number,
                    location_id: id.to_string(),
                });
            }
        }

        for name in &page.characters_in_page {
            if project.character_named(name).is_none() {
                issues.push(ReferenceIssue::UnknownCharacter {
                    page_number: page.page_number,
                    name: name.clone(),
                });
            }
        }
    }

    debug!(pages = project.storyboard.len(), issues = issues.len(), "Storyboard validated");
    issues
}
