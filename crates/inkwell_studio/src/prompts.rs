//! Instruction templates for every generation call.
//!
//! Builders are pure functions of their inputs and the selected
//! [`StyleDescriptor`], so prompt text can be checked without a driver.

use inkwell_config::StyleDescriptor;
use inkwell_core::{Character, Location, MangaProject, StoryboardPage};

/// Name used on the cover when the project has no characters.
pub const UNNAMED_PROTAGONIST: &str = "UNNAMED PROTAGONIST";

/// Visual anchor used on the cover when the project has no characters.
pub const UNSPECIFIED_ANCHOR: &str = "UNSPECIFIED";

/// Label preceding the lead portrait on a cover request.
pub const PROTAGONIST_REFERENCE_LABEL: &str = "REFERENCE PROTAGONIST DNA:";

/// Label preceding the location plate on a page request.
pub const ENVIRONMENT_REFERENCE_LABEL: &str = "ENVIRONMENT CONTEXT:";

/// Label preceding a character portrait on a page request.
pub fn character_reference_label(name: &str) -> String {
    format!("CHARACTER DNA LOCK ({}):", name)
}

/// Asset extraction instruction.
///
/// `context` is the project's style reference, or the configured default
/// production context when the project has none.
pub fn extraction_prompt(story: &str, context: &str) -> String {
    format!(
        "ACT AS A LEAD PRODUCTION DESIGNER. Analyze this story and extract 2-4 primary characters and key locations.\n\
         Define a \"Visual DNA\" for each character (hair, eyes, permanent outfit).\n\
         Script: {}\n\
         Production Context: {}",
        story, context
    )
}

/// Storyboard instruction.
///
/// Projects that already have extracted assets also list location ids and
/// cast names, so the pages can reference them exactly.
///
/// # Examples
///
/// ```
/// use inkwell_core::MangaProject;
/// use inkwell_studio::storyboard_prompt;
///
/// let project = MangaProject::builder()
///     .title("Tidewater")
///     .story("Two rivals race a storm.")
///     .page_count(6u32)
///     .build()
///     .unwrap();
///
/// let prompt = storyboard_prompt(&project);
/// assert!(prompt.contains("Create a 6-page storyboard for \"Tidewater\"."));
/// assert!(prompt.contains("Medium: MANGA."));
/// assert!(!prompt.contains("Known locations"));
/// ```
pub fn storyboard_prompt(project: &MangaProject) -> String {
    let mut prompt = format!(
        "ACT AS A SENIOR COMIC DIRECTOR. Create a {}-page storyboard for \"{}\".\n\
         Medium: {}. Script: {}",
        project.page_count, project.title, project.visual_medium, project.story
    );

    if !project.locations.is_empty() {
        let locations = project
            .locations
            .iter()
            .map(|location| format!("{} ({})", location.id, location.name))
            .collect::<Vec<_>>()
            .join(", ");
        prompt.push_str(&format!(
            "\nKnown locations (use these ids for locationId): {}",
            locations
        ));
    }

    if !project.characters.is_empty() {
        let cast = project
            .characters
            .iter()
            .map(|character| character.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        prompt.push_str(&format!(
            "\nCast (use these exact names in charactersInPage): {}",
            cast
        ));
    }

    prompt
}

/// Environment plate instruction.
pub fn location_plate_prompt(location: &Location, style: &StyleDescriptor<'_>) -> String {
    format!(
        "ENVIRONMENT PLATE: {}. {}. {} {}. Cinematic composition. NO TEXT.",
        location.name, location.description, style.asset_directive, style.style_block
    )
}

/// Character model sheet instruction.
pub fn portrait_prompt(character: &Character, style: &StyleDescriptor<'_>) -> String {
    format!(
        "CHARACTER MODEL SHEET: {}. DNA: {}. {} {}. Front-facing neutral pose. NO TEXT.",
        character.name, character.visual_anchor, style.asset_directive, style.style_block
    )
}

/// Cover instruction featuring the lead character.
pub fn cover_prompt(project: &MangaProject, style: &StyleDescriptor<'_>) -> String {
    let lead = project.lead_character();
    let name = lead.map_or(UNNAMED_PROTAGONIST, |c| c.name.as_str());
    let anchor = lead.map_or(UNSPECIFIED_ANCHOR, |c| c.visual_anchor.as_str());

    format!(
        "OFFICIAL COMIC COVER: \"{title}\".\n\
         FEATURING: {name}. DNA Lock: {anchor}.\n\
         {directive} {style}.\n\
         MANDATORY: Render the title \"{title}\" in clear, stylized English font. NO GIBBERISH.",
        title = project.title,
        name = name,
        anchor = anchor,
        directive = style.asset_directive,
        style = style.style_block,
    )
}

/// Page instruction: continuity rules, page style, scene and dialogue.
pub fn page_prompt(page: &StoryboardPage, continuity: &str, style: &StyleDescriptor<'_>) -> String {
    [
        continuity.to_string(),
        format!("GENERATING PAGE {}.", page.page_number),
        style.style_block.to_string(),
        style.page_directive.to_string(),
        format!("SCENE DESCRIPTION: {}", page.visual_prompt),
        format!("DIALOGUE TO RENDER: \"{}\"", page.narrative_text),
        format!(
            "MANDATORY: PUT \"{}\" IN A WHITE SPEECH BUBBLE WITH BOLD BLACK TEXT.",
            page.narrative_text
        ),
        "THE TEXT MUST BE CLEAR READABLE ENGLISH. ABSOLUTELY NO GIBBERISH.".to_string(),
        "MAINTAIN CHARACTER IDENTITY FROM REFERENCES PERFECTLY.".to_string(),
    ]
    .join("\n")
}
