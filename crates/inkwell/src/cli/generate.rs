//! Commands that call the generation service.
//!
//! Each handler loads the project, resets slots an interrupted run left
//! generating, runs one stage and saves the project again.

use inkwell::{
    InkwellDriver, InkwellResult, MangaProject, MangaStudio, ParsePolicy, pipeline, storage,
    validate_storyboard,
};
use std::path::Path;
use tracing::{info, warn};

fn open(path: &Path) -> InkwellResult<MangaProject> {
    let mut project = storage::load_project(path)?;
    pipeline::recover_interrupted(&mut project)?;
    Ok(project)
}

/// Extract characters and locations.
pub async fn handle_assets<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    path: &Path,
    policy: Option<ParsePolicy>,
) -> InkwellResult<()> {
    let mut project = open(path)?;
    let stored = pipeline::extract_assets(studio, &mut project, policy).await?;
    storage::save_project(path, &project)?;

    println!(
        "Stored {} assets: {} characters, {} locations",
        stored,
        project.characters.len(),
        project.locations.len()
    );
    for character in &project.characters {
        println!("  {} {}", character.id, character.name);
    }
    for location in &project.locations {
        println!("  {} {}", location.id, location.name);
    }
    Ok(())
}

/// Render portraits and plates.
pub async fn handle_portraits<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    path: &Path,
    force: bool,
) -> InkwellResult<()> {
    let mut project = open(path)?;
    let summary = pipeline::render_references(studio, &mut project, force).await?;
    storage::save_project(path, &project)?;

    println!("References: {}", summary);
    Ok(())
}

/// Build the storyboard.
pub async fn handle_storyboard<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    path: &Path,
    policy: Option<ParsePolicy>,
) -> InkwellResult<()> {
    let mut project = open(path)?;
    let pages = pipeline::create_storyboard(studio, &mut project, policy).await?;
    storage::save_project(path, &project)?;

    println!("Storyboard: {} pages", pages);
    for page in &project.storyboard {
        println!(
            "  {:>3} [{}] {}",
            page.page_number, page.layout_type, page.narrative_text
        );
    }
    Ok(())
}

/// Render the cover and pages.
///
/// Unresolved storyboard references are reported but do not stop the run.
/// The project is saved after the cover so a failure while rendering pages
/// keeps it.
pub async fn handle_render<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    path: &Path,
    concurrency: usize,
    skip_cover: bool,
) -> InkwellResult<()> {
    let mut project = open(path)?;
    for issue in validate_storyboard(&project) {
        warn!(%issue, "Unresolved storyboard reference");
    }

    if !skip_cover {
        let status = pipeline::render_cover(studio, &mut project).await?;
        storage::save_project(path, &project)?;
        println!("Cover: {}", status);
    }

    info!(concurrency, "Rendering pages");
    let summary = pipeline::render_pages(studio, &mut project, concurrency).await?;
    storage::save_project(path, &project)?;

    println!("Pages: {}", summary);
    Ok(())
}
