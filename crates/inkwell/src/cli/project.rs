//! Project file commands that make no generation calls.

use inkwell::{
    ColorMode, ConfigError, GenerationStatus, InkwellResult, MangaProject, StorageError,
    StorageErrorKind, VisualMedium, pipeline, storage, validate_storyboard,
};
use std::path::{Path, PathBuf};

/// Settings for a new project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Path to the story text
    pub story: PathBuf,
    /// Cover title
    pub title: String,
    /// Project file to write
    pub out: PathBuf,
    /// Artwork color mode
    pub color_mode: ColorMode,
    /// Style preset
    pub medium: VisualMedium,
    /// Requested page count
    pub pages: u32,
    /// Extraction context
    pub style_ref: Option<String>,
    /// Volume name
    pub volume: Option<String>,
    /// Artist credit
    pub artist: Option<String>,
    /// Overwrite an existing file
    pub force: bool,
}

/// Create a project file from a story script.
pub fn handle_init(options: InitOptions) -> InkwellResult<()> {
    if options.out.exists() && !options.force {
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "{} already exists (use --force to overwrite)",
            options.out.display()
        )))
        .into());
    }

    let story = std::fs::read_to_string(&options.story).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            options.story.display(),
            e
        )))
    })?;

    let project = MangaProject::builder()
        .title(options.title)
        .story(story)
        .color_mode(options.color_mode)
        .visual_medium(options.medium)
        .page_count(options.pages)
        .style_references(options.style_ref)
        .volume_name(options.volume)
        .artist_name(options.artist)
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid project settings: {}", e)))?;

    storage::save_project(&options.out, &project)?;
    println!(
        "Created '{}' ({}, {}, {} pages) at {}",
        project.title,
        project.visual_medium,
        project.color_mode,
        project.page_count,
        options.out.display()
    );
    Ok(())
}

/// Write generated images out as files.
pub fn handle_export(project_path: &Path, out: &Path) -> InkwellResult<()> {
    let project = storage::load_project(project_path)?;
    let written = storage::export_images(&project, out)?;

    for path in &written {
        println!("{}", path.display());
    }
    println!("Exported {} images to {}", written.len(), out.display());
    Ok(())
}

/// Check storyboard references and report render progress.
pub fn handle_validate(project_path: &Path) -> InkwellResult<()> {
    let mut project = storage::load_project(project_path)?;
    if pipeline::recover_interrupted(&mut project)? > 0 {
        storage::save_project(project_path, &project)?;
    }

    println!("Project: {}", project.title);
    println!("{:-<60}", "");
    println!(
        "Characters: {} ({} with portraits)",
        project.characters.len(),
        project
            .characters
            .iter()
            .filter(|c| c.image_url.is_some())
            .count()
    );
    println!(
        "Locations:  {} ({} with plates)",
        project.locations.len(),
        project
            .locations
            .iter()
            .filter(|l| l.image_url.is_some())
            .count()
    );
    println!("Cover:      {}", project.cover_status);

    let count = |status: GenerationStatus| {
        project
            .storyboard
            .iter()
            .filter(|page| page.status == status)
            .count()
    };
    println!(
        "Pages:      {} ({} completed, {} failed, {} pending)",
        project.storyboard.len(),
        count(GenerationStatus::Completed),
        count(GenerationStatus::Failed),
        count(GenerationStatus::Pending)
    );

    let issues = validate_storyboard(&project);
    println!("{:-<60}", "");
    if issues.is_empty() {
        println!("All storyboard references resolve");
    } else {
        for issue in &issues {
            println!("{}", issue);
        }
        println!("{} unresolved references", issues.len());
    }
    Ok(())
}
