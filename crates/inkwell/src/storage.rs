//! Project files and image export.
//!
//! A project lives in one pretty-printed JSON file whose field names match
//! the camelCase record shapes. Generated images stay inline as data URIs
//! until [`export_images`] writes them out as separate files.

use base64::Engine;
use inkwell_core::{MangaProject, data_uri};
use inkwell_error::{InkwellResult, JsonError, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Read a project file.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_project(path: &Path) -> InkwellResult<MangaProject> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let project: MangaProject = serde_json::from_str(&text).map_err(|e| {
        JsonError::new(format!("Invalid project file {}: {}", path.display(), e))
    })?;

    debug!(
        title = %project.title,
        characters = project.characters.len(),
        pages = project.storyboard.len(),
        "Loaded project"
    );
    Ok(project)
}

/// Write a project file.
///
/// The file is written to a temporary sibling and renamed into place, so an
/// interrupted save never leaves a truncated project behind.
#[instrument(skip(path, project), fields(path = %path.display()))]
pub fn save_project(path: &Path, project: &MangaProject) -> InkwellResult<()> {
    let text = serde_json::to_string_pretty(project)
        .map_err(|e| JsonError::new(format!("Failed to serialize project: {}", e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, text).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!("Saved project");
    Ok(())
}

/// Decode the image bytes held in a data URI.
///
/// # Examples
///
/// ```
/// use inkwell::storage::decode_data_uri;
///
/// assert_eq!(decode_data_uri("data:image/png;base64,AQID").unwrap(), vec![1, 2, 3]);
/// assert!(decode_data_uri("data:image/png;base64,").is_err());
/// ```
pub fn decode_data_uri(uri: &str) -> InkwellResult<Vec<u8>> {
    let payload = data_uri::payload(uri).ok_or_else(|| {
        StorageError::new(StorageErrorKind::InvalidImage(
            "data URI has no payload".to_string(),
        ))
    })?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| StorageError::new(StorageErrorKind::InvalidImage(e.to_string())).into())
}

/// File extension for a data URI's declared MIME type.
fn extension_for(uri: &str) -> &'static str {
    match data_uri::mime(uri) {
        Some("image/jpeg") => "jpg",
        Some("image/webp") => "webp",
        _ => "png",
    }
}

/// Write every generated image in the project into `dir`.
///
/// Files are named `cover`, `page-NNN`, and the character or location id.
/// Slots without an image are skipped. Returns the written paths.
#[instrument(skip(project, dir), fields(title = %project.title, dir = %dir.display()))]
pub fn export_images(project: &MangaProject, dir: &Path) -> InkwellResult<Vec<PathBuf>> {
    create_dir(dir)?;

    let mut images: Vec<(String, &str)> = Vec::new();
    if let Some(uri) = project.cover_image_url.as_deref() {
        images.push(("cover".to_string(), uri));
    }
    for character in &project.characters {
        if let Some(uri) = character.image_url.as_deref() {
            images.push((character.id.clone(), uri));
        }
    }
    for location in &project.locations {
        if let Some(uri) = location.image_url.as_deref() {
            images.push((location.id.clone(), uri));
        }
    }
    for page in &project.storyboard {
        if let Some(uri) = page.generated_image_url.as_deref() {
            images.push((format!("page-{:03}", page.page_number), uri));
        }
    }

    let mut written = Vec::with_capacity(images.len());
    for (stem, uri) in images.into_iter().filter(|(_, uri)| !uri.is_empty()) {
        let bytes = decode_data_uri(uri)?;
        let path = dir.join(format!("{}.{}", stem, extension_for(uri)));
        std::fs::write(&path, bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        written.push(path);
    }

    info!(files = written.len(), "Exported images");
    Ok(written)
}

fn create_dir(dir: &Path) -> InkwellResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
        .into()
    })
}
