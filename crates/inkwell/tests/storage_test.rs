//! Tests for project files and image export.

mod test_utils;

use inkwell::{GenerationStatus, StorageErrorKind, InkwellErrorKind, data_uri, storage};
use test_utils::project;

fn storage_kind(err: &inkwell::InkwellError) -> Option<&StorageErrorKind> {
    match err.kind() {
        InkwellErrorKind::Storage(e) => Some(&e.kind),
        _ => None,
    }
}

#[test]
fn test_save_then_load_preserves_project() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("project.json");
    let mut original = project(2);
    original.storyboard[0].status = GenerationStatus::Completed;
    original.storyboard[0].generated_image_url = Some(data_uri::png("UEFHRQ=="));

    storage::save_project(&path, &original)?;
    let loaded = storage::load_project(&path)?;

    assert_eq!(loaded, original);
    assert!(!path.with_extension("json.tmp").exists());
    Ok(())
}

#[test]
fn test_saved_project_uses_camel_case_fields() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("project.json");

    storage::save_project(&path, &project(1))?;
    let text = std::fs::read_to_string(&path)?;

    assert!(text.contains("\"pageCount\""));
    assert!(text.contains("\"charactersInPage\""));
    assert!(text.contains("\"status\": \"pending\""));
    Ok(())
}

#[test]
fn test_load_missing_file_is_read_error() {
    let err = storage::load_project(std::path::Path::new("/nonexistent/project.json"))
        .expect_err("missing file");

    assert!(matches!(
        storage_kind(&err),
        Some(StorageErrorKind::FileRead(_))
    ));
}

#[test]
fn test_load_garbage_is_json_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("project.json");
    std::fs::write(&path, "{ not a project")?;

    let err = storage::load_project(&path).expect_err("invalid file");

    assert!(matches!(err.kind(), InkwellErrorKind::Json(_)));
    Ok(())
}

#[test]
fn test_export_writes_decoded_images() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut project = project(2);
    project.cover_image_url = Some(data_uri::png("AQID"));
    project.storyboard[1].generated_image_url = Some(data_uri::png("BAUG"));

    let written = storage::export_images(&project, dir.path())?;

    let names: Vec<_> = written
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
        .collect();
    assert_eq!(names, vec!["cover.png", "char-1.png", "page-002.png"]);
    assert_eq!(std::fs::read(dir.path().join("cover.png"))?, vec![1, 2, 3]);
    assert_eq!(std::fs::read(dir.path().join("page-002.png"))?, vec![4, 5, 6]);
    Ok(())
}

#[test]
fn test_export_rejects_undecodable_image() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut project = project(1);
    project.cover_image_url = Some("data:image/png;base64,@@@".to_string());

    let err = storage::export_images(&project, dir.path()).expect_err("bad payload");

    assert!(matches!(
        storage_kind(&err),
        Some(StorageErrorKind::InvalidImage(_))
    ));
    Ok(())
}

#[test]
fn test_export_uses_declared_mime_extension() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut project = project(0);
    project.characters[0].image_url = Some("data:image/jpeg;base64,AQID".to_string());

    let written = storage::export_images(&project, dir.path())?;

    assert_eq!(written, vec![dir.path().join("char-1.jpg")]);
    Ok(())
}
