//! Test utilities for inkwell_studio tests.
//!
//! This module provides a scripted driver and project fixtures.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockReply};

use inkwell_config::{RetryPolicy, StyleCatalog};
use inkwell_core::{
    Character, ColorMode, Location, MangaProject, PageLayout, StoryboardPage, VisualMedium,
    data_uri,
};
use inkwell_studio::MangaStudio;
use std::sync::Arc;

/// Text model name the test studio sends with structured requests.
pub const TEXT_MODEL: &str = "test-text-model";

/// Image model name the test studio sends with image requests.
pub const IMAGE_MODEL: &str = "test-image-model";

/// Retry policy with millisecond backoff.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        enabled: true,
        max_retries: Some(2),
        initial_backoff_ms: Some(1),
        max_delay_secs: Some(1),
    }
}

/// Studio over a scripted driver with the bundled style catalog.
pub fn studio(replies: Vec<MockReply>) -> MangaStudio<MockDriver> {
    let catalog = StyleCatalog::bundled().expect("bundled catalog");
    MangaStudio::new(MockDriver::new(replies), Arc::new(catalog), fast_retry())
        .with_models(TEXT_MODEL, IMAGE_MODEL)
}

#[allow(dead_code)]
pub fn character(id: &str, name: &str, portrait: Option<&str>) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        visual_prompt: format!("{} prompt", name),
        visual_anchor: format!("{} anchor", name),
        image_url: portrait.map(data_uri::png),
    }
}

#[allow(dead_code)]
pub fn location(id: &str, name: &str, plate: Option<&str>) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        image_url: plate.map(data_uri::png),
    }
}

#[allow(dead_code)]
pub fn page(number: u32, cast: &[&str], location_id: Option<&str>) -> StoryboardPage {
    StoryboardPage {
        page_number: number,
        layout_type: PageLayout::NarrativePanels,
        layout_description: "Three stacked panels".to_string(),
        narrative_text: "We ride at dawn!".to_string(),
        visual_prompt: "Two riders crest a dune".to_string(),
        characters_in_page: cast.iter().map(|name| name.to_string()).collect(),
        location_id: location_id.map(str::to_string),
        generated_image_url: None,
        status: Default::default(),
    }
}

#[allow(dead_code)]
pub fn project(color_mode: ColorMode, medium: VisualMedium) -> MangaProject {
    MangaProject::builder()
        .title("Dune Riders")
        .story("Two couriers cross a desert to deliver a warning.")
        .color_mode(color_mode)
        .visual_medium(medium)
        .page_count(3u32)
        .build()
        .expect("valid project")
}
