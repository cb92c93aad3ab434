//! Test utilities for inkwell pipeline tests.

pub mod routing_driver;

#[allow(unused_imports)]
pub use routing_driver::{Reply, RoutingDriver};

use inkwell::{
    Character, Location, MangaProject, MangaStudio, PageLayout, RetryPolicy, StoryboardPage,
    StyleCatalog, data_uri,
};
use std::sync::Arc;

/// Studio over a routing driver, with retries off.
#[allow(dead_code)]
pub fn studio(driver: RoutingDriver) -> MangaStudio<RoutingDriver> {
    let catalog = StyleCatalog::bundled().expect("bundled catalog");
    MangaStudio::new(driver, Arc::new(catalog), RetryPolicy::disabled())
}

/// Project with two characters, one location and `pages` pending pages.
#[allow(dead_code)]
pub fn project(pages: u32) -> MangaProject {
    let mut project = MangaProject::builder()
        .title("Dune Riders")
        .story("Two couriers cross a desert to deliver a warning.")
        .page_count(pages)
        .build()
        .expect("valid project");

    project.set_assets(
        vec![
            Character {
                id: "char-1".to_string(),
                name: "Ayla".to_string(),
                description: "A courier".to_string(),
                visual_prompt: "Dust-caked courier".to_string(),
                visual_anchor: "red scarf".to_string(),
                image_url: Some(data_uri::png("QVlMQQ==")),
            },
            Character {
                id: "char-2".to_string(),
                name: "Bex".to_string(),
                description: "Her rival".to_string(),
                visual_prompt: "Lanky rider".to_string(),
                visual_anchor: "brass goggles".to_string(),
                image_url: None,
            },
        ],
        vec![Location {
            id: "loc-3".to_string(),
            name: "Glass Dunes".to_string(),
            description: "Fused sand ridges".to_string(),
            image_url: None,
        }],
    );

    project.storyboard = (1..=pages)
        .map(|number| StoryboardPage {
            page_number: number,
            layout_type: PageLayout::NarrativePanels,
            layout_description: "Three stacked panels".to_string(),
            narrative_text: format!("Line {}", number),
            visual_prompt: format!("Scene {}", number),
            characters_in_page: vec!["Ayla".to_string()],
            location_id: Some("loc-3".to_string()),
            generated_image_url: None,
            status: Default::default(),
        })
        .collect();

    project
}
