//! Inkwell - manga and comic generation over the Gemini API
//!
//! Inkwell turns a prose script into an illustrated comic by sequencing calls
//! to an external generative model: it extracts characters and locations,
//! breaks the story into a storyboard, and renders portraits, environment
//! plates, a cover and every page with consistent character references.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inkwell::{GeminiClient, InkwellConfig, MangaProject, MangaStudio, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = InkwellConfig::load()?;
//!     let studio = MangaStudio::from_config(GeminiClient::new(&config.gemini)?, &config)?;
//!
//!     let mut project = MangaProject::builder()
//!         .title("Tidewater")
//!         .story("Two rivals race a storm across the bay.")
//!         .build()?;
//!
//!     pipeline::extract_assets(&studio, &mut project, Default::default()).await?;
//!     pipeline::render_references(&studio, &mut project, false).await?;
//!     pipeline::create_storyboard(&studio, &mut project, Default::default()).await?;
//!     let summary = pipeline::render_pages(&studio, &mut project, 4).await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Inkwell is organized as a workspace with focused crates:
//!
//! - `inkwell_error` - Error types
//! - `inkwell_core` - Core data types (requests, projects, pages)
//! - `inkwell_interface` - InkwellDriver trait definition
//! - `inkwell_config` - TOML configuration, retry policy and style catalog
//! - `inkwell_models` - Gemini client and retry executor
//! - `inkwell_studio` - Prompt templates, schemas and the generation facade
//!
//! This crate (`inkwell`) re-exports everything for convenience and adds the
//! project-file storage and status-driving pipeline used by the CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod pipeline;
pub mod storage;

pub use inkwell_config::*;
pub use inkwell_core::*;
pub use inkwell_error::*;
pub use inkwell_interface::*;
pub use inkwell_models::*;
pub use inkwell_studio::*;
