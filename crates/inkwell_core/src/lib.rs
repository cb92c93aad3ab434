//! Core data types for the Inkwell manga generation library.
//!
//! This crate provides two families of passive data shapes:
//!
//! - the provider-neutral multimodal exchange ([`GenerateRequest`], [`Input`],
//!   [`Output`], [`GenerateResponse`]) that every driver speaks, and
//! - the manga project model ([`MangaProject`], [`Character`], [`Location`],
//!   [`StoryboardPage`]) that the generation facade reads and callers mutate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
pub mod data_uri;
mod ids;
mod input;
mod location;
mod media;
mod output;
mod project;
mod request;
mod status;
mod storyboard;
mod style;

pub use character::Character;
pub use ids::{IdAllocator, IdPrefix};
pub use input::Input;
pub use location::Location;
pub use media::MediaSource;
pub use output::Output;
pub use project::{MangaProject, MangaProjectBuilder};
pub use request::{AspectRatio, GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use status::GenerationStatus;
pub use storyboard::{PageLayout, StoryboardPage};
pub use style::{ColorMode, VisualMedium};
