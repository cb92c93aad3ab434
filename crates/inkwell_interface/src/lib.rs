//! Trait definitions for the Inkwell manga generation library.
//!
//! This crate provides the seam between the generation facade and the
//! providers that actually talk to a model service.

mod traits;

pub use traits::InkwellDriver;
