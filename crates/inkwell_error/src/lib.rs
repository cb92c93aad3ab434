//! Error types for the Inkwell library.
//!
//! This crate provides the foundation error types used throughout the Inkwell workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy separates the three ways an exchange with the generation
//! service can go wrong:
//! - transport failures ([`GeminiErrorKind::Transport`], [`GeminiErrorKind::HttpError`])
//! - responses with the wrong shape ([`StudioErrorKind::MalformedJson`],
//!   [`StudioErrorKind::SchemaViolation`])
//! - responses with nothing in them ([`StudioErrorKind::EmptyResult`])
//!
//! # Examples
//!
//! ```
//! use inkwell_error::{InkwellResult, StorageError, StorageErrorKind};
//!
//! fn fetch_data() -> InkwellResult<String> {
//!     Err(StorageError::new(StorageErrorKind::FileRead("project.json".to_string())))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod json;
mod storage;
mod studio;

pub use config::ConfigError;
pub use error::{InkwellError, InkwellErrorKind, InkwellResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use studio::{StudioError, StudioErrorKind};
