//! Render lifecycle shared by pages and covers.

use inkwell_error::{InkwellResult, StudioError, StudioErrorKind};
use serde::{Deserialize, Serialize};

/// Lifecycle of a generated image slot.
///
/// `pending → generating → {completed | failed}`. A failed slot may be
/// attempted again; a completed one may not.
///
/// # Examples
///
/// ```
/// use inkwell_core::GenerationStatus;
///
/// let mut status = GenerationStatus::default();
/// status.begin().unwrap();
/// status.complete().unwrap();
/// assert_eq!(status, GenerationStatus::Completed);
/// assert!(status.begin().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// Not yet attempted
    #[default]
    #[display("pending")]
    Pending,
    /// A generation call is in flight
    #[display("generating")]
    Generating,
    /// An image was produced
    #[display("completed")]
    Completed,
    /// The last attempt produced nothing or errored
    #[display("failed")]
    Failed,
}

impl GenerationStatus {
    /// Whether `next` is a legal successor of this status.
    pub fn can_transition_to(&self, next: GenerationStatus) -> bool {
        use GenerationStatus::*;
        matches!(
            (self, next),
            (Pending, Generating)
                | (Failed, Generating)
                | (Generating, Completed)
                | (Generating, Failed)
        )
    }

    /// Mark a generation call as started.
    #[track_caller]
    pub fn begin(&mut self) -> InkwellResult<()> {
        self.transition(GenerationStatus::Generating)
    }

    /// Mark the in-flight call as having produced an image.
    #[track_caller]
    pub fn complete(&mut self) -> InkwellResult<()> {
        self.transition(GenerationStatus::Completed)
    }

    /// Mark the in-flight call as having failed.
    #[track_caller]
    pub fn fail(&mut self) -> InkwellResult<()> {
        self.transition(GenerationStatus::Failed)
    }

    /// Whether this slot still needs a generation call.
    pub fn needs_render(&self) -> bool {
        matches!(self, GenerationStatus::Pending | GenerationStatus::Failed)
    }

    #[track_caller]
    fn transition(&mut self, next: GenerationStatus) -> InkwellResult<()> {
        if !self.can_transition_to(next) {
            return Err(StudioError::new(StudioErrorKind::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
            .into());
        }
        *self = next;
        Ok(())
    }
}
