//! Project-scoped identifier allocation.

use serde::{Deserialize, Serialize};

/// Kind of record an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IdPrefix {
    /// `char-N`
    #[display("char")]
    Character,
    /// `loc-N`
    #[display("loc")]
    Location,
}

/// Monotonic counter that mints identifiers unique within one project.
///
/// The counter is persisted with the project, so identifiers stay unique
/// across successive extraction calls and across process restarts.
///
/// # Examples
///
/// ```
/// use inkwell_core::{IdAllocator, IdPrefix};
///
/// let mut ids = IdAllocator::default();
/// assert_eq!(ids.mint(IdPrefix::Character), "char-0");
/// assert_eq!(ids.mint(IdPrefix::Location), "loc-1");
///
/// ids.observe("char-41");
/// assert_eq!(ids.mint(IdPrefix::Character), "char-42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Mint the next identifier with the given prefix.
    pub fn mint(&mut self, prefix: IdPrefix) -> String {
        let id = format!("{}-{}", prefix, self.next);
        self.next += 1;
        id
    }

    /// Value the next minted identifier will carry.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Advance past an identifier minted elsewhere so it is never reissued.
    ///
    /// Identifiers without a numeric suffix are ignored.
    pub fn observe(&mut self, id: &str) {
        let suffix = id.rsplit('-').next().and_then(|n| n.parse::<u64>().ok());
        if let Some(n) = suffix {
            self.next = self.next.max(n.saturating_add(1));
        }
    }
}
