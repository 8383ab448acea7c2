//! Frontend Models
//!
//! Data structures persisted to browser storage.

use serde::{Deserialize, Serialize};

/// Item identifier, derived from the millisecond clock at creation time
pub type ItemId = u64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    /// Create a fresh, empty, not-yet-completed item
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            text: String::new(),
            completed: false,
        }
    }
}

/// Pick an id for a new item.
///
/// Follows the clock, but always lands above every id already in `items`
/// so two items created in the same millisecond never collide.
/// `None` once the largest id is `ItemId::MAX`.
pub fn next_id(items: &[Item], now_ms: u64) -> Option<ItemId> {
    match items.iter().map(|item| item.id).max() {
        Some(max) if max >= now_ms => max.checked_add(1),
        _ => Some(now_ms),
    }
}

/// First id that appears more than once, if any
pub fn duplicate_id(items: &[Item]) -> Option<ItemId> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.iter().map(|item| item.id).find(|id| !seen.insert(*id))
}
