//! Destination catalog entries

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A place that can be visited for some number of days at some cost.
///
/// Catalog entries are read-only; generation copies the fields it needs
/// into the produced itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name
    pub name: String,
    /// Place type, an open set ("city", "nature", "cultural", "mountain", ...)
    pub category: String,
    /// Days required to visit, always positive
    pub duration_days: u32,
    /// Cost in VND (smallest whole unit)
    pub cost: u64,
    /// Interest labels, never empty
    pub tags: Vec<String>,
    /// Position in decimal degrees
    pub coordinates: Coordinates,
}

impl Destination {
    /// True when any of the destination's tags appears in `interests`.
    #[must_use]
    pub fn matches_interests(&self, interests: &[String]) -> bool {
        self.tags.iter().any(|tag| interests.contains(tag))
    }
}
