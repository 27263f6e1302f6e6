//! Generated itinerary types and summary statistics

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Destination;

/// One admitted destination with its assigned starting day.
///
/// `day` is the cumulative day offset at which the visit begins, 1-indexed.
/// Entries are never mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryEntry {
    pub destination: Destination,
    pub day: u32,
}

/// Ordered, feasible sequence of destinations produced by generation
pub type Itinerary = Vec<ItineraryEntry>;

/// Aggregated totals over a generated itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryStats {
    /// Sum of visit durations in days
    pub total_days: u32,
    /// Sum of costs in VND
    pub total_cost: u64,
    /// Number of stops
    pub place_count: usize,
    /// Stop count per place category
    pub category_counts: HashMap<String, usize>,
    /// Destination names in visit order
    pub names: Vec<String>,
}
