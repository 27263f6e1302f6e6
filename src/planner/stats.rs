//! Summary statistics over generated itineraries

use std::collections::HashMap;

use crate::models::{ItineraryEntry, ItineraryStats};

/// Aggregate totals, category histogram and the ordered stop names.
///
/// Pure aggregation, the itinerary is not modified.
#[must_use]
pub fn itinerary_stats(itinerary: &[ItineraryEntry]) -> ItineraryStats {
    let total_days = itinerary
        .iter()
        .map(|entry| entry.destination.duration_days)
        .sum();
    let total_cost = itinerary.iter().map(|entry| entry.destination.cost).sum();

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    for entry in itinerary {
        *category_counts
            .entry(entry.destination.category.clone())
            .or_insert(0) += 1;
    }

    ItineraryStats {
        total_days,
        total_cost,
        place_count: itinerary.len(),
        category_counts,
        names: itinerary
            .iter()
            .map(|entry| entry.destination.name.clone())
            .collect(),
    }
}
