//! Greedy itinerary generation
//!
//! Generation is a single forward pass over the interest-filtered (and
//! optionally distance-sorted) catalog: a destination is admitted iff it
//! fits the remaining day and budget capacity at the moment it is
//! considered, and a skipped destination is never reconsidered. The result
//! is always feasible but not optimal.

use tracing::{debug, info};

use crate::Result;
use crate::models::{Destination, Itinerary, ItineraryEntry};
use crate::planner::catalog::CatalogProvider;
use crate::planner::constraints::Constraints;

/// Holds a loaded catalog snapshot and generates itineraries against it
pub struct ItineraryPlanner {
    destinations: Vec<Destination>,
}

impl ItineraryPlanner {
    /// Create a planner with an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            destinations: Vec::new(),
        }
    }

    /// Replace the catalog snapshot from a provider and return the full list.
    ///
    /// Idempotent for providers that return the same data on every call.
    pub async fn load_catalog(&mut self, provider: &dyn CatalogProvider) -> Result<&[Destination]> {
        self.destinations = provider.load().await?;
        info!("Catalog loaded with {} destinations", self.destinations.len());
        Ok(&self.destinations)
    }

    /// Current catalog snapshot
    #[must_use]
    pub fn catalog(&self) -> &[Destination] {
        &self.destinations
    }

    /// Generate an itinerary against the cached catalog
    pub fn generate(&self, constraints: &Constraints) -> Result<Itinerary> {
        generate_itinerary(&self.destinations, constraints)
    }
}

impl Default for ItineraryPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a day-by-day itinerary from a catalog snapshot.
///
/// Pure function of its inputs, safe to call concurrently. An empty
/// catalog (or one with no destination matching the interests) yields an
/// empty itinerary rather than an error; malformed constraints fail fast
/// with [`crate::VietGuideError::InvalidConstraints`].
pub fn generate_itinerary(catalog: &[Destination], constraints: &Constraints) -> Result<Itinerary> {
    constraints.validate()?;

    let mut candidates: Vec<Destination> = catalog
        .iter()
        .filter(|destination| constraints.matches(destination))
        .cloned()
        .collect();

    if let Some(start) = &constraints.start_location {
        // Stable sort keeps catalog order for equidistant destinations
        let mut by_distance: Vec<(f64, Destination)> = candidates
            .into_iter()
            .map(|destination| {
                let distance = start.distance_km(&destination.coordinates);
                (distance, destination)
            })
            .collect();
        by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
        candidates = by_distance
            .into_iter()
            .map(|(_, destination)| destination)
            .collect();
    }

    let mut itinerary = Itinerary::new();
    let mut remaining_days = constraints.total_days;
    let mut remaining_budget = constraints.total_budget;

    for destination in candidates {
        if destination.duration_days <= remaining_days && destination.cost <= remaining_budget {
            let day = constraints.total_days - remaining_days + 1;
            remaining_days -= destination.duration_days;
            remaining_budget -= destination.cost;
            itinerary.push(ItineraryEntry { destination, day });

            if remaining_days == 0 {
                break;
            }
        }
    }

    debug!(
        "Generated itinerary with {} stops, {} days and {} VND unspent",
        itinerary.len(),
        remaining_days,
        remaining_budget
    );
    Ok(itinerary)
}
