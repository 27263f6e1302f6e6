//! Trip constraints supplied to itinerary generation

use serde::{Deserialize, Serialize};

use crate::VietGuideError;
use crate::models::{Coordinates, Destination};

/// Day, budget, interest and location limits for one generation call.
///
/// An empty `interests` list matches every destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constraints {
    /// Upper bound on trip length in days, must be positive
    pub total_days: u32,
    /// Upper bound on total cost in VND
    pub total_budget: u64,
    /// Interest labels to match against destination tags
    pub interests: Vec<String>,
    /// Optional starting point for proximity ordering
    pub start_location: Option<Coordinates>,
}

impl Constraints {
    /// Create constraints with the given day and budget limits
    #[must_use]
    pub fn new(total_days: u32, total_budget: u64) -> Self {
        Self {
            total_days,
            total_budget,
            interests: Vec::new(),
            start_location: None,
        }
    }

    /// Set the interest labels to filter by
    #[must_use]
    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    /// Set the starting point for proximity ordering
    #[must_use]
    pub fn with_start_location(mut self, start_location: Coordinates) -> Self {
        self.start_location = Some(start_location);
        self
    }

    /// Fail fast on malformed limits so an empty itinerary is never
    /// ambiguous with a rejected request.
    pub fn validate(&self) -> crate::Result<()> {
        if self.total_days == 0 {
            return Err(VietGuideError::invalid_constraints(
                "total days must be positive",
            ));
        }
        Ok(())
    }

    /// Whether a destination passes the interest filter
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        self.interests.is_empty() || destination.matches_interests(&self.interests)
    }
}
