//! Data models for the `VietGuide` library
//!
//! This module contains the core domain models organized by concern:
//! - Coordinates: Geographic coordinates and distance
//! - Destination: Catalog entries for places that can be visited
//! - Itinerary: Generated trip plans and their summary statistics

pub mod coordinates;
pub mod destination;
pub mod itinerary;

// Re-export all public types for convenient access
pub use coordinates::Coordinates;
pub use destination::Destination;
pub use itinerary::{Itinerary, ItineraryEntry, ItineraryStats};
