//! `VietGuide` - Smart travel itinerary planning for Vietnam
//!
//! This library provides the core functionality for destination catalogs,
//! greedy itinerary generation under day and budget constraints, and
//! travel facility lookup.

pub mod config;
pub mod error;
pub mod facilities;
pub mod models;
pub mod planner;

// Re-export core types for public API
pub use config::VietGuideConfig;
pub use error::VietGuideError;
pub use facilities::{Facility, FacilityCategory, FacilityDirectory, FacilitySearchResult};
pub use models::{Coordinates, Destination, Itinerary, ItineraryEntry, ItineraryStats};
pub use planner::{
    CatalogProvider, Constraints, Export, ExportFormat, ItineraryPlanner, StaticCatalog,
    StructuredExport, export, export_at, generate_itinerary, itinerary_stats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, VietGuideError>;
