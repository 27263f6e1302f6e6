//! Itinerary planning module
//!
//! This module provides the trip planning functionality:
//! - Catalog loading from pluggable destination providers
//! - Greedy itinerary generation under day and budget constraints
//! - Summary statistics over generated itineraries
//! - Export to structured and text formats

pub mod catalog;
pub mod constraints;
pub mod export;
pub mod generator;
pub mod stats;

// Re-export commonly used types from submodules
pub use catalog::{CatalogProvider, StaticCatalog, sample_destinations};
pub use constraints::Constraints;
pub use export::{Export, ExportFormat, StructuredExport, export, export_at};
pub use generator::{ItineraryPlanner, generate_itinerary};
pub use stats::itinerary_stats;
