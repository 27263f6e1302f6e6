//! Itinerary export formats
//!
//! Exports are tagged by format: a request for an unknown format is an
//! error rather than a silent fallback, and the timestamp on structured
//! exports can be injected so output stays reproducible.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VietGuideError;
use crate::models::{Itinerary, ItineraryEntry, ItineraryStats};
use crate::planner::stats::itinerary_stats;

/// Currency code for the catalog's cost values
pub const CURRENCY: &str = "VND";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Serializable record with itinerary, stats and a timestamp
    Structured,
    /// One human-readable line per stop
    Text,
}

impl FromStr for ExportFormat {
    type Err = VietGuideError;

    /// Parse a format name. `"json"` is accepted as an alias for the
    /// structured format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured" | "json" => Ok(ExportFormat::Structured),
            "text" => Ok(ExportFormat::Text),
            other => Err(VietGuideError::unknown_export_format(other)),
        }
    }
}

/// Serializable record produced by the structured format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructuredExport {
    pub itinerary: Itinerary,
    pub stats: ItineraryStats,
    pub generated_at: DateTime<Utc>,
}

impl StructuredExport {
    /// Pretty-printed JSON rendition
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Export result, one variant per known format
#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    Structured(StructuredExport),
    Text(String),
}

/// Export an itinerary with an explicit timestamp.
///
/// The caller supplies `generated_at` so repeated exports of the same
/// itinerary compare equal.
#[must_use]
pub fn export_at(
    itinerary: &[ItineraryEntry],
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Export {
    match format {
        ExportFormat::Structured => Export::Structured(StructuredExport {
            itinerary: itinerary.to_vec(),
            stats: itinerary_stats(itinerary),
            generated_at,
        }),
        ExportFormat::Text => {
            let lines: Vec<String> = itinerary
                .iter()
                .map(|entry| {
                    format!(
                        "Day {}: {} ({} days) - {} {}",
                        entry.day,
                        entry.destination.name,
                        entry.destination.duration_days,
                        entry.destination.cost,
                        CURRENCY
                    )
                })
                .collect();
            Export::Text(lines.join("\n"))
        }
    }
}

/// Export an itinerary stamped with the current time
#[must_use]
pub fn export(itinerary: &[ItineraryEntry], format: ExportFormat) -> Export {
    export_at(itinerary, format, Utc::now())
}
