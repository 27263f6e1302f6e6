//! Destination catalog loading
//!
//! Providers supply the destination list from any origin (embedded data,
//! file, HTTP). The planner treats whatever a provider returns as an
//! immutable snapshot.

use async_trait::async_trait;
use tracing::debug;

use crate::Result;
use crate::models::{Coordinates, Destination};

/// Source of destination catalog data
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load the full destination list
    async fn load(&self) -> Result<Vec<Destination>>;
}

/// Provider backed by the embedded sample catalog of Vietnamese destinations
pub struct StaticCatalog;

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn load(&self) -> Result<Vec<Destination>> {
        let destinations = sample_destinations();
        debug!(
            "Loaded {} destinations from embedded catalog",
            destinations.len()
        );
        Ok(destinations)
    }
}

/// The embedded destination data
#[must_use]
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: 1,
            name: "Hà Nội".to_string(),
            category: "city".to_string(),
            duration_days: 2,
            cost: 1_500_000,
            tags: vec![
                "history".to_string(),
                "food".to_string(),
                "culture".to_string(),
            ],
            coordinates: Coordinates::new(21.0285, 105.8542),
        },
        Destination {
            id: 2,
            name: "Vịnh Hạ Long".to_string(),
            category: "nature".to_string(),
            duration_days: 1,
            cost: 2_000_000,
            tags: vec![
                "unesco".to_string(),
                "boat".to_string(),
                "scenic".to_string(),
            ],
            coordinates: Coordinates::new(20.9101, 107.1839),
        },
        Destination {
            id: 3,
            name: "Huế".to_string(),
            category: "cultural".to_string(),
            duration_days: 2,
            cost: 1_200_000,
            tags: vec![
                "history".to_string(),
                "royal".to_string(),
                "architecture".to_string(),
            ],
            coordinates: Coordinates::new(16.4637, 107.5909),
        },
        Destination {
            id: 4,
            name: "Hội An".to_string(),
            category: "cultural".to_string(),
            duration_days: 2,
            cost: 1_400_000,
            tags: vec![
                "unesco".to_string(),
                "ancient".to_string(),
                "shopping".to_string(),
            ],
            coordinates: Coordinates::new(15.8801, 108.3380),
        },
        Destination {
            id: 5,
            name: "Sapa".to_string(),
            category: "mountain".to_string(),
            duration_days: 3,
            cost: 1_800_000,
            tags: vec![
                "trekking".to_string(),
                "ethnic".to_string(),
                "scenic".to_string(),
            ],
            coordinates: Coordinates::new(22.3364, 103.8441),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog_load() {
        let catalog = StaticCatalog.load().await.unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].name, "Hà Nội");
        assert_eq!(catalog[4].name, "Sapa");
    }

    #[test]
    fn test_sample_destinations_have_unique_ids() {
        let destinations = sample_destinations();
        let mut ids: Vec<u32> = destinations.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), destinations.len());
    }

    #[test]
    fn test_sample_destinations_are_well_formed() {
        for destination in sample_destinations() {
            assert!(destination.duration_days > 0);
            assert!(!destination.tags.is_empty());
            assert!(!destination.name.is_empty());
        }
    }
}
