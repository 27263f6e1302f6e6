//! Geographic coordinates and distance estimation

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point in kilometers.
    ///
    /// Symmetric up to floating-point tolerance and zero for identical
    /// points.
    #[must_use]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine::distance(
            haversine::Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            haversine::Location {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            haversine::Units::Kilometers,
        )
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let hanoi = Coordinates::new(21.0285, 105.8542);
        assert_eq!(hanoi.distance_km(&hanoi), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let hanoi = Coordinates::new(21.0285, 105.8542);
        let ha_long = Coordinates::new(20.9101, 107.1839);

        let there = hanoi.distance_km(&ha_long);
        let back = ha_long.distance_km(&hanoi);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_distance_hanoi_to_ha_long() {
        let hanoi = Coordinates::new(21.0285, 105.8542);
        let ha_long = Coordinates::new(20.9101, 107.1839);

        // Roughly 140 km apart
        let distance = hanoi.distance_km(&ha_long);
        assert!(distance > 130.0 && distance < 150.0);
    }

    #[test]
    fn test_format_coordinates() {
        let hue = Coordinates::new(16.4637, 107.5909);
        assert_eq!(hue.format_coordinates(), "16.4637, 107.5909");
    }
}
