//! Static travel facility directory
//!
//! A sample directory of hotels, restaurants, medical facilities and
//! services a traveler needs along the way. Lookups filter by category
//! over the embedded data; the search result echoes the queried location
//! and radius for display but never geolocates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Facility groupings offered by the directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FacilityCategory {
    Hotels,
    Restaurants,
    Medical,
    Services,
}

/// One directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facility {
    pub name: String,
    pub category: FacilityCategory,
    /// Subtype within the category, an open set ("luxury", "street-food", ...)
    pub kind: String,
    /// Price range in VND, where the sample data carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Whether the facility handles emergencies (medical entries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency: Option<bool>,
}

impl Facility {
    /// Create a facility with just a name, category and kind
    #[must_use]
    pub fn new(name: &str, category: FacilityCategory, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            kind: kind.to_string(),
            price_range: None,
            cuisine: None,
            rating: None,
            emergency: None,
        }
    }

    /// Set the price range
    #[must_use]
    pub fn with_price_range(mut self, price_range: &str) -> Self {
        self.price_range = Some(price_range.to_string());
        self
    }

    /// Set the cuisine description
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: &str) -> Self {
        self.cuisine = Some(cuisine.to_string());
        self
    }

    /// Set the rating
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the emergency flag
    #[must_use]
    pub fn with_emergency(mut self, emergency: bool) -> Self {
        self.emergency = Some(emergency);
        self
    }
}

/// Result of a facility search, echoing the query alongside the matches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacilitySearchResult {
    pub location: Coordinates,
    pub radius_km: f64,
    pub results: Vec<Facility>,
    pub retrieved_at: DateTime<Utc>,
}

/// Directory of sample facilities
pub struct FacilityDirectory {
    facilities: Vec<Facility>,
}

impl FacilityDirectory {
    /// Create a directory over the embedded sample data
    #[must_use]
    pub fn new() -> Self {
        Self {
            facilities: sample_facilities(),
        }
    }

    /// All entries in one category
    #[must_use]
    pub fn facilities(&self, category: FacilityCategory) -> Vec<Facility> {
        self.facilities
            .iter()
            .filter(|facility| facility.category == category)
            .cloned()
            .collect()
    }

    /// Category lookup dressed as a proximity search.
    ///
    /// The sample data carries no coordinates, so `location` and
    /// `radius_km` are echoed back for display only. `None` returns
    /// every category.
    #[must_use]
    pub fn find_nearby(
        &self,
        location: &Coordinates,
        category: Option<FacilityCategory>,
        radius_km: f64,
        retrieved_at: DateTime<Utc>,
    ) -> FacilitySearchResult {
        let results = match category {
            Some(category) => self.facilities(category),
            None => self.facilities.clone(),
        };

        FacilitySearchResult {
            location: location.clone(),
            radius_km,
            results,
            retrieved_at,
        }
    }
}

impl Default for FacilityDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_facilities() -> Vec<Facility> {
    vec![
        Facility::new("Khách sạn 5 sao", FacilityCategory::Hotels, "luxury")
            .with_price_range("2,000,000+")
            .with_rating(4.5),
        Facility::new("Khách sạn 3-4 sao", FacilityCategory::Hotels, "mid-range")
            .with_price_range("800,000-1,500,000")
            .with_rating(4.0),
        Facility::new("Nhà nghỉ", FacilityCategory::Hotels, "budget")
            .with_price_range("200,000-500,000")
            .with_rating(3.5),
        Facility::new("Homestay", FacilityCategory::Hotels, "local")
            .with_price_range("300,000-800,000")
            .with_rating(4.2),
        Facility::new("Nhà hàng cao cấp", FacilityCategory::Restaurants, "fine-dining")
            .with_cuisine("Đa dạng")
            .with_rating(4.3),
        Facility::new("Nhà hàng địa phương", FacilityCategory::Restaurants, "local")
            .with_cuisine("Đặc sản")
            .with_rating(4.5),
        Facility::new("Quán ăn đường phố", FacilityCategory::Restaurants, "street-food")
            .with_cuisine("Bình dân")
            .with_rating(4.7),
        Facility::new("Quán cà phê", FacilityCategory::Restaurants, "cafe")
            .with_cuisine("Đồ uống")
            .with_rating(4.4),
        Facility::new("Bệnh viện đa khoa", FacilityCategory::Medical, "hospital")
            .with_emergency(true),
        Facility::new("Phòng khám", FacilityCategory::Medical, "clinic").with_emergency(false),
        Facility::new("Nhà thuốc", FacilityCategory::Medical, "pharmacy").with_emergency(false),
        Facility::new("ATM", FacilityCategory::Services, "banking"),
        Facility::new("Trạm xăng", FacilityCategory::Services, "fuel"),
        Facility::new("WiFi công cộng", FacilityCategory::Services, "internet"),
        Facility::new("Bến xe", FacilityCategory::Services, "transport"),
    ]
}
