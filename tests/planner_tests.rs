//! Integration tests for the VietGuide planning API

use chrono::{TimeZone, Utc};
use rstest::rstest;

use vietguide::models::Coordinates;
use vietguide::planner::{
    Constraints, Export, ExportFormat, ItineraryPlanner, StaticCatalog, export_at,
    generate_itinerary, itinerary_stats, sample_destinations,
};

/// Generated itineraries never exceed the day or budget limits,
/// whatever combination of constraints is supplied.
#[rstest]
#[case(1, 1_000_000)]
#[case(4, 3_000_000)]
#[case(7, 5_000_000)]
#[case(14, 10_000_000)]
#[case(30, 100_000)]
fn generated_itinerary_respects_caps(#[case] total_days: u32, #[case] total_budget: u64) {
    let catalog = sample_destinations();
    let constraints = Constraints::new(total_days, total_budget);

    let itinerary = generate_itinerary(&catalog, &constraints).unwrap();
    let stats = itinerary_stats(&itinerary);

    assert!(stats.total_days <= total_days);
    assert!(stats.total_cost <= total_budget);
}

#[tokio::test]
async fn planner_end_to_end() {
    let mut planner = ItineraryPlanner::new();
    planner.load_catalog(&StaticCatalog).await.unwrap();

    let constraints = Constraints::new(5, 5_000_000)
        .with_interests(vec!["history".to_string(), "unesco".to_string()])
        .with_start_location(Coordinates::new(21.0285, 105.8542));

    let itinerary = planner.generate(&constraints).unwrap();
    assert!(!itinerary.is_empty());

    // Every admitted destination carries at least one requested interest
    for entry in &itinerary {
        assert!(
            entry
                .destination
                .tags
                .iter()
                .any(|tag| tag == "history" || tag == "unesco")
        );
    }

    // Day assignments are 1-indexed, increasing and within the limit
    let mut previous_day = 0;
    for entry in &itinerary {
        assert!(entry.day > previous_day);
        assert!(entry.day <= 5);
        previous_day = entry.day;
    }
}

#[tokio::test]
async fn reloading_the_catalog_is_idempotent() {
    let mut planner = ItineraryPlanner::new();
    planner.load_catalog(&StaticCatalog).await.unwrap();
    let first = planner.catalog().to_vec();

    planner.load_catalog(&StaticCatalog).await.unwrap();
    assert_eq!(planner.catalog(), first.as_slice());
}

#[test]
fn identical_inputs_produce_identical_itineraries() {
    let catalog = sample_destinations();
    let constraints = Constraints::new(7, 8_000_000)
        .with_interests(vec!["scenic".to_string()])
        .with_start_location(Coordinates::new(16.0471, 108.2062));

    let first = generate_itinerary(&catalog, &constraints).unwrap();
    let second = generate_itinerary(&catalog, &constraints).unwrap();
    assert_eq!(first, second);
}

#[test]
fn structured_export_round_trips_through_json() {
    let catalog = sample_destinations();
    let constraints = Constraints::new(5, 5_000_000);
    let itinerary = generate_itinerary(&catalog, &constraints).unwrap();

    let generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let Export::Structured(structured) = export_at(&itinerary, ExportFormat::Structured, generated_at)
    else {
        panic!("expected structured export");
    };

    let json = structured.to_json().unwrap();
    let parsed: vietguide::planner::StructuredExport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.itinerary, itinerary);
    assert_eq!(parsed.generated_at, generated_at);
}

#[test]
fn text_export_reports_stops_in_day_order() {
    let catalog = sample_destinations();
    let constraints = Constraints::new(5, 5_000_000)
        .with_start_location(Coordinates::new(21.0285, 105.8542));
    let itinerary = generate_itinerary(&catalog, &constraints).unwrap();

    let Export::Text(text) = export_at(&itinerary, ExportFormat::Text, Utc::now()) else {
        panic!("expected text export");
    };

    assert_eq!(text.lines().count(), itinerary.len());
    for (line, entry) in text.lines().zip(&itinerary) {
        assert!(line.starts_with(&format!("Day {}:", entry.day)));
        assert!(line.contains(&entry.destination.name));
        assert!(line.ends_with("VND"));
    }
}
