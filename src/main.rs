use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vietguide::config::VietGuideConfig;
use vietguide::facilities::{FacilityCategory, FacilityDirectory};
use vietguide::models::Coordinates;
use vietguide::planner::{
    Constraints, Export, ExportFormat, ItineraryPlanner, StaticCatalog, export, itinerary_stats,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = VietGuideConfig::load().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let mut planner = ItineraryPlanner::new();
    planner.load_catalog(&StaticCatalog).await?;

    // Plan a trip starting from Hà Nội with the configured defaults
    let constraints = Constraints::new(
        config.planner.default_total_days,
        config.planner.default_total_budget,
    )
    .with_interests(vec!["history".to_string(), "scenic".to_string()])
    .with_start_location(Coordinates::new(21.0285, 105.8542));

    let itinerary = planner.generate(&constraints)?;
    let stats = itinerary_stats(&itinerary);

    println!(
        "Planned {} days across {} stops for {} VND:",
        stats.total_days, stats.place_count, stats.total_cost
    );
    if let Export::Text(text) = export(&itinerary, ExportFormat::Text) {
        println!("{text}");
    }

    let directory = FacilityDirectory::new();
    let hotels = directory.facilities(FacilityCategory::Hotels);
    println!("\n{} lodging options along the way:", hotels.len());
    for hotel in &hotels {
        println!(
            "  - {} ({}, {})",
            hotel.name,
            hotel.kind,
            hotel.price_range.as_deref().unwrap_or("price varies")
        );
    }

    Ok(())
}
