use itinerary_export::{
    parse_itinerary_json, Exporter, FileDelivery, ItineraryResponse, Renderer,
};

const PARIS: &str = r#"{
    "id": "demo-paris",
    "destination": "Paris, France",
    "numberOfDays": 2,
    "itinerary": [
        {"day": 1, "activities": [
            {"time": "09:00 AM", "activity": "Louvre Visit", "description": "See the Mona Lisa", "location": "Louvre Museum"},
            {"time": "01:00 PM", "activity": "Lunch", "description": "Croque monsieur & café"},
            {"time": "04:00 PM", "activity": "Seine Cruise", "description": "One hour boat tour", "location": "Port de la Bourdonnais"}
        ]},
        {"day": 2, "activities": [
            {"time": "10:00 AM", "activity": "Montmartre", "description": "Walk up to Sacré-Cœur", "location": "Montmartre"}
        ]}
    ],
    "createdAt": "2024-01-15T00:00:00Z"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::try_init().ok();

    let itinerary: ItineraryResponse = parse_itinerary_json(PARIS)?;
    for advisory in itinerary.advisories() {
        println!("advisory: {}", advisory);
    }

    let out_dir = std::env::temp_dir().join("itinerary-export-demo");
    let delivery = FileDelivery::new(&out_dir);
    let exporter = Exporter::new(&delivery).with_renderer(Renderer::from_env());

    println!("=== Itinerary Export ===\n");
    println!(
        "Destination: {} ({} days, {} activities)",
        itinerary.destination,
        itinerary.number_of_days,
        itinerary.activity_count()
    );

    let exported = exporter.export(&itinerary)?;
    println!(
        "Wrote {} bytes of {} to {}",
        exported.bytes,
        exported.mime_type,
        delivery.target_path(&exported.filename).display()
    );

    Ok(())
}
