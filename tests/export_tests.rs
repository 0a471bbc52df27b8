use itinerary_export::{
    export_to_html, suggested_filename, Activity, DayItinerary, DeliveryAdapter, DeliveryFailure,
    ExportError, Exporter, FileDelivery, ItineraryResponse, Locale, MemoryDelivery, Renderer,
    HTML_MIME_TYPE,
};
use std::{
    error::Error as _,
    fs,
    sync::atomic::{AtomicUsize, Ordering},
};

fn new_york() -> ItineraryResponse {
    ItineraryResponse::new(
        "trip-nyc",
        "New York City",
        1,
        vec![DayItinerary::new(
            1,
            vec![Activity::new("10:00 AM", "Central Park", "Bike loop").with_location("Central Park")],
        )],
        "2024-09-01T14:00:00Z",
    )
}

/// Adapter that always refuses, counting how often it was asked.
#[derive(Debug, Default)]
struct RefusingDelivery {
    calls: AtomicUsize,
}

impl DeliveryAdapter for RefusingDelivery {
    fn name(&self) -> &'static str {
        "refusing"
    }

    fn save(
        &self,
        _content: &str,
        _filename: &str,
        _mime_type: &str,
    ) -> Result<(), DeliveryFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("download blocked by environment".into())
    }
}

#[test]
fn test_filename_derivation() {
    assert_eq!(
        suggested_filename("New York City"),
        "New_York_City_Itinerary.html"
    );
}

#[test]
fn test_export_to_memory() {
    let exporter = Exporter::new(MemoryDelivery::new()).with_renderer(Renderer::new(Locale::en_US));

    let exported = exporter.export(&new_york()).unwrap();
    assert_eq!(exported.filename, "New_York_City_Itinerary.html");
    assert_eq!(exported.mime_type, HTML_MIME_TYPE);

    let saved = exporter.delivery().saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].filename, "New_York_City_Itinerary.html");
    assert_eq!(saved[0].mime_type, "text/html");
    assert_eq!(saved[0].content.len(), exported.bytes);
    assert!(saved[0].content.contains("Day 1: New York City Adventure"));
}

#[test]
fn test_export_matches_direct_render() {
    let renderer = Renderer::new(Locale::en_US);
    let exporter = Exporter::new(MemoryDelivery::new()).with_renderer(renderer);

    exporter.export(&new_york()).unwrap();
    let expected = renderer.render(&new_york()).unwrap();

    assert_eq!(exporter.delivery().saved()[0].content, expected);
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let exporter =
        Exporter::new(FileDelivery::new(dir.path())).with_renderer(Renderer::new(Locale::en_US));

    let exported = exporter.export(&new_york()).unwrap();

    let path = dir.path().join(&exported.filename);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert_eq!(written.len(), exported.bytes);
}

#[test]
fn test_export_destination_with_slash() {
    let dir = tempfile::tempdir().unwrap();
    let delivery = FileDelivery::new(dir.path());
    let exporter = Exporter::new(&delivery).with_renderer(Renderer::new(Locale::en_US));

    let mut itinerary = new_york();
    itinerary.destination = "Minneapolis/St. Paul".to_string();
    let exported = exporter.export(&itinerary).unwrap();

    assert_eq!(exported.filename, "Minneapolis/St._Paul_Itinerary.html");
    let target = delivery.target_path(&exported.filename);
    assert_eq!(target, dir.path().join("Minneapolis_St._Paul_Itinerary.html"));

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("<title>Minneapolis/St. Paul Itinerary</title>"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_delivery_failure_is_wrapped() {
    let delivery = RefusingDelivery::default();
    let exporter = Exporter::new(&delivery).with_renderer(Renderer::new(Locale::en_US));

    let err = exporter.export(&new_york()).unwrap_err();

    assert_eq!(err.to_string(), "Failed to generate HTML. Please try again.");
    assert_eq!(err.error_code(), "DELIVERY_ERROR");
    assert!(err.is_retryable());
    assert_eq!(
        err.source().unwrap().to_string(),
        "download blocked by environment"
    );
    assert!(matches!(err, ExportError::Delivery { adapter: "refusing", .. }));

    let payload = err.to_error_payload();
    assert_eq!(payload["error"]["cause"], "download blocked by environment");

    assert_eq!(delivery.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_malformed_input_never_reaches_adapter() {
    let delivery = RefusingDelivery::default();
    let mut itinerary = new_york();
    itinerary.created_at = "not-a-date".to_string();

    let err = export_to_html(&itinerary, &delivery).unwrap_err();

    assert!(matches!(err, ExportError::MalformedInput(_)));
    assert_eq!(delivery.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_boxed_adapter() {
    let delivery: Box<dyn DeliveryAdapter> = Box::new(MemoryDelivery::new());
    let exporter = Exporter::new(delivery).with_renderer(Renderer::new(Locale::en_US));

    let exported = exporter.export(&new_york()).unwrap();
    assert_eq!(exporter.delivery().name(), "memory");
    assert!(exported.bytes > 0);
}

#[test]
fn test_file_delivery_failure_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    // A directory already occupying the target name makes the final rename fail.
    fs::create_dir(dir.path().join("New_York_City_Itinerary.html")).unwrap();

    let exporter =
        Exporter::new(FileDelivery::new(dir.path())).with_renderer(Renderer::new(Locale::en_US));
    let err = exporter.export(&new_york()).unwrap_err();

    assert_eq!(err.error_code(), "DELIVERY_ERROR");
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
