use itinerary_export::{itinerary_schema, ExportError, Validator};
use serde_json::json;

fn valid_payload() -> serde_json::Value {
    json!({
        "id": "trip-42",
        "destination": "Barcelona",
        "numberOfDays": 2,
        "itinerary": [
            {"day": 1, "activities": [
                {"time": "09:00 AM", "activity": "Sagrada Familia", "description": "Guided tour", "location": "Eixample"}
            ]},
            {"day": 2, "activities": []}
        ],
        "createdAt": "2024-05-20T07:30:00Z"
    })
}

#[test]
fn test_serde_first_accepts_valid_payload() {
    let itinerary = Validator::SerdeFirst.validate(valid_payload()).unwrap();
    assert_eq!(itinerary.destination, "Barcelona");
    assert_eq!(itinerary.itinerary.len(), 2);
}

#[test]
fn test_strict_accepts_valid_payload() {
    let validator = Validator::strict().unwrap();
    let itinerary = validator.validate(valid_payload()).unwrap();
    assert_eq!(
        itinerary.itinerary[0].activities[0].location.as_deref(),
        Some("Eixample")
    );
}

#[test]
fn test_strict_reports_instance_paths() {
    let mut payload = valid_payload();
    payload["itinerary"][0]["activities"][0]["time"] = json!(900);
    payload["numberOfDays"] = json!("two");

    let err = Validator::strict().unwrap().validate(payload).unwrap_err();
    let message = err.to_string();

    assert!(matches!(err, ExportError::MalformedInput(_)));
    assert!(message.contains("/itinerary/0/activities/0/time"), "{message}");
    assert!(message.contains("/numberOfDays"), "{message}");
}

#[test]
fn test_strict_reports_missing_fields() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("createdAt");

    let err = Validator::strict().unwrap().validate(payload).unwrap_err();
    assert!(err.to_string().contains("createdAt"));
}

#[test]
fn test_parse_rejects_invalid_json_text() {
    for validator in [Validator::SerdeFirst, Validator::strict().unwrap()] {
        let err = validator.parse("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_INPUT");
    }
}

#[test]
fn test_parse_text_round_trip() {
    let raw = serde_json::to_string(&valid_payload()).unwrap();
    let parsed = Validator::default().parse(&raw).unwrap();
    assert_eq!(parsed.id, "trip-42");
}

#[test]
fn test_schema_pretty_output_is_json() {
    let pretty = itinerary_schema().to_pretty_string().unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed["title"], "ItineraryResponse");
    assert_eq!(itinerary_schema().schema_name(), "ItineraryResponse");
}
