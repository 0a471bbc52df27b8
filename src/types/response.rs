use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{ExportError, Result},
    types::itinerary::ItineraryResponse,
};

/// Parse an itinerary from raw JSON text.
pub fn parse_itinerary_json(raw: &str) -> Result<ItineraryResponse> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let itinerary = deserialize_with_path(&mut deserializer)?;
    deserializer.end().map_err(|err| {
        ExportError::MalformedInput(format!("unexpected content after itinerary: {}", err))
    })?;
    Ok(itinerary)
}

/// Parse an itinerary from an already-decoded JSON value.
pub fn itinerary_from_value(value: Value) -> Result<ItineraryResponse> {
    deserialize_with_path(value)
}

fn deserialize_with_path<'de, D, T>(deserializer: D) -> Result<T>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        ExportError::MalformedInput(format!(
            "failed to deserialize itinerary at {}: {}",
            location,
            err.inner()
        ))
    })
}
