use schemars::schema_for;
use serde_json::Value;
use std::{any::type_name, sync::Arc, sync::OnceLock};

use crate::types::ItineraryResponse;

/// Cached JSON schema for the itinerary wire format.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    type_name: &'static str,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    fn build() -> Self {
        let root = schema_for!(ItineraryResponse);
        // A derived schema is plain data; serializing it cannot fail.
        let schema_json = serde_json::to_value(root).unwrap_or(Value::Null);

        Self {
            schema_name: "ItineraryResponse",
            type_name: type_name::<ItineraryResponse>(),
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    pub fn schema_json_arc(&self) -> Arc<Value> {
        Arc::clone(&self.schema_json)
    }

    /// Pretty-printed schema, suitable for handing to an itinerary generator
    pub fn to_pretty_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self.schema_json())?)
    }
}

/// Schema of [`ItineraryResponse`], built once per process.
pub fn itinerary_schema() -> &'static SchemaHandle {
    static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
    HANDLE.get_or_init(SchemaHandle::build)
}
