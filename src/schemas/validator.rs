use crate::{
    error::{ExportError, Result},
    schemas::schema::itinerary_schema,
    types::{itinerary_from_value, parse_itinerary_json, ItineraryResponse},
};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::sync::Arc;

const MAX_SCHEMA_ERRORS: usize = 5;

/// Validation strategies for incoming itinerary JSON
#[derive(Debug, Clone, Default)]
pub enum Validator {
    /// Fast validation using serde
    #[default]
    SerdeFirst,
    /// Check against the generated JSON Schema, then deserialize
    Strict(StrictValidator),
}

impl Validator {
    pub fn strict() -> Result<Self> {
        Ok(Validator::Strict(StrictValidator::new()?))
    }

    /// Validate and deserialize raw JSON text
    pub fn parse(&self, raw: &str) -> Result<ItineraryResponse> {
        match self {
            Validator::SerdeFirst => parse_itinerary_json(raw),
            Validator::Strict(validator) => {
                let value: Value = serde_json::from_str(raw).map_err(|e| {
                    ExportError::MalformedInput(format!("itinerary is not valid JSON: {}", e))
                })?;
                validator.validate(value)
            }
        }
    }

    /// Validate and deserialize a decoded JSON value
    pub fn validate(&self, value: Value) -> Result<ItineraryResponse> {
        match self {
            Validator::SerdeFirst => itinerary_from_value(value),
            Validator::Strict(validator) => validator.validate(value),
        }
    }
}

/// Strict JSON Schema validator
#[derive(Clone)]
pub struct StrictValidator {
    compiled: Arc<JSONSchema>,
}

impl std::fmt::Debug for StrictValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrictValidator")
            .field("schema", &itinerary_schema().schema_name())
            .finish()
    }
}

impl StrictValidator {
    /// Compile the itinerary schema
    pub fn new() -> Result<Self> {
        let schema = itinerary_schema();
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema.schema_json())
            .map_err(|err| {
                ExportError::Config(format!(
                    "Failed to prepare `{}` schema for validation: {}",
                    schema.schema_name(),
                    err
                ))
            })?;

        Ok(Self {
            compiled: Arc::new(compiled),
        })
    }

    /// Validate against the schema and deserialize
    pub fn validate(&self, value: Value) -> Result<ItineraryResponse> {
        if let Err(errors) = self.compiled.validate(&value) {
            let mut details = Vec::new();
            let mut truncated = false;

            for (idx, error) in errors.enumerate() {
                if idx < MAX_SCHEMA_ERRORS {
                    let mut path = error.instance_path.to_string();
                    if path.is_empty() {
                        path = "<root>".to_string();
                    }
                    details.push(format!("{}: {}", path, error));
                } else {
                    truncated = true;
                    break;
                }
            }

            let mut detail_str = details.join("; ");
            if truncated {
                detail_str.push_str("; additional errors truncated");
            }

            return Err(ExportError::MalformedInput(format!(
                "itinerary does not match `{}` schema: {}",
                itinerary_schema().schema_name(),
                detail_str
            )));
        }

        itinerary_from_value(value)
    }
}
