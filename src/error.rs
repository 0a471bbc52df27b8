use thiserror::Error;

/// Failure reported by a delivery adapter, kept intact for diagnostics.
pub type DeliveryFailure = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for itinerary rendering and export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Malformed itinerary: {0}")]
    MalformedInput(String),

    /// The user-facing message is fixed; the adapter's own error is the source.
    #[error("Failed to generate HTML. Please try again.")]
    Delivery {
        adapter: &'static str,
        #[source]
        source: DeliveryFailure,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Wrap an adapter failure behind the stable user-facing message
    pub fn delivery(adapter: &'static str, source: impl Into<DeliveryFailure>) -> Self {
        ExportError::Delivery {
            adapter,
            source: source.into(),
        }
    }

    /// Check if this error is retryable
    ///
    /// Only delivery depends on the environment; the same input will always
    /// fail to render the same way.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExportError::Delivery { .. })
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::MalformedInput(_) => "MALFORMED_INPUT",
            ExportError::Delivery { .. } => "DELIVERY_ERROR",
            ExportError::Config(_) => "CONFIG_ERROR",
            ExportError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        let cause = std::error::Error::source(self).map(|source| source.to_string());

        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "cause": cause,
                "retryable": self.is_retryable()
            }
        })
    }
}
