//! itinerary-export: render structured travel itineraries into standalone HTML
//!
//! An [`ItineraryResponse`] produced by an upstream planner is turned into one
//! self-contained HTML document (embedded styles, no external assets), which
//! is then handed to a [`DeliveryAdapter`] together with a suggested filename.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use itinerary_export::{parse_itinerary_json, Exporter, FileDelivery};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw = std::fs::read_to_string("paris.json")?;
//!     let itinerary = parse_itinerary_json(&raw)?;
//!
//!     let exporter = Exporter::new(FileDelivery::new("exports"));
//!     let exported = exporter.export(&itinerary)?;
//!     println!("saved {}", exported.filename);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod render;
pub mod schemas;
pub mod types;

pub use config::ExportConfig;
pub use error::{DeliveryFailure, ExportError, Result};
pub use export::{
    export_to_html, suggested_filename, DeliveryAdapter, ExportedDocument, Exporter,
    FileDelivery, MemoryDelivery, SavedDocument, StdoutDelivery, HTML_MIME_TYPE,
};
pub use render::{escape_html, render, Renderer};
pub use schemas::{itinerary_schema, SchemaHandle, StrictValidator, Validator};
pub use types::{
    itinerary_from_value, parse_itinerary_json, Activity, Advisory, DayItinerary,
    ItineraryResponse,
};

pub use chrono::Locale;

#[cfg(feature = "cli")]
pub mod cli;
