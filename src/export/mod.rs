//! Delivery of rendered documents: filename derivation, the adapter
//! capability and the adapters shipped with the crate.

pub mod delivery;
pub mod exporter;
pub mod file;
pub mod filename;
pub mod memory;
pub mod stdout;

pub use delivery::{DeliveryAdapter, HTML_MIME_TYPE};
pub use exporter::{export_to_html, ExportedDocument, Exporter};
pub use file::FileDelivery;
pub use filename::suggested_filename;
pub use memory::{MemoryDelivery, SavedDocument};
pub use stdout::StdoutDelivery;
