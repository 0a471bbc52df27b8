use super::delivery::DeliveryAdapter;
use crate::error::DeliveryFailure;
use std::io::{self, Write};
use tracing::debug;

/// Streams documents to standard output; the filename is only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutDelivery;

impl StdoutDelivery {
    pub fn new() -> Self {
        Self
    }
}

impl DeliveryAdapter for StdoutDelivery {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn save(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> std::result::Result<(), DeliveryFailure> {
        let mut out = io::stdout().lock();
        out.write_all(content.as_bytes())?;
        out.flush()?;

        debug!(filename, mime_type, bytes = content.len(), "document written to stdout");
        Ok(())
    }
}
