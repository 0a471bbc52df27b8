use super::{
    delivery::{DeliveryAdapter, HTML_MIME_TYPE},
    filename::suggested_filename,
};
use crate::{error::ExportError, render::Renderer, types::ItineraryResponse, Result};
use tracing::{error, info};

/// What a successful export handed to the delivery adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: usize,
}

/// Renders itineraries and passes the result to a delivery adapter
#[derive(Debug)]
pub struct Exporter<D: DeliveryAdapter> {
    renderer: Renderer,
    delivery: D,
}

impl<D: DeliveryAdapter> Exporter<D> {
    /// Create an exporter using the host locale
    pub fn new(delivery: D) -> Self {
        Self {
            renderer: Renderer::from_env(),
            delivery,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// Render `itinerary` and deliver it exactly once.
    ///
    /// A render failure is returned before the adapter is touched.
    pub fn export(&self, itinerary: &ItineraryResponse) -> Result<ExportedDocument> {
        let document = self.renderer.render(itinerary)?;
        let filename = suggested_filename(&itinerary.destination);

        if let Err(source) = self.delivery.save(&document, &filename, HTML_MIME_TYPE) {
            error!(
                adapter = self.delivery.name(),
                filename = %filename,
                "Error generating HTML: {}",
                source
            );
            return Err(ExportError::delivery(self.delivery.name(), source));
        }

        info!(
            adapter = self.delivery.name(),
            filename = %filename,
            bytes = document.len(),
            "itinerary exported"
        );

        Ok(ExportedDocument {
            filename,
            mime_type: HTML_MIME_TYPE,
            bytes: document.len(),
        })
    }
}

/// One-shot export through any adapter, using the host locale.
pub fn export_to_html(
    itinerary: &ItineraryResponse,
    delivery: &dyn DeliveryAdapter,
) -> Result<ExportedDocument> {
    Exporter::new(delivery).export(itinerary)
}
