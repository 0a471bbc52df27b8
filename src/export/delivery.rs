use crate::error::DeliveryFailure;

/// Content type of exported itinerary documents.
pub const HTML_MIME_TYPE: &str = "text/html";

/// A capability that makes a rendered document available to the user
pub trait DeliveryAdapter: Send + Sync + std::fmt::Debug {
    /// Short adapter name (used in logs and error reports)
    fn name(&self) -> &'static str;

    /// Hand over the document under the suggested filename
    ///
    /// Implementations own any resource they acquire here and must release
    /// it before returning, whether or not the save succeeded.
    fn save(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> std::result::Result<(), DeliveryFailure>;
}

impl<T: DeliveryAdapter + ?Sized> DeliveryAdapter for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn save(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> std::result::Result<(), DeliveryFailure> {
        (**self).save(content, filename, mime_type)
    }
}

impl<T: DeliveryAdapter + ?Sized> DeliveryAdapter for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn save(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> std::result::Result<(), DeliveryFailure> {
        (**self).save(content, filename, mime_type)
    }
}
