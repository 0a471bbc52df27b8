//! Itinerary → standalone HTML document.

pub mod date;
pub mod escape;
pub mod html;

use chrono::Locale;
use tracing::{debug, warn};

use crate::{config::ExportConfig, error::Result, types::ItineraryResponse};

pub use date::{format_short_date, parse_created_at};
pub use escape::escape_html;
pub use html::{render_activity, render_day, render_document, render_footer, render_header};

/// Renders itineraries with a fixed locale for the summary date.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    locale: Locale,
}

impl Renderer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Renderer using the host locale from the environment.
    pub fn from_env() -> Self {
        Self::from_config(&ExportConfig::from_env())
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render one itinerary into a complete HTML document.
    ///
    /// Fails without producing output when `destination` is blank or
    /// `createdAt` cannot be read as a date.
    pub fn render(&self, itinerary: &ItineraryResponse) -> Result<String> {
        itinerary.validate()?;
        let created_at = parse_created_at(&itinerary.created_at)?;

        for advisory in itinerary.advisories() {
            warn!(id = %itinerary.id, "itinerary advisory: {}", advisory);
        }

        let destination = itinerary.destination.as_str();
        let formatted_date = format_short_date(&created_at, self.locale);

        let mut blocks = Vec::with_capacity(itinerary.itinerary.len() + 2);
        blocks.push(render_header(
            destination,
            itinerary.number_of_days,
            &formatted_date,
        ));
        blocks.extend(
            itinerary
                .itinerary
                .iter()
                .map(|day| render_day(day, destination)),
        );
        blocks.push(render_footer(destination));

        let document = render_document(destination, &blocks);
        debug!(
            id = %itinerary.id,
            days = itinerary.itinerary.len(),
            activities = itinerary.activity_count(),
            bytes = document.len(),
            "rendered itinerary document"
        );

        Ok(document)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(ExportConfig::default().locale)
    }
}

/// Render with the host locale.
pub fn render(itinerary: &ItineraryResponse) -> Result<String> {
    Renderer::from_env().render(itinerary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Activity, DayItinerary};

    fn lisbon() -> ItineraryResponse {
        ItineraryResponse::new(
            "trip-lis",
            "Lisbon",
            1,
            vec![DayItinerary::new(
                1,
                vec![Activity::new("10:00 AM", "Tram 28", "Ride to Alfama")],
            )],
            "2024-01-15T12:00:00Z",
        )
    }

    #[test]
    fn test_render_uses_host_locale() {
        let itinerary = lisbon();
        let expected = Renderer::new(ExportConfig::from_env().locale)
            .render(&itinerary)
            .unwrap();

        assert_eq!(render(&itinerary).unwrap(), expected);
        assert_eq!(
            format!("{:?}", Renderer::from_env().locale()),
            format!("{:?}", ExportConfig::from_env().locale)
        );
    }

    #[test]
    fn test_locale_from_environment_lookup() {
        let config = ExportConfig::from_lookup(|key| {
            (key == "LANG").then(|| "de_DE.UTF-8".to_string())
        });
        let html = Renderer::from_config(&config).render(&lisbon()).unwrap();
        assert!(html.contains("Generated on 15.01.2024"));
    }

    #[test]
    fn test_default_renderer_is_en_us() {
        let html = Renderer::default().render(&lisbon()).unwrap();
        assert!(html.contains("1 Day Travel Itinerary | Generated on 01/15/2024"));
    }
}
