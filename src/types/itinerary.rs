use crate::{
    error::{ExportError, Result},
    render::date::parse_created_at,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// A generated multi-day trip plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    /// Opaque identifier assigned by the planner
    pub id: String,
    /// Display name of the trip's location (e.g., "Paris, France")
    pub destination: String,
    /// Advertised trip length in days, shown in the document summary
    pub number_of_days: u32,
    /// Day-by-day schedule in presentation order
    pub itinerary: Vec<DayItinerary>,
    /// Timestamp marking when the plan was generated (RFC 3339 preferred)
    pub created_at: String,
}

/// One day's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayItinerary {
    /// 1-based day counter within the trip
    pub day: u32,
    /// Scheduled events in presentation order
    pub activities: Vec<Activity>,
}

/// One scheduled event within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Human-readable time of day (e.g., "09:00 AM")
    pub time: String,
    /// Short title of the activity
    pub activity: String,
    /// Free-text detail, may be empty
    #[serde(default)]
    pub description: String,
    /// Place name, omitted when not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Activity {
    pub fn new(
        time: impl Into<String>,
        activity: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            activity: activity.into(),
            description: description.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl DayItinerary {
    pub fn new(day: u32, activities: Vec<Activity>) -> Self {
        Self { day, activities }
    }
}

impl ItineraryResponse {
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        number_of_days: u32,
        itinerary: Vec<DayItinerary>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            number_of_days,
            itinerary,
            created_at: created_at.into(),
        }
    }

    /// Total activities across all days
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }

    /// Check the fields a document cannot be built without.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(ExportError::MalformedInput(
                "destination must not be blank".to_string(),
            ));
        }

        parse_created_at(&self.created_at)?;
        Ok(())
    }

    /// Soft contract violations. None of these stop rendering.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        let mut seen = BTreeSet::new();

        if self.number_of_days as usize != self.itinerary.len() {
            advisories.push(Advisory::DayCountMismatch {
                declared: self.number_of_days,
                actual: self.itinerary.len(),
            });
        }

        for day in &self.itinerary {
            if day.day == 0 {
                advisories.push(Advisory::ZeroDay);
            }
            if !seen.insert(day.day) {
                advisories.push(Advisory::DuplicateDay(day.day));
            }
            for (index, activity) in day.activities.iter().enumerate() {
                if activity.activity.trim().is_empty() {
                    advisories.push(Advisory::BlankActivityTitle {
                        day: day.day,
                        index,
                    });
                }
            }
        }

        advisories
    }
}

/// A field-level contract the upstream planner should have honored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    DayCountMismatch { declared: u32, actual: usize },
    ZeroDay,
    DuplicateDay(u32),
    BlankActivityTitle { day: u32, index: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DayCountMismatch { declared, actual } => write!(
                f,
                "numberOfDays is {} but the itinerary lists {} day(s)",
                declared, actual
            ),
            Advisory::ZeroDay => write!(f, "day numbers are 1-based but 0 was supplied"),
            Advisory::DuplicateDay(day) => write!(f, "day {} appears more than once", day),
            Advisory::BlankActivityTitle { day, index } => {
                write!(f, "activity #{} on day {} has a blank title", index + 1, day)
            }
        }
    }
}
