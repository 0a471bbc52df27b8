//! HTML fragments for the exported document.
//!
//! Each function returns one complete block; the outer document only
//! concatenates them. User text is escaped at the point of insertion.

use super::escape::escape_html;
use crate::types::{Activity, DayItinerary};

/// Embedded stylesheet; the document references nothing external.
pub const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; color: #333; }
.header { text-align: center; margin-bottom: 40px; border-bottom: 3px solid #3B82F6; padding-bottom: 20px; }
.destination { font-size: 36px; font-weight: bold; color: #3B82F6; margin-bottom: 10px; }
.details { color: #666; font-size: 16px; }
.day { margin: 30px 0; page-break-inside: avoid; }
.day-header { background: linear-gradient(135deg, #3B82F6, #10B981); color: white; padding: 15px; border-radius: 8px; font-size: 20px; font-weight: bold; }
.activity { margin: 15px 0; padding: 15px; border-left: 4px solid #3B82F6; background: #F8FAFC; }
.time { font-weight: bold; color: #3B82F6; }
.activity-name { font-size: 18px; font-weight: bold; margin: 5px 0; }
.description { color: #666; line-height: 1.5; }
.location { color: #10B981; margin-top: 5px; }
.footer { margin-top: 40px; text-align: center; color: #666; border-top: 1px solid #E5E7EB; padding-top: 20px; }
";

pub const DAY_BLOCK_OPEN: &str = "<div class=\"day\">";
pub const ACTIVITY_BLOCK_OPEN: &str = "<div class=\"activity\">";
pub const LOCATION_LINE_OPEN: &str = "<div class=\"location\">";

pub fn render_activity(activity: &Activity) -> String {
    let mut lines = vec![
        ACTIVITY_BLOCK_OPEN.to_string(),
        format!("<div class=\"time\">{}</div>", escape_html(&activity.time)),
        format!(
            "<div class=\"activity-name\">{}</div>",
            escape_html(&activity.activity)
        ),
        format!(
            "<div class=\"description\">{}</div>",
            escape_html(&activity.description)
        ),
    ];

    // An empty location carries no place name, same as an absent one.
    if let Some(location) = activity.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!(
            "{}📍 {}</div>",
            LOCATION_LINE_OPEN,
            escape_html(location)
        ));
    }

    lines.push("</div>".to_string());
    lines.join("\n")
}

pub fn render_day(day: &DayItinerary, destination: &str) -> String {
    let mut lines = vec![
        DAY_BLOCK_OPEN.to_string(),
        format!(
            "<div class=\"day-header\">Day {}: {} Adventure</div>",
            day.day,
            escape_html(destination)
        ),
    ];

    lines.extend(day.activities.iter().map(render_activity));
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// `formatted_date` is produced by the renderer, not taken from input.
pub fn render_header(destination: &str, number_of_days: u32, formatted_date: &str) -> String {
    [
        "<div class=\"header\">".to_string(),
        format!(
            "<div class=\"destination\">{}</div>",
            escape_html(destination)
        ),
        format!(
            "<div class=\"details\">{} Day Travel Itinerary | Generated on {}</div>",
            number_of_days, formatted_date
        ),
        "</div>".to_string(),
    ]
    .join("\n")
}

pub fn render_footer(destination: &str) -> String {
    [
        "<div class=\"footer\">".to_string(),
        format!(
            "<p>Have an amazing trip to {}! ✈️</p>",
            escape_html(destination)
        ),
        "<p>Generated by TravelMate AI</p>".to_string(),
        "</div>".to_string(),
    ]
    .join("\n")
}

/// Wrap pre-rendered body blocks into a standalone document.
pub fn render_document(destination: &str, blocks: &[String]) -> String {
    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{} Itinerary</title>", escape_html(destination)),
        "<style>".to_string(),
        STYLESHEET.trim_end().to_string(),
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
    ];

    lines.extend(blocks.iter().cloned());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    let mut document = lines.join("\n");
    document.push('\n');
    document
}
