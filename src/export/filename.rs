/// Suffix appended to the destination in suggested filenames.
pub const FILENAME_SUFFIX: &str = "_Itinerary";
pub const HTML_EXTENSION: &str = "html";

/// Suggested download name, e.g. "New York City" → "New_York_City_Itinerary.html".
///
/// Each run of whitespace becomes one underscore, including leading and
/// trailing runs.
pub fn suggested_filename(destination: &str) -> String {
    let mut name = String::with_capacity(destination.len() + FILENAME_SUFFIX.len() + 5);
    let mut in_whitespace = false;

    for c in destination.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }

    name.push_str(FILENAME_SUFFIX);
    name.push('.');
    name.push_str(HTML_EXTENSION);
    name
}
