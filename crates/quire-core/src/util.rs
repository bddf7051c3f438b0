//! Shared utility functions used across multiple modules.

use chrono::{DateTime, TimeZone};

const DISPLAY_DATE_FORMAT: &str = "%a, %b %d %Y";
const DISPLAY_TIMESTAMP_FORMAT: &str = "%a, %b %d %Y %H:%M";

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Trimmed `value`, or `default` when nothing but whitespace was supplied.
pub fn text_or_default(value: &str, default: &str) -> String {
    normalize_text_option(Some(value.to_string())).unwrap_or_else(|| default.to_string())
}

/// `value` as typed, or `default` when nothing but whitespace was supplied.
pub fn body_or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Salutation for the given hour of the day (0-23).
pub fn greeting_for_hour(hour: u32) -> String {
    let period = match hour {
        0..=4 => "Night",
        5..=11 => "Morning",
        12..=17 => "Afternoon",
        _ => "Evening",
    };
    format!("Good {period}")
}

/// Date label shown in headers, e.g. `Fri, Oct 16 2026`.
pub fn display_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Timestamp label stored on notes, e.g. `Fri, Oct 16 2026 14:05`.
pub fn display_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a note timestamp label.
pub fn now_display_timestamp() -> String {
    display_timestamp(&chrono::Local::now())
}

/// Collapse whitespace and cut `text` to at most `max_chars` characters,
/// ending with `...` when truncated.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn text_or_default_trims_or_falls_back() {
        assert_eq!(text_or_default("  Groceries ", "Untitled"), "Groceries");
        assert_eq!(text_or_default("", "Untitled"), "Untitled");
        assert_eq!(text_or_default(" \n\t", "Untitled"), "Untitled");
    }

    #[test]
    fn body_or_default_keeps_indentation() {
        assert_eq!(body_or_default("  - eggs\n  - milk", "Empty"), "  - eggs\n  - milk");
        assert_eq!(body_or_default(" \n ", "Empty"), "Empty");
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good Night");
        assert_eq!(greeting_for_hour(4), "Good Night");
        assert_eq!(greeting_for_hour(5), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn display_formats() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap();
        assert_eq!(display_date(&at), "Fri, Oct 16 2026");
        assert_eq!(display_timestamp(&at), "Fri, Oct 16 2026 14:05");
    }

    #[test]
    fn snippet_collapses_and_truncates() {
        assert_eq!(snippet("two\n\nlines", 20), "two lines");
        assert_eq!(
            snippet("This is a very long sentence that should be shortened", 20),
            "This is a very lo..."
        );
    }
}
