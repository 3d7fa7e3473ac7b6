//! Free-form date entry for the event form.
//!
//! Exact inputs (RFC 3339 or `YYYY-MM-DDTHH:MM`) go to the event factory
//! untouched. Anything else is tried as natural language ("fri 6pm",
//! "tomorrow at 9") and, if understood, rewritten as a local `YYYY-MM-DDTHH:MM`.
//! Relative words resolve against the session's clock in the configured zone,
//! not the machine's local time.

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;
use huddle_core::draft::parse_date_input;

/// Time used when natural-language input names a day but no time.
const DEFAULT_TIME: (u32, u32) = (12, 0);

const ABBREVIATIONS: [(&str, &str); 22] = [
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("tues", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("thur", "thursday"),
    ("thurs", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("sept", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Turn what the user typed into the date string for an `EventDraft`.
///
/// Input that cannot be understood is returned trimmed but otherwise as-is,
/// so the factory reports it as an invalid date.
pub fn to_draft_date(input: &str, now: &DateTime<Tz>) -> String {
    let input = input.trim();
    if input.is_empty() || parse_date_input(input, &now.timezone()).is_some() {
        return input.to_string();
    }

    let expanded = expand_abbreviations(input);
    let Ok(parsed) = fuzzydate::parse_relative_to(expanded, now.naive_local()) else {
        return input.to_string();
    };

    let parsed = if has_time_component(input) {
        parsed
    } else {
        let (hour, minute) = DEFAULT_TIME;
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => parsed.date().and_time(time),
            None => parsed,
        }
    };

    parsed.format("%Y-%m-%dT%H:%M").to_string()
}

/// Expand weekday and month abbreviations fuzzydate doesn't know.
fn expand_abbreviations(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map_or(word, |(_, full)| *full)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the input mentions a time of day (6pm, 9:30, noon, "at 3").
fn has_time_component(input: &str) -> bool {
    let lower = input.to_lowercase();

    if lower.contains("noon") || lower.contains("midnight") {
        return true;
    }

    let bytes = lower.as_bytes();
    for i in 0..bytes.len() {
        let meridiem = (bytes[i] == b'a' || bytes[i] == b'p') && bytes.get(i + 1) == Some(&b'm');
        if meridiem {
            let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
            let digit_before_space = i > 1 && bytes[i - 1] == b' ' && bytes[i - 2].is_ascii_digit();
            if digit_before || digit_before_space {
                return true;
            }
        }

        let clock = bytes[i] == b':'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if clock {
            return true;
        }
    }

    let after_at = lower
        .find(" at ")
        .map(|pos| &lower[pos + 4..])
        .or_else(|| lower.strip_prefix("at "));
    after_at.is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}
