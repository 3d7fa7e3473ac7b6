//! Turning user input into new events.
//!
//! An [`EventDraft`] holds the raw strings from a form. [`create_event`]
//! checks every field and either returns a well-formed [`Event`] with its
//! creator already on the roster, or a [`DraftRejection`] listing each field
//! that failed.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use log::{debug, info};
use thiserror::Error;

use crate::attendee::Attendee;
use crate::clock::{Clock, IdGenerator};
use crate::constants::PAST_GRACE_SECONDS;
use crate::event::Event;

/// Local date-time layouts accepted besides RFC 3339.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Unvalidated fields for a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    /// RFC 3339, or a local `YYYY-MM-DDTHH:MM[:SS]`
    pub date: String,
    pub description: String,
    pub location: String,
    /// Blank or absent means no limit
    pub max_attendees: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Date,
    Location,
    MaxAttendees,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Date => "Date",
            DraftField::Location => "Location",
            DraftField::MaxAttendees => "Max attendees",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftErrorReason {
    #[error("is required")]
    Empty,

    #[error("is not a valid date and time")]
    Unparseable,

    #[error("is in the past")]
    InPast,

    #[error("must be a whole number")]
    NotAnInteger,

    #[error("must be at least 1")]
    BelowMinimum,

    #[error("is too large")]
    TooLarge,
}

/// One failed field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} {reason}")]
pub struct FieldError {
    pub field: DraftField,
    pub reason: DraftErrorReason,
}

impl FieldError {
    fn new(field: DraftField, reason: DraftErrorReason) -> Self {
        FieldError { field, reason }
    }
}

/// Why a draft was turned down. Holds one entry per failing field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid event: {}", join_errors(.errors))]
pub struct DraftRejection {
    pub errors: Vec<FieldError>,
}

impl DraftRejection {
    pub fn for_field(&self, field: DraftField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate `draft` and build an event created by `creator`.
///
/// Naive local date-times are read in `tz`. A start up to
/// `PAST_GRACE_SECONDS` before `clock.now()` is still accepted.
pub fn create_event<Tz: TimeZone>(
    draft: &EventDraft,
    creator: &Attendee,
    clock: &dyn Clock,
    ids: &mut dyn IdGenerator,
    tz: &Tz,
) -> Result<Event, DraftRejection> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push(FieldError::new(DraftField::Title, DraftErrorReason::Empty));
    }

    let date = match validate_date(&draft.date, clock.now(), tz) {
        Ok(date) => Some(date),
        Err(reason) => {
            errors.push(FieldError::new(DraftField::Date, reason));
            None
        }
    };

    let location = draft.location.trim();
    if location.is_empty() {
        errors.push(FieldError::new(DraftField::Location, DraftErrorReason::Empty));
    }

    let max_attendees = match parse_max_attendees(draft.max_attendees.as_deref()) {
        Ok(max) => Some(max),
        Err(reason) => {
            errors.push(FieldError::new(DraftField::MaxAttendees, reason));
            None
        }
    };

    match (date, max_attendees) {
        (Some(date), Some(max_attendees)) if errors.is_empty() => {
            let event = Event {
                id: ids.next_id(),
                title: title.to_string(),
                date,
                description: draft.description.trim().to_string(),
                location: location.to_string(),
                attendees: vec![creator.clone()],
                max_attendees,
                created_by: creator.clone(),
            };
            info!("{} created '{}' ({})", creator.id, event.title, event.id);
            Ok(event)
        }
        _ => {
            debug!("Rejected draft: {}", join_errors(&errors));
            Err(DraftRejection { errors })
        }
    }
}

/// Read a raw date input as an instant.
///
/// Accepts RFC 3339 with any offset, or a local date-time read in `tz`.
/// Local times that occur twice (DST fall-back) resolve to the earlier
/// instant; local times skipped by a DST jump do not parse.
pub fn parse_date_input<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

fn validate_date<Tz: TimeZone>(
    input: &str,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<DateTime<Utc>, DraftErrorReason> {
    if input.trim().is_empty() {
        return Err(DraftErrorReason::Empty);
    }

    let date = parse_date_input(input, tz).ok_or(DraftErrorReason::Unparseable)?;

    if date < now - Duration::seconds(PAST_GRACE_SECONDS) {
        return Err(DraftErrorReason::InPast);
    }

    Ok(date)
}

fn parse_max_attendees(input: Option<&str>) -> Result<Option<u32>, DraftErrorReason> {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let value: i64 = input.parse().map_err(|_| DraftErrorReason::NotAnInteger)?;
    if value < 1 {
        return Err(DraftErrorReason::BelowMinimum);
    }

    u32::try_from(value)
        .map(Some)
        .map_err(|_| DraftErrorReason::TooLarge)
}
