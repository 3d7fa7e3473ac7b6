//! Grouping and selecting events by calendar day.
//!
//! Days are local days: an event at 23:30 UTC belongs to the next day in
//! Tokyo. Every event in an [`EventList`] carries a valid instant; records
//! with unreadable dates are turned away when seed data is loaded, so nothing
//! is dropped here.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;

use crate::event::Event;
use crate::list::EventList;

/// Canonical identifier for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date)
    }

    /// The local day `instant` falls on in `tz`.
    pub fn of<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> Self {
        DayKey(instant.with_timezone(tz).date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Events grouped by day, iterated in chronological day order.
pub type DayIndex = BTreeMap<DayKey, Vec<Arc<Event>>>;

/// Group `events` by the local day they fall on.
///
/// Within a day, events keep their order in `events`.
pub fn index_by_day<Tz: TimeZone>(events: &EventList, tz: &Tz) -> DayIndex {
    let mut index = DayIndex::new();

    for event in events {
        index
            .entry(DayKey::of(&event.date, tz))
            .or_default()
            .push(Arc::clone(event));
    }

    debug!("Indexed {} events across {} days", events.len(), index.len());
    index
}

/// Events on `day`, earliest first. Events at the same instant keep their
/// order in `events`.
pub fn events_on<Tz: TimeZone>(events: &EventList, day: NaiveDate, tz: &Tz) -> Vec<Arc<Event>> {
    let key = DayKey::from_date(day);

    let mut selected: Vec<Arc<Event>> = events
        .iter()
        .filter(|event| DayKey::of(&event.date, tz) == key)
        .cloned()
        .collect();

    // sort_by_key is stable
    selected.sort_by_key(|event| event.date);
    selected
}
