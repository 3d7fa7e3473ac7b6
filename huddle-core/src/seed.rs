//! Starting event lists: JSON seed files and the built-in demo set.
//!
//! Seed files are written by hand, so each record is checked the same way the
//! engine's own events are guaranteed to be: a readable date, a title and a
//! location, and a roster that respects its capacity. Records that fail are
//! skipped with a warning rather than failing the whole load.

use std::path::Path;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use log::{info, warn};
use serde::Deserialize;

use crate::attendee::Attendee;
use crate::clock::IdGenerator;
use crate::error::{HuddleError, HuddleResult};
use crate::event::Event;
use crate::list::EventList;

#[derive(Debug, Deserialize)]
struct SeedAttendee {
    id: String,
    name: String,
}

impl From<SeedAttendee> for Attendee {
    fn from(seed: SeedAttendee) -> Self {
        Attendee::new(seed.id, seed.name)
    }
}

#[derive(Debug, Deserialize)]
struct SeedEvent {
    id: Option<String>,
    title: String,
    /// RFC 3339
    date: String,
    #[serde(default)]
    description: String,
    location: String,
    #[serde(default)]
    attendees: Vec<SeedAttendee>,
    max_attendees: Option<u32>,
    created_by: SeedAttendee,
}

impl SeedEvent {
    fn into_event(self, ids: &mut dyn IdGenerator) -> Result<Event, String> {
        let date = DateTime::parse_from_rfc3339(self.date.trim())
            .map_err(|e| format!("unreadable date '{}': {}", self.date, e))?
            .with_timezone(&Utc);

        if self.title.trim().is_empty() {
            return Err("missing title".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("missing location".to_string());
        }

        let event = Event {
            id: self.id.unwrap_or_else(|| ids.next_id()),
            title: self.title.trim().to_string(),
            date,
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            attendees: self.attendees.into_iter().map(Attendee::from).collect(),
            max_attendees: self.max_attendees,
            created_by: self.created_by.into(),
        };

        match event.roster_violation() {
            Some(problem) => Err(problem),
            None => Ok(event),
        }
    }
}

/// Load a JSON array of events from `path`.
pub fn load_seed(path: &Path, ids: &mut dyn IdGenerator) -> HuddleResult<EventList> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        HuddleError::Seed(format!("Could not read {}: {}", path.display(), e))
    })?;

    let events = parse_seed(&content, ids)?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parse a JSON array of events, skipping records that fail validation.
pub fn parse_seed(content: &str, ids: &mut dyn IdGenerator) -> HuddleResult<EventList> {
    let records: Vec<SeedEvent> = serde_json::from_str(content)?;

    let mut events: Vec<Event> = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let title = record.title.clone();
        match record.into_event(ids) {
            Ok(event) if events.iter().any(|e| e.id == event.id) => {
                warn!("Skipping seed event #{} '{}': duplicate id '{}'", position, title, event.id);
            }
            Ok(event) => events.push(event),
            Err(problem) => {
                warn!("Skipping seed event #{} '{}': {}", position, title, problem);
            }
        }
    }

    Ok(events.into_iter().collect())
}

/// A handful of sample events around `now`, for trying huddle out.
pub fn demo_events<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz, ids: &mut dyn IdGenerator) -> EventList {
    let today = now.with_timezone(tz).date_naive();

    let ana = Attendee::new("ana", "Ana Souza");
    let kofi = Attendee::new("kofi", "Kofi Mensah");
    let lin = Attendee::new("lin", "Lin Wei");

    // (days from today, hour, minute, title, location, description, roster, capacity)
    let plans = [
        (0, 13, 0, "Lunch & learn", "Kitchen", "Bring questions about the new build setup.", vec![ana.clone(), kofi.clone()], None),
        (1, 18, 30, "Board game night", "Lin's place", "", vec![lin.clone(), ana.clone()], Some(6)),
        (3, 7, 0, "Morning run", "River path, north bridge", "Easy 5k pace.", vec![kofi.clone()], Some(2)),
        (9, 19, 0, "Book club", "Library, room 2", "Chapters 1-6.", vec![ana.clone(), lin.clone(), kofi.clone()], Some(3)),
    ];

    plans
        .into_iter()
        .filter_map(|(days, hour, minute, title, location, description, attendees, max_attendees)| {
            let day = today + Duration::days(days);
            let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
            let date = tz
                .from_local_datetime(&day.and_time(time))
                .earliest()?
                .with_timezone(&Utc);
            let created_by = attendees.first()?.clone();

            Some(Event {
                id: ids.next_id(),
                title: title.to_string(),
                date,
                description: description.to_string(),
                location: location.to_string(),
                attendees,
                max_attendees,
                created_by,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SequentialIds;
    use crate::index::events_on;
    use chrono::NaiveDate;

    const SEED: &str = r#"[
        {
            "id": "picnic",
            "title": "Picnic",
            "date": "2026-10-24T11:00:00Z",
            "location": "Park",
            "attendees": [{"id": "ana", "name": "Ana Souza"}],
            "max_attendees": 10,
            "created_by": {"id": "ana", "name": "Ana Souza"}
        },
        {
            "title": "No id given",
            "date": "2026-10-25T09:00:00+02:00",
            "description": "  trimmed  ",
            "location": "Cafe",
            "created_by": {"id": "kofi", "name": "Kofi Mensah"}
        },
        {
            "title": "Broken date",
            "date": "next tuesday",
            "location": "Somewhere",
            "created_by": {"id": "kofi", "name": "Kofi Mensah"}
        },
        {
            "title": "Crowded",
            "date": "2026-10-26T18:00:00Z",
            "location": "Small room",
            "attendees": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
            "max_attendees": 1,
            "created_by": {"id": "a", "name": "A"}
        },
        {
            "title": "Twice",
            "date": "2026-10-27T18:00:00Z",
            "location": "Hall",
            "attendees": [{"id": "a", "name": "A"}, {"id": "a", "name": "A"}],
            "created_by": {"id": "a", "name": "A"}
        },
        {
            "id": "picnic",
            "title": "Same id again",
            "date": "2026-10-28T18:00:00Z",
            "location": "Hall",
            "created_by": {"id": "a", "name": "A"}
        },
        {
            "title": "   ",
            "date": "2026-10-28T18:00:00Z",
            "location": "Hall",
            "created_by": {"id": "a", "name": "A"}
        }
    ]"#;

    #[test]
    fn keeps_valid_records_and_skips_the_rest() {
        let mut ids = SequentialIds::new("seed");
        let events = parse_seed(SEED, &mut ids).unwrap();

        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Picnic", "No id given"]);

        let picnic = events.get("picnic").unwrap();
        assert_eq!(picnic.max_attendees, Some(10));
        assert_eq!(picnic.attendees[0].avatar_color, Attendee::new("ana", "x").avatar_color);

        let generated = &events[1];
        assert_eq!(generated.id, "seed-1");
        assert_eq!(generated.description, "trimmed");
        assert_eq!(generated.date, Utc.with_ymd_and_hms(2026, 10, 25, 7, 0, 0).unwrap());
        assert!(generated.attendees.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut ids = SequentialIds::new("seed");
        assert!(matches!(
            parse_seed("{ not json", &mut ids),
            Err(HuddleError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, SEED).unwrap();

        let events = load_seed(&path, &mut SequentialIds::new("seed")).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn missing_file_is_a_seed_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_seed(&dir.path().join("nope.json"), &mut SequentialIds::new("seed"));
        assert!(matches!(result, Err(HuddleError::Seed(_))));
    }

    #[test]
    fn demo_events_are_well_formed() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let mut ids = SequentialIds::new("demo");
        let events = demo_events(now, &Utc, &mut ids);

        assert_eq!(events.len(), 4);
        for event in &events {
            assert_eq!(event.roster_violation(), None, "{}", event.title);
            assert!(event.is_attending(&event.created_by.id));
        }

        let today = events_on(&events, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), &Utc);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].title, "Lunch & learn");
        assert!(events.get("demo-4").unwrap().is_full());
    }
}
