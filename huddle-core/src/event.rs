//! Group events and their rosters.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::attendee::Attendee;

/// A scheduled group event.
///
/// Events are only built by [`crate::draft::create_event`] (or loaded from
/// seed data that passes the same checks) and only changed by
/// [`crate::roster::toggle_rsvp`].
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub location: String,
    /// Roster in join order, unique by attendee id
    pub attendees: Vec<Attendee>,
    pub max_attendees: Option<u32>,
    /// Who created the event. Kept even after they leave the roster.
    pub created_by: Attendee,
}

impl Event {
    pub fn is_attending(&self, attendee_id: &str) -> bool {
        self.attendees.iter().any(|a| a.id == attendee_id)
    }

    pub fn is_creator(&self, attendee_id: &str) -> bool {
        self.created_by.id == attendee_id
    }

    /// True when a capacity is set and every spot is taken.
    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|max| self.attendees.len() >= max as usize)
    }

    /// Remaining spots, or `None` for events without a capacity.
    pub fn spots_left(&self) -> Option<usize> {
        self.max_attendees
            .map(|max| (max as usize).saturating_sub(self.attendees.len()))
    }

    /// The calendar day this event falls on, as seen from `tz`.
    pub fn local_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.date.with_timezone(tz).date_naive()
    }

    pub(crate) fn with_attendees(&self, attendees: Vec<Attendee>) -> Event {
        Event {
            attendees,
            ..self.clone()
        }
    }

    /// Describe the first roster rule this event breaks, if any.
    pub(crate) fn roster_violation(&self) -> Option<String> {
        if self.max_attendees == Some(0) {
            return Some("capacity must be at least 1".to_string());
        }

        for (i, attendee) in self.attendees.iter().enumerate() {
            if self.attendees[..i].iter().any(|a| a.id == attendee.id) {
                return Some(format!("attendee '{}' listed twice", attendee.id));
            }
        }

        if let Some(max) = self.max_attendees {
            if self.attendees.len() > max as usize {
                return Some(format!(
                    "{} attendees exceed capacity of {}",
                    self.attendees.len(),
                    max
                ));
            }
        }

        None
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn event_at(id: &str, date: DateTime<Utc>) -> Event {
        let creator = Attendee::new("creator", "Casey Creator");
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            date,
            description: String::new(),
            location: "Community hall".to_string(),
            attendees: vec![creator.clone()],
            max_attendees: None,
            created_by: creator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::event_at;
    use super::*;
    use chrono::FixedOffset;

    fn sample() -> Event {
        event_at("e1", Utc.with_ymd_and_hms(2026, 10, 18, 23, 30, 0).unwrap())
    }

    #[test]
    fn capacity_helpers() {
        let mut event = sample();
        assert!(!event.is_full());
        assert_eq!(event.spots_left(), None);

        event.max_attendees = Some(2);
        assert!(!event.is_full());
        assert_eq!(event.spots_left(), Some(1));

        event.attendees.push(Attendee::new("a", "Alex"));
        assert!(event.is_full());
        assert_eq!(event.spots_left(), Some(0));
    }

    #[test]
    fn membership_and_creator() {
        let event = sample();
        assert!(event.is_attending("creator"));
        assert!(event.is_creator("creator"));
        assert!(!event.is_attending("stranger"));
    }

    #[test]
    fn local_day_follows_timezone() {
        let event = sample();
        assert_eq!(event.local_day(&Utc), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(event.local_day(&tokyo), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    }

    #[test]
    fn roster_violations() {
        assert_eq!(sample().roster_violation(), None);

        let mut duplicated = sample();
        duplicated.attendees.push(Attendee::new("creator", "Casey Again"));
        assert!(duplicated.roster_violation().unwrap().contains("twice"));

        let mut crowded = sample();
        crowded.max_attendees = Some(1);
        crowded.attendees.push(Attendee::new("a", "Alex"));
        assert!(crowded.roster_violation().unwrap().contains("exceed"));

        let mut zero = sample();
        zero.max_attendees = Some(0);
        assert!(zero.roster_violation().is_some());
    }
}
