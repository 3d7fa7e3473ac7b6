//! Joining and leaving events.

use std::fmt;

use log::info;

use crate::attendee::Attendee;
use crate::list::EventList;

/// What a call to [`toggle_rsvp`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpOutcome {
    Joined,
    Left,
    /// The event was at capacity; nothing changed
    RejectedFull,
    /// No event with that id; nothing changed
    EventNotFound,
}

impl RsvpOutcome {
    /// True when the roster was modified.
    pub fn changed(&self) -> bool {
        matches!(self, RsvpOutcome::Joined | RsvpOutcome::Left)
    }
}

impl fmt::Display for RsvpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RsvpOutcome::Joined => "joined",
            RsvpOutcome::Left => "left",
            RsvpOutcome::RejectedFull => "event is full",
            RsvpOutcome::EventNotFound => "event not found",
        };
        write!(f, "{}", text)
    }
}

/// Join `attendee` to the event `event_id`, or take them off its roster if
/// they are already on it.
///
/// Leaving is always allowed. Joining appends to the end of the roster unless
/// the event is full. Only the targeted event is replaced in the returned
/// list; all other events are shared with `events`.
pub fn toggle_rsvp(
    events: &EventList,
    event_id: &str,
    attendee: &Attendee,
) -> (EventList, RsvpOutcome) {
    let Some(position) = events.position(event_id) else {
        return (events.clone(), RsvpOutcome::EventNotFound);
    };
    let event = &events[position];

    if event.is_attending(&attendee.id) {
        let attendees = event
            .attendees
            .iter()
            .filter(|a| a.id != attendee.id)
            .cloned()
            .collect();

        info!("{} left '{}'", attendee.id, event.title);
        return (
            events.with_replaced(position, event.with_attendees(attendees)),
            RsvpOutcome::Left,
        );
    }

    if event.is_full() {
        info!("{} could not join '{}': full", attendee.id, event.title);
        return (events.clone(), RsvpOutcome::RejectedFull);
    }

    let mut attendees = event.attendees.clone();
    attendees.push(attendee.clone());

    info!("{} joined '{}'", attendee.id, event.title);
    (
        events.with_replaced(position, event.with_attendees(attendees)),
        RsvpOutcome::Joined,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::fixtures::event_at;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn roster_ids(events: &EventList, id: &str) -> Vec<String> {
        events
            .get(id)
            .unwrap()
            .attendees
            .iter()
            .map(|a| a.id.clone())
            .collect()
    }

    fn events(max_attendees: Option<u32>) -> EventList {
        let date = Utc.with_ymd_and_hms(2026, 10, 24, 18, 0, 0).unwrap();
        let mut capped = event_at("capped", date);
        capped.max_attendees = max_attendees;
        vec![event_at("other", date), capped].into_iter().collect()
    }

    #[test]
    fn join_then_leave_restores_roster() {
        let start = events(None);
        let guest = Attendee::new("guest", "Gus Guest");

        let (joined, outcome) = toggle_rsvp(&start, "capped", &guest);
        assert_eq!(outcome, RsvpOutcome::Joined);
        assert_eq!(roster_ids(&joined, "capped"), vec!["creator", "guest"]);

        let (left, outcome) = toggle_rsvp(&joined, "capped", &guest);
        assert_eq!(outcome, RsvpOutcome::Left);
        assert_eq!(roster_ids(&left, "capped"), roster_ids(&start, "capped"));
    }

    #[test]
    fn full_event_rejects_newcomer() {
        let start = events(Some(1));
        let guest = Attendee::new("guest", "Gus Guest");

        let (after, outcome) = toggle_rsvp(&start, "capped", &guest);
        assert_eq!(outcome, RsvpOutcome::RejectedFull);
        assert!(!outcome.changed());
        assert_eq!(roster_ids(&after, "capped"), vec!["creator"]);
        assert!(Arc::ptr_eq(&start[1], &after[1]));
    }

    #[test]
    fn member_can_leave_and_rejoin_full_event() {
        let start = events(Some(1));
        let creator = start.get("capped").unwrap().created_by.clone();

        let (left, outcome) = toggle_rsvp(&start, "capped", &creator);
        assert_eq!(outcome, RsvpOutcome::Left);
        assert!(roster_ids(&left, "capped").is_empty());

        let (rejoined, outcome) = toggle_rsvp(&left, "capped", &creator);
        assert_eq!(outcome, RsvpOutcome::Joined);
        assert_eq!(roster_ids(&rejoined, "capped"), vec!["creator"]);
    }

    #[test]
    fn creator_attribution_survives_leaving() {
        let start = events(None);
        let creator = start.get("capped").unwrap().created_by.clone();

        let (left, _) = toggle_rsvp(&start, "capped", &creator);
        let event = left.get("capped").unwrap();
        assert!(!event.is_attending("creator"));
        assert!(event.is_creator("creator"));
    }

    #[test]
    fn unknown_event_is_a_no_op() {
        let start = events(None);
        let guest = Attendee::new("guest", "Gus Guest");

        let (after, outcome) = toggle_rsvp(&start, "missing", &guest);
        assert_eq!(outcome, RsvpOutcome::EventNotFound);
        assert_eq!(after.len(), start.len());
        assert!(Arc::ptr_eq(&start[0], &after[0]));
        assert!(Arc::ptr_eq(&start[1], &after[1]));
    }

    #[test]
    fn other_events_are_shared() {
        let start = events(None);
        let guest = Attendee::new("guest", "Gus Guest");

        let (after, _) = toggle_rsvp(&start, "capped", &guest);
        assert!(Arc::ptr_eq(&start[0], &after[0]));
        assert!(!Arc::ptr_eq(&start[1], &after[1]));
        assert_eq!(roster_ids(&start, "capped"), vec!["creator"]);
    }

    #[test]
    fn join_fills_last_spot() {
        let start = events(Some(2));
        let guest = Attendee::new("guest", "Gus Guest");
        let late = Attendee::new("late", "Lee Late");

        let (after, outcome) = toggle_rsvp(&start, "capped", &guest);
        assert_eq!(outcome, RsvpOutcome::Joined);
        assert!(after.get("capped").unwrap().is_full());

        let (_, outcome) = toggle_rsvp(&after, "capped", &late);
        assert_eq!(outcome, RsvpOutcome::RejectedFull);
    }
}
