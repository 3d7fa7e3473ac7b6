//! Session state for a calendar front-end.
//!
//! A [`Planner`] owns the canonical event list together with what the user is
//! looking at (visible month, selected day). Front-ends translate user
//! intents into calls here and render from the read side.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use log::warn;

use crate::attendee::Attendee;
use crate::clock::{Clock, IdGenerator};
use crate::draft::{self, DraftRejection, EventDraft};
use crate::event::Event;
use crate::grid::MonthGrid;
use crate::index::{self, DayIndex};
use crate::list::EventList;
use crate::month::{WeekStart, YearMonth};
use crate::roster::{self, RsvpOutcome};

/// Result of the most recent change attempt, for notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerOutcome {
    Rsvp { event_id: String, outcome: RsvpOutcome },
    Created { event_id: String },
    Rejected(DraftRejection),
}

pub struct Planner {
    events: EventList,
    user: Attendee,
    timezone: Tz,
    week_start: WeekStart,
    month: YearMonth,
    selected_day: NaiveDate,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    last_outcome: Option<PlannerOutcome>,
}

impl Planner {
    /// Start a session on today's month with today selected.
    pub fn new(
        events: EventList,
        user: Attendee,
        timezone: Tz,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let today = clock.now().with_timezone(&timezone).date_naive();

        Planner {
            events,
            user,
            timezone,
            week_start: WeekStart::default(),
            month: YearMonth::nearest(today),
            selected_day: today,
            clock,
            ids,
            last_outcome: None,
        }
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    // --- read side ---

    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn user(&self) -> &Attendee {
        &self.user
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    /// The current instant in the session's timezone.
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.timezone)
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.month, self.week_start)
    }

    pub fn day_index(&self) -> DayIndex {
        index::index_by_day(&self.events, &self.timezone)
    }

    pub fn selected_events(&self) -> Vec<Arc<Event>> {
        index::events_on(&self.events, self.selected_day, &self.timezone)
    }

    pub fn last_outcome(&self) -> Option<&PlannerOutcome> {
        self.last_outcome.as_ref()
    }

    // --- navigation ---

    /// Select `date`, switching the visible month if it lies in another one.
    ///
    /// Returns false, leaving the session as it was, for dates outside the
    /// supported years.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        let Some(month) = YearMonth::from_date(date) else {
            warn!("Cannot select {}: outside the supported years", date);
            return false;
        };
        self.selected_day = date;
        self.month = month;
        true
    }

    pub fn go_to_month(&mut self, month: YearMonth) {
        self.month = month;
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn previous_month(&mut self) {
        self.month = self.month.previous();
    }

    pub fn go_to_today(&mut self) {
        self.select_day(self.today());
    }

    // --- changes ---

    /// Validate `draft` and add the resulting event, created by the session user.
    ///
    /// On success the new event's day becomes the selected day.
    pub fn create_event(&mut self, draft: &EventDraft) -> Result<Arc<Event>, DraftRejection> {
        let result = draft::create_event(
            draft,
            &self.user,
            self.clock.as_ref(),
            self.ids.as_mut(),
            &self.timezone,
        );

        match result {
            Ok(event) => {
                let event = Arc::new(event);
                self.events = self.events.with_event(Arc::clone(&event));
                self.select_day(event.local_day(&self.timezone));
                self.last_outcome = Some(PlannerOutcome::Created {
                    event_id: event.id.clone(),
                });
                Ok(event)
            }
            Err(rejection) => {
                self.last_outcome = Some(PlannerOutcome::Rejected(rejection.clone()));
                Err(rejection)
            }
        }
    }

    /// Join or leave `event_id` as the session user.
    pub fn toggle_rsvp(&mut self, event_id: &str) -> RsvpOutcome {
        let (events, outcome) = roster::toggle_rsvp(&self.events, event_id, &self.user);
        if outcome.changed() {
            self.events = events;
        }
        self.last_outcome = Some(PlannerOutcome::Rsvp {
            event_id: event_id.to_string(),
            outcome,
        });
        outcome
    }
}
