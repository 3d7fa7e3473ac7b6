//! Terminal rendering for huddle-core types.
//!
//! Extension traits and small view structs that turn engine output into
//! coloured text using owo_colors.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use huddle_core::grid::{DayCell, MonthGrid};
use huddle_core::index::{DayIndex, DayKey};
use huddle_core::planner::PlannerOutcome;
use huddle_core::roster::RsvpOutcome;
use huddle_core::{Attendee, Event, EventList};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Attendee {
    /// Initials on the attendee's avatar colour.
    fn render(&self) -> String {
        let badge = format!(" {} ", self.initials());
        match hex_rgb(&self.avatar_color) {
            Some((r, g, b)) => badge.black().on_truecolor(r, g, b).to_string(),
            None => badge.reversed().to_string(),
        }
    }
}

/// Parse `#rrggbb`.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// A month grid with today, the selected day and busy days marked.
pub struct GridView<'a> {
    pub grid: &'a MonthGrid,
    pub index: &'a DayIndex,
    pub today: NaiveDate,
    pub selected: Option<NaiveDate>,
}

impl GridView<'_> {
    fn render_cell(&self, cell: &DayCell) -> String {
        let busy = self.index.contains_key(&DayKey::from_date(cell.date));
        let text = format!(" {:>2}{}", cell.date.day(), if busy { "•" } else { " " });

        if Some(cell.date) == self.selected {
            text.reversed().to_string()
        } else if cell.date == self.today {
            text.green().bold().to_string()
        } else if cell.outside {
            text.dimmed().to_string()
        } else {
            text
        }
    }
}

impl Render for GridView<'_> {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let title = format!("{:^28}", self.grid.month.label());
        lines.push(title.bold().to_string());

        let headers: String = self
            .grid
            .week_start
            .headers()
            .iter()
            .map(|h| format!(" {h} "))
            .collect();
        lines.push(headers.dimmed().to_string());

        for week in &self.grid.weeks {
            lines.push(week.iter().map(|cell| self.render_cell(cell)).collect());
        }

        lines.join("\n")
    }
}

/// One event in a day agenda.
pub struct EventRow<'a> {
    pub event: &'a Event,
    pub user_id: &'a str,
    pub tz: Tz,
}

impl Render for EventRow<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let time = event.date.with_timezone(&self.tz).format("%H:%M").to_string();

        let mut lines = vec![format!(
            "  {} {} {}",
            time,
            event.title.bold(),
            format!("@ {}", event.location).dimmed()
        )];

        if !event.description.is_empty() {
            lines.push(format!("        {}", event.description.dimmed()));
        }

        let avatars: Vec<String> = event.attendees.iter().map(Render::render).collect();
        let going = event.attendees.len();
        let capacity = match (event.max_attendees, event.spots_left()) {
            (Some(max), Some(0)) => format!("{}/{} full", going, max).red().to_string(),
            (Some(max), Some(left)) => format!("{}/{} ({} left)", going, max, left),
            _ => format!("{} going", going),
        };
        let status = if event.is_attending(self.user_id) {
            "going".green().to_string()
        } else {
            String::new()
        };
        let organiser = format!("by {}", event.created_by.name).dimmed().to_string();

        lines.push(format!(
            "        {} {} {} {}",
            avatars.join(" "),
            capacity,
            organiser,
            status
        ));

        lines.join("\n")
    }
}

/// The events of one day under a "Today"/"Tomorrow"/date heading.
pub struct DayAgenda<'a> {
    pub day: NaiveDate,
    pub today: NaiveDate,
    pub events: &'a [Arc<Event>],
    pub user_id: &'a str,
    pub tz: Tz,
}

impl Render for DayAgenda<'_> {
    fn render(&self) -> String {
        let mut lines = vec![format_date_label(self.day, self.today).bold().to_string()];

        if self.events.is_empty() {
            lines.push(format!("  {}", "No events".dimmed()));
        }

        for event in self.events {
            let row = EventRow {
                event,
                user_id: self.user_id,
                tz: self.tz,
            };
            lines.push(row.render());
        }

        lines.join("\n")
    }
}

/// Notification line for the last change attempt.
pub struct Toast<'a> {
    pub outcome: &'a PlannerOutcome,
    pub events: &'a EventList,
}

impl Toast<'_> {
    fn title_of(&self, event_id: &str) -> String {
        self.events
            .get(event_id)
            .map_or_else(|| event_id.to_string(), |e| e.title.clone())
    }
}

impl Render for Toast<'_> {
    fn render(&self) -> String {
        match self.outcome {
            PlannerOutcome::Created { event_id } => {
                format!("  ✓ Created '{}'", self.title_of(event_id)).green().to_string()
            }
            PlannerOutcome::Rsvp { event_id, outcome } => {
                let title = self.title_of(event_id);
                match outcome {
                    RsvpOutcome::Joined => format!("  ✓ You're going to '{}'", title).green().to_string(),
                    RsvpOutcome::Left => format!("  You left '{}'", title).yellow().to_string(),
                    RsvpOutcome::RejectedFull => format!("  ✗ '{}' is full", title).red().to_string(),
                    RsvpOutcome::EventNotFound => "  ✗ That event no longer exists".red().to_string(),
                }
            }
            PlannerOutcome::Rejected(rejection) => rejection
                .errors
                .iter()
                .map(|error| format!("  ✗ {}", error).red().to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
