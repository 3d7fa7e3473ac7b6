use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use huddle_core::constants::{MAX_YEAR, MIN_YEAR};
use huddle_core::draft::{DraftField, EventDraft};
use huddle_core::month::YearMonth;
use huddle_core::planner::Planner;
use huddle_core::Event;
use owo_colors::OwoColorize;

use crate::date_input::to_draft_date;
use crate::render::{DayAgenda, GridView, Render, Toast};

#[derive(Clone, Copy)]
enum Action {
    PickDay,
    PreviousMonth,
    NextMonth,
    Today,
    NewEvent,
    Rsvp,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::PickDay,
        Action::PreviousMonth,
        Action::NextMonth,
        Action::Today,
        Action::NewEvent,
        Action::Rsvp,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::PickDay => "Pick a day",
            Action::PreviousMonth => "Previous month",
            Action::NextMonth => "Next month",
            Action::Today => "Today",
            Action::NewEvent => "New event",
            Action::Rsvp => "Join / leave an event",
            Action::Quit => "Quit",
        }
    }
}

pub fn run(mut planner: Planner) -> Result<()> {
    loop {
        print_screen(&planner);

        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("  What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::PickDay => pick_day(&mut planner)?,
            Action::PreviousMonth => planner.previous_month(),
            Action::NextMonth => planner.next_month(),
            Action::Today => planner.go_to_today(),
            Action::NewEvent => new_event(&mut planner)?,
            Action::Rsvp => toggle_rsvp(&mut planner)?,
            Action::Quit => return Ok(()),
        }
    }
}

fn print_screen(planner: &Planner) {
    let grid = planner.grid();
    let index = planner.day_index();
    let events = planner.selected_events();

    let view = GridView {
        grid: &grid,
        index: &index,
        today: planner.today(),
        selected: Some(planner.selected_day()),
    };
    let agenda = DayAgenda {
        day: planner.selected_day(),
        today: planner.today(),
        events: &events,
        user_id: &planner.user().id,
        tz: planner.timezone(),
    };

    println!();
    println!("{}", view.render());
    println!();
    println!("{}", agenda.render());
    println!();
}

/// Print the outcome of the change just made.
fn notify(planner: &Planner) {
    if let Some(outcome) = planner.last_outcome() {
        let toast = Toast {
            outcome,
            events: planner.events(),
        };
        println!("{}", toast.render());
    }
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for a value the user may leave blank.
fn prompt_optional(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(value)
}

fn pick_day(planner: &mut Planner) -> Result<()> {
    let month = planner.month();
    let day = prompt_with_retry("  Day (number in this month, or YYYY-MM-DD)", |input| {
        parse_day_choice(input, month.year(), month.month())
    })?;
    planner.select_day(day);
    Ok(())
}

/// Read either a day of the visible month ("14") or a full date.
fn parse_day_choice(input: &str, year: i32, month: u32) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(day) = input.parse::<u32>() {
        return NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow::anyhow!("There is no day {} in this month", day));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not read \"{}\" as a day", input))?;
    if YearMonth::from_date(date).is_none() {
        anyhow::bail!("Pick a date between years {} and {}", MIN_YEAR, MAX_YEAR);
    }
    Ok(date)
}

fn new_event(planner: &mut Planner) -> Result<()> {
    let mut draft = EventDraft::default();
    let mut pending = vec![
        DraftField::Title,
        DraftField::Date,
        DraftField::Location,
        DraftField::MaxAttendees,
    ];
    let mut first_pass = true;

    loop {
        for field in &pending {
            prompt_field(planner, &mut draft, *field)?;

            if first_pass && *field == DraftField::Location {
                draft.description = prompt_optional("  Description? (skip)")?;
            }
        }
        first_pass = false;

        let created = planner.create_event(&draft);
        notify(planner);

        match created {
            Ok(_) => return Ok(()),
            Err(rejection) => pending = rejection.fields().collect(),
        }
    }
}

fn prompt_field(planner: &Planner, draft: &mut EventDraft, field: DraftField) -> Result<()> {
    match field {
        DraftField::Title => {
            draft.title = Input::new()
                .with_prompt("  Title")
                .allow_empty(true)
                .interact_text()?;
        }
        DraftField::Date => {
            let raw: String = Input::new()
                .with_prompt("  When? (e.g. \"fri 6pm\" or 2026-11-02T18:00)")
                .allow_empty(true)
                .interact_text()?;
            draft.date = to_draft_date(&raw, &planner.now());
        }
        DraftField::Location => {
            draft.location = Input::new()
                .with_prompt("  Where?")
                .allow_empty(true)
                .interact_text()?;
        }
        DraftField::MaxAttendees => {
            draft.max_attendees = Some(prompt_optional("  Max attendees? (skip)")?);
        }
    }
    Ok(())
}

fn toggle_rsvp(planner: &mut Planner) -> Result<()> {
    let events = planner.selected_events();
    if events.is_empty() {
        println!("  {}", "No events on this day".dimmed());
        return Ok(());
    }

    let user_id = planner.user().id.clone();
    let items: Vec<String> = events.iter().map(|e| rsvp_label(e, &user_id)).collect();
    let selection = Select::new()
        .with_prompt("  Which event?")
        .items(&items)
        .default(0)
        .interact()?;

    planner.toggle_rsvp(&events[selection].id);
    notify(planner);
    Ok(())
}

fn rsvp_label(event: &Event, user_id: &str) -> String {
    let action = if event.is_attending(user_id) {
        "Leave"
    } else if event.is_full() {
        "Full "
    } else {
        "Join "
    };

    match event.max_attendees {
        Some(max) => format!("{} {} ({}/{})", action, event.title, event.attendees.len(), max),
        None => format!("{} {}", action, event.title),
    }
}
