use anyhow::Result;
use huddle_core::month::YearMonth;
use huddle_core::planner::Planner;
use owo_colors::OwoColorize;

use crate::render::{GridView, Render, pluralize};

pub fn run(mut planner: Planner, month: Option<YearMonth>) -> Result<()> {
    if let Some(month) = month {
        planner.go_to_month(month);
    }

    let grid = planner.grid();
    let index = planner.day_index();
    let view = GridView {
        grid: &grid,
        index: &index,
        today: planner.today(),
        selected: None,
    };
    println!("{}", view.render());
    println!();

    let busy_days: Vec<_> = index
        .iter()
        .filter(|(day, _)| grid.month.contains(day.date()))
        .collect();

    if busy_days.is_empty() {
        println!("{}", "No events this month".dimmed());
        return Ok(());
    }

    for (day, events) in busy_days {
        println!(
            "  {}  {} {}",
            day.date().format("%a %b %e"),
            events.len(),
            pluralize("event", events.len())
        );
    }

    Ok(())
}
