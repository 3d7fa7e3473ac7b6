use anyhow::Result;
use chrono::NaiveDate;
use huddle_core::constants::{MAX_YEAR, MIN_YEAR};
use huddle_core::planner::Planner;

use crate::render::{DayAgenda, Render};

pub fn run(mut planner: Planner, date: Option<NaiveDate>) -> Result<()> {
    if let Some(date) = date {
        if !planner.select_day(date) {
            anyhow::bail!("{} is outside the supported years {}-{}", date, MIN_YEAR, MAX_YEAR);
        }
    }

    let events = planner.selected_events();
    let agenda = DayAgenda {
        day: planner.selected_day(),
        today: planner.today(),
        events: &events,
        user_id: &planner.user().id,
        tz: planner.timezone(),
    };
    println!("{}", agenda.render());

    Ok(())
}
