pub mod config;
pub mod day;
pub mod month;
pub mod session;

use anyhow::{Context, Result};
use huddle_core::clock::{Clock, SystemClock, UuidIds};
use huddle_core::config::HuddleConfig;
use huddle_core::planner::Planner;
use huddle_core::seed;

/// Start a planner from the configured seed file, or from the demo events
/// when none is set.
pub fn build_planner(config: &HuddleConfig) -> Result<Planner> {
    let timezone = config.timezone()?;
    let mut ids = UuidIds;

    let events = match config.seed_path() {
        Some(path) => seed::load_seed(&path, &mut ids)
            .with_context(|| format!("Could not load events from {}", path.display()))?,
        None => seed::demo_events(SystemClock.now(), &timezone, &mut ids),
    };

    let planner = Planner::new(
        events,
        config.user(),
        timezone,
        Box::new(SystemClock),
        Box::new(ids),
    );

    Ok(planner.with_week_start(config.week_start))
}
