//! Calendar and event roster engine for huddle.
//!
//! Everything here is synchronous and free of I/O apart from config and seed
//! loading:
//! - `grid` builds month grids
//! - `index` groups events by day and selects one day's events
//! - `roster` joins and leaves events, respecting capacity
//! - `draft` validates user input into new events
//! - `planner` ties these together into session state for a front-end

pub mod attendee;
pub mod clock;
pub mod config;
pub mod constants;
pub mod draft;
pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod list;
pub mod month;
pub mod planner;
pub mod roster;
pub mod seed;

pub use attendee::Attendee;
pub use event::Event;
pub use list::EventList;
