/// How far in the past a new event may start and still be accepted.
/// Covers the delay between reading "now" in a form and submitting it.
pub const PAST_GRACE_SECONDS: i64 = 60;

pub const DAYS_PER_WEEK: usize = 7;

/// Earliest and latest years a `YearMonth` may name.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Avatar background colours, indexed by a hash of the attendee id.
pub const AVATAR_PALETTE: [&str; 8] = [
    "#ef4444", // red
    "#f97316", // orange
    "#eab308", // yellow
    "#22c55e", // green
    "#14b8a6", // teal
    "#3b82f6", // blue
    "#8b5cf6", // violet
    "#ec4899", // pink
];
