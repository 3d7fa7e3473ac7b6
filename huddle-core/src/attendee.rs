//! People who create and join events.

use crate::constants::AVATAR_PALETTE;

/// Someone who can create or join an event.
///
/// Attendees are values: event rosters hold copies, and two attendees are the
/// same person when their `id`s match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    /// Hex colour for the avatar badge, derived from `id`
    pub avatar_color: String,
}

impl Attendee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        let avatar_color = avatar_color_for(&id).to_string();

        Attendee {
            id,
            name: name.into(),
            avatar_color,
        }
    }

    /// Up to two uppercase initials for an avatar badge ("Ada Lovelace" -> "AL").
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Pick a palette colour for an attendee id.
///
/// FNV-1a over the id bytes, so the same id gets the same colour on every run
/// and on every platform.
pub fn avatar_color_for(id: &str) -> &'static str {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    let hash = id
        .bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME));

    AVATAR_PALETTE[hash as usize % AVATAR_PALETTE.len()]
}
