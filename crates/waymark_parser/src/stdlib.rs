//! Standard vocabulary for adventure games.
//!
//! Default stopwords, the fixed compass directions and the abbreviations
//! every world starts with.

use crate::vocabulary::SynonymTable;

/// Tokens dropped from input before resolution.
pub const STOPWORDS: &[&str] = &["at", "with", "on"];

/// The fixed movement directions, each exposed as its own verb.
pub const DIRECTIONS: &[&str] = &[
    "north",
    "south",
    "east",
    "west",
    "northeast",
    "northwest",
    "southeast",
    "southwest",
    "up",
    "down",
];

/// Default alias → canonical pairs.
pub const SYNONYMS: &[(&str, &str)] = &[
    // Directions
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("ne", "northeast"),
    ("nw", "northwest"),
    ("se", "southeast"),
    ("sw", "southwest"),
    ("u", "up"),
    ("d", "down"),
    // Meta
    ("inv", "inventory"),
];

/// Registers the default synonyms.
pub fn register_defaults(table: &mut SynonymTable) {
    for (alias, canonical) in SYNONYMS {
        table.add_synonym(alias, canonical);
    }
}

/// Returns true if `word` is one of the fixed directions.
#[must_use]
pub fn is_direction(word: &str) -> bool {
    DIRECTIONS.contains(&word)
}
