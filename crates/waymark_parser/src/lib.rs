//! Term resolution and command-line parsing for Waymark.
//!
//! This crate turns a raw line such as `"look at pebble"` into a canonical
//! verb and an ordered list of canonical object terms.
//!
//! # Architecture
//!
//! ```text
//! "Look at the Pebble"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["Look", "at", "the", "Pebble"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STOPWORD        │  → ["Look", "the", "Pebble"]   (case-sensitive)
//! │ REMOVAL         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TERM            │  → verb: look, objects: [the, pebble]
//! │ RESOLUTION      │    (normalize, then one synonym lookup)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - The synonym table and single-hop term resolution
//! - [`tokenizer`] - Whitespace tokenization of raw input
//! - [`parser`] - Stopword removal and verb/object resolution
//! - [`stdlib`] - Default synonyms and stopwords

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

pub use parser::{CommandParser, ParsedCommand};
pub use vocabulary::SynonymTable;
