//! Waymark - Small multiplayer interactive-fiction worlds
//!
//! This crate re-exports all layers of the Waymark system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: waymark_runtime     — REPL, CLI, demo world
//! Layer 3: waymark_multiplayer — Sessions, broadcast scoping, TCP transport
//! Layer 2: waymark_engine      — World graph, command registry, dispatch
//! Layer 1: waymark_parser      — Synonyms, stopwords, command parsing
//! Layer 0: waymark_foundation  — Core types (Term, ids, Error)
//! ```

pub use waymark_engine as engine;
pub use waymark_foundation as foundation;
pub use waymark_multiplayer as multiplayer;
pub use waymark_parser as parser;
pub use waymark_runtime as runtime;
