//! REPL, demo content and CLI for Waymark.
//!
//! This crate provides:
//! - [`Repl`] - Single-player read-dispatch-print loop
//! - [`LineEditor`] - The terminal abstraction the REPL reads from
//! - [`content`] - The river, hill and lake demo world

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use repl::{Repl, Turn};
