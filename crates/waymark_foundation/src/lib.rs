//! Core types for Waymark.
//!
//! This crate provides:
//! - [`Term`] - Canonical, normalized identifiers used for every identity comparison
//! - [`RoomId`], [`ItemId`], [`PlayerId`] - Arena indices into the world graph
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod term;

pub use entity::{Container, ItemId, PlayerId, RoomId};
pub use error::{Error, ErrorContext, ErrorKind};
pub use term::Term;

/// Result type alias using Waymark's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
