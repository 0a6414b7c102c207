//! Multiplayer overlay for Waymark.
//!
//! Many sessions share one [`Engine`](waymark_engine::Engine). Around every
//! dispatched line the [`BroadcastCoordinator`] tells the other players
//! what happened:
//!
//! ```text
//!   line ──▶ parse ──▶ pre-broadcast ──▶ dispatch ──▶ post-broadcast ──▶ reply
//!                      (room before)                   (global only,
//!                                                       actor moved)
//! ```
//!
//! The [`server`] module is a small TCP transport that keeps the coordinator
//! behind one async mutex; each connection gets an unbounded outbox drained
//! by its own writer task.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod coordinator;
pub mod line;
pub mod server;
pub mod session;

pub use config::ServerConfig;
pub use coordinator::{BroadcastCoordinator, LineOutcome};
pub use line::LineReader;
pub use server::{SharedCoordinator, handle_connection, serve};
pub use session::{Outbox, Roster, Session, SessionId};
