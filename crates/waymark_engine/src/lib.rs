//! World graph, command registry and priority dispatch for Waymark.
//!
//! This crate provides:
//! - [`WorldGraph`] - Rooms, items and players in an identifier-indexed arena
//! - [`WorldBuilder`] - Two-phase world construction with forward references
//! - [`CommandRegistry`] - Verbs mapped to handlers and broadcast metadata
//! - [`Dispatcher`] - Item-override-before-player-default verb dispatch
//! - [`Engine`] - The owning facade: synonyms, commands and world together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod registry;
pub mod stdlib;
pub mod world;

pub use action::{ActionContext, Handler, handler};
pub use config::EngineConfig;
pub use dispatch::{DispatchReply, Dispatcher, Route};
pub use engine::Engine;
pub use registry::{Broadcast, BroadcastFn, CommandDef, CommandEntry, CommandMeta, CommandRegistry, Visibility};
pub use world::{
    DropOutcome, Item, ItemDef, MoveOutcome, Player, Room, RoomDef, TakeOutcome, WorldBuilder,
    WorldGraph,
};
