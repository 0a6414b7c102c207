//! The world: rooms, items and players.
//!
//! - [`WorldGraph`] - The arena holding everything
//! - [`WorldBuilder`] - Authoring-time construction with forward references
//! - [`Room`], [`Item`], [`Player`] - The entities

mod builder;
mod graph;
mod item;
mod player;
mod room;

pub use builder::{RoomDef, WorldBuilder};
pub use graph::WorldGraph;
pub use item::{Item, ItemDef};
pub use player::{DropOutcome, MoveOutcome, Player, TakeOutcome};
pub use room::Room;
