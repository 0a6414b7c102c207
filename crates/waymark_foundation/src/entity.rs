//! Arena identifiers for world entities.

use std::fmt;

/// Index of a room in the world arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

/// Index of an item in the world arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Identifier of a player.
///
/// Player ids are allocated monotonically and never reused, so an id that
/// outlives its session simply stops resolving.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl RoomId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl ItemId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Where an item currently lives.
///
/// This is a back-reference only; the container's own item list is the
/// source of truth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Container {
    /// Lying in a room.
    Room(RoomId),
    /// Carried in a player's inventory.
    Player(PlayerId),
}
