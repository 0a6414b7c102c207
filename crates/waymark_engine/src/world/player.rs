//! Players and the outcomes of their world operations.

use waymark_foundation::{ItemId, PlayerId, RoomId};

/// A player in the world.
///
/// A player is tracked by reference: rooms do not list the players in them.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    room: RoomId,
    inventory: Vec<ItemId>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, room: RoomId) -> Self {
        Self {
            id,
            name,
            room,
            inventory: Vec::new(),
        }
    }

    /// This player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current room.
    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Carried items, in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_room(&mut self, room: RoomId) {
        self.room = room;
    }

    pub(crate) fn push_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    pub(crate) fn remove_item(&mut self, item: ItemId) -> bool {
        match self.inventory.iter().position(|&i| i == item) {
            Some(idx) => {
                self.inventory.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_inventory(&mut self) -> Vec<ItemId> {
        std::mem::take(&mut self.inventory)
    }
}

/// Result of moving a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player is now in this room.
    Moved(RoomId),
    /// No exit that way; the player did not move.
    NoWay,
}

/// Result of picking something up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TakeOutcome {
    /// The item moved into the inventory.
    Taken(ItemId),
    /// Nothing by that name in the room.
    NotHere,
}

/// Result of putting something down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The item moved into the room.
    Dropped(ItemId),
    /// Nothing by that name in the inventory.
    NotCarried,
}
