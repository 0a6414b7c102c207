//! Rooms.

use waymark_foundation::{ItemId, RoomId, Term};

/// A location in the world.
#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    name: Term,
    description: String,
    /// Direction -> destination, in declaration order
    exits: Vec<(Term, RoomId)>,
    /// Items lying here, in arrival order
    items: Vec<ItemId>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: Term, description: String) -> Self {
        Self {
            id,
            name,
            description,
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    /// This room's arena id.
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The canonical identifier.
    #[must_use]
    pub fn name(&self) -> &Term {
        &self.name
    }

    /// The description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exits in declaration order.
    #[must_use]
    pub fn exits(&self) -> &[(Term, RoomId)] {
        &self.exits
    }

    /// Items lying here.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Looks up the room reached by going `direction`.
    ///
    /// When there is no such exit the result is this room's own id; callers
    /// detect a failed move by comparing ids.
    #[must_use]
    pub fn exit(&self, direction: &Term) -> RoomId {
        self.exits
            .iter()
            .find(|(dir, _)| dir == direction)
            .map_or(self.id, |(_, to)| *to)
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Adds or retargets an exit; a retargeted exit keeps its position.
    pub(crate) fn set_exit(&mut self, direction: Term, to: RoomId) {
        match self.exits.iter_mut().find(|(dir, _)| *dir == direction) {
            Some(slot) => slot.1 = to,
            None => self.exits.push((direction, to)),
        }
    }

    pub(crate) fn push_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    pub(crate) fn remove_item(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}
