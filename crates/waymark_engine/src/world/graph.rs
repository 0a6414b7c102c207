//! The world graph.
//!
//! Rooms and items live in arenas indexed by [`RoomId`] and [`ItemId`];
//! rooms are also indexed by their canonical term. Item containment is kept
//! in the containers (room item lists and player inventories) with a
//! back-reference on the item; every move goes through [`WorldGraph::move_item`]
//! so an item is never in two containers at once.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use waymark_foundation::{Container, Error, ItemId, PlayerId, Result, RoomId, Term};
use waymark_parser::SynonymTable;

use super::item::{Item, ItemDef};
use super::player::{DropOutcome, MoveOutcome, Player, TakeOutcome};
use super::room::Room;

/// Rooms, items and players.
#[derive(Debug, Default)]
pub struct WorldGraph {
    rooms: Vec<Room>,
    room_index: HashMap<Term, RoomId>,
    items: Vec<Item>,
    players: BTreeMap<PlayerId, Player>,
    next_player: u64,
    show_directions: bool,
}

impl WorldGraph {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    /// Creates a room, or returns the existing room with that name.
    pub fn insert_room(&mut self, name: Term, description: impl Into<String>) -> RoomId {
        if let Some(&id) = self.room_index.get(&name) {
            return id;
        }
        let id = RoomId(u32::try_from(self.rooms.len()).unwrap_or(u32::MAX));
        self.rooms.push(Room::new(id, name.clone(), description.into()));
        self.room_index.insert(name, id);
        id
    }

    /// Looks up a room by raw identifier.
    #[must_use]
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        Term::normalize(name).and_then(|term| self.room_by_term(&term))
    }

    /// Looks up a room by canonical term.
    #[must_use]
    pub fn room_by_term(&self, name: &Term) -> Option<RoomId> {
        self.room_index.get(name).copied()
    }

    /// Gets a room.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id.index())
            .ok_or_else(|| Error::unknown_room(unnamed(id)))
    }

    fn room_ref(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.index())
            .ok_or_else(|| Error::unknown_room(unnamed(id)))
    }

    /// All rooms in creation order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Replaces a room's description.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist.
    pub fn set_description(&mut self, room: RoomId, description: impl Into<String>) -> Result<()> {
        self.room_mut(room)?.set_description(description.into());
        Ok(())
    }

    /// Adds or retargets the exit from `from` going `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if either room does not exist.
    pub fn add_exit(&mut self, from: RoomId, direction: Term, to: RoomId) -> Result<()> {
        self.room_ref(to)?;
        self.room_mut(from)?.set_exit(direction, to);
        Ok(())
    }

    /// The room reached from `room` going `direction`, or `room` itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist.
    pub fn exit(&self, room: RoomId, direction: &Term) -> Result<RoomId> {
        Ok(self.room_ref(room)?.exit(direction))
    }

    /// Whether room descriptions include a directions summary.
    #[must_use]
    pub fn show_directions(&self) -> bool {
        self.show_directions
    }

    /// Turns the directions summary on or off.
    pub fn set_show_directions(&mut self, show: bool) {
        self.show_directions = show;
    }

    /// Renders a room: heading, description, exits (optional) and items.
    #[must_use]
    pub fn describe_room(&self, id: RoomId) -> String {
        let Some(room) = self.room(id) else {
            return String::new();
        };

        let mut out = format!("{}\n{}", room.name().title(), room.description());

        if self.show_directions && !room.exits().is_empty() {
            let exits: Vec<String> = room
                .exits()
                .iter()
                .map(|(direction, to)| {
                    let to_name = self.room(*to).map_or_else(String::new, |r| r.name().title());
                    format!("{}, {}.", direction.title(), to_name)
                })
                .collect();
            out.push('\n');
            out.push_str(&exits.join(" "));
        }

        for item in room.items() {
            if let Some(item) = self.item(*item) {
                let _ = write!(out, "\nThere is {} here.", item.name().display_name());
            }
        }

        out
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Gets an item.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    /// Gets an item mutably, for attaching overrides at runtime.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.index())
    }

    /// All items ever created, in creation order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Builds an item from `def` and puts it into `container`.
    ///
    /// The item's aliases are merged into `synonyms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition is invalid or the container does
    /// not exist.
    pub fn create_item(
        &mut self,
        def: ItemDef,
        synonyms: &mut SynonymTable,
        container: Container,
    ) -> Result<ItemId> {
        self.check_container(container)?;
        let id = ItemId(u32::try_from(self.items.len()).unwrap_or(u32::MAX));
        let item = def.build(id, synonyms)?;
        self.items.push(item);
        self.move_item(id, Some(container))?;
        Ok(id)
    }

    /// Moves an item to `to`, detaching it from its current container.
    ///
    /// `None` leaves the item in no container, which is how content
    /// destroys an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or destination does not exist.
    pub fn move_item(&mut self, item: ItemId, to: Option<Container>) -> Result<()> {
        if let Some(to) = to {
            self.check_container(to)?;
        }
        let from = self
            .item(item)
            .ok_or_else(|| Error::unknown_item(item))?
            .owner();

        match from {
            Some(Container::Room(room)) => {
                self.room_mut(room)?.remove_item(item);
            }
            Some(Container::Player(player)) => {
                self.player_mut(player)?.remove_item(item);
            }
            None => {}
        }

        match to {
            Some(Container::Room(room)) => self.room_mut(room)?.push_item(item),
            Some(Container::Player(player)) => self.player_mut(player)?.push_item(item),
            None => {}
        }

        if let Some(entry) = self.items.get_mut(item.index()) {
            entry.set_owner(to);
        }
        Ok(())
    }

    /// Removes an item from whatever holds it; it is never reinserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist.
    pub fn destroy_item(&mut self, item: ItemId) -> Result<()> {
        self.move_item(item, None)
    }

    /// Finds an item lying in `room` by name.
    #[must_use]
    pub fn item_present(&self, room: RoomId, term: &Term) -> Option<ItemId> {
        self.room(room)?
            .items()
            .iter()
            .copied()
            .find(|&id| self.item(id).is_some_and(|item| item.matches(term)))
    }

    /// Removes a matching item from `room` and returns it, unowned.
    pub fn take_item(&mut self, room: RoomId, term: &Term) -> Option<ItemId> {
        let id = self.item_present(room, term)?;
        self.move_item(id, None).ok()?;
        Some(id)
    }

    /// Puts an item into `room`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or room does not exist.
    pub fn place_item(&mut self, room: RoomId, item: ItemId) -> Result<()> {
        self.move_item(item, Some(Container::Room(room)))
    }

    fn check_container(&self, container: Container) -> Result<()> {
        match container {
            Container::Room(room) => self.room_ref(room).map(|_| ()),
            Container::Player(player) => self.player(player).map(|_| ()),
        }
    }

    // =========================================================================
    // Players
    // =========================================================================

    /// Creates a player standing in `room`.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist.
    pub fn start_player(&mut self, name: impl Into<String>, room: RoomId) -> Result<PlayerId> {
        self.room_ref(room)?;
        let id = PlayerId(self.next_player);
        self.next_player += 1;
        self.players.insert(id, Player::new(id, name.into(), room));
        Ok(id)
    }

    /// Gets a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(&id).ok_or_else(|| Error::unknown_player(id))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(&id)
            .ok_or_else(|| Error::unknown_player(id))
    }

    /// All players, ordered by id.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Players currently in `room`, ordered by id.
    #[must_use]
    pub fn players_in(&self, room: RoomId) -> Vec<PlayerId> {
        self.players
            .values()
            .filter(|p| p.room() == room)
            .map(Player::id)
            .collect()
    }

    /// The player's current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn player_room(&self, id: PlayerId) -> Result<RoomId> {
        Ok(self.player(id)?.room())
    }

    /// Changes a player's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<()> {
        self.player_mut(id)?.set_name(name.into());
        Ok(())
    }

    /// Removes a player, leaving whatever it carried in its current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player> {
        let (room, carried) = {
            let player = self.player_mut(id)?;
            (player.room(), player.take_inventory())
        };
        for item in carried {
            if let Some(entry) = self.items.get_mut(item.index()) {
                entry.set_owner(None);
            }
            self.place_item(room, item)?;
        }
        self.players
            .remove(&id)
            .ok_or_else(|| Error::unknown_player(id))
    }

    /// Moves a player through the exit named `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn move_player(&mut self, id: PlayerId, direction: &Term) -> Result<MoveOutcome> {
        let here = self.player_room(id)?;
        let there = self.exit(here, direction)?;
        if there == here {
            return Ok(MoveOutcome::NoWay);
        }
        self.player_mut(id)?.set_room(there);
        Ok(MoveOutcome::Moved(there))
    }

    /// Finds an item the player carries by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn carried(&self, id: PlayerId, term: &Term) -> Result<Option<ItemId>> {
        Ok(self
            .player(id)?
            .inventory()
            .iter()
            .copied()
            .find(|&item| self.item(item).is_some_and(|i| i.matches(term))))
    }

    /// Picks up a matching item from the player's room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn take_from_room(&mut self, id: PlayerId, term: &Term) -> Result<TakeOutcome> {
        let room = self.player_room(id)?;
        let Some(item) = self.item_present(room, term) else {
            return Ok(TakeOutcome::NotHere);
        };
        self.move_item(item, Some(Container::Player(id)))?;
        Ok(TakeOutcome::Taken(item))
    }

    /// Puts down a matching carried item in the player's room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn drop_to_room(&mut self, id: PlayerId, term: &Term) -> Result<DropOutcome> {
        let Some(item) = self.carried(id, term)? else {
            return Ok(DropOutcome::NotCarried);
        };
        let room = self.player_room(id)?;
        self.place_item(room, item)?;
        Ok(DropOutcome::Dropped(item))
    }

    /// Renders the player's inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn inventory_text(&self, id: PlayerId) -> Result<String> {
        let lines: Vec<String> = self
            .player(id)?
            .inventory()
            .iter()
            .filter_map(|&item| self.item(item).map(Item::describe))
            .collect();
        let body = if lines.is_empty() {
            "Nothing".to_string()
        } else {
            lines.join("\n")
        };
        Ok(format!("You are carrying:\n{body}"))
    }
}

/// Placeholder name for a room id that is not in the arena.
fn unnamed(id: RoomId) -> Term {
    Term::from_normalized(&format!("room#{}", id.0))
}
