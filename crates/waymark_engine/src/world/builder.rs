//! Two-phase world construction.
//!
//! Content may name an exit target before (or without) defining it, and
//! rooms may point at each other in cycles. The builder therefore only
//! records definitions; [`WorldBuilder::build`] first creates every room and
//! item, then wires exits by identifier.

use std::collections::HashMap;

use tracing::debug;
use waymark_foundation::{Container, Error, Result, Term};
use waymark_parser::SynonymTable;

use super::graph::WorldGraph;
use super::item::ItemDef;

/// The authoring-time definition of one room.
#[derive(Clone, Debug)]
pub struct RoomDef {
    id: Term,
    description: String,
    items: Vec<ItemDef>,
    exits: Vec<(String, String)>,
}

impl RoomDef {
    fn new(id: Term, description: String) -> Self {
        Self {
            id,
            description,
            items: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// The room identifier.
    #[must_use]
    pub fn id(&self) -> &Term {
        &self.id
    }

    /// The description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Places an item in this room.
    pub fn add_item(&mut self, item: ItemDef) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Shorthand for [`RoomDef::add_item`] with a plain item.
    pub fn item<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        synonyms: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.add_item(ItemDef::new(name, description).with_synonyms(synonyms))
    }

    /// Adds an exit to a room that need not be defined yet.
    pub fn add_exit(&mut self, direction: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.exits.push((direction.into(), target.into()));
        self
    }
}

/// Collects room definitions and builds a [`WorldGraph`].
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    rooms: Vec<RoomDef>,
    index: HashMap<Term, usize>,
    show_directions: bool,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Includes a directions summary in room descriptions.
    pub fn show_directions(&mut self, show: bool) -> &mut Self {
        self.show_directions = show;
        self
    }

    /// Gets or creates the definition for room `id`.
    ///
    /// Redefining an id returns the existing definition; a description is
    /// only filled in if the existing one is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is blank.
    pub fn define_room(&mut self, id: &str, description: impl Into<String>) -> Result<&mut RoomDef> {
        let term = Term::normalize(id).ok_or_else(|| Error::invalid_term("room"))?;
        let description = description.into();

        let slot = match self.index.get(&term) {
            Some(&slot) => slot,
            None => {
                self.rooms.push(RoomDef::new(term.clone(), String::new()));
                let slot = self.rooms.len() - 1;
                self.index.insert(term, slot);
                slot
            }
        };

        let def = &mut self.rooms[slot];
        if def.description.is_empty() {
            def.description = description;
        }
        Ok(def)
    }

    /// Gets a definition already made.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&RoomDef> {
        let term = Term::normalize(id)?;
        self.index.get(&term).map(|&slot| &self.rooms[slot])
    }

    /// Number of rooms defined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if no rooms are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Builds the world, registering item aliases in `synonyms`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownRoom`](waymark_foundation::ErrorKind::UnknownRoom)
    /// if an exit targets a room that was never defined, or
    /// [`ErrorKind::InvalidTerm`](waymark_foundation::ErrorKind::InvalidTerm)
    /// for a blank item name, direction or target.
    pub fn build(self, synonyms: &mut SynonymTable) -> Result<WorldGraph> {
        let mut world = WorldGraph::new();
        world.set_show_directions(self.show_directions);

        // Phase one: every room and item exists before any edge is wired.
        let mut wiring = Vec::with_capacity(self.rooms.len());
        for def in self.rooms {
            let room = world.insert_room(def.id, def.description);
            for item in def.items {
                world.create_item(item, synonyms, Container::Room(room))?;
            }
            wiring.push((room, def.exits));
        }

        // Phase two: exits by identifier.
        for (room, exits) in wiring {
            for (direction, target) in exits {
                let direction = synonyms
                    .resolve(&direction)
                    .ok_or_else(|| Error::invalid_term("direction"))?;
                let target = Term::normalize(&target).ok_or_else(|| Error::invalid_term("room"))?;
                let to = world
                    .room_by_term(&target)
                    .ok_or_else(|| Error::unknown_room(target.clone()))?;
                world.add_exit(room, direction, to)?;
            }
        }

        debug!(
            rooms = world.room_count(),
            items = world.items().count(),
            "world built"
        );
        Ok(world)
    }
}
