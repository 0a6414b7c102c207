//! Handlers and the context they run in.
//!
//! A handler is a plain closure bound to a verb, either on the registry
//! (player-level default) or on a single item (item-level override).

use std::fmt;
use std::sync::Arc;

use waymark_foundation::{Error, ItemId, PlayerId, Result, RoomId, Term};
use waymark_parser::SynonymTable;

use crate::world::WorldGraph;

/// A verb handler.
///
/// Receives the object terms left after dispatch consumed the receiver (if
/// any) and returns the reply text. Any `Err` is turned into the uniform
/// fallback reply by the dispatcher.
pub type Handler = Arc<dyn Fn(&mut ActionContext<'_>, &[Term]) -> Result<String> + Send + Sync>;

/// Wraps a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&mut ActionContext<'_>, &[Term]) -> Result<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Everything a handler may touch while it runs.
pub struct ActionContext<'a> {
    world: &'a mut WorldGraph,
    synonyms: &'a SynonymTable,
    verb: &'a Term,
    actor: PlayerId,
    receiver: Option<ItemId>,
}

impl<'a> ActionContext<'a> {
    /// Creates a context for one handler invocation.
    pub fn new(
        world: &'a mut WorldGraph,
        synonyms: &'a SynonymTable,
        verb: &'a Term,
        actor: PlayerId,
        receiver: Option<ItemId>,
    ) -> Self {
        Self {
            world,
            synonyms,
            verb,
            actor,
            receiver,
        }
    }

    /// The verb being dispatched.
    #[must_use]
    pub fn verb(&self) -> &Term {
        self.verb
    }

    /// The acting player.
    #[must_use]
    pub fn actor(&self) -> PlayerId {
        self.actor
    }

    /// The item an item-level handler was found on.
    #[must_use]
    pub fn receiver(&self) -> Option<ItemId> {
        self.receiver
    }

    /// Shared access to the world.
    #[must_use]
    pub fn world(&self) -> &WorldGraph {
        self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut WorldGraph {
        self.world
    }

    /// Resolves raw text the same way the parser does.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<Term> {
        self.synonyms.resolve(raw)
    }

    /// The actor's current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor no longer exists.
    pub fn current_room(&self) -> Result<RoomId> {
        self.world.player_room(self.actor)
    }

    /// Finds an item the actor carries by canonical name.
    ///
    /// `term` is used as given; it is not resolved again.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor no longer exists.
    pub fn carried(&self, term: &Term) -> Result<Option<ItemId>> {
        self.world.carried(self.actor, term)
    }

    /// Renders the actor's current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor no longer exists.
    pub fn describe_here(&self) -> Result<String> {
        let room = self.current_room()?;
        Ok(self.world.describe_room(room))
    }

    /// Fails with a missing-object error unless `objects` has a first term.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingObject`](waymark_foundation::ErrorKind::MissingObject)
    /// when `objects` is empty.
    pub fn require_object<'o>(&self, objects: &'o [Term]) -> Result<&'o Term> {
        objects
            .first()
            .ok_or_else(|| Error::missing_object(self.verb.as_str()))
    }
}

impl fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("verb", self.verb)
            .field("actor", &self.actor)
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}
