//! Priority dispatch.
//!
//! A parsed command is routed to the first handler found in this order:
//!
//! ```text
//!   first object carried by the actor, with an override for the verb
//!        │ no
//!        ▼
//!   first object lying in the actor's room, with an override for the verb
//!        │ no
//!        ▼
//!   registry handler for the verb
//!        │ no
//!        ▼
//!   player fallback ("Do what with ...?" / "I don't understand ...")
//! ```
//!
//! Handler errors and panics never escape: they are logged and replaced by
//! the fallback message.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};
use waymark_foundation::{ErrorContext, ItemId, PlayerId, Result, Term};
use waymark_parser::{ParsedCommand, SynonymTable};

use crate::action::{ActionContext, Handler};
use crate::registry::CommandRegistry;
use crate::world::WorldGraph;

/// Where a command will be handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// An override on an item the actor carries.
    InventoryItem(ItemId),
    /// An override on an item in the actor's room.
    RoomItem(ItemId),
    /// The registry's handler.
    Player,
    /// No handler anywhere; the player fallback answers.
    Fallback,
}

/// The result of dispatching a batch of commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchReply {
    /// Exactly one command was dispatched.
    Single(String),
    /// Zero or several commands, in order.
    Many(Vec<String>),
}

impl DispatchReply {
    /// Wraps replies, unwrapping a lone reply.
    #[must_use]
    pub fn from_replies(mut replies: Vec<String>) -> Self {
        if replies.len() == 1 {
            Self::Single(replies.remove(0))
        } else {
            Self::Many(replies)
        }
    }

    /// The replies in order.
    #[must_use]
    pub fn into_replies(self) -> Vec<String> {
        match self {
            Self::Single(reply) => vec![reply],
            Self::Many(replies) => replies,
        }
    }
}

/// Routes parsed commands to handlers.
#[derive(Copy, Clone, Debug)]
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
    synonyms: &'a SynonymTable,
    fallback: &'a str,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher replying `fallback` when nothing can be done.
    #[must_use]
    pub fn new(registry: &'a CommandRegistry, synonyms: &'a SynonymTable, fallback: &'a str) -> Self {
        Self {
            registry,
            synonyms,
            fallback,
        }
    }

    /// Picks the route for `verb` with `objects`.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not exist.
    pub fn route(
        &self,
        world: &WorldGraph,
        actor: PlayerId,
        verb: &Term,
        objects: &[Term],
    ) -> Result<Route> {
        if let Some(first) = objects.first() {
            let overrides = |id: ItemId| world.item(id).is_some_and(|item| item.action(verb).is_some());

            if let Some(id) = world.carried(actor, first)? {
                if overrides(id) {
                    return Ok(Route::InventoryItem(id));
                }
            }

            let room = world.player_room(actor)?;
            if let Some(id) = world.item_present(room, first) {
                if overrides(id) {
                    return Ok(Route::RoomItem(id));
                }
            }
        } else {
            // A missing actor still has to be reported without objects.
            world.player(actor)?;
        }

        let has_handler = self
            .registry
            .lookup(verb)
            .is_some_and(|entry| entry.handler().is_some());
        Ok(if has_handler { Route::Player } else { Route::Fallback })
    }

    /// Dispatches one parsed command and returns the reply.
    ///
    /// Never fails: any fault becomes the fallback message.
    pub fn dispatch(&self, world: &mut WorldGraph, actor: PlayerId, command: &ParsedCommand) -> String {
        let Some(verb) = command.verb.as_ref() else {
            debug!(%actor, "no verb");
            return self.fallback.to_string();
        };
        let objects = command.objects.as_slice();

        let route = match self.route(world, actor, verb, objects) {
            Ok(route) => route,
            Err(err) => {
                let err = err.with_context(context(verb, actor).with_note("routing"));
                warn!(error = %err, "dispatch failed");
                return self.fallback.to_string();
            }
        };
        debug!(%verb, %actor, ?route, "dispatching");

        let (handler, receiver, args): (Option<Handler>, Option<ItemId>, &[Term]) = match route {
            Route::InventoryItem(id) | Route::RoomItem(id) => (
                world.item(id).and_then(|item| item.action(verb)).cloned(),
                Some(id),
                &objects[1..],
            ),
            Route::Player => (
                self.registry.lookup(verb).and_then(|e| e.handler()).cloned(),
                None,
                objects,
            ),
            Route::Fallback => return self.player_fallback(world, actor, verb),
        };

        match handler {
            Some(handler) => self.invoke(&handler, world, actor, verb, receiver, args),
            None => self.player_fallback(world, actor, verb),
        }
    }

    fn invoke(
        &self,
        handler: &Handler,
        world: &mut WorldGraph,
        actor: PlayerId,
        verb: &Term,
        receiver: Option<ItemId>,
        args: &[Term],
    ) -> String {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let mut ctx = ActionContext::new(world, self.synonyms, verb, actor, receiver);
            handler(&mut ctx, args)
        }));

        match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(err)) => {
                let note = if receiver.is_some() { "item override" } else { "player handler" };
                let err = err.with_context(context(verb, actor).with_note(note));
                warn!(error = %err, context = ?err.context, "handler failed");
                self.fallback.to_string()
            }
            Err(_) => {
                warn!(%verb, %actor, "handler panicked");
                self.fallback.to_string()
            }
        }
    }

    /// The last-resort reply for a verb nobody handles.
    fn player_fallback(&self, world: &WorldGraph, actor: PlayerId, verb: &Term) -> String {
        match world.carried(actor, verb) {
            Ok(Some(_)) => format!("Do what with '{}'?", verb.display_name()),
            Ok(None) => format!("I don't understand '{}'.", verb.display_name()),
            Err(err) => {
                warn!(error = %err, "player fallback failed");
                self.fallback.to_string()
            }
        }
    }
}

fn context(verb: &Term, actor: PlayerId) -> ErrorContext {
    ErrorContext::new()
        .with_verb(verb.as_str())
        .with_actor(actor.to_string())
}
