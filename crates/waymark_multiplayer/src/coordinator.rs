//! Broadcast scoping around dispatch.
//!
//! The coordinator owns the shared engine and the roster. Each line goes
//! through three steps, all under the caller's lock:
//!
//! 1. Pre-phase: the verb's broadcast policy builds a message, which goes to
//!    the other sessions in scope. Room scope is evaluated before dispatch.
//! 2. Dispatch through the engine.
//! 3. Post-phase: if the actor changed rooms and the verb is global, the
//!    message is delivered again. Room-local commands are not re-announced.

use tracing::{debug, info};
use waymark_engine::{Broadcast, Engine, Visibility};
use waymark_foundation::{Error, ErrorKind, PlayerId, Result, RoomId, Term};

use crate::session::{Outbox, Roster, Session, SessionId};

/// Announced when a session joins.
pub const JOINED: &str = "has joined";

/// Announced when a session leaves.
pub const LEFT: &str = "has left";

/// Verbs that end a session.
const QUIT_VERBS: &[&str] = &["quit", "exit"];

/// What the transport should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome {
    /// Reply for the acting session.
    pub reply: String,
    /// The session has ended and the connection should close.
    pub close: bool,
}

/// Where a broadcast goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Scope {
    Room(RoomId),
    Everyone,
}

/// Shared engine plus connected sessions.
#[derive(Debug)]
pub struct BroadcastCoordinator {
    engine: Engine,
    roster: Roster,
}

impl BroadcastCoordinator {
    /// Wraps an engine with an empty roster.
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            roster: Roster::new(),
        }
    }

    /// The shared engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The shared engine, mutably.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Connected sessions.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Starts a player for a new session.
    ///
    /// The other players in the start room hear that it joined. Returns the
    /// session id and the start room's description.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_room` does not exist.
    pub fn join(&mut self, name: &str, start_room: &str, outbox: Outbox) -> Result<(SessionId, String)> {
        let player = self.engine.start_player(name, start_room)?;
        let id = self.roster.insert(name, player, outbox);
        let room = self.engine.world().player_room(player)?;
        self.announce(id, Scope::Room(room), JOINED);
        info!(session = %id, %name, %player, "joined");
        Ok((id, self.engine.world().describe_room(room)))
    }

    /// Ends a session: the room hears it left, and the player is removed.
    ///
    /// The session always leaves the roster. A player that is already gone
    /// from the world (after a reload, say) is skipped without an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown.
    pub fn leave(&mut self, id: SessionId) -> Result<()> {
        let session = self
            .roster
            .remove(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownSession(id.0)))?;
        let player = session.player();

        match self.engine.world().player_room(player) {
            Ok(room) => {
                self.deliver(id, session.name(), Scope::Room(room), LEFT);
                if let Err(err) = self.engine.world_mut().remove_player(player) {
                    debug!(session = %id, error = %err, "player already gone");
                }
            }
            Err(err) => debug!(session = %id, error = %err, "player already gone"),
        }

        info!(session = %id, name = session.name(), "left");
        Ok(())
    }

    /// Changes the display name of a session and its player.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown.
    pub fn rename(&mut self, id: SessionId, name: &str) -> Result<()> {
        let player = self.session(id)?.player();
        self.roster.rename(id, name);
        self.engine.world_mut().rename_player(player, name)
    }

    /// Runs one input line for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown. Command outcomes,
    /// including failing handlers, are replies rather than errors.
    pub fn handle_line(&mut self, id: SessionId, line: &str) -> Result<LineOutcome> {
        let player = self.session(id)?.player();
        let command = self.engine.parse(line);
        let before = self.engine.world().player_room(player)?;

        let (policy, visibility) = self.policy(command.verb.as_ref());
        let scope = match visibility {
            Visibility::RoomLocal => Scope::Room(before),
            Visibility::Global => Scope::Everyone,
        };

        if let Some(message) = policy.message(line, &command.objects) {
            self.announce(id, scope, &message);
        }

        let reply = self.engine.dispatch(player, &command);

        let after = self.engine.world().player_room(player)?;
        if after != before && visibility == Visibility::Global {
            if let Some(message) = policy.message(line, &command.objects) {
                self.announce(id, Scope::Everyone, &message);
            }
        }

        let quitting = command
            .verb
            .as_ref()
            .is_some_and(|verb| QUIT_VERBS.contains(&verb.as_str()));
        if quitting {
            self.leave(id)?;
        }

        debug!(session = %id, close = quitting, "line handled");
        Ok(LineOutcome {
            reply,
            close: quitting,
        })
    }

    /// The broadcast policy for a verb; unknown or absent verbs echo to the
    /// room.
    fn policy(&self, verb: Option<&Term>) -> (Broadcast, Visibility) {
        verb.and_then(|verb| self.engine.command(verb))
            .map_or((Broadcast::Echo, Visibility::RoomLocal), |entry| {
                (entry.meta().broadcast.clone(), entry.meta().visibility)
            })
    }

    /// Delivers `{name}: {message}` to every other session in scope.
    fn announce(&self, from: SessionId, scope: Scope, message: &str) {
        if let Some(sender) = self.roster.get(from) {
            self.deliver(from, sender.name(), scope, message);
        }
    }

    fn deliver(&self, from: SessionId, name: &str, scope: Scope, message: &str) {
        let tagged = format!("{name}: {message}");
        for session in self.roster.iter().filter(|s| s.id() != from) {
            if self.in_scope(session.player(), scope) {
                session.send(tagged.clone());
            }
        }
    }

    fn in_scope(&self, player: PlayerId, scope: Scope) -> bool {
        match scope {
            Scope::Everyone => true,
            Scope::Room(room) => self
                .engine
                .world()
                .player_room(player)
                .is_ok_and(|here| here == room),
        }
    }

    fn session(&self, id: SessionId) -> Result<&Session> {
        self.roster
            .get(id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownSession(id.0)))
    }
}
