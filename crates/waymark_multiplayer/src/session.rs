//! Sessions and the roster.

use std::collections::BTreeMap;
use std::fmt;

use tokio::sync::mpsc;
use waymark_foundation::PlayerId;

/// Outbound text for one connection.
pub type Outbox = mpsc::UnboundedSender<String>;

/// Identifies a connected session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// One connected player.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    name: String,
    player: PlayerId,
    outbox: Outbox,
}

impl Session {
    /// The session id.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Display name used to tag this session's broadcasts.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player this session controls.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Queues text for this session.
    ///
    /// A session whose connection has gone away silently drops the text.
    pub fn send(&self, text: impl Into<String>) {
        let _ = self.outbox.send(text.into());
    }
}

/// Connected sessions, ordered by id.
#[derive(Debug, Default)]
pub struct Roster {
    sessions: BTreeMap<SessionId, Session>,
    next_id: u64,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session and returns its new id.
    pub fn insert(&mut self, name: impl Into<String>, player: PlayerId, outbox: Outbox) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(
            id,
            Session {
                id,
                name: name.into(),
                player,
                outbox,
            },
        );
        id
    }

    /// Gets a session.
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Renames a session; returns false if it does not exist.
    pub fn rename(&mut self, id: SessionId, name: impl Into<String>) -> bool {
        match self.sessions.get_mut(&id) {
            Some(session) => {
                session.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Removes a session, dropping its outbox.
    pub fn remove(&mut self, id: SessionId) -> Option<Session> {
        self.sessions.remove(&id)
    }

    /// All sessions.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }

    /// Number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if nobody is connected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
