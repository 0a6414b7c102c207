//! Error types for the Waymark system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Conversational outcomes (unknown words, blocked exits) are never errors;
//! these types cover authoring mistakes, handler faults and transport faults.

use std::fmt;

use thiserror::Error;

use crate::entity::{ItemId, PlayerId};
use crate::term::Term;

/// The main error type for Waymark operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid term error for blank identifiers.
    #[must_use]
    pub fn invalid_term(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTerm(what.into()))
    }

    /// Creates an unknown room error.
    #[must_use]
    pub fn unknown_room(room: Term) -> Self {
        Self::new(ErrorKind::UnknownRoom(room))
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(item: ItemId) -> Self {
        Self::new(ErrorKind::UnknownItem(item))
    }

    /// Creates an unknown player error.
    #[must_use]
    pub fn unknown_player(player: PlayerId) -> Self {
        Self::new(ErrorKind::UnknownPlayer(player))
    }

    /// Creates a missing object error, raised by handlers that need one.
    #[must_use]
    pub fn missing_object(verb: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingObject(verb.into()))
    }

    /// Creates a handler fault.
    #[must_use]
    pub fn handler(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Handler(message.into()))
    }

    /// Creates a transport fault.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::transport(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An identifier normalized to nothing.
    #[error("blank {0} identifier")]
    InvalidTerm(String),

    /// A room identifier was referenced but never defined.
    #[error("unknown room: {0}")]
    UnknownRoom(Term),

    /// An item id does not exist in the arena.
    #[error("unknown item: {0:?}")]
    UnknownItem(ItemId),

    /// A player id does not resolve (never started or already removed).
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// A session id is not in the roster.
    #[error("unknown session: {0}")]
    UnknownSession(u64),

    /// A handler needed an object and none was given.
    #[error("{0}: missing object")]
    MissingObject(String),

    /// A content handler failed.
    #[error("handler fault: {0}")]
    Handler(String),

    /// The connection or terminal failed.
    #[error("transport fault: {0}")]
    Transport(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Verb being dispatched, if any.
    pub verb: Option<String>,
    /// Display name of the acting player, if any.
    pub actor: Option<String>,
    /// Free-form notes, innermost first.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the verb.
    #[must_use]
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    /// Sets the actor.
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(verb) = &self.verb {
            write!(f, "while dispatching {verb}")?;
        }
        if let Some(actor) = &self.actor {
            write!(f, " for {actor}")?;
        }
        for note in &self.notes {
            write!(f, "\n  {note}")?;
        }
        Ok(())
    }
}
