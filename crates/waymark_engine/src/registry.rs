//! Registry for player-level commands.
//!
//! Each canonical verb maps to an optional handler plus the metadata the
//! multiplayer overlay needs to announce it to other players.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use tracing::debug;
use waymark_foundation::{Error, Result, Term};
use waymark_parser::SynonymTable;

use crate::action::{ActionContext, Handler, handler};

// =============================================================================
// Metadata
// =============================================================================

/// Who hears about a command.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Players in the actor's room.
    #[default]
    RoomLocal,
    /// Every connected player.
    Global,
}

/// Builds a broadcast message from a command's objects.
pub type BroadcastFn = Arc<dyn Fn(&[Term]) -> String + Send + Sync>;

/// How a command is announced to other players.
#[derive(Clone, Default)]
pub enum Broadcast {
    /// Repeat the raw input line.
    #[default]
    Echo,
    /// Announce nothing.
    Silent,
    /// Build the message from the objects.
    Generate(BroadcastFn),
}

impl Broadcast {
    /// Wraps a generator closure.
    pub fn generate<F>(f: F) -> Self
    where
        F: Fn(&[Term]) -> String + Send + Sync + 'static,
    {
        Self::Generate(Arc::new(f))
    }

    /// The message for a command line, or `None` if nothing is announced.
    ///
    /// Empty messages count as nothing.
    #[must_use]
    pub fn message(&self, raw_line: &str, objects: &[Term]) -> Option<String> {
        let message = match self {
            Self::Echo => raw_line.trim().to_string(),
            Self::Silent => return None,
            Self::Generate(f) => f(objects),
        };
        (!message.is_empty()).then_some(message)
    }
}

impl fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Echo => f.write_str("Echo"),
            Self::Silent => f.write_str("Silent"),
            Self::Generate(_) => f.write_str("Generate(..)"),
        }
    }
}

/// Broadcast policy and scope of a command.
#[derive(Clone, Debug, Default)]
pub struct CommandMeta {
    /// How the command is announced
    pub broadcast: Broadcast,
    /// Who hears it
    pub visibility: Visibility,
}

// =============================================================================
// Definitions and entries
// =============================================================================

/// A command definition, consumed by [`CommandRegistry::register`].
#[derive(Clone)]
pub struct CommandDef {
    verb: String,
    synonyms: Vec<String>,
    meta: CommandMeta,
    handler: Option<Handler>,
}

impl CommandDef {
    /// Starts a definition for `verb`.
    #[must_use]
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            synonyms: Vec::new(),
            meta: CommandMeta::default(),
            handler: None,
        }
    }

    /// Adds aliases that resolve to the verb.
    #[must_use]
    pub fn with_synonyms<S: Into<String>>(mut self, synonyms: impl IntoIterator<Item = S>) -> Self {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    /// Sets a broadcast generator.
    #[must_use]
    pub fn with_broadcast<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Term]) -> String + Send + Sync + 'static,
    {
        self.meta.broadcast = Broadcast::generate(f);
        self
    }

    /// Never announces this command.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.meta.broadcast = Broadcast::Silent;
        self
    }

    /// Sets the broadcast scope.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.meta.visibility = visibility;
        self
    }

    /// Sets the player-level handler.
    #[must_use]
    pub fn with_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ActionContext<'_>, &[Term]) -> Result<String> + Send + Sync + 'static,
    {
        self.handler = Some(handler(f));
        self
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("verb", &self.verb)
            .field("synonyms", &self.synonyms)
            .field("meta", &self.meta)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// A registered command.
#[derive(Clone)]
pub struct CommandEntry {
    verb: Term,
    meta: CommandMeta,
    handler: Option<Handler>,
}

impl CommandEntry {
    /// The canonical verb.
    #[must_use]
    pub fn verb(&self) -> &Term {
        &self.verb
    }

    /// Broadcast metadata.
    #[must_use]
    pub fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    /// The player-level handler, if one was given.
    #[must_use]
    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("verb", &self.verb)
            .field("meta", &self.meta)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

// =============================================================================
// CommandRegistry
// =============================================================================

/// Canonical verb → command entry.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<Term, CommandEntry>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// The verb is resolved through `synonyms` first, so registering an
    /// alias lands on its canonical verb. Registering a verb that already
    /// exists changes nothing and returns the existing entry, but the
    /// definition's synonyms are merged into `synonyms` either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the verb is blank.
    pub fn register(&mut self, def: CommandDef, synonyms: &mut SynonymTable) -> Result<&CommandEntry> {
        let verb = synonyms
            .resolve(&def.verb)
            .ok_or_else(|| Error::invalid_term("verb"))?;

        for alias in &def.synonyms {
            if let Some(alias) = Term::normalize(alias) {
                synonyms.add_synonym_term(alias, verb.clone());
            }
        }

        let entry = match self.commands.entry(verb) {
            Entry::Occupied(existing) => {
                debug!(verb = %existing.key(), "command already registered");
                existing.into_mut()
            }
            Entry::Vacant(slot) => {
                let verb = slot.key().clone();
                slot.insert(CommandEntry {
                    verb,
                    meta: def.meta,
                    handler: def.handler,
                })
            }
        };
        Ok(entry)
    }

    /// Looks up a canonical verb.
    #[must_use]
    pub fn lookup(&self, verb: &Term) -> Option<&CommandEntry> {
        self.commands.get(verb)
    }

    /// Returns true if `verb` is registered.
    #[must_use]
    pub fn contains(&self, verb: &Term) -> bool {
        self.commands.contains_key(verb)
    }

    /// Registered verbs, sorted.
    #[must_use]
    pub fn verbs(&self) -> Vec<&Term> {
        let mut verbs: Vec<&Term> = self.commands.keys().collect();
        verbs.sort();
        verbs
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
