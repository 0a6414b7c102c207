//! The engine facade.
//!
//! An [`Engine`] owns one world together with the synonym and command
//! tables that interpret input against it. Engines share nothing, so any
//! number can coexist in one process.

use tracing::{debug, info};
use waymark_foundation::{Container, Error, ItemId, PlayerId, Result, RoomId, Term};
use waymark_parser::{CommandParser, ParsedCommand, SynonymTable, stdlib as vocabulary};

use crate::config::EngineConfig;
use crate::dispatch::{DispatchReply, Dispatcher};
use crate::registry::{CommandDef, CommandEntry, CommandRegistry};
use crate::stdlib;
use crate::world::{ItemDef, WorldBuilder, WorldGraph};

/// World, vocabulary and commands.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    parser: CommandParser,
    synonyms: SynonymTable,
    commands: CommandRegistry,
    world: WorldGraph,
}

impl Engine {
    /// Creates an engine with the default vocabulary, the built-in commands
    /// and an empty world.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in command fails to register.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let mut synonyms = SynonymTable::new();
        vocabulary::register_defaults(&mut synonyms);

        let mut commands = CommandRegistry::new();
        stdlib::register_commands(&mut commands, &mut synonyms)?;

        let mut world = WorldGraph::new();
        world.set_show_directions(config.show_directions);

        Ok(Self {
            parser: CommandParser::with_stopwords(config.stopwords.iter().cloned()),
            config,
            synonyms,
            commands,
            world,
        })
    }

    /// Creates an engine and loads `builder` into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the world fails to build.
    pub fn with_world(config: EngineConfig, builder: WorldBuilder) -> Result<Self> {
        let mut engine = Self::new(config)?;
        engine.load(builder)?;
        Ok(engine)
    }

    /// Replaces the world with one built from `builder`.
    ///
    /// Players in the previous world are discarded. A failed load leaves
    /// both the world and the synonym table as they were.
    ///
    /// # Errors
    ///
    /// Returns an error if an exit targets an undefined room or a name is
    /// blank.
    pub fn load(&mut self, builder: WorldBuilder) -> Result<()> {
        let mut synonyms = self.synonyms.clone();
        let mut world = builder.build(&mut synonyms)?;
        let show = world.show_directions() || self.config.show_directions;
        world.set_show_directions(show);
        info!(rooms = world.room_count(), "world loaded");
        self.world = world;
        self.synonyms = synonyms;
        Ok(())
    }

    /// Registers a content command.
    ///
    /// # Errors
    ///
    /// Returns an error if the verb is blank.
    pub fn register_command(&mut self, def: CommandDef) -> Result<&CommandEntry> {
        self.commands.register(def, &mut self.synonyms)
    }

    /// Looks up a registered command by canonical verb.
    #[must_use]
    pub fn command(&self, verb: &Term) -> Option<&CommandEntry> {
        self.commands.lookup(verb)
    }

    /// The command registry.
    #[must_use]
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Creates a player in the room named `start_room`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such room exists.
    pub fn start_player(&mut self, name: impl Into<String>, start_room: &str) -> Result<PlayerId> {
        let room = self.room(start_room)?;
        let name = name.into();
        let id = self.world.start_player(name.clone(), room)?;
        debug!(player = %id, %name, "player started");
        Ok(id)
    }

    /// Finds a room by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is blank or unknown.
    pub fn room(&self, id: &str) -> Result<RoomId> {
        let term = Term::normalize(id).ok_or_else(|| Error::invalid_term("room"))?;
        self.world
            .room_by_term(&term)
            .ok_or_else(|| Error::unknown_room(term))
    }

    /// Creates an item in the room named `room` after the world is built.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is unknown or the item name is blank.
    pub fn add_item(&mut self, room: &str, def: ItemDef) -> Result<ItemId> {
        let room = self.room(room)?;
        self.world
            .create_item(def, &mut self.synonyms, Container::Room(room))
    }

    /// Parses a line with this engine's stopwords and synonyms.
    #[must_use]
    pub fn parse(&self, line: &str) -> ParsedCommand {
        self.parser.parse(line, &self.synonyms)
    }

    /// Parses and dispatches one line.
    pub fn execute(&mut self, actor: PlayerId, line: &str) -> String {
        let command = self.parse(line);
        self.dispatch(actor, &command)
    }

    /// Dispatches a parsed command.
    pub fn dispatch(&mut self, actor: PlayerId, command: &ParsedCommand) -> String {
        Dispatcher::new(&self.commands, &self.synonyms, &self.config.fallback_message)
            .dispatch(&mut self.world, actor, command)
    }

    /// Dispatches commands in order, each independently.
    pub fn dispatch_batch(&mut self, actor: PlayerId, commands: &[ParsedCommand]) -> DispatchReply {
        let dispatcher =
            Dispatcher::new(&self.commands, &self.synonyms, &self.config.fallback_message);
        let replies = commands
            .iter()
            .map(|command| dispatcher.dispatch(&mut self.world, actor, command))
            .collect();
        DispatchReply::from_replies(replies)
    }

    /// Resolves raw text through the synonym table.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<Term> {
        self.synonyms.resolve(raw)
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// The world, mutably.
    pub fn world_mut(&mut self) -> &mut WorldGraph {
        &mut self.world
    }

    /// The synonym table.
    #[must_use]
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// The synonym table, mutably.
    pub fn synonyms_mut(&mut self) -> &mut SynonymTable {
        &mut self.synonyms
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Renders the player's current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist.
    pub fn describe_player_room(&self, player: PlayerId) -> Result<String> {
        let room = self.world.player_room(player)?;
        Ok(self.world.describe_room(room))
    }
}
