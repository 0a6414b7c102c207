//! The single-player REPL.

use tracing::debug;
use waymark_engine::Engine;
use waymark_foundation::{PlayerId, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Verbs that end the game.
const QUIT_VERBS: &[&str] = &["quit", "exit"];

/// The outcome of one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Text to show the player.
    pub reply: String,
    /// The player asked to stop.
    pub finished: bool,
}

/// The interactive game loop for one player.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The world being played.
    engine: Engine,

    /// Who is playing.
    player: PlayerId,

    /// Whether to describe the starting room before the first prompt.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(engine: Engine, player: PlayerId) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, engine, player))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(mut editor: E, engine: Engine, player: PlayerId) -> Self {
        editor.set_keywords(
            engine
                .commands()
                .verbs()
                .into_iter()
                .map(|verb| verb.display_name())
                .collect(),
        );
        Self {
            editor,
            engine,
            player,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Skips the opening room description.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The engine being played.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Runs until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("{}\n", self.engine.describe_player_room(self.player)?);
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            let turn = self.execute(&line);
            println!("{}\n", turn.reply);
            if turn.finished {
                break;
            }
        }

        Ok(())
    }

    /// Runs one line.
    pub fn execute(&mut self, line: &str) -> Turn {
        let command = self.engine.parse(line);
        let finished = command
            .verb
            .as_ref()
            .is_some_and(|verb| QUIT_VERBS.contains(&verb.as_str()));
        let reply = self.engine.dispatch(self.player, &command);
        debug!(player = %self.player, finished, "turn");
        Turn { reply, finished }
    }
}
