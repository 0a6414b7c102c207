//! Configuration for an engine instance.

use waymark_parser::stdlib::STOPWORDS;

/// The reply given whenever a command cannot be understood or its handler
/// fails.
pub const FALLBACK_MESSAGE: &str = "I don't understand what you said, sorry.";

/// Configuration for an [`Engine`](crate::Engine).
///
/// Controls room rendering, parsing and the failure reply.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Append a directions summary to room descriptions.
    pub show_directions: bool,

    /// Tokens removed from input before resolution.
    pub stopwords: Vec<String>,

    /// Reply for absent verbs and failing handlers.
    pub fallback_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            show_directions: false,
            stopwords: STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration suited to authoring: directions are shown.
    #[must_use]
    pub fn authoring() -> Self {
        Self {
            show_directions: true,
            ..Self::default()
        }
    }

    /// Builder method to toggle the directions summary.
    #[must_use]
    pub fn with_show_directions(mut self, show: bool) -> Self {
        self.show_directions = show;
        self
    }

    /// Builder method to replace the stopword list.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to replace the fallback reply.
    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }
}
