//! Command-line parser.
//!
//! Orchestrates tokenization, stopword removal and term resolution. Parsing
//! never fails: input that yields nothing degrades to an absent verb and no
//! objects.

use waymark_foundation::Term;

use crate::stdlib::STOPWORDS;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::SynonymTable;

/// A parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The canonical verb, absent for an empty or stopword-only line
    pub verb: Option<Term>,
    /// Canonical object terms in input order
    pub objects: Vec<Term>,
}

impl ParsedCommand {
    /// Creates a command from already-canonical parts.
    #[must_use]
    pub fn new(verb: Option<Term>, objects: Vec<Term>) -> Self {
        Self { verb, objects }
    }

    /// Returns true if there is no verb.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verb.is_none()
    }

    /// Returns true if the verb is `verb`.
    #[must_use]
    pub fn is_verb(&self, verb: &str) -> bool {
        self.verb.as_ref().is_some_and(|v| v.as_str() == verb)
    }

    /// The direct object, if any.
    #[must_use]
    pub fn first_object(&self) -> Option<&Term> {
        self.objects.first()
    }
}

/// The command-line parser.
#[derive(Clone, Debug)]
pub struct CommandParser {
    stopwords: Vec<String>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Creates a parser with the default stopwords (`at`, `with`, `on`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_stopwords(STOPWORDS.iter().map(|s| (*s).to_string()))
    }

    /// Creates a parser with a custom stopword list.
    #[must_use]
    pub fn with_stopwords(stopwords: impl IntoIterator<Item = String>) -> Self {
        Self {
            stopwords: stopwords.into_iter().collect(),
        }
    }

    /// The configured stopwords.
    #[must_use]
    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    /// Parses a raw line into a verb and its objects.
    ///
    /// Stopwords are removed before any resolution, the first remaining
    /// token becomes the verb, and every other token is resolved on its own.
    #[must_use]
    pub fn parse(&self, line: &str, synonyms: &SynonymTable) -> ParsedCommand {
        let mut tokens = InputTokenizer::tokenize_without(line, &self.stopwords).into_iter();

        let verb = tokens.next().and_then(|token| synonyms.resolve(token));
        let objects = tokens.filter_map(|token| synonyms.resolve(token)).collect();

        ParsedCommand { verb, objects }
    }
}
