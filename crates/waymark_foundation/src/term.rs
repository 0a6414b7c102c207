//! Canonical terms.
//!
//! Every name the engine compares (verbs, directions, room and item
//! identifiers) is reduced to a [`Term`] first. Terms are cheap to clone
//! and compare by their normalized characters.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical, lower-case, whitespace-normalized identifier.
///
/// Internal whitespace runs are replaced by [`Term::CONNECTOR`], so
/// `"A  River"` and `"a river"` are the same term (`a_river`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term(Arc<str>);

impl Term {
    /// Character that joins the words of a multi-word term.
    pub const CONNECTOR: char = '_';

    /// Normalizes raw text into a term.
    ///
    /// Returns `None` when the input is empty or whitespace only.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let mut out = String::with_capacity(raw.len());
        for word in raw.split_whitespace() {
            if !out.is_empty() {
                out.push(Self::CONNECTOR);
            }
            out.extend(word.chars().flat_map(char::to_lowercase));
        }
        if out.is_empty() {
            None
        } else {
            Some(Self(out.into()))
        }
    }

    /// Wraps text that is already in canonical form.
    ///
    /// The caller guarantees `normalized` is lower-case and contains no
    /// whitespace; no check is made.
    #[must_use]
    pub fn from_normalized(normalized: &str) -> Self {
        Self(normalized.into())
    }

    /// Returns the normalized characters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the term for players: connectors become spaces.
    ///
    /// `a_pebble` renders as `a pebble`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.replace(Self::CONNECTOR, " ")
    }

    /// Like [`Term::display_name`], with the first letter capitalized.
    ///
    /// Used for room headings: `the_lake` renders as `The lake`.
    #[must_use]
    pub fn title(&self) -> String {
        let name = self.display_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => name,
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({})", self.0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}
