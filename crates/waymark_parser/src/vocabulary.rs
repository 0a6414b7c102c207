//! Synonym table and term resolution.
//!
//! Resolution is single-hop: a term is normalized and looked up once. An
//! alias that points at another alias is returned as that alias, never
//! chased further.

use std::collections::HashMap;

use waymark_foundation::Term;

/// Runtime storage for alias → canonical term mappings.
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    /// Alias -> canonical term
    synonyms: HashMap<Term, Term>,
}

impl SynonymTable {
    /// Creates a new empty synonym table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` as a synonym of `canonical`.
    ///
    /// Both sides are normalized; the canonical side is *not* resolved, so
    /// registering an alias of an alias produces a chain that resolution
    /// will not follow. Blank input on either side is ignored. A later
    /// registration of the same alias replaces the earlier target.
    pub fn add_synonym(&mut self, alias: &str, canonical: &str) {
        if let (Some(alias), Some(canonical)) = (Term::normalize(alias), Term::normalize(canonical))
        {
            self.add_synonym_term(alias, canonical);
        }
    }

    /// Registers an alias using already-normalized terms.
    pub fn add_synonym_term(&mut self, alias: Term, canonical: Term) {
        if alias != canonical {
            self.synonyms.insert(alias, canonical);
        }
    }

    /// Resolves raw text to its canonical term.
    ///
    /// Blank input is absent and yields `None`.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<Term> {
        Term::normalize(raw).map(|term| self.resolve_term(&term))
    }

    /// Resolves optional raw text; absent input stays absent.
    #[must_use]
    pub fn resolve_opt(&self, raw: Option<&str>) -> Option<Term> {
        raw.and_then(|raw| self.resolve(raw))
    }

    /// Performs the single synonym lookup on a normalized term.
    #[must_use]
    pub fn resolve_term(&self, term: &Term) -> Term {
        self.synonyms.get(term).cloned().unwrap_or_else(|| term.clone())
    }

    /// Returns the canonical target registered for `alias`, if any.
    #[must_use]
    pub fn lookup(&self, alias: &Term) -> Option<&Term> {
        self.synonyms.get(alias)
    }

    /// Returns every alias registered for `canonical`, sorted.
    #[must_use]
    pub fn aliases_of(&self, canonical: &Term) -> Vec<&Term> {
        let mut aliases: Vec<&Term> = self
            .synonyms
            .iter()
            .filter(|(_, target)| *target == canonical)
            .map(|(alias, _)| alias)
            .collect();
        aliases.sort();
        aliases
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Returns true if no aliases are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}
