//! Items and item definitions.

use std::collections::HashMap;
use std::fmt;

use waymark_foundation::{Container, Error, ItemId, Result, Term};
use waymark_parser::SynonymTable;

use crate::action::{ActionContext, Handler, handler};

/// A portable object.
#[derive(Clone)]
pub struct Item {
    id: ItemId,
    name: Term,
    description: String,
    synonyms: Vec<Term>,
    owner: Option<Container>,
    /// Item-local verb overrides
    actions: HashMap<Term, Handler>,
}

impl Item {
    /// This item's arena id.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The canonical identifier.
    #[must_use]
    pub fn name(&self) -> &Term {
        &self.name
    }

    /// The description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Aliases registered for this item.
    #[must_use]
    pub fn synonyms(&self) -> &[Term] {
        &self.synonyms
    }

    /// The container currently holding this item, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Container> {
        self.owner
    }

    /// Returns true if `term` names this item, by canonical name or alias.
    #[must_use]
    pub fn matches(&self, term: &Term) -> bool {
        self.name == *term || self.synonyms.contains(term)
    }

    /// The item-local handler for `verb`, if any.
    #[must_use]
    pub fn action(&self, verb: &Term) -> Option<&Handler> {
        self.actions.get(verb)
    }

    /// Verbs this item overrides, sorted.
    #[must_use]
    pub fn action_verbs(&self) -> Vec<&Term> {
        let mut verbs: Vec<&Term> = self.actions.keys().collect();
        verbs.sort();
        verbs
    }

    /// Attaches (or replaces) an item-local handler.
    pub fn set_action(&mut self, verb: Term, action: Handler) {
        self.actions.insert(verb, action);
    }

    /// Renders as `name: description`, the inventory and `look` format.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}: {}", self.name.display_name(), self.description)
    }

    pub(crate) fn set_owner(&mut self, owner: Option<Container>) {
        self.owner = owner;
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("synonyms", &self.synonyms)
            .field("owner", &self.owner)
            .field("actions", &self.action_verbs())
            .finish_non_exhaustive()
    }
}

/// An item definition, turned into an [`Item`] when the world is built.
#[derive(Clone)]
pub struct ItemDef {
    name: String,
    description: String,
    synonyms: Vec<String>,
    actions: Vec<(String, Handler)>,
}

impl ItemDef {
    /// Creates a definition with a name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            synonyms: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Adds aliases that will resolve to this item's name.
    #[must_use]
    pub fn with_synonyms<S: Into<String>>(mut self, synonyms: impl IntoIterator<Item = S>) -> Self {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    /// Adds an item-local handler for `verb`.
    #[must_use]
    pub fn with_action<F>(mut self, verb: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ActionContext<'_>, &[Term]) -> Result<String> + Send + Sync + 'static,
    {
        self.actions.push((verb.into(), handler(f)));
        self
    }

    /// Normalizes the definition into an item, registering its aliases.
    ///
    /// Aliases point at the normalized name. Action verbs are resolved
    /// through `synonyms` so an override written against an alias lands on
    /// the canonical verb.
    pub(crate) fn build(self, id: ItemId, synonyms: &mut SynonymTable) -> Result<Item> {
        let name = Term::normalize(&self.name).ok_or_else(|| Error::invalid_term("item"))?;

        let mut aliases = Vec::with_capacity(self.synonyms.len());
        for raw in &self.synonyms {
            if let Some(alias) = Term::normalize(raw) {
                synonyms.add_synonym_term(alias.clone(), name.clone());
                aliases.push(alias);
            }
        }

        let mut actions = HashMap::with_capacity(self.actions.len());
        for (verb, action) in self.actions {
            let verb = synonyms
                .resolve(&verb)
                .ok_or_else(|| Error::invalid_term("verb"))?;
            actions.insert(verb, action);
        }

        Ok(Item {
            id,
            name,
            description: self.description,
            synonyms: aliases,
            owner: None,
            actions,
        })
    }
}

impl fmt::Debug for ItemDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbs: Vec<&str> = self.actions.iter().map(|(verb, _)| verb.as_str()).collect();
        f.debug_struct("ItemDef")
            .field("name", &self.name)
            .field("synonyms", &self.synonyms)
            .field("actions", &verbs)
            .finish_non_exhaustive()
    }
}
