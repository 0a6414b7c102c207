//! Synonym resolution tests.

use proptest::prelude::*;
use waymark_foundation::Term;
use waymark_parser::SynonymTable;
use waymark_parser::stdlib::register_defaults;

fn term(s: &str) -> Term {
    Term::normalize(s).unwrap()
}

fn defaults() -> SynonymTable {
    let mut table = SynonymTable::new();
    register_defaults(&mut table);
    table
}

#[test]
fn blank_input_is_absent() {
    let table = defaults();
    assert_eq!(table.resolve(""), None);
    assert_eq!(table.resolve("   \t"), None);
    assert_eq!(table.resolve_opt(None), None);
}

#[test]
fn unknown_terms_resolve_to_themselves() {
    let table = defaults();
    assert_eq!(table.resolve("Pebble"), Some(term("pebble")));
    assert_eq!(table.resolve("A   River"), Some(term("a_river")));
}

#[test]
fn abbreviations_fold_to_directions() {
    let table = defaults();
    assert_eq!(table.resolve("N"), Some(term("north")));
    assert_eq!(table.resolve("sw"), Some(term("southwest")));
    assert_eq!(table.resolve("inv"), Some(term("inventory")));
}

#[test]
fn resolution_is_single_hop() {
    let mut table = SynonymTable::new();
    table.add_synonym("a", "b");
    table.add_synonym("b", "c");

    assert_eq!(table.resolve("a"), Some(term("b")));
    assert_eq!(table.resolve("b"), Some(term("c")));
}

#[test]
fn canonical_side_is_not_resolved() {
    let mut table = SynonymTable::new();
    table.add_synonym("stone", "pebble");
    table.add_synonym("rock", "stone");
    assert_eq!(table.lookup(&term("rock")), Some(&term("stone")));
}

#[test]
fn later_registration_replaces_alias() {
    let mut table = SynonymTable::new();
    table.add_synonym("x", "examine");
    table.add_synonym("x", "look");
    assert_eq!(table.resolve("x"), Some(term("look")));
}

proptest! {
    #[test]
    fn resolution_is_idempotent_over_defaults(raw in "[A-Za-z \t]{0,40}") {
        let table = defaults();
        if let Some(once) = table.resolve(&raw) {
            prop_assert_eq!(table.resolve(once.as_str()), Some(once.clone()));
        }
    }

    #[test]
    fn normalization_ignores_case_and_spacing(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let spaced = words.join("   ");
        let shouted = words.join(" ").to_uppercase();
        prop_assert_eq!(Term::normalize(&spaced), Term::normalize(&shouted));
    }
}
