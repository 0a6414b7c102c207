//! Command parsing tests.

use proptest::prelude::*;
use waymark_foundation::Term;
use waymark_parser::stdlib::{STOPWORDS, register_defaults};
use waymark_parser::{CommandParser, ParsedCommand, SynonymTable};

fn term(s: &str) -> Term {
    Term::normalize(s).unwrap()
}

fn table() -> SynonymTable {
    let mut table = SynonymTable::new();
    register_defaults(&mut table);
    table.add_synonym("pebble", "a pebble");
    table
}

#[test]
fn verb_and_objects_are_resolved() {
    let parsed = CommandParser::new().parse("go n", &table());
    assert_eq!(parsed, ParsedCommand::new(Some(term("go")), vec![term("north")]));
}

#[test]
fn stopwords_are_removed_before_resolution() {
    let parsed = CommandParser::new().parse("hit pebble with knife on rock", &table());
    assert_eq!(parsed.verb, Some(term("hit")));
    assert_eq!(parsed.objects, vec![term("a pebble"), term("knife"), term("rock")]);
}

#[test]
fn stopwords_match_case_sensitively() {
    let parsed = CommandParser::new().parse("look AT pebble", &table());
    assert_eq!(parsed.objects, vec![term("at"), term("a pebble")]);
}

#[test]
fn stopword_only_line_is_empty() {
    let parsed = CommandParser::new().parse("at with on", &table());
    assert!(parsed.is_empty());
    assert!(parsed.objects.is_empty());
}

#[test]
fn leading_stopword_is_skipped_for_the_verb() {
    let parsed = CommandParser::new().parse("at look", &table());
    assert_eq!(parsed.verb, Some(term("look")));
}

#[test]
fn custom_stopwords_replace_defaults() {
    let parser = CommandParser::with_stopwords(["the".to_string()]);
    let parsed = parser.parse("look at the pebble", &table());
    assert_eq!(parsed.objects, vec![term("at"), term("a pebble")]);
}

proptest! {
    #[test]
    fn parse_never_panics(line in any::<String>()) {
        let _ = CommandParser::new().parse(&line, &table());
    }

    #[test]
    fn object_count_matches_non_stopword_tokens(
        words in prop::collection::vec(prop_oneof!["[a-z]{1,6}", Just("at".to_string())], 0..8)
    ) {
        let line = words.join(" ");
        let parsed = CommandParser::new().parse(&line, &table());
        let kept = words.iter().filter(|w| !STOPWORDS.contains(&w.as_str())).count();
        prop_assert_eq!(parsed.objects.len(), kept.saturating_sub(1));
        prop_assert_eq!(parsed.verb.is_some(), kept > 0);
    }
}
