//! Item containment tests.

use waymark_engine::{DropOutcome, ItemDef, TakeOutcome, WorldBuilder, WorldGraph};
use waymark_foundation::{Container, PlayerId, RoomId, Term};
use waymark_parser::SynonymTable;

fn term(s: &str) -> Term {
    Term::normalize(s).unwrap()
}

fn world() -> (WorldGraph, SynonymTable, RoomId, PlayerId) {
    let mut synonyms = SynonymTable::new();
    let mut builder = WorldBuilder::new();
    builder
        .define_room("river", "A peaceful river.")
        .unwrap()
        .item("a pebble", "A small, smooth stone.", ["pebble"])
        .add_exit("north", "hill");
    builder.define_room("hill", "On top of a hill.").unwrap();
    let mut world = builder.build(&mut synonyms).unwrap();
    let river = world.room_id("river").unwrap();
    let player = world.start_player("Ada", river).unwrap();
    (world, synonyms, river, player)
}

/// Every item is in at most one container, and its owner agrees.
fn assert_consistent(world: &WorldGraph) {
    for item in world.items() {
        let in_rooms = world
            .rooms()
            .filter(|room| room.items().contains(&item.id()))
            .count();
        let in_players = world
            .players()
            .filter(|player| player.inventory().contains(&item.id()))
            .count();
        assert!(in_rooms + in_players <= 1, "{item:?} is in two places");
        match item.owner() {
            Some(Container::Room(room)) => {
                assert!(world.room(room).unwrap().items().contains(&item.id()));
            }
            Some(Container::Player(player)) => {
                assert!(world.player(player).unwrap().inventory().contains(&item.id()));
            }
            None => assert_eq!(in_rooms + in_players, 0),
        }
    }
}

#[test]
fn take_moves_item_into_inventory() {
    let (mut world, _, river, player) = world();
    let pebble = world.item_present(river, &term("a pebble")).unwrap();

    let outcome = world.take_from_room(player, &term("pebble")).unwrap();
    assert_eq!(outcome, TakeOutcome::Taken(pebble));
    assert!(world.item_present(river, &term("pebble")).is_none());
    assert_eq!(world.carried(player, &term("pebble")).unwrap(), Some(pebble));
    assert_consistent(&world);
}

#[test]
fn take_missing_item() {
    let (mut world, _, _, player) = world();
    assert_eq!(world.take_from_room(player, &term("knife")).unwrap(), TakeOutcome::NotHere);
}

#[test]
fn drop_in_another_room() {
    let (mut world, _, _, player) = world();
    world.take_from_room(player, &term("pebble")).unwrap();
    world.move_player(player, &term("north")).unwrap();

    let outcome = world.drop_to_room(player, &term("a pebble")).unwrap();
    assert!(matches!(outcome, DropOutcome::Dropped(_)));
    let hill = world.room_id("hill").unwrap();
    assert!(world.item_present(hill, &term("pebble")).is_some());
    assert_consistent(&world);
}

#[test]
fn drop_uncarried_item() {
    let (mut world, _, _, player) = world();
    assert_eq!(world.drop_to_room(player, &term("pebble")).unwrap(), DropOutcome::NotCarried);
}

#[test]
fn destroyed_item_is_nowhere() {
    let (mut world, _, river, player) = world();
    world.take_from_room(player, &term("pebble")).unwrap();
    let pebble = world.carried(player, &term("pebble")).unwrap().unwrap();

    world.destroy_item(pebble).unwrap();
    assert!(world.player(player).unwrap().inventory().is_empty());
    assert!(world.room(river).unwrap().items().is_empty());
    assert_eq!(world.item(pebble).unwrap().owner(), None);
    assert_consistent(&world);
}

#[test]
fn create_item_at_runtime() {
    let (mut world, mut synonyms, river, player) = world();
    let knife = world
        .create_item(
            ItemDef::new("a knife", "A sharp knife.").with_synonyms(["knife"]),
            &mut synonyms,
            Container::Player(player),
        )
        .unwrap();
    assert_eq!(synonyms.resolve("knife"), Some(term("a knife")));
    assert_eq!(world.carried(player, &term("knife")).unwrap(), Some(knife));

    world.place_item(river, knife).unwrap();
    assert_eq!(world.carried(player, &term("knife")).unwrap(), None);
    assert_consistent(&world);
}

#[test]
fn removed_player_leaves_items_behind() {
    let (mut world, _, river, player) = world();
    world.take_from_room(player, &term("pebble")).unwrap();
    world.remove_player(player).unwrap();

    assert!(world.item_present(river, &term("pebble")).is_some());
    assert_consistent(&world);
}

#[test]
fn inventory_lists_descriptions() {
    let (mut world, _, _, player) = world();
    world.take_from_room(player, &term("pebble")).unwrap();
    assert_eq!(
        world.inventory_text(player).unwrap(),
        "You are carrying:\na pebble: A small, smooth stone."
    );
}
