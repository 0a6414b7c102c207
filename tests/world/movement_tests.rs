//! Player movement tests.

use waymark_engine::{MoveOutcome, WorldBuilder, WorldGraph};
use waymark_foundation::{PlayerId, RoomId, Term};
use waymark_parser::SynonymTable;

fn term(s: &str) -> Term {
    Term::normalize(s).unwrap()
}

fn world() -> (WorldGraph, RoomId, RoomId, PlayerId) {
    let mut builder = WorldBuilder::new();
    builder.define_room("river", "A river.").unwrap().add_exit("north", "hill");
    builder.define_room("hill", "A hill.").unwrap().add_exit("south", "river");
    let mut world = builder.build(&mut SynonymTable::new()).unwrap();
    let river = world.room_id("river").unwrap();
    let hill = world.room_id("hill").unwrap();
    let player = world.start_player("Ada", river).unwrap();
    (world, river, hill, player)
}

#[test]
fn move_follows_exit() {
    let (mut world, _, hill, player) = world();
    assert_eq!(world.move_player(player, &term("north")).unwrap(), MoveOutcome::Moved(hill));
    assert_eq!(world.player_room(player).unwrap(), hill);
}

#[test]
fn failed_move_keeps_room_and_inventory() {
    let (mut world, river, _, player) = world();
    let before = world.player(player).unwrap().inventory().to_vec();

    assert_eq!(world.move_player(player, &term("up")).unwrap(), MoveOutcome::NoWay);
    assert_eq!(world.player_room(player).unwrap(), river);
    assert_eq!(world.player(player).unwrap().inventory(), before.as_slice());
}

#[test]
fn round_trip_returns_home() {
    let (mut world, river, _, player) = world();
    world.move_player(player, &term("north")).unwrap();
    world.move_player(player, &term("south")).unwrap();
    assert_eq!(world.player_room(player).unwrap(), river);
}

#[test]
fn players_are_not_listed_in_rooms() {
    let (mut world, river, hill, player) = world();
    let other = world.start_player("Bo", river).unwrap();
    world.move_player(player, &term("north")).unwrap();

    assert_eq!(world.players_in(river), vec![other]);
    assert_eq!(world.players_in(hill), vec![player]);
    assert!(world.room(river).unwrap().items().is_empty());
}

#[test]
fn runtime_exits_can_be_added() {
    let (mut world, river, hill, player) = world();
    world.add_exit(hill, term("down"), river).unwrap();
    world.move_player(player, &term("north")).unwrap();
    assert_eq!(world.move_player(player, &term("down")).unwrap(), MoveOutcome::Moved(river));
}
