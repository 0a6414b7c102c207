//! End-to-end scenarios.
//!
//! Each test drives a world only through input lines, the way a player
//! would, and checks both the replies and the resulting world state.

use tokio::sync::mpsc;
use waymark_engine::{Engine, EngineConfig, WorldBuilder};
use waymark_foundation::Term;
use waymark_multiplayer::BroadcastCoordinator;
use waymark_runtime::content::{START_ROOM, demo_engine};
use waymark_runtime::{Repl, ScriptEditor};

fn term(s: &str) -> Term {
    Term::normalize(s).unwrap()
}

/// A river with a pebble and a one-way exit north to a hill.
fn river_and_hill() -> Engine {
    let mut builder = WorldBuilder::new();
    builder
        .define_room("river", "A peaceful river.")
        .unwrap()
        .add_exit("north", "hill")
        .item("pebble", "A small, smooth stone.", Vec::<String>::new());
    builder.define_room("hill", "On top of a hill.").unwrap();
    Engine::with_world(EngineConfig::default(), builder).unwrap()
}

#[test]
fn taking_the_pebble() {
    let mut engine = river_and_hill();
    let player = engine.start_player("Ada", "river").unwrap();

    assert_eq!(engine.execute(player, "take pebble"), "You got pebble.");

    let world = engine.world();
    let river = world.room_id("river").unwrap();
    assert!(world.carried(player, &term("pebble")).unwrap().is_some());
    assert!(world.item_present(river, &term("pebble")).is_none());
    assert!(!world.describe_room(river).contains("pebble"));
}

#[test]
fn walking_north_and_failing_south() {
    let mut engine = river_and_hill();
    let player = engine.start_player("Ada", "river").unwrap();
    let hill = engine.room("hill").unwrap();

    assert_eq!(engine.execute(player, "north"), "Hill\nOn top of a hill.");
    assert_eq!(engine.world().player_room(player).unwrap(), hill);

    assert_eq!(engine.execute(player, "south"), "No way to go south.");
    assert_eq!(engine.world().player_room(player).unwrap(), hill);
}

#[test]
fn saying_hello_to_the_room() {
    let mut coordinator = BroadcastCoordinator::new(river_and_hill());
    let (a_tx, _a_rx) = mpsc::unbounded_channel();
    let (b_tx, mut b_rx) = mpsc::unbounded_channel();
    let (c_tx, mut c_rx) = mpsc::unbounded_channel();

    let (a, _) = coordinator.join("A", "river", a_tx).unwrap();
    let _b = coordinator.join("B", "river", b_tx).unwrap();
    let _c = coordinator.join("C", "hill", c_tx).unwrap();
    assert!(b_rx.try_recv().is_err());

    coordinator.handle_line(a, "say hello").unwrap();
    assert_eq!(b_rx.try_recv().unwrap(), "A: hello");
    assert!(b_rx.try_recv().is_err());
    assert!(c_rx.try_recv().is_err());
}

#[test]
fn demo_world_walkthrough() {
    let mut engine = demo_engine(EngineConfig::default()).unwrap();
    let player = engine.start_player("Ada", START_ROOM).unwrap();

    let lake = engine.execute(player, "go west");
    assert!(lake.starts_with("The lake\nIsn't this lake awesome!\nEast, A river. North, A hill."));
    assert_eq!(engine.execute(player, "grab knife"), "You got a knife.");
    assert_eq!(engine.execute(player, "x food"), "food: Some food.");

    let hill = engine.execute(player, "n");
    assert!(hill.starts_with("A hill\nOn top of a hill."));
    assert_eq!(engine.execute(player, "drop knife"), "Dropped a knife.");
    assert!(engine.execute(player, "look").contains("There is a knife here."));

    engine.execute(player, "s");
    engine.execute(player, "get pebble");
    assert_eq!(engine.execute(player, "hit pebble"), "The pebble vanishes.");
    assert_eq!(engine.execute(player, "inventory"), "You are carrying:\nNothing");
}

#[test]
fn scripted_session_runs_to_quit() {
    let mut engine = demo_engine(EngineConfig::default()).unwrap();
    let player = engine.start_player("Ada", START_ROOM).unwrap();
    let script = ScriptEditor::new(["take pebble", "north", "quit", "south"]);

    let mut repl = Repl::with_editor(script, engine, player).without_banner();
    repl.run().unwrap();

    let world = repl.engine().world();
    let hill = world.room_id("a hill").unwrap();
    assert_eq!(world.player_room(repl.player()).unwrap(), hill);
    assert_eq!(world.player(repl.player()).unwrap().inventory().len(), 1);
}
