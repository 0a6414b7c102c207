//! Dispatch priority and fault isolation.

use waymark_engine::{CommandDef, DispatchReply, Engine, EngineConfig, ItemDef, Route, WorldBuilder};
use waymark_foundation::{Error, PlayerId, Term};

const FALLBACK: &str = "I don't understand what you said, sorry.";

fn term(s: &str) -> Term {
    Term::normalize(s).unwrap()
}

/// A river with a bell nobody can take and a stone; the bell overrides
/// `ring` and `take`.
fn engine() -> (Engine, PlayerId) {
    let mut builder = WorldBuilder::new();
    builder
        .define_room("river", "A river.")
        .unwrap()
        .add_item(
            ItemDef::new("bell", "A brass bell.")
                .with_action("ring", |_, rest| Ok(format!("Ding ({} more).", rest.len())))
                .with_action("take", |_, _| Ok("It is bolted down.".to_string())),
        )
        .add_item(ItemDef::new("stone", "A grey stone.").with_action("lick", |ctx, _| {
            Ok(match ctx.receiver() {
                Some(_) => "Salty.".to_string(),
                None => "Nothing to lick.".to_string(),
            })
        }))
        .add_exit("north", "hill");
    builder.define_room("hill", "A hill.").unwrap();

    let mut engine = Engine::with_world(EngineConfig::default(), builder).unwrap();
    engine
        .register_command(CommandDef::new("ring").with_handler(|_, _| Ok("You hum.".to_string())))
        .unwrap();
    let player = engine.start_player("Ada", "river").unwrap();
    (engine, player)
}

#[test]
fn room_item_override_beats_registry() {
    let (mut engine, player) = engine();
    assert_eq!(engine.execute(player, "take bell"), "It is bolted down.");
    assert!(engine.world().player(player).unwrap().inventory().is_empty());
}

#[test]
fn registry_handles_items_without_override() {
    let (mut engine, player) = engine();
    assert_eq!(engine.execute(player, "take stone"), "You got stone.");
}

#[test]
fn registry_handles_verb_without_objects() {
    let (mut engine, player) = engine();
    assert_eq!(engine.execute(player, "ring"), "You hum.");
}

#[test]
fn only_first_object_selects_the_item() {
    let (mut engine, player) = engine();
    assert_eq!(engine.execute(player, "ring bell stone river"), "Ding (2 more).");
    assert_eq!(engine.execute(player, "ring stone bell"), "You hum.");
}

#[test]
fn carried_item_override_sees_its_receiver() {
    let (mut engine, player) = engine();
    engine.execute(player, "take stone");
    assert_eq!(engine.execute(player, "lick stone"), "Salty.");
    assert!(engine.world().carried(player, &term("stone")).unwrap().is_some());
}

#[test]
fn route_reports_where_a_command_goes() {
    let (mut engine, player) = engine();
    engine.execute(player, "take stone");

    let world = engine.world();
    let room = world.player_room(player).unwrap();
    let bell = world.item_present(room, &term("bell")).unwrap();
    let stone = world.carried(player, &term("stone")).unwrap().unwrap();

    let dispatcher = waymark_engine::Dispatcher::new(engine.commands(), engine.synonyms(), FALLBACK);
    assert_eq!(
        dispatcher.route(world, player, &term("ring"), &[term("bell")]).unwrap(),
        Route::RoomItem(bell)
    );
    assert_eq!(
        dispatcher.route(world, player, &term("lick"), &[term("stone")]).unwrap(),
        Route::InventoryItem(stone)
    );
    assert_eq!(dispatcher.route(world, player, &term("ring"), &[]).unwrap(), Route::Player);
    assert_eq!(dispatcher.route(world, player, &term("dance"), &[]).unwrap(), Route::Fallback);
}

#[test]
fn unknown_verb_falls_back() {
    let (mut engine, player) = engine();
    assert_eq!(engine.execute(player, "dance"), "I don't understand 'dance'.");
}

#[test]
fn verb_naming_a_carried_item_asks_what_to_do() {
    let (mut engine, player) = engine();
    engine.execute(player, "take stone");
    assert_eq!(engine.execute(player, "stone"), "Do what with 'stone'?");
}

#[test]
fn item_handler_only_applies_where_the_item_is() {
    let (mut engine, player) = engine();
    engine.execute(player, "north");
    assert_eq!(engine.execute(player, "ring bell"), "You hum.");
    assert_eq!(engine.execute(player, "lick stone"), "I don't understand 'lick'.");
}

#[test]
fn stopword_only_line_gets_fallback() {
    let (mut engine, player) = engine();
    assert_eq!(engine.execute(player, "at with on"), FALLBACK);
    assert_eq!(engine.execute(player, ""), FALLBACK);
}

#[test]
fn failing_and_panicking_handlers_are_isolated() {
    let (mut engine, player) = engine();
    engine
        .register_command(CommandDef::new("fail").with_handler(|_, _| Err(Error::handler("boom"))))
        .unwrap();
    engine
        .register_command(CommandDef::new("explode").with_handler(|_, _| panic!("kaboom")))
        .unwrap();

    assert_eq!(engine.execute(player, "fail"), FALLBACK);
    assert_eq!(engine.execute(player, "explode"), FALLBACK);
    assert_eq!(engine.execute(player, "take stone"), "You got stone.");
}

#[test]
fn missing_object_error_becomes_fallback() {
    let (mut engine, player) = engine();
    engine
        .register_command(CommandDef::new("poke").with_handler(|ctx, objects| {
            let target = ctx.require_object(objects)?;
            Ok(format!("You poke the {}.", target.display_name()))
        }))
        .unwrap();

    assert_eq!(engine.execute(player, "poke"), FALLBACK);
    assert_eq!(engine.execute(player, "poke bell"), "You poke the bell.");
}

#[test]
fn custom_fallback_message() {
    let mut engine = Engine::new(EngineConfig::default().with_fallback_message("Eh?")).unwrap();
    let mut builder = WorldBuilder::new();
    builder.define_room("void", "Nothing.").unwrap();
    engine.load(builder).unwrap();
    let player = engine.start_player("Ada", "void").unwrap();
    assert_eq!(engine.execute(player, "at"), "Eh?");
}

#[test]
fn batch_runs_commands_in_order() {
    let (mut engine, player) = engine();
    let commands = vec![engine.parse("take stone"), engine.parse("north"), engine.parse("drop stone")];

    let replies = engine.dispatch_batch(player, &commands).into_replies();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0], "You got stone.");
    assert!(replies[1].starts_with("Hill\nA hill."));
    assert_eq!(replies[2], "Dropped stone.");
}

#[test]
fn batch_of_one_is_single() {
    let (mut engine, player) = engine();
    let commands = vec![engine.parse("ring")];
    assert_eq!(
        engine.dispatch_batch(player, &commands),
        DispatchReply::Single("You hum.".to_string())
    );
    assert_eq!(engine.dispatch_batch(player, &[]), DispatchReply::Many(Vec::new()));
}

#[test]
fn engines_do_not_share_state() {
    let (mut first, ada) = engine();
    let (second, bo) = engine();

    first.execute(ada, "take stone");
    first
        .register_command(CommandDef::new("wave").with_handler(|_, _| Ok("You wave.".to_string())))
        .unwrap();

    assert!(second.world().player(bo).unwrap().inventory().is_empty());
    assert!(second.command(&term("wave")).is_none());
    assert_eq!(first.execute(ada, "wave"), "You wave.");
}
