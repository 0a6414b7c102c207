//! The demo world.
//!
//! A river with a pebble, a hill above it and a lake to the west with some
//! food and a knife. The pebble can be hit, but only while carried.

use waymark_engine::{ActionContext, CommandDef, Engine, EngineConfig, WorldBuilder};
use waymark_foundation::{Result, Term};

/// Where players start.
pub const START_ROOM: &str = "a river";

/// Builds the three demo rooms.
///
/// # Errors
///
/// Returns an error only if a room identifier is blank.
pub fn demo_world() -> Result<WorldBuilder> {
    let mut world = WorldBuilder::new();
    world.show_directions(true);

    world
        .define_room("a river", "A peaceful river.")?
        .item("a pebble", "A small, smooth stone.", ["pebble"])
        .add_exit("north", "a hill")
        .add_exit("west", "the lake");

    world
        .define_room("a hill", "On top of a hill.")?
        .add_exit("south", "a river");

    world
        .define_room("the lake", "Isn't this lake awesome!")?
        .add_exit("east", "a river")
        .add_exit("north", "a hill")
        .item("food", "Some food.", Vec::<String>::new())
        .item("a knife", "A sharp knife.", ["knife"]);

    Ok(world)
}

/// Registers the demo commands: `hit` (or `strike`), `sing` and `help`.
///
/// # Errors
///
/// Returns an error only if a verb is blank.
pub fn register_commands(engine: &mut Engine) -> Result<()> {
    engine.register_command(CommandDef::new("hit").with_synonyms(["strike"]).with_handler(hit))?;
    engine.register_command(
        CommandDef::new("sing").with_handler(|_, _| Ok("You sing a little song.".to_string())),
    )?;
    engine.register_command(CommandDef::new("help").with_handler(help))?;
    Ok(())
}

/// An engine with the demo world and commands loaded.
///
/// # Errors
///
/// Returns an error if the world fails to build.
pub fn demo_engine(config: EngineConfig) -> Result<Engine> {
    let mut engine = Engine::with_world(config, demo_world()?)?;
    register_commands(&mut engine)?;
    Ok(engine)
}

fn pebble() -> Option<Term> {
    Term::normalize("a pebble")
}

fn hit(ctx: &mut ActionContext<'_>, objects: &[Term]) -> Result<String> {
    let Some(target) = objects.first() else {
        return Ok("Hit what?".to_string());
    };
    if Some(target) != pebble().as_ref() {
        return Ok("You can't hit that.".to_string());
    }

    match ctx.carried(target)? {
        Some(item) => {
            ctx.world_mut().destroy_item(item)?;
            Ok("The pebble vanishes.".to_string())
        }
        None => Ok("You do not have a pebble.".to_string()),
    }
}

fn help(ctx: &mut ActionContext<'_>, _objects: &[Term]) -> Result<String> {
    let has_pebble = match pebble() {
        Some(pebble) => ctx.carried(&pebble)?.is_some(),
        None => false,
    };
    Ok(if has_pebble {
        "What? Lost? Try hitting the pebble.".to_string()
    } else {
        "Is the pebble gone? Because there's really nothing else.".to_string()
    })
}
