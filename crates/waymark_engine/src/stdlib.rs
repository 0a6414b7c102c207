//! Built-in player commands.
//!
//! Every engine starts with movement (`go` and the ten direction verbs),
//! `look`, `take`, `drop`, `inventory`, `say` and `quit`. Content registers
//! on top; since registration is idempotent, content cannot replace these.

use waymark_foundation::{Result, Term};
use waymark_parser::SynonymTable;
use waymark_parser::stdlib::DIRECTIONS;

use crate::action::ActionContext;
use crate::registry::{CommandDef, CommandRegistry};
use crate::world::{DropOutcome, MoveOutcome, TakeOutcome};

/// Farewell reply to `quit`.
pub const QUIT_MESSAGE: &str = "Thanks for playing!";

/// Registers the built-in commands.
///
/// # Errors
///
/// Returns an error only if a built-in verb fails to normalize, which
/// cannot happen for the fixed names used here.
pub fn register_commands(registry: &mut CommandRegistry, synonyms: &mut SynonymTable) -> Result<()> {
    registry.register(CommandDef::new("go").with_synonyms(["walk"]).with_handler(go), synonyms)?;

    for direction in DIRECTIONS {
        let Some(dir) = Term::normalize(direction) else {
            continue;
        };
        registry.register(
            CommandDef::new(*direction).with_handler(move |ctx, _| walk(ctx, &dir)),
            synonyms,
        )?;
    }

    registry.register(
        CommandDef::new("look")
            .with_synonyms(["l", "examine", "x"])
            .with_handler(look),
        synonyms,
    )?;
    registry.register(
        CommandDef::new("take")
            .with_synonyms(["get", "grab"])
            .with_handler(take),
        synonyms,
    )?;
    registry.register(CommandDef::new("drop").with_handler(drop), synonyms)?;
    registry.register(
        CommandDef::new("inventory")
            .with_synonyms(["i"])
            .with_handler(inventory),
        synonyms,
    )?;
    registry.register(
        CommandDef::new("say")
            .with_broadcast(spoken)
            .with_handler(say),
        synonyms,
    )?;
    registry.register(
        CommandDef::new("quit")
            .with_synonyms(["exit", "q"])
            .silent()
            .with_handler(|_, _| Ok(QUIT_MESSAGE.to_string())),
        synonyms,
    )?;

    Ok(())
}

fn go(ctx: &mut ActionContext<'_>, objects: &[Term]) -> Result<String> {
    match objects.first() {
        Some(direction) => walk(ctx, direction),
        None => Ok("Go where?".to_string()),
    }
}

fn walk(ctx: &mut ActionContext<'_>, direction: &Term) -> Result<String> {
    let actor = ctx.actor();
    match ctx.world_mut().move_player(actor, direction)? {
        MoveOutcome::Moved(room) => Ok(ctx.world().describe_room(room)),
        MoveOutcome::NoWay => Ok(format!("No way to go {}.", direction.display_name())),
    }
}

fn look(ctx: &mut ActionContext<'_>, objects: &[Term]) -> Result<String> {
    let Some(target) = objects.first() else {
        return ctx.describe_here();
    };

    let world = ctx.world();
    let found = match world.carried(ctx.actor(), target)? {
        Some(item) => Some(item),
        None => world.item_present(ctx.current_room()?, target),
    };

    Ok(match found.and_then(|id| world.item(id)) {
        Some(item) => item.describe(),
        None => format!("You don't see any {} here.", target.display_name()),
    })
}

fn take(ctx: &mut ActionContext<'_>, objects: &[Term]) -> Result<String> {
    let Some(target) = objects.first() else {
        return Ok("Take what?".to_string());
    };
    let actor = ctx.actor();
    match ctx.world_mut().take_from_room(actor, target)? {
        TakeOutcome::Taken(id) => Ok(format!("You got {}.", item_name(ctx, id))),
        TakeOutcome::NotHere => Ok(format!("There is no {} here.", target.display_name())),
    }
}

fn drop(ctx: &mut ActionContext<'_>, objects: &[Term]) -> Result<String> {
    let Some(target) = objects.first() else {
        return Ok("Drop what?".to_string());
    };
    let actor = ctx.actor();
    match ctx.world_mut().drop_to_room(actor, target)? {
        DropOutcome::Dropped(id) => Ok(format!("Dropped {}.", item_name(ctx, id))),
        DropOutcome::NotCarried => Ok(format!("You don't have a {}.", target.display_name())),
    }
}

fn inventory(ctx: &mut ActionContext<'_>, _objects: &[Term]) -> Result<String> {
    ctx.world().inventory_text(ctx.actor())
}

fn say(_ctx: &mut ActionContext<'_>, objects: &[Term]) -> Result<String> {
    if objects.is_empty() {
        return Ok("Say what?".to_string());
    }
    Ok(format!("You say, \"{}\".", spoken(objects)))
}

/// Objects rendered back into words.
fn spoken(objects: &[Term]) -> String {
    objects
        .iter()
        .map(Term::display_name)
        .collect::<Vec<_>>()
        .join(" ")
}

fn item_name(ctx: &ActionContext<'_>, id: waymark_foundation::ItemId) -> String {
    ctx.world()
        .item(id)
        .map_or_else(String::new, |item| item.name().display_name())
}
