//! Broadcast scoping through the coordinator.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use waymark_multiplayer::{BroadcastCoordinator, SessionId};

use crate::engine;

struct Client {
    id: SessionId,
    rx: UnboundedReceiver<String>,
}

impl Client {
    fn drain(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(text) = self.rx.try_recv() {
            out.push(text);
        }
        out
    }
}

fn join(coordinator: &mut BroadcastCoordinator, name: &str, room: &str) -> Client {
    let (tx, rx) = mpsc::unbounded_channel();
    let (id, _) = coordinator.join(name, room, tx).unwrap();
    Client { id, rx }
}

/// Ada and Bo in the river, Cy on the hill, with join notices drained.
fn three() -> (BroadcastCoordinator, Client, Client, Client) {
    let mut coordinator = BroadcastCoordinator::new(engine());
    let mut ada = join(&mut coordinator, "Ada", "river");
    let mut bo = join(&mut coordinator, "Bo", "river");
    let mut cy = join(&mut coordinator, "Cy", "hill");
    ada.drain();
    bo.drain();
    cy.drain();
    (coordinator, ada, bo, cy)
}

#[test]
fn join_is_announced_to_the_room() {
    let mut coordinator = BroadcastCoordinator::new(engine());
    let mut ada = join(&mut coordinator, "Ada", "river");
    let mut cy = join(&mut coordinator, "Cy", "hill");
    let _bo = join(&mut coordinator, "Bo", "river");

    assert_eq!(ada.drain(), vec!["Bo: has joined"]);
    assert!(cy.drain().is_empty());
}

#[test]
fn say_reaches_the_room_only() {
    let (mut coordinator, mut ada, mut bo, mut cy) = three();

    let outcome = coordinator.handle_line(ada.id, "say hello").unwrap();
    assert_eq!(outcome.reply, "You say, \"hello\".");
    assert!(!outcome.close);

    assert_eq!(bo.drain(), vec!["Ada: hello"]);
    assert!(cy.drain().is_empty());
    assert!(ada.drain().is_empty());
}

#[test]
fn unregistered_verb_echoes_the_line() {
    let (mut coordinator, ada, mut bo, mut cy) = three();
    coordinator.handle_line(ada.id, "  dance wildly ").unwrap();
    assert_eq!(bo.drain(), vec!["Ada: dance wildly"]);
    assert!(cy.drain().is_empty());
}

#[test]
fn moving_is_announced_to_the_room_left() {
    let (mut coordinator, ada, mut bo, mut cy) = three();
    coordinator.handle_line(ada.id, "north").unwrap();

    assert_eq!(bo.drain(), vec!["Ada: north"]);
    assert!(cy.drain().is_empty());
}

#[test]
fn silent_command_is_not_announced() {
    let mut coordinator = BroadcastCoordinator::new(engine());
    let ada = join(&mut coordinator, "Ada", "river");
    let mut bo = join(&mut coordinator, "Bo", "river");
    bo.drain();

    let outcome = coordinator.handle_line(ada.id, "quit").unwrap();
    assert_eq!(outcome.reply, "Thanks for playing!");
    assert!(outcome.close);
    assert_eq!(bo.drain(), vec!["Ada: has left"]);
    assert_eq!(coordinator.roster().len(), 1);
}

#[test]
fn global_verb_reaches_everyone() {
    let (mut coordinator, ada, mut bo, mut cy) = three();
    let outcome = coordinator.handle_line(ada.id, "yell").unwrap();

    assert_eq!(outcome.reply, "You yell.");
    assert_eq!(bo.drain(), vec!["Ada: yells "]);
    assert_eq!(cy.drain(), vec!["Ada: yells "]);
}

#[test]
fn global_verb_that_moves_is_delivered_again() {
    let (mut coordinator, ada, mut bo, mut cy) = three();
    coordinator.handle_line(ada.id, "yell north").unwrap();

    assert_eq!(bo.drain(), vec!["Ada: yells north", "Ada: yells north"]);
    assert_eq!(cy.drain(), vec!["Ada: yells north", "Ada: yells north"]);
}

#[test]
fn departed_session_hears_nothing() {
    let (mut coordinator, ada, mut bo, _cy) = three();
    coordinator.handle_line(bo.id, "quit").unwrap();
    bo.drain();

    coordinator.handle_line(ada.id, "say anyone").unwrap();
    assert!(bo.drain().is_empty());
    assert!(coordinator.handle_line(bo.id, "look").is_err());
}

#[test]
fn leaving_drops_carried_items() {
    let (mut coordinator, ada, bo, _cy) = three();
    coordinator.handle_line(ada.id, "take pebble").unwrap();
    coordinator.leave(ada.id).unwrap();

    let outcome = coordinator.handle_line(bo.id, "take pebble").unwrap();
    assert_eq!(outcome.reply, "You got pebble.");
}

#[test]
fn rename_changes_the_tag() {
    let (mut coordinator, ada, mut bo, _cy) = three();
    coordinator.rename(ada.id, "Ace").unwrap();
    coordinator.handle_line(ada.id, "say hi").unwrap();
    assert_eq!(bo.drain(), vec!["Ace: hi"]);
}

#[test]
fn same_string_different_scopes() {
    let (mut coordinator, ada, mut bo, mut cy) = three();
    coordinator.handle_line(ada.id, "say hi").unwrap();
    coordinator.handle_line(ada.id, "yell hi").unwrap();

    assert_eq!(bo.drain(), vec!["Ada: hi", "Ada: yells hi"]);
    assert_eq!(cy.drain(), vec!["Ada: yells hi"]);
}
