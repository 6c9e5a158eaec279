//! Fanning a value out to closures and plain functions.

use std::{cell::Cell, rc::Rc};

use rusty_events::{BroadcastEvent, SubscriptionId, declare_broadcast_event};

fn regular_function(num: f32) {
    println!("Regular Function: Received float {num}");
}

declare_broadcast_event!(FloatBroadcastEvent, f32);

fn main() {
    // Declared through the naming macro
    let mut broadcast = FloatBroadcastEvent::new();
    broadcast.add(|number| println!("Closure Handler: Received float {number}"));
    broadcast.add(regular_function);

    println!("Triggering macro-declared BroadcastEvent...");
    broadcast.broadcast(2.5);

    // Spelled out as a generic instantiation
    let mut custom = BroadcastEvent::<f32>::new();
    let doubled = custom.add(|number| {
        println!("Closure: Received float {} (doubled)", number * 2.0);
    });
    custom.add(regular_function);

    println!("\nTriggering generic BroadcastEvent...");
    custom.broadcast(1.57);

    custom.remove(doubled);
    println!("\nTriggering after removing the doubling closure...");
    custom.broadcast(2.71);

    // A listener that unsubscribes itself through the command handle
    let commands = custom.commands();
    let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::default();
    let slot = own_id.clone();
    let one_shot = custom.add(move |number| {
        println!("One-shot: Received float {number}");
        if let Some(id) = slot.get() {
            commands.remove(id);
        }
    });
    own_id.set(Some(one_shot));

    println!("\nTriggering twice with a one-shot listener...");
    custom.broadcast(0.5);
    custom.broadcast(0.25);
}
