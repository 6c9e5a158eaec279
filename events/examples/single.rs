//! Binding closures and plain functions to single events.

use rusty_events::{SingleEvent, declare_single_event};

fn on_event_function((value, message): (i32, String)) {
    println!("Function: Value = {value}, Message = {message}");
}

declare_single_event!(MySingleEvent, i32, String);

fn main() {
    // Declared through the naming macro
    let mut event = MySingleEvent::new();
    event.bind(|(value, message)| {
        println!("Closure (macro): Value = {value}, Message = {message}");
    });
    println!("Executing macro-declared single event with closure...");
    event.execute((10, "Hello from macro closure!".into()));

    // Rebinding replaces the closure
    event.bind(on_event_function);
    println!("Executing macro-declared single event with function...");
    event.execute((20, "Hello from macro function!".into()));

    // Spelled out as a generic instantiation
    let mut custom = SingleEvent::<(i32, String)>::new();
    custom.bind(|(value, message)| {
        println!("Closure (generic): Value = {value}, Message = {message}");
    });
    println!("Executing generic single event with closure...");
    custom.execute((30, "Hello from generic closure!".into()));

    custom.pause();
    println!("Executing paused event (nothing should print)...");
    custom.execute((35, "You should not see this".into()));
    custom.resume();

    custom.bind(on_event_function);
    println!("Executing generic single event with function...");
    custom.execute((40, "Hello from generic function!".into()));
}
