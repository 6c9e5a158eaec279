/// Declare a named [`SingleEvent`](crate::SingleEvent) type for a payload signature.
///
/// One type argument is used as-is, several are packed into a tuple, none gives `()`.
///
/// ```rust
/// use rusty_events::declare_single_event;
///
/// declare_single_event!(pub MySingleEvent, i32, String);
///
/// let mut event = MySingleEvent::new();
/// event.bind(|(value, message)| println!("{value}: {message}"));
/// event.execute((10, "hello".to_string()));
/// ```
#[macro_export]
macro_rules! declare_single_event {
    ($(#[$meta:meta])* $vis:vis $name:ident $(,)?) => {
        $(#[$meta])*
        $vis type $name = $crate::SingleEvent<()>;
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $arg:ty $(,)?) => {
        $(#[$meta])*
        $vis type $name = $crate::SingleEvent<$arg>;
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $($arg:ty),+ $(,)?) => {
        $(#[$meta])*
        $vis type $name = $crate::SingleEvent<($($arg),+)>;
    };
}

/// Declare a named [`BroadcastEvent`](crate::BroadcastEvent) type for a payload signature.
///
/// ```rust
/// use rusty_events::declare_broadcast_event;
///
/// declare_broadcast_event!(FloatBroadcastEvent, f32);
///
/// let mut event = FloatBroadcastEvent::new();
/// event.add(|number| println!("received {number}"));
/// event.broadcast(2.5);
/// ```
#[macro_export]
macro_rules! declare_broadcast_event {
    ($(#[$meta:meta])* $vis:vis $name:ident $(,)?) => {
        $(#[$meta])*
        $vis type $name = $crate::BroadcastEvent<()>;
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $arg:ty $(,)?) => {
        $(#[$meta])*
        $vis type $name = $crate::BroadcastEvent<$arg>;
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $($arg:ty),+ $(,)?) => {
        $(#[$meta])*
        $vis type $name = $crate::BroadcastEvent<($($arg),+)>;
    };
}
