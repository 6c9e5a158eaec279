/// Lifecycle status shared by every event variant.
///
/// ```text
///         bind/add
/// Unbound -------> Active
/// Active  --pause--> Paused
/// Paused  --resume--> Active
/// Active/Paused --unbind--> Unbound
/// ```
///
/// `Unbound` is the initial state. It is not terminal: binding again revives the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventStatus {
    /// Listeners fire on checked invocation.
    Active,
    /// Listeners are retained but suppressed on invocation.
    Paused,
    /// No listeners are registered.
    #[default]
    Unbound,
}

impl EventStatus {
    /// Returns `true` if invocations currently reach listeners.
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, EventStatus::Active)
    }

    /// The status after a pause request. Only `Active` moves.
    #[inline]
    pub(crate) const fn paused(self) -> Self {
        match self {
            EventStatus::Active => EventStatus::Paused,
            other => other,
        }
    }

    /// The status after a resume request. Only `Paused` moves.
    #[inline]
    pub(crate) const fn resumed(self) -> Self {
        match self {
            EventStatus::Paused => EventStatus::Active,
            other => other,
        }
    }
}
