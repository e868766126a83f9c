use crate::event::{EventBus, EventHandler, ShellEvent};
use crate::mode::Mode;

/// Outcome of a [`ModeState::set_mode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    Changed { from: Mode, to: Mode },
    /// The requested mode was already active.
    Unchanged(Mode),
}

impl ModeChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Owns the single active [`Mode`].
///
/// The setter is the only way to mutate it. Readers get copies through
/// [`ModeState::current`]; subscribers hear about real changes only.
#[derive(Debug, Default)]
pub struct ModeState {
    current: Mode,
    revision: u64,
    event_bus: EventBus,
}

impl ModeState {
    /// Starts in [`Mode::Chatbot`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Number of real mode changes since start.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.current == mode
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    /// Replace the active mode.
    ///
    /// Activating the already active mode is a no-op: no revision bump and no
    /// event.
    pub fn set_mode(&mut self, next: Mode) -> ModeChange {
        if self.current == next {
            log::debug!("Mode {} already active", next);
            return ModeChange::Unchanged(next);
        }

        let from = std::mem::replace(&mut self.current, next);
        self.revision += 1;
        self.event_bus.emit(ShellEvent::ModeChanged {
            from,
            to: next,
            revision: self.revision,
        });

        ModeChange::Changed { from, to: next }
    }
}
