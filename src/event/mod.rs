mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::ShellEvent;
pub use handlers::{ModeChangeLogger, TransitionRecord, TransitionRecorder};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &ShellEvent);
}
