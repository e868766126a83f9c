use crate::mode::Mode;

/// Something the shell broadcasts to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The active mode was replaced by a different one.
    ModeChanged {
        from: Mode,
        to: Mode,
        revision: u64,
    },
}
