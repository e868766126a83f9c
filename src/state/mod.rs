mod mode_state;

pub use mode_state::{ModeChange, ModeState};
