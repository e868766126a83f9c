mod content_panel;
mod header;
mod nav_bar;
mod panel;
mod placeholders;

pub use content_panel::content_panel;
pub use header::header;
pub use nav_bar::{is_compact, nav_bar, nav_buttons};
pub use panel::{Panel, PanelSet};
pub use placeholders::{ChatPanel, PlaceholderPanel};
