#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod mode;
pub mod panels;
pub mod router;
pub mod state;
pub mod theme;
pub mod util;

pub use app::TutorApp;
pub use components::NavButton;
pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use message::{Message, Sender};
pub use mode::Mode;
pub use router::{PanelId, route, route_tag};
pub use state::{ModeChange, ModeState};
