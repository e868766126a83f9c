mod nav_button;

pub use nav_button::NavButton;
