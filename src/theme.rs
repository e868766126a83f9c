use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const SURFACE: Color32 = Color32::from_rgb(31, 41, 55);
pub const NAV_SURFACE: Color32 = Color32::from_rgba_premultiplied(16, 20, 28, 128);
pub const BORDER: Color32 = Color32::from_rgb(55, 65, 81);

pub const ACTIVE_FILL: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACTIVE_TEXT: Color32 = Color32::WHITE;
pub const INACTIVE_FILL: Color32 = Color32::from_rgb(55, 65, 81);
pub const INACTIVE_HOVER_FILL: Color32 = Color32::from_rgb(75, 85, 99);
pub const INACTIVE_TEXT: Color32 = Color32::from_rgb(209, 213, 219);
pub const FOCUS_RING: Color32 = Color32::from_rgb(59, 130, 246);

pub const MUTED_TEXT: Color32 = Color32::from_gray(156);

/// Dark visuals with the shell's panel background.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = SURFACE;
    ctx.set_visuals(visuals);
}
