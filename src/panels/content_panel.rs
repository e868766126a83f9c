use crate::mode::Mode;
use crate::panels::PanelSet;
use crate::router;
use crate::theme;

/// Framed content area showing the panel routed from `mode`.
pub fn content_panel(ui: &mut egui::Ui, mode: Mode, panels: &mut PanelSet) {
    let panel = panels.panel_mut(router::route(mode));

    egui::Frame::none()
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .rounding(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.push_id(panel.title().to_owned(), |ui| panel.ui(ui));
        });
}
