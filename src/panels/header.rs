use crate::theme;

/// Static title bar above the navigation.
pub fn header(ctx: &egui::Context, title: &str) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(theme::SURFACE)
                .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                .stroke(egui::Stroke::new(1.0, theme::BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(title).strong().color(theme::ACTIVE_TEXT));
            });
        });
}
