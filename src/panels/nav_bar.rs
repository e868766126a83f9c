use crate::components::NavButton;
use crate::config::ShellConfig;
use crate::mode::Mode;
use crate::state::ModeState;
use crate::theme;

const GAP: f32 = 8.0;

/// One button per mode, in navigation order.
pub fn nav_buttons(current: Mode, compact: bool) -> [NavButton; 4] {
    Mode::ALL.map(|target| NavButton::new(current, target).compact(compact))
}

pub fn is_compact(available_width: f32, config: &ShellConfig) -> bool {
    available_width < config.compact_breakpoint
}

/// Navigation bar. A click is applied to `state` before this returns, so the
/// content drawn afterwards in the same frame already shows the new panel.
pub fn nav_bar(ui: &mut egui::Ui, state: &mut ModeState, config: &ShellConfig) {
    let compact = is_compact(ui.available_width(), config);
    let buttons = nav_buttons(state.current(), compact);
    let mut clicked = None;

    egui::Frame::none()
        .fill(theme::NAV_SURFACE)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .rounding(12.0)
        .inner_margin(GAP)
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(GAP, GAP);
            if compact {
                let width = ui.available_width();
                ui.vertical(|ui| {
                    for button in &buttons {
                        clicked = clicked.or(button.show_sized(ui, width));
                    }
                });
            } else {
                let widths = buttons.map(|button| button.desired_width(ui));
                let total = widths.iter().sum::<f32>() + GAP * (widths.len() - 1) as f32;
                ui.horizontal(|ui| {
                    ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
                    for (button, width) in buttons.iter().zip(widths) {
                        clicked = clicked.or(button.show_sized(ui, width));
                    }
                });
            }
        });

    if let Some(target) = clicked {
        if state.set_mode(target).is_changed() {
            ui.ctx().request_repaint();
        }
    }
}
