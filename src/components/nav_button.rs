use egui::{Align2, FontId, Rect, Sense, Stroke, Vec2};

use crate::mode::{Mode, NavLabel};
use crate::theme;

const PADDING: Vec2 = Vec2::new(16.0, 12.0);
const ICON_GAP: f32 = 8.0;
const ROUNDING: f32 = 8.0;
const FONT_SIZE: f32 = 14.0;

/// A navigation control bound to one fixed target mode.
///
/// Stateless: whether it is drawn active is decided purely by comparing the
/// current mode with the target.
#[derive(Debug, Clone, Copy)]
pub struct NavButton {
    pub current: Mode,
    pub target: Mode,
    pub label: NavLabel,
    pub compact: bool,
}

impl NavButton {
    pub fn new(current: Mode, target: Mode) -> Self {
        Self {
            current,
            target,
            label: target.label(),
            compact: false,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn is_active(&self) -> bool {
        self.current == self.target
    }

    /// Stable widget id, keyed by target so it survives mode and layout changes.
    pub fn id(&self) -> egui::Id {
        egui::Id::new(("nav_button", self.target))
    }

    /// Width needed to fit the icon and label without wrapping.
    pub fn desired_width(&self, ui: &egui::Ui) -> f32 {
        let font_id = FontId::proportional(FONT_SIZE);
        let painter = ui.painter();
        let icon = painter.layout_no_wrap(self.label.icon.to_owned(), font_id.clone(), theme::ACTIVE_TEXT);
        let text = painter.layout_no_wrap(self.label.text(self.compact).to_owned(), font_id, theme::ACTIVE_TEXT);
        icon.size().x + ICON_GAP + text.size().x + PADDING.x * 2.0
    }

    /// Draw the button at its desired width. Returns the target when clicked.
    pub fn show(&self, ui: &mut egui::Ui) -> Option<Mode> {
        let width = self.desired_width(ui);
        self.show_sized(ui, width)
    }

    /// Draw the button with a fixed width. Returns the target when clicked.
    pub fn show_sized(&self, ui: &mut egui::Ui, width: f32) -> Option<Mode> {
        let height = FONT_SIZE + PADDING.y * 2.0;
        let (_, rect) = ui.allocate_space(Vec2::new(width, height));
        let response = ui
            .interact(rect, self.id(), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, response.hovered(), response.has_focus());
        }

        response.clicked().then_some(self.target)
    }

    /// Draw the button and hand the target to `on_activate` when clicked.
    pub fn show_with(&self, ui: &mut egui::Ui, on_activate: impl FnOnce(Mode)) {
        if let Some(target) = self.show(ui) {
            on_activate(target);
        }
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, hovered: bool, focused: bool) {
        let (fill, text_color) = if self.is_active() {
            (theme::ACTIVE_FILL, theme::ACTIVE_TEXT)
        } else if hovered {
            (theme::INACTIVE_HOVER_FILL, theme::ACTIVE_TEXT)
        } else {
            (theme::INACTIVE_FILL, theme::INACTIVE_TEXT)
        };

        let painter = ui.painter();
        painter.rect_filled(rect, ROUNDING, fill);
        if focused {
            painter.rect_stroke(rect.expand(2.0), ROUNDING + 2.0, Stroke::new(2.0, theme::FOCUS_RING));
        }

        let font_id = FontId::proportional(FONT_SIZE);
        let text = self.label.text(self.compact);
        let text_galley = painter.layout_no_wrap(text.to_owned(), font_id.clone(), text_color);
        let icon_galley = painter.layout_no_wrap(self.label.icon.to_owned(), font_id.clone(), text_color);
        let content_width = icon_galley.size().x + ICON_GAP + text_galley.size().x;

        // Icon and label are centered together as one group
        let left = rect.center().x - content_width / 2.0;
        painter.text(
            egui::pos2(left, rect.center().y),
            Align2::LEFT_CENTER,
            self.label.icon,
            font_id.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(left + icon_galley.size().x + ICON_GAP, rect.center().y),
            Align2::LEFT_CENTER,
            text,
            font_id,
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: NavButton = NavButton {
        current: Mode::Chatbot,
        target: Mode::Formula,
        label: NavLabel {
            icon: "∑",
            full: "Formula Sheets",
            short: "Formulas",
        },
        compact: false,
    };

    fn input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn press(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    // Runs frames of a lone button, one frame per event batch
    fn run_frames(batches: Vec<Vec<egui::Event>>) -> Vec<Mode> {
        let ctx = egui::Context::default();
        let mut fired = Vec::new();
        for events in batches {
            let _ = ctx.run(input(events), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    BUTTON.show_with(ui, |mode| fired.push(mode));
                });
            });
        }
        fired
    }

    fn button_center() -> egui::Pos2 {
        let ctx = egui::Context::default();
        let _ = ctx.run(input(Vec::new()), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                BUTTON.show(ui);
            });
        });
        ctx.read_response(BUTTON.id()).unwrap().rect.center()
    }

    #[test]
    fn active_only_when_current_matches_target() {
        assert!(NavButton::new(Mode::Image, Mode::Image).is_active());
        assert!(!NavButton::new(Mode::Chatbot, Mode::Image).is_active());
    }

    #[test]
    fn id_ignores_current_mode() {
        assert_eq!(
            NavButton::new(Mode::Chatbot, Mode::Image).id(),
            NavButton::new(Mode::Complex, Mode::Image).compact(true).id()
        );
    }

    #[test]
    fn show_with_does_not_fire_without_a_click() {
        assert!(run_frames(vec![Vec::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn show_with_passes_target_on_click() {
        let pos = button_center();
        let fired = run_frames(vec![
            Vec::new(),
            vec![egui::Event::PointerMoved(pos)],
            vec![press(pos, true)],
            vec![press(pos, false)],
            Vec::new(),
        ]);
        assert_eq!(fired, vec![Mode::Formula]);
    }
}
