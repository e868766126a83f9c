use crate::message::Message;
use crate::router::PanelId;
use crate::theme;

/// Stand-in for a tool panel that lives outside the shell.
#[derive(Debug, Clone)]
pub struct PlaceholderPanel {
    id: PanelId,
    title: &'static str,
    blurb: &'static str,
}

impl PlaceholderPanel {
    pub fn new(id: PanelId, title: &'static str, blurb: &'static str) -> Self {
        Self { id, title, blurb }
    }
}

impl super::Panel for PlaceholderPanel {
    fn id(&self) -> PanelId {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(self.title);
            ui.add_space(8.0);
            ui.colored_label(theme::MUTED_TEXT, self.blurb);
        });
    }
}

/// Stand-in for the chat tutor. Shows its greeting transcript only.
#[derive(Debug, Clone)]
pub struct ChatPanel {
    messages: Vec<Message>,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            messages: vec![Message::bot(
                "Hi! I'm your AI tutor. Ask me anything about your studies.",
            )],
        }
    }
}

impl super::Panel for ChatPanel {
    fn id(&self) -> PanelId {
        PanelId::Chat
    }

    fn title(&self) -> &str {
        "AI Chat Tutor"
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.title());
        ui.separator();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for message in &self.messages {
                    let (layout, fill) = if message.is_from_user() {
                        (egui::Layout::right_to_left(egui::Align::TOP), theme::ACTIVE_FILL)
                    } else {
                        (egui::Layout::left_to_right(egui::Align::TOP), theme::INACTIVE_FILL)
                    };
                    ui.with_layout(layout, |ui| {
                        egui::Frame::none()
                            .fill(fill)
                            .rounding(8.0)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.label(&message.text);
                            });
                    });
                }
            });
    }
}
