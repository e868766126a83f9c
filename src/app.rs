use crate::config::ShellConfig;
use crate::event::{ModeChangeLogger, TransitionRecorder};
use crate::mode::Mode;
use crate::panels::{self, PanelSet};
use crate::state::ModeState;
use crate::theme;

/// The application shell: header, navigation and the routed tool panel.
///
/// Nothing here is persisted; every launch starts in [`Mode::Chatbot`].
#[derive(Debug)]
pub struct TutorApp {
    config: ShellConfig,
    mode: ModeState,
    panels: PanelSet,
    transitions: TransitionRecorder,
    show_debug: bool,
}

impl Default for TutorApp {
    fn default() -> Self {
        Self::with_config(ShellConfig::default())
    }
}

impl TutorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: ShellConfig) -> Self {
        theme::apply(&cc.egui_ctx);
        Self::with_config(config)
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self::with_panels(config, PanelSet::placeholders())
    }

    pub fn with_panels(config: ShellConfig, panels: PanelSet) -> Self {
        let mode = ModeState::new();
        let transitions = TransitionRecorder::default();
        mode.subscribe(Box::new(ModeChangeLogger));
        mode.subscribe(Box::new(transitions.clone()));

        Self {
            show_debug: config.show_debug_window,
            config,
            mode,
            panels,
            transitions,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.current()
    }

    pub fn mode_state_mut(&mut self) -> &mut ModeState {
        &mut self.mode
    }

    pub fn transitions(&self) -> &TransitionRecorder {
        &self.transitions
    }

    /// Draw one full frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        panels::header(ctx, &self.config.window_title);

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let width = available.width().min(self.config.content_max_width);
            let column = egui::Rect::from_min_size(
                egui::pos2(available.center().x - width / 2.0, available.min.y),
                egui::vec2(width, available.height()),
            );

            ui.allocate_new_ui(egui::UiBuilder::new().max_rect(column), |ui| {
                panels::nav_bar(ui, &mut self.mode, &self.config);
                ui.add_space(16.0);
                panels::content_panel(ui, self.mode.current(), &mut self.panels);
            });
        });

        if ctx.input(|i| i.key_pressed(egui::Key::F12)) {
            self.show_debug = !self.show_debug;
        }
        if self.show_debug {
            self.debug_window(ctx);
        }
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Navigation Debug")
            .open(&mut self.show_debug)
            .default_pos(egui::pos2(20.0, 80.0))
            .show(ctx, |ui| {
                ui.label(format!("Mode: {}", self.mode.current()));
                ui.label(format!("Revision: {}", self.mode.revision()));
                ui.label(format!("Router fallbacks: {}", crate::router::fallback_count()));
                ui.separator();

                egui::Grid::new("transition_grid")
                    .num_columns(4)
                    .spacing([24.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("#");
                        ui.strong("When");
                        ui.strong("From");
                        ui.strong("To");
                        ui.end_row();

                        for record in self.transitions.records().iter().rev() {
                            ui.label(record.revision.to_string());
                            ui.label(crate::util::time::clock_label(record.at));
                            ui.label(record.from.tag());
                            ui.label(record.to.tag());
                            ui.end_row();
                        }
                    });

                if ui.button("Clear").clicked() {
                    self.transitions.clear();
                }
            });
    }
}

impl eframe::App for TutorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
