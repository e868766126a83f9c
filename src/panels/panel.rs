use crate::router::PanelId;

/// A tool panel the shell can show in its content area.
///
/// Panels own their behavior; the shell only decides which one is drawn.
pub trait Panel {
    fn id(&self) -> PanelId;

    fn title(&self) -> &str;

    /// Draw the panel into the content area.
    fn ui(&mut self, ui: &mut egui::Ui);
}

/// The four panels, one per [`PanelId`].
pub struct PanelSet {
    chat: Box<dyn Panel>,
    image_analyzer: Box<dyn Panel>,
    complex_solver: Box<dyn Panel>,
    formula_sheet: Box<dyn Panel>,
}

impl std::fmt::Debug for PanelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelSet")
            .field("chat", &self.chat.title())
            .field("image_analyzer", &self.image_analyzer.title())
            .field("complex_solver", &self.complex_solver.title())
            .field("formula_sheet", &self.formula_sheet.title())
            .finish()
    }
}

impl PanelSet {
    pub fn new(
        chat: Box<dyn Panel>,
        image_analyzer: Box<dyn Panel>,
        complex_solver: Box<dyn Panel>,
        formula_sheet: Box<dyn Panel>,
    ) -> Self {
        Self {
            chat,
            image_analyzer,
            complex_solver,
            formula_sheet,
        }
    }

    /// Stand-in panels for all four tools.
    pub fn placeholders() -> Self {
        use super::placeholders::{ChatPanel, PlaceholderPanel};

        Self::new(
            Box::new(ChatPanel::default()),
            Box::new(PlaceholderPanel::new(
                PanelId::ImageAnalyzer,
                "Image Problem Solver",
                "Upload a photo of a problem and get a worked solution.",
            )),
            Box::new(PlaceholderPanel::new(
                PanelId::ComplexSolver,
                "Complex Query Mode",
                "Ask multi-step questions that need deeper reasoning.",
            )),
            Box::new(PlaceholderPanel::new(
                PanelId::FormulaSheetGenerator,
                "Formula Sheets",
                "Generate a formula sheet for any topic.",
            )),
        )
    }

    pub fn panel(&self, id: PanelId) -> &dyn Panel {
        match id {
            PanelId::Chat => self.chat.as_ref(),
            PanelId::ImageAnalyzer => self.image_analyzer.as_ref(),
            PanelId::ComplexSolver => self.complex_solver.as_ref(),
            PanelId::FormulaSheetGenerator => self.formula_sheet.as_ref(),
        }
    }

    pub fn panel_mut(&mut self, id: PanelId) -> &mut dyn Panel {
        match id {
            PanelId::Chat => self.chat.as_mut(),
            PanelId::ImageAnalyzer => self.image_analyzer.as_mut(),
            PanelId::ComplexSolver => self.complex_solver.as_mut(),
            PanelId::FormulaSheetGenerator => self.formula_sheet.as_mut(),
        }
    }
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::placeholders()
    }
}
