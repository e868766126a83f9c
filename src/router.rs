//! Mode to panel dispatch.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::mode::Mode;

/// Identifies one of the four tool panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Chat,
    ImageAnalyzer,
    ComplexSolver,
    FormulaSheetGenerator,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [
        PanelId::Chat,
        PanelId::ImageAnalyzer,
        PanelId::ComplexSolver,
        PanelId::FormulaSheetGenerator,
    ];
}

// Times `route_tag` has had to fall back. Must stay at zero.
static FALLBACK_COUNT: AtomicUsize = AtomicUsize::new(0);

/// The panel shown for `mode`.
pub fn route(mode: Mode) -> PanelId {
    match mode {
        Mode::Chatbot => PanelId::Chat,
        Mode::Image => PanelId::ImageAnalyzer,
        Mode::Complex => PanelId::ComplexSolver,
        Mode::Formula => PanelId::FormulaSheetGenerator,
    }
}

/// Route an untyped mode tag.
///
/// Unknown tags fall back to the chat panel. That should never happen with
/// tags produced by [`Mode::tag`], so it is logged as an error and counted.
pub fn route_tag(tag: &str) -> PanelId {
    match Mode::from_tag(tag) {
        Ok(mode) => route(mode),
        Err(err) => {
            FALLBACK_COUNT.fetch_add(1, Ordering::SeqCst);
            log::error!("{err}; falling back to the chat panel");
            PanelId::Chat
        }
    }
}

/// How many times [`route_tag`] fell back since process start.
pub fn fallback_count() -> usize {
    FALLBACK_COUNT.load(Ordering::SeqCst)
}
