use std::sync::Arc;

use parking_lot::Mutex;
use tutor_shell::event::{EventHandler, ShellEvent, TransitionRecorder};
use tutor_shell::panels::nav_buttons;
use tutor_shell::router::{self, PanelId};
use tutor_shell::{Mode, ModeChange, ModeState};

// Simulates a click on the button bound to `target`
fn click(state: &mut ModeState, target: Mode) -> ModeChange {
    let button = nav_buttons(state.current(), false)
        .into_iter()
        .find(|button| button.target == target)
        .unwrap();
    state.set_mode(button.target)
}

fn active_targets(state: &ModeState) -> Vec<Mode> {
    let buttons = nav_buttons(state.current(), false);
    for button in &buttons {
        assert_eq!(button.is_active(), state.is_active(button.target));
    }
    buttons
        .iter()
        .filter(|button| button.is_active())
        .map(|button| button.target)
        .collect()
}

#[derive(Clone, Default)]
struct Collector(Arc<Mutex<Vec<ShellEvent>>>);

impl EventHandler for Collector {
    fn handle_event(&mut self, event: &ShellEvent) {
        self.0.lock().push(*event);
    }
}

#[test]
fn test_initial_state_is_chatbot() {
    let state = ModeState::new();
    assert_eq!(state.current(), Mode::Chatbot);
    assert_eq!(state.revision(), 0);
    assert_eq!(router::route(state.current()), PanelId::Chat);
    assert_eq!(active_targets(&state), vec![Mode::Chatbot]);
}

#[test]
fn test_each_button_routes_to_its_panel() {
    let expected = [
        (Mode::Chatbot, PanelId::Chat),
        (Mode::Image, PanelId::ImageAnalyzer),
        (Mode::Complex, PanelId::ComplexSolver),
        (Mode::Formula, PanelId::FormulaSheetGenerator),
    ];

    let mut state = ModeState::new();
    for (mode, panel) in expected {
        click(&mut state, mode);
        assert_eq!(state.current(), mode);
        assert_eq!(router::route(state.current()), panel);
    }
}

#[test]
fn test_exactly_one_button_active() {
    let mut state = ModeState::new();
    for from in Mode::ALL {
        for to in Mode::ALL {
            click(&mut state, from);
            click(&mut state, to);
            assert_eq!(active_targets(&state), vec![to]);
        }
    }
}

#[test]
fn test_click_image_from_start() {
    let mut state = ModeState::new();
    let change = click(&mut state, Mode::Image);

    assert_eq!(change, ModeChange::Changed { from: Mode::Chatbot, to: Mode::Image });
    assert_eq!(router::route(state.current()), PanelId::ImageAnalyzer);

    let buttons = nav_buttons(state.current(), false);
    for button in &buttons {
        assert_eq!(button.is_active(), button.target == Mode::Image);
    }
}

#[test]
fn test_repeated_click_is_idempotent() {
    let mut state = ModeState::new();
    click(&mut state, Mode::Formula);

    assert!(click(&mut state, Mode::Complex).is_changed());
    let revision = state.revision();

    let change = click(&mut state, Mode::Complex);
    assert_eq!(change, ModeChange::Unchanged(Mode::Complex));
    assert_eq!(state.current(), Mode::Complex);
    assert_eq!(state.revision(), revision);
}

#[test]
fn test_only_real_changes_are_broadcast() {
    let mut state = ModeState::new();
    let collector = Collector::default();
    state.subscribe(Box::new(collector.clone()));

    click(&mut state, Mode::Chatbot);
    click(&mut state, Mode::Image);
    click(&mut state, Mode::Image);
    click(&mut state, Mode::Formula);

    let events = collector.0.lock().clone();
    assert_eq!(
        events,
        vec![
            ShellEvent::ModeChanged { from: Mode::Chatbot, to: Mode::Image, revision: 1 },
            ShellEvent::ModeChanged { from: Mode::Image, to: Mode::Formula, revision: 2 },
        ]
    );
}

#[test]
fn test_recorder_is_bounded() {
    let mut state = ModeState::new();
    let recorder = TransitionRecorder::new(2);
    state.subscribe(Box::new(recorder.clone()));

    for mode in [Mode::Image, Mode::Complex, Mode::Formula] {
        state.set_mode(mode);
    }

    let records = recorder.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].to, Mode::Complex);
    assert_eq!(records[1].to, Mode::Formula);
    assert_eq!(records[1].revision, 3);
}

#[test]
fn test_valid_tags_never_fall_back() {
    for mode in Mode::ALL {
        assert_eq!(router::route_tag(mode.tag()), router::route(mode));
    }
    assert_eq!(router::fallback_count(), 0);
}
