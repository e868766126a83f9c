use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, ShellEvent};
use crate::mode::Mode;
use crate::util::time;

/// Logs every mode change at info level
#[derive(Debug, Default)]
pub struct ModeChangeLogger;

impl EventHandler for ModeChangeLogger {
    fn handle_event(&mut self, event: &ShellEvent) {
        match event {
            ShellEvent::ModeChanged { from, to, revision } => {
                log::info!("Mode changed: {} -> {} (revision {})", from, to, revision);
            }
        }
    }
}

/// One recorded mode change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRecord {
    pub from: Mode,
    pub to: Mode,
    pub revision: u64,
    /// Seconds since the UNIX epoch (page load time on the web)
    pub at: f64,
}

/// Keeps a bounded log of mode changes.
///
/// The log is shared, so a clone handed to the bus and the one kept by the
/// app both see the same records.
#[derive(Debug, Clone)]
pub struct TransitionRecorder {
    records: Arc<Mutex<Vec<TransitionRecord>>>,
    capacity: usize,
}

impl TransitionRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            capacity: capacity.max(1),
        }
    }

    /// Oldest first.
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for TransitionRecorder {
    fn default() -> Self {
        Self::new(32)
    }
}

impl EventHandler for TransitionRecorder {
    fn handle_event(&mut self, event: &ShellEvent) {
        let ShellEvent::ModeChanged { from, to, revision } = *event;
        let mut records = self.records.lock();
        if records.len() == self.capacity {
            records.remove(0);
        }
        records.push(TransitionRecord {
            from,
            to,
            revision,
            at: time::now_secs(),
        });
    }
}
