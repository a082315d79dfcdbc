/// Shared helpers for unit tests
///
/// Tests that touch the process logger must be marked `#[serial]`.

use std::sync::{Arc, Mutex};
use crate::log::{self, Logger, LogEntry, LogSeverity};

/// Logger that captures entries for later inspection
pub struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CapturingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Install a capturing logger and return the shared entry list
pub fn capture_logs() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CapturingLogger { entries: entries.clone() });
    entries
}

/// Count captured entries of a given severity
pub fn count_severity(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> usize {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.severity == severity)
        .count()
}

/// Allocate `count` distinct asset handles
pub fn asset_handles(count: usize) -> Vec<crate::handle::AssetHandle> {
    let mut assets: slotmap::SlotMap<crate::handle::AssetHandle, ()> = slotmap::SlotMap::with_key();
    (0..count).map(|_| assets.insert(())).collect()
}

/// Allocate `count` distinct scene keys
pub fn scene_keys(count: usize) -> Vec<crate::handle::SceneKey> {
    let mut scenes: slotmap::SlotMap<crate::handle::SceneKey, ()> = slotmap::SlotMap::with_key();
    (0..count).map(|_| scenes.insert(())).collect()
}

/// Captured entries emitted by one source
///
/// Non-serial tests may log while a capturing logger is installed.
pub fn entries_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.source == source)
        .cloned()
        .collect()
}
