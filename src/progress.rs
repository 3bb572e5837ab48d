// src/progress.rs
use crate::model::Source;

/// Lightweight progress reporting used by long-running operations (fetch/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source fetched and extracted.
    fn item_done(&mut self, _source: Source, _records: usize) {}

    /// One source failed and contributes nothing.
    fn item_failed(&mut self, _source: Source, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
