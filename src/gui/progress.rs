// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;

use crate::{model::Source, progress::Progress};

/// Replace the shared status line. A poisoned lock still holds a usable String.
pub fn set_status(status: &Mutex<String>, msg: impl Into<String>) {
    *status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
}

pub fn read_status(status: &Mutex<String>) -> String {
    status.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Progress reporter for the fetch worker: writes the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }

    fn set(&self, msg: impl Into<String>) {
        set_status(&self.status, msg);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set(format!("Fetching {} source(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set(s!(msg));
    }
    fn item_done(&mut self, source: Source, records: usize) {
        self.done += 1;
        self.set(format!(
            "Fetched {} ({} language(s)) ({}/{})",
            source, records, self.done + self.failed, self.total
        ));
    }
    fn item_failed(&mut self, source: Source, reason: &str) {
        self.failed += 1;
        self.set(format!(
            "{} failed: {} ({}/{})",
            source, reason, self.done + self.failed, self.total
        ));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set(format!("Fetch complete ({}/{})", self.done, self.total));
        } else {
            self.set(format!(
                "Fetch complete, {} of {} source(s) failed",
                self.failed, self.total
            ));
        }
    }
}
