// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::table_to_string, gui::app::App};

/// Current tab → clipboard as TSV (pastes cleanly into spreadsheets).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let ds = app.current();
    if ds.data.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but {} has no rows", ds.label);
        return;
    }

    let txt = table_to_string(&ds.data, '\t');
    logf!("Copy: tab={}, rows={}", ds.label, ds.data.row_count());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
