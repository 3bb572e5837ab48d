// src/gui/actions/export.rs
use crate::{
    file::{FileSink, Persisted},
    gui::app::App,
    pipeline::persist_one,
};

/// Persist all four tables through the file sink. Empty tables are skipped.
pub fn export(app: &mut App) {
    app.options.export.set_dir(&app.out_dir_text);
    // normalize what the user typed
    app.out_dir_text = app.options.export.out_dir().to_string_lossy().into_owned();

    if !app.has_data() {
        app.status("Nothing to export (fetch first)");
        logd!("Export: Clicked with no data");
        return;
    }

    let sink = FileSink::new(app.options.export.clone());
    let outcomes: Vec<_> = app.datasets.iter().map(|ds| persist_one(&sink, ds)).collect();

    let written = outcomes
        .iter()
        .filter(|o| matches!(o.result, Ok(Persisted::Written(_))))
        .count();
    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|o| o.result.is_err())
        .map(|o| o.name.as_str())
        .collect();

    let dir = app.options.export.out_dir().display().to_string();
    if failed.is_empty() {
        app.status(format!("Exported {} file(s) to {}", written, dir));
    } else {
        app.status(format!(
            "Exported {} file(s) to {}; failed: {}",
            written,
            dir,
            failed.join(", ")
        ));
    }
    logf!("Export: written={} failed={} dir={}", written, failed.len(), dir);
}
