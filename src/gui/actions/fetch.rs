// src/gui/actions/fetch.rs
//
// Fetch runs off the UI thread. The worker sends exactly one message on
// `App::inbox`; `poll` picks it up on a later frame.

use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    model::AggregatedEntry,
    pipeline::aggregate_collected,
    scrape::{collect_all, Collected, HttpRowSource},
};

/// What one fetch hands back to the UI.
#[derive(Debug)]
pub struct Fetched {
    pub collected: Collected,
    pub averages: Vec<AggregatedEntry>,
}

pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let opts = app.options.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    logf!(
        "Fetch: Begin languages={} sequential={}",
        opts.languages.len(),
        opts.fetch.sequential
    );
    app.running = true;
    app.inbox = Some(rx);
    app.status("Fetching…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let res = HttpRowSource::new(&opts.fetch).map(|rows| {
            let collected =
                collect_all(&rows, &opts.languages, opts.fetch.sequential, Some(&mut prog));
            let averages = aggregate_collected(&collected);
            Fetched { collected, averages }
        });
        let _ = tx.send(res);
        ctx.request_repaint();
    });
}

/// Pick up a finished fetch, if any.
pub fn poll(app: &mut App) {
    let msg = match app.inbox.as_ref().map(|rx| rx.try_recv()) {
        None | Some(Err(TryRecvError::Empty)) => return,
        Some(msg) => msg,
    };
    app.inbox = None;
    app.running = false;

    match msg {
        Ok(Ok(fetched)) => {
            app.load(&fetched);
            let failed: Vec<String> =
                fetched.collected.failures().map(|o| o.source.to_string()).collect();
            logf!(
                "Fetch: OK languages={} failed_sources={}",
                fetched.averages.len(),
                failed.len()
            );
            if failed.is_empty() {
                app.status(format!("Ready: {} language(s) averaged", fetched.averages.len()));
            } else {
                app.status(format!(
                    "Ready: {} language(s) averaged; no data from {}",
                    fetched.averages.len(),
                    failed.join(", ")
                ));
            }
        }
        Ok(Err(e)) => {
            loge!("Fetch: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
        Err(_) => {
            loge!("Fetch: worker stopped without a result");
            app.status("Error: fetch worker stopped");
        }
    }
}
