// src/scrape.rs
//! Fetch + adapt, per source.
//!
//! [`RowSource`] is the raw-row provider: given a source, hand back its table
//! rows. [`collect_all`] runs the three sources (one scoped thread each, or
//! sequentially), degrades any failing source to an empty list, and returns
//! once all three are in. That return is the join point before aggregation.

use std::{sync::mpsc, thread, time::Instant};

use crate::{
    config::options::{FetchOptions, SourceUrls},
    core::net::HttpClient,
    error::Result,
    extract::RawRow,
    model::{AllowList, Source, SourceRecord},
    progress::Progress,
    specs::spec_for,
};

/// "Fetch tabular rows from source X."
pub trait RowSource: Send + Sync {
    fn fetch_rows(&self, source: Source) -> Result<Vec<RawRow>>;
}

/// Live pages over HTTPS.
#[derive(Clone, Debug)]
pub struct HttpRowSource {
    client: HttpClient,
    urls: SourceUrls,
}

impl HttpRowSource {
    /// Fails only if the HTTP client can't be built; that is fatal for the run.
    pub fn new(fetch: &FetchOptions) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(fetch.timeout)?,
            urls: fetch.urls.clone(),
        })
    }
}

impl RowSource for HttpRowSource {
    fn fetch_rows(&self, source: Source) -> Result<Vec<RawRow>> {
        let spec = spec_for(source);
        let doc = self.client.get_text(source, spec.url(&self.urls))?;
        let t = Instant::now();
        let rows = spec.rows(&doc)?;
        logd!("{}: located {} row(s) in {:?}", source, rows.len(), t.elapsed());
        Ok(rows)
    }
}

/// One source's contribution to a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceOutcome {
    pub source: Source,
    pub records: Vec<SourceRecord>,
    /// Set when the source failed and `records` is empty because of it.
    pub error: Option<String>,
}

impl SourceOutcome {
    fn failed(source: Source, reason: String) -> Self {
        Self { source, records: Vec::new(), error: Some(reason) }
    }
}

/// All three sources, successful or degraded to empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Collected {
    pub tiobe: SourceOutcome,
    pub tecsify: SourceOutcome,
    pub pypl: SourceOutcome,
}

impl Collected {
    pub fn get(&self, source: Source) -> &SourceOutcome {
        match source {
            Source::Tiobe => &self.tiobe,
            Source::Tecsify => &self.tecsify,
            Source::Pypl => &self.pypl,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &SourceOutcome> {
        Source::ALL.into_iter().map(|s| self.get(s)).filter(|o| o.error.is_some())
    }
}

/// Fetch and adapt one source. Any failure is logged and yields an empty list.
pub fn collect_source(rows: &dyn RowSource, source: Source, allow: &AllowList) -> SourceOutcome {
    match rows.fetch_rows(source) {
        Ok(raw) => SourceOutcome {
            source,
            records: spec_for(source).extract(allow, &raw),
            error: None,
        },
        Err(e) => {
            if e.is_recoverable() {
                logw!("{}: no data this run: {}", source, e);
            } else {
                loge!("{}: scrape failed: {}", source, e);
            }
            SourceOutcome::failed(source, e.to_string())
        }
    }
}

/// Run all three sources and wait for every one of them.
pub fn collect_all(
    rows: &dyn RowSource,
    allow: &AllowList,
    sequential: bool,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Collected {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Source::ALL.len());
    }

    let mut slots: [Option<SourceOutcome>; 3] = [None, None, None];

    if sequential {
        for source in Source::ALL {
            let outcome = collect_source(rows, source, allow);
            report(progress.as_deref_mut(), &outcome);
            slots[slot_index(source)] = Some(outcome);
        }
    } else {
        thread::scope(|scope| {
            let (tx, rx) = mpsc::channel::<SourceOutcome>();
            for source in Source::ALL {
                let tx = tx.clone();
                scope.spawn(move || {
                    let _ = tx.send(collect_source(rows, source, allow));
                });
            }
            drop(tx); // this thread is sole receiver now

            // completion order, not source order
            for outcome in rx {
                report(progress.as_deref_mut(), &outcome);
                let ix = slot_index(outcome.source);
                slots[ix] = Some(outcome);
            }
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let [tiobe, tecsify, pypl] = slots;
    let or_lost = |o: Option<SourceOutcome>, s: Source| {
        o.unwrap_or_else(|| {
            loge!("{}: worker ended without a result", s);
            SourceOutcome::failed(s, s!("worker ended without a result"))
        })
    };
    Collected {
        tiobe: or_lost(tiobe, Source::Tiobe),
        tecsify: or_lost(tecsify, Source::Tecsify),
        pypl: or_lost(pypl, Source::Pypl),
    }
}

fn report(progress: Option<&mut (dyn Progress + '_)>, outcome: &SourceOutcome) {
    if let Some(p) = progress {
        match &outcome.error {
            None => p.item_done(outcome.source, outcome.records.len()),
            Some(reason) => p.item_failed(outcome.source, reason),
        }
    }
}

fn slot_index(source: Source) -> usize {
    match source {
        Source::Tiobe => 0,
        Source::Tecsify => 1,
        Source::Pypl => 2,
    }
}
