// src/pipeline.rs
//! The whole run, as one linear pass:
//! fetch-three → adapt-three → persist-three-raw → aggregate → persist-one-averaged.
//!
//! Nothing here is fatal once the collaborators exist. Failing sources come back
//! empty, empty datasets are skipped by the sink, and a failed write is recorded
//! without stopping the writes after it.

use std::path::Path;

use crate::{
    aggregate::aggregate,
    config::options::AppOptions,
    data::{self, NamedDataset},
    error::Result,
    file::{DatasetSink, FileSink, Persisted},
    model::{AggregatedEntry, Source},
    progress::Progress,
    scrape::{self, Collected, HttpRowSource, RowSource},
};

/// Result of persisting one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputOutcome {
    pub name: String,
    pub label: String,
    pub result: std::result::Result<Persisted, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub collected: Collected,
    pub averages: Vec<AggregatedEntry>,
    /// Raw TIOBE, Tecsify, PYPL, then the averaged table.
    pub outputs: Vec<OutputOutcome>,
}

impl RunReport {
    /// The consolidated line naming the output files. Failed writes are
    /// listed apart from the saved ones, never as saved.
    pub fn success_line(&self) -> String {
        let saved: Vec<String> = self
            .outputs
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|p| file_name(p.path())))
            .collect();
        let failed: Vec<&str> = self.failed_outputs().map(|o| o.name.as_str()).collect();

        let head = match saved.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("Data saved to {} and {}", rest.join(", "), last)
            }
            Some((only, _)) => format!("Data saved to {}", only),
            None => s!("No data saved"),
        };
        if failed.is_empty() {
            head
        } else {
            format!("{}; could not write {}", head, failed.join(", "))
        }
    }

    pub fn failed_outputs(&self) -> impl Iterator<Item = &OutputOutcome> {
        self.outputs.iter().filter(|o| o.result.is_err())
    }

    /// One line per source that contributed nothing and per table that wasn't written.
    pub fn warnings(&self) -> Vec<String> {
        let sources = self.collected.failures().map(|o| {
            format!(
                "no data from {}: {}",
                o.source,
                o.error.as_deref().unwrap_or("unknown error")
            )
        });
        let outputs = self.failed_outputs().map(|o| match &o.result {
            Err(e) => format!("could not write {}: {}", o.name, e),
            Ok(_) => format!("could not write {}", o.name),
        });
        sources.chain(outputs).collect()
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outputs.iter().filter_map(|o| match &o.result {
            Ok(Persisted::Written(p)) => Some(p.as_path()),
            _ => None,
        })
    }
}

fn file_name(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.display().to_string())
}

/// Persist one dataset; failures are logged and recorded, never raised.
pub fn persist_one(sink: &dyn DatasetSink, ds: &NamedDataset) -> OutputOutcome {
    let result = sink.persist(ds).map_err(|e| {
        loge!("Export: {} failed: {}", ds.name, e);
        e.to_string()
    });
    OutputOutcome { name: ds.name.clone(), label: ds.label.clone(), result }
}

/// Raw extracts in source order.
pub fn raw_datasets(collected: &Collected) -> Vec<NamedDataset> {
    Source::ALL
        .into_iter()
        .map(|s| data::raw_dataset(s, &collected.get(s).records))
        .collect()
}

pub fn aggregate_collected(collected: &Collected) -> Vec<AggregatedEntry> {
    aggregate(
        &collected.tiobe.records,
        &collected.tecsify.records,
        &collected.pypl.records,
    )
}

/// Run with the given collaborators.
pub fn run(
    rows: &dyn RowSource,
    sink: &dyn DatasetSink,
    opts: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> RunReport {
    logf!(
        "Run: Begin languages={} sequential={}",
        opts.languages.len(),
        opts.fetch.sequential
    );

    let collected = scrape::collect_all(
        rows,
        &opts.languages,
        opts.fetch.sequential,
        progress.as_deref_mut(),
    );

    let mut outputs: Vec<OutputOutcome> = raw_datasets(&collected)
        .iter()
        .map(|ds| persist_one(sink, ds))
        .collect();

    let averages = aggregate_collected(&collected);
    outputs.push(persist_one(sink, &data::average_dataset(&averages)));

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Averaged {} language(s)", averages.len()));
    }
    logf!(
        "Run: Done languages={} failed_sources={}",
        averages.len(),
        collected.failures().count()
    );

    RunReport { collected, averages, outputs }
}

/// Run against the live sites, writing files per `opts.export`.
/// Errs only when the HTTP client can't be constructed.
pub fn run_live(opts: &AppOptions, progress: Option<&mut (dyn Progress + '_)>) -> Result<RunReport> {
    let rows = HttpRowSource::new(&opts.fetch)?;
    let sink = FileSink::new(opts.export.clone());
    Ok(run(&rows, &sink, opts, progress))
}
