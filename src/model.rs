// src/model.rs
//! Shared record types: the three sources, the language allow-list,
//! per-source records and the aggregated per-language row.

use std::fmt;

use crate::config::consts::DEFAULT_LANGUAGES;

/// One of the three upstream ranking providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    Tiobe,
    Tecsify,
    Pypl,
}

impl Source {
    /// Fold/priority order used everywhere: TIOBE, then Tecsify, then PYPL.
    pub const ALL: [Source; 3] = [Source::Tiobe, Source::Tecsify, Source::Pypl];

    pub fn label(self) -> &'static str {
        match self {
            Source::Tiobe => "TIOBE",
            Source::Tecsify => "Tecsify",
            Source::Pypl => "PYPL",
        }
    }

    /// Output file stem for this source's raw extract.
    pub fn file_stem(self) -> String {
        join!(self.label(), "_Data")
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of canonical language names. Membership is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    /// Build from any list of names. Blank names are ignored; repeats keep the first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            let name = name.trim();
            if name.is_empty() || out.iter().any(|n| n == name) {
                continue;
            }
            out.push(s!(name));
        }
        Self { names: out }
    }

    /// Parse a comma-separated list, e.g. from the command line.
    pub fn parse_csv(text: &str) -> Self {
        Self::new(text.split(','))
    }

    pub fn contains(&self, language: &str) -> bool {
        self.names.iter().any(|n| n == language)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGES.iter().copied())
    }
}

/// One (source, language) observation that survived filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRecord {
    pub source: Source,
    pub language: String,
    pub rank: Option<u32>,
    pub percentage: Option<f64>,
}

/// Per-language row combining every source's percentage and their mean.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedEntry {
    pub language: String,
    pub tiobe: Option<f64>,
    pub tecsify: Option<f64>,
    pub pypl: Option<f64>,
    pub average: Option<f64>,
}

impl AggregatedEntry {
    pub fn slot(&self, source: Source) -> Option<f64> {
        match source {
            Source::Tiobe => self.tiobe,
            Source::Tecsify => self.tecsify,
            Source::Pypl => self.pypl,
        }
    }
}
