// src/data.rs
//
// Tabular shapes handed to the sink and the GUI.
//
// - DataSet: headers + string rows, the common table form.
// - NamedDataset: a DataSet plus the file stem it persists under and its label.
//
// Records never hold display strings; conversion to cells happens here, once.

use crate::config::consts::{AVERAGE_FILE_STEM, AVERAGE_LABEL};
use crate::model::{AggregatedEntry, Source, SourceRecord};
use crate::specs::spec_for;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedDataset {
    /// File stem, e.g. `TIOBE_Data`.
    pub name: String,
    /// Table label, e.g. `TIOBE`.
    pub label: String,
    pub data: DataSet,
}

/// Absent numbers become empty cells.
pub fn fmt_num(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Raw extract for one source: `Source, Language, Rank, Percentage|Share`.
pub fn raw_dataset(source: Source, records: &[SourceRecord]) -> NamedDataset {
    let value_header = spec_for(source).rule.value_header;
    let rows = records
        .iter()
        .map(|r| {
            vec![
                s!(r.source.label()),
                r.language.clone(),
                r.rank.map(|n| n.to_string()).unwrap_or_default(),
                fmt_num(r.percentage),
            ]
        })
        .collect();

    NamedDataset {
        name: source.file_stem(),
        label: s!(source.label()),
        data: DataSet {
            headers: vec![s!("Source"), s!("Language"), s!("Rank"), s!(value_header)],
            rows,
        },
    }
}

/// Averaged table: `Language, TIOBE, Tecsify, PYPL, Average`.
pub fn average_dataset(entries: &[AggregatedEntry]) -> NamedDataset {
    let mut headers = vec![s!("Language")];
    headers.extend(Source::ALL.iter().map(|s| s!(s.label())));
    headers.push(s!("Average"));

    let rows = entries
        .iter()
        .map(|e| {
            let mut row = vec![e.language.clone()];
            row.extend(Source::ALL.iter().map(|&s| fmt_num(e.slot(s))));
            row.push(fmt_num(e.average));
            row
        })
        .collect();

    NamedDataset {
        name: s!(AVERAGE_FILE_STEM),
        label: s!(AVERAGE_LABEL),
        data: DataSet { headers, rows },
    }
}
