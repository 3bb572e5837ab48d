// src/aggregate.rs
//! Cross-source reconciliation.
//!
//! Pure fold over `tiobe ++ tecsify ++ pypl`. Each record upserts the slot of
//! its own source in its language's entry; a later record for the same
//! (source, language) replaces the earlier one. Averages are computed once,
//! after the fold, over whichever slots ended up with a value.

use std::collections::HashMap;

use crate::model::{AggregatedEntry, Source, SourceRecord};

/// Slots for one language while folding.
#[derive(Clone, Debug, Default, PartialEq)]
struct Slots {
    tiobe: Option<f64>,
    tecsify: Option<f64>,
    pypl: Option<f64>,
}

impl Slots {
    fn set(&mut self, source: Source, value: Option<f64>) {
        match source {
            Source::Tiobe => self.tiobe = value,
            Source::Tecsify => self.tecsify = value,
            Source::Pypl => self.pypl = value,
        }
    }
}

/// Languages in first-encounter order plus their slots.
#[derive(Default)]
struct Table {
    order: Vec<String>,
    slots: HashMap<String, Slots>,
}

impl Table {
    fn upsert(mut self, rec: &SourceRecord) -> Self {
        if !self.slots.contains_key(&rec.language) {
            self.order.push(rec.language.clone());
        }
        self.slots
            .entry(rec.language.clone())
            .or_default()
            .set(rec.source, rec.percentage);
        self
    }

    fn finish(mut self) -> Vec<AggregatedEntry> {
        self.order
            .into_iter()
            .map(|language| {
                let s = self.slots.remove(&language).unwrap_or_default();
                AggregatedEntry {
                    average: mean_2dp(&[s.tiobe, s.tecsify, s.pypl]),
                    language,
                    tiobe: s.tiobe,
                    tecsify: s.tecsify,
                    pypl: s.pypl,
                }
            })
            .collect()
    }
}

/// Merge the three sources' records into one row per language.
///
/// Output order: TIOBE's languages first, then any new ones from Tecsify, then PYPL.
pub fn aggregate(
    tiobe: &[SourceRecord],
    tecsify: &[SourceRecord],
    pypl: &[SourceRecord],
) -> Vec<AggregatedEntry> {
    tiobe
        .iter()
        .chain(tecsify)
        .chain(pypl)
        .fold(Table::default(), Table::upsert)
        .finish()
}

/// Mean of the present values, rounded to two decimals; `None` if none are present.
pub fn mean_2dp(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    Some(round_2dp(mean))
}

/// Two decimals, rounding the exact binary value half away from zero.
/// `2.675` is stored just below the tie and gives `2.67`; `0.125` is an exact tie and gives `0.13`.
pub fn round_2dp(v: f64) -> f64 {
    if !v.is_finite() || v.abs() >= 1e13 {
        return v;
    }
    // every finite f64 has at most 1074 fractional digits, so this is exact
    let exact = format!("{:.1074}", v.abs());
    let Some((int, frac)) = exact.split_once('.') else { return v };
    let (Ok(whole), Ok(cents)) = (int.parse::<u64>(), frac[..2].parse::<u64>()) else {
        return v;
    };
    let up = u64::from(frac.as_bytes()[2] >= b'5');
    let rounded = (whole * 100 + cents + up) as f64 / 100.0;
    rounded.copysign(v)
}
