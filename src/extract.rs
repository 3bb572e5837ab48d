// src/extract.rs
//! Shared row → record extraction.
//!
//! Every source is described by an [`ExtractionRule`] (which cell holds what,
//! plus the source's extra filters). One routine applies any rule, so the three
//! sources differ only in data, never in code.
//!
//! Rows that don't make it are not silently lost: [`classify_row`] says why
//! (wrong language, footer, bad rank…). [`extract`] keeps the survivors in input
//! order and performs no deduplication.

use std::fmt;
use std::ops::RangeInclusive;

use crate::model::{AllowList, Source, SourceRecord};

/// Cell texts of one table row, as located in the page.
pub type RawRow = Vec<String>;

/// Declarative column mapping for one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionRule {
    pub language_col: usize,
    pub rank_col: usize,
    pub percentage_col: usize,
    /// Header used for the value column in the raw extract ("Percentage" / "Share").
    pub value_header: &'static str,
    /// When set, the rank must parse and fall inside this range or the row is dropped.
    pub rank_range: Option<RangeInclusive<u32>>,
    /// Known non-data rows that look like table rows.
    pub footer_labels: &'static [&'static str],
}

/// Why a row produced no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// No cell at the language index, or it was blank.
    MissingLanguage,
    Footer(String),
    UnparsableRank(String),
    RankOutOfRange(i64),
    NotAllowed(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingLanguage => write!(f, "no language cell"),
            Rejection::Footer(s) => write!(f, "footer row {:?}", s),
            Rejection::UnparsableRank(s) => write!(f, "rank {:?} is not a number", s),
            Rejection::RankOutOfRange(n) => write!(f, "rank {} out of range", n),
            Rejection::NotAllowed(s) => write!(f, "{:?} not in allow-list", s),
        }
    }
}

/// Apply `rule` to one row. Filters run in a fixed order:
/// language present → footer → rank (if required) → allow-list.
pub fn classify_row(
    source: Source,
    rule: &ExtractionRule,
    allow: &AllowList,
    row: &[String],
) -> Result<SourceRecord, Rejection> {
    let language = row
        .get(rule.language_col)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or(Rejection::MissingLanguage)?;

    if is_footer(rule, language) {
        return Err(Rejection::Footer(s!(language)));
    }

    let rank_text = row.get(rule.rank_col).map(|s| s.trim()).unwrap_or("");
    let rank = match &rule.rank_range {
        Some(range) => {
            let n = parse_int(rank_text)
                .ok_or_else(|| Rejection::UnparsableRank(s!(rank_text)))?;
            match u32::try_from(n) {
                Ok(r) if range.contains(&r) => Some(r),
                _ => return Err(Rejection::RankOutOfRange(n)),
            }
        }
        None => parse_int(rank_text).and_then(|n| u32::try_from(n).ok()),
    };

    if !allow.contains(language) {
        return Err(Rejection::NotAllowed(s!(language)));
    }

    let percentage = row
        .get(rule.percentage_col)
        .and_then(|s| parse_percentage(s));

    Ok(SourceRecord {
        source,
        language: s!(language),
        rank,
        percentage,
    })
}

/// All surviving records, in input order. Duplicates are kept.
pub fn extract(
    source: Source,
    rule: &ExtractionRule,
    allow: &AllowList,
    rows: &[RawRow],
) -> Vec<SourceRecord> {
    let mut out = Vec::new();
    let mut dropped = 0usize;
    for (i, row) in rows.iter().enumerate() {
        match classify_row(source, rule, allow, row) {
            Ok(rec) => out.push(rec),
            Err(why) => {
                dropped += 1;
                tracing::trace!("{}: row {} dropped: {}", source, i, why);
            }
        }
    }
    logd!("{}: {} record(s) kept, {} row(s) dropped", source, out.len(), dropped);
    out
}

fn is_footer(rule: &ExtractionRule, language: &str) -> bool {
    !rule.footer_labels.is_empty()
        && (rule.footer_labels.contains(&language) || language.starts_with('©'))
}

/// `"12,34%"` → `12.34`. Strips `%`, accepts a decimal comma, requires a finite number.
pub fn parse_percentage(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace('%', "").replace(',', ".");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(range: Option<RangeInclusive<u32>>) -> ExtractionRule {
        ExtractionRule {
            language_col: 1,
            rank_col: 0,
            percentage_col: 2,
            value_header: "Percentage",
            rank_range: range,
            footer_labels: &[],
        }
    }

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn percentage_variants() {
        assert_eq!(parse_percentage("12,34%"), Some(12.34));
        assert_eq!(parse_percentage(" 15.16 % "), Some(15.16));
        assert_eq!(parse_percentage("+0.5%"), Some(0.5));
        assert_eq!(parse_percentage("n/a"), None);
        assert_eq!(parse_percentage(""), None);
        assert_eq!(parse_percentage("%"), None);
        assert_eq!(parse_percentage("inf"), None);
        assert_eq!(parse_percentage("NaN"), None);
    }

    #[test]
    fn unparsable_cells_become_none() {
        let allow = AllowList::new(["Go"]);
        let rec = classify_row(Source::Tiobe, &rule(None), &allow, &row(&["#", "Go", "--"])).unwrap();
        assert_eq!(rec.rank, None);
        assert_eq!(rec.percentage, None);
        assert_eq!(rec.language, "Go");
    }

    #[test]
    fn short_row_is_missing_language() {
        let allow = AllowList::new(["Go"]);
        assert_eq!(
            classify_row(Source::Tiobe, &rule(None), &allow, &row(&["1"])),
            Err(Rejection::MissingLanguage)
        );
    }

    #[test]
    fn rejection_reasons_are_distinct() {
        let allow = AllowList::new(["Go"]);
        let r = rule(Some(1..=28));
        assert_eq!(
            classify_row(Source::Pypl, &r, &allow, &row(&["x", "Go", "1%"])),
            Err(Rejection::UnparsableRank(s!("x")))
        );
        assert_eq!(
            classify_row(Source::Pypl, &r, &allow, &row(&["0", "Go", "1%"])),
            Err(Rejection::RankOutOfRange(0))
        );
        assert_eq!(
            classify_row(Source::Pypl, &r, &allow, &row(&["3", "Rust", "1%"])),
            Err(Rejection::NotAllowed(s!("Rust")))
        );
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let allow = AllowList::new(["Go", "PHP"]);
        let rows = vec![
            row(&["1", "PHP", "2%"]),
            row(&["2", "Rust", "9%"]),
            row(&["3", "Go", "1%"]),
            row(&["4", "PHP", "3%"]),
        ];
        let out = extract(Source::Tecsify, &rule(None), &allow, &rows);
        let langs: Vec<&str> = out.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(langs, ["PHP", "Go", "PHP"]);
        assert_eq!(out[2].percentage, Some(3.0));
        assert!(out.iter().all(|r| r.source == Source::Tecsify));
    }
}
