// src/specs/pypl.rs
//! PYPL: `table tbody tr` across the page.
//!
//! Cells: 0 rank, 1 change, 2 language, 3 share (`"28.59 %"`), 4 trend.
//! Only ranks 1..=28 are data; the page also carries a copyright row shaped
//! like a table row, which is dropped.

use super::{Locator, SourceSpec};
use crate::config::consts::{PYPL_FOOTER, PYPL_MAX_RANK, PYPL_MIN_RANK};
use crate::extract::ExtractionRule;
use crate::model::Source;

pub fn spec() -> SourceSpec {
    SourceSpec {
        source: Source::Pypl,
        locator: Locator::EveryTable,
        rule: ExtractionRule {
            language_col: 2,
            rank_col: 0,
            percentage_col: 3,
            value_header: "Share",
            rank_range: Some(PYPL_MIN_RANK..=PYPL_MAX_RANK),
            footer_labels: &[PYPL_FOOTER],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{classify_row, Rejection};
    use crate::model::AllowList;

    const PAGE: &str = r#"
        <table class="table table-striped">
          <tbody>
            <tr><td>1</td><td></td><td>Python</td><td>28.59 %</td><td>+0.5 %</td></tr>
            <tr><td>2</td><td></td><td>Java</td><td>15.36 %</td><td>-0.7 %</td></tr>
            <tr><td>35</td><td></td><td>Ruby</td><td>0.9 %</td><td></td></tr>
            <tr><td>3</td><td></td><td>C/C++</td><td>6.21 %</td><td></td></tr>
            <tr></tr>
            <tr><td></td><td></td><td>&copy; Pierre Carbonnelle, 2023</td><td></td></tr>
          </tbody>
        </table>"#;

    #[test]
    fn keeps_ranked_allowed_rows_only() {
        let spec = spec();
        let rows = spec.rows(PAGE).unwrap();
        // the empty <tr> never becomes a row
        assert_eq!(rows.len(), 5);

        let recs = spec.extract(&AllowList::default(), &rows);
        let got: Vec<(&str, Option<u32>, Option<f64>)> = recs
            .iter()
            .map(|r| (r.language.as_str(), r.rank, r.percentage))
            .collect();
        assert_eq!(got, [("Python", Some(1), Some(28.59)), ("Java", Some(2), Some(15.36))]);
    }

    #[test]
    fn out_of_range_rank_is_dropped_even_when_allowed() {
        let spec = spec();
        let row = vec![s!("35"), s!(""), s!("Ruby"), s!("0.9 %")];
        assert_eq!(
            classify_row(Source::Pypl, &spec.rule, &AllowList::default(), &row),
            Err(Rejection::RankOutOfRange(35))
        );
    }

    #[test]
    fn footer_is_rejected_before_rank() {
        let spec = spec();
        let allow = AllowList::new([PYPL_FOOTER]);
        let row = vec![s!(""), s!(""), s!(PYPL_FOOTER), s!("")];
        assert_eq!(
            classify_row(Source::Pypl, &spec.rule, &allow, &row),
            Err(Rejection::Footer(s!(PYPL_FOOTER)))
        );
    }
}
