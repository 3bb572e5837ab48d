// src/specs/tecsify.rs
//! Tecsify blog post: `figure.wp-block-table table tbody tr`.
//!
//! Same column layout as TIOBE (the post mirrors that table), but ratings
//! are often written with a decimal comma.

use super::{Locator, SourceSpec};
use crate::extract::ExtractionRule;
use crate::model::Source;

pub fn spec() -> SourceSpec {
    SourceSpec {
        source: Source::Tecsify,
        locator: Locator::TableInside { tag: "<figure", class: "wp-block-table" },
        rule: ExtractionRule {
            language_col: 4,
            rank_col: 0,
            percentage_col: 5,
            value_header: "Percentage",
            rank_range: None,
            footer_labels: &[],
        },
    }
}
