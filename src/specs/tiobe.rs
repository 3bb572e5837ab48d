// src/specs/tiobe.rs
//! TIOBE index: `table#top20 tbody tr`.
//!
//! Cells: 0 rank this month, 1 rank last year, 2 change, 3 icon,
//! 4 language, 5 ratings (`"15.16%"`), 6 change.

use super::{Locator, SourceSpec};
use crate::extract::ExtractionRule;
use crate::model::Source;

pub fn spec() -> SourceSpec {
    SourceSpec {
        source: Source::Tiobe,
        locator: Locator::TableWithId("top20"),
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
