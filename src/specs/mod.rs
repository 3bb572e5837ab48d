// src/specs/mod.rs
//! # Source "specs"
//!
//! One spec per ranking site. Each encodes *where the ground truth lives in the
//! HTML* ([`Locator`]) and *which cell means what* ([`ExtractionRule`]).
//!
//! ## What lives here
//! - Container location for each page (`#top20`, `figure.wp-block-table`, any table).
//! - The per-source column mapping and extra filters.
//!
//! ## What does **not** live here
//! - Networking (`core::net`), cross-source merging (`aggregate`),
//!   persistence (`file`). Specs only read pages.
//!
//! ## Typical call chain
//! ```text
//! pipeline → scrape::collect_source → RowSource::fetch_rows → specs::locate_rows
//!                                   ↘ extract::extract(spec.rule)
//! ```
//!
//! Specs are testable offline against captured HTML.

use crate::config::options::SourceUrls;
use crate::core::html::{has_class, has_id, opener, table_body_rows, tag_blocks_ci};
use crate::error::{Error, Result};
use crate::extract::{self, ExtractionRule, RawRow};
use crate::model::{AllowList, Source, SourceRecord};

pub mod pypl;
pub mod tecsify;
pub mod tiobe;

/// Where a source's rows live in its page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    /// `table#id tbody tr`
    TableWithId(&'static str),
    /// `tag.class table tbody tr`, across every matching container
    TableInside { tag: &'static str, class: &'static str },
    /// `table tbody tr`, across every table in the page
    EveryTable,
}

#[derive(Clone, Debug)]
pub struct SourceSpec {
    pub source: Source,
    pub locator: Locator,
    pub rule: ExtractionRule,
}

impl SourceSpec {
    pub fn url<'a>(&self, urls: &'a SourceUrls) -> &'a str {
        urls.url(self.source)
    }

    /// Locate this source's rows in a fetched page.
    pub fn rows(&self, doc: &str) -> Result<Vec<RawRow>> {
        locate_rows(doc, self.locator).ok_or(Error::Structure {
            site: self.source,
            what: self.locator.describe(),
        })
    }

    /// The adapter contract: raw rows in, filtered records out.
    pub fn extract(&self, allow: &AllowList, rows: &[RawRow]) -> Vec<SourceRecord> {
        extract::extract(self.source, &self.rule, allow, rows)
    }
}

pub fn spec_for(source: Source) -> SourceSpec {
    match source {
        Source::Tiobe => tiobe::spec(),
        Source::Tecsify => tecsify::spec(),
        Source::Pypl => pypl::spec(),
    }
}

impl Locator {
    pub fn describe(self) -> &'static str {
        match self {
            Locator::TableWithId(_) => "ranking table (by id)",
            Locator::TableInside { .. } => "ranking table container",
            Locator::EveryTable => "table",
        }
    }
}

/// Rows for `locator`, or `None` when the container isn't in the page at all.
/// A container that is present but empty yields `Some(vec![])`.
pub fn locate_rows(doc: &str, locator: Locator) -> Option<Vec<RawRow>> {
    let tables = tag_blocks_ci(doc, "<table", "</table>");
    match locator {
        Locator::TableWithId(id) => tables
            .into_iter()
            .find(|t| has_id(opener(t), id))
            .map(table_body_rows),
        Locator::TableInside { tag, class } => {
            let close = format!("</{}>", tag.trim_start_matches('<'));
            let containers: Vec<&str> = tag_blocks_ci(doc, tag, &close)
                .into_iter()
                .filter(|c| has_class(opener(c), class))
                .collect();
            if containers.is_empty() {
                return None;
            }
            let rows = containers
                .into_iter()
                .flat_map(|c| tag_blocks_ci(c, "<table", "</table>"))
                .flat_map(table_body_rows)
                .collect();
            Some(rows)
        }
        Locator::EveryTable => {
            if tables.is_empty() {
                return None;
            }
            Some(tables.into_iter().flat_map(table_body_rows).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_container_is_a_structure_error() {
        let err = tiobe::spec().rows("<html><table id=other></table></html>").unwrap_err();
        assert!(matches!(err, Error::Structure { site: Source::Tiobe, .. }));
    }

    #[test]
    fn empty_container_is_not_an_error() {
        let rows = tiobe::spec().rows("<table id=\"top20\"><tbody></tbody></table>").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn every_source_has_a_spec() {
        for s in Source::ALL {
            assert_eq!(spec_for(s).source, s);
        }
    }
}
