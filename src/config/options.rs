// src/config/options.rs
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::model::{AllowList, Source};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    /// The one tunable filter: which languages ever appear in any output.
    pub languages: AllowList,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUrls {
    pub tiobe: String,
    pub tecsify: String,
    pub pypl: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            tiobe: s!(TIOBE_URL),
            tecsify: s!(TECSIFY_URL),
            pypl: s!(PYPL_URL),
        }
    }
}

impl SourceUrls {
    pub fn url(&self, source: Source) -> &str {
        match source {
            Source::Tiobe => &self.tiobe,
            Source::Tecsify => &self.tecsify,
            Source::Pypl => &self.pypl,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    /// Fetch sources one after another instead of one thread per source.
    pub sequential: bool,
    pub urls: SourceUrls,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            sequential: false,
            urls: SourceUrls::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    /// One workbook per dataset, its single sheet named by the dataset label.
    Xlsx,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
    /// Field separator for the text formats; `None` for workbooks.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Xlsx => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Blank text keeps the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }

    /// `<out_dir>/<stem>.<ext>`; the format controls the extension.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, ".", self.format.ext()))
    }
}
