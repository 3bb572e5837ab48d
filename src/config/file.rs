// src/config/file.rs
//! Optional TOML config overlaid on the built-in defaults.
//!
//! ```toml
//! languages = ["JavaScript", "Python", "Go"]
//! timeout_secs = 20
//! sequential = false
//!
//! [export]
//! dir = "out"
//! format = "tsv"
//!
//! [urls]
//! pypl = "https://pypl.github.io/PYPL.html"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::DEFAULT_CONFIG_FILE;
use super::options::{AppOptions, ExportFormat};
use crate::error::{Error, Result};
use crate::model::AllowList;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub languages: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub sequential: Option<bool>,
    pub export: ExportSection,
    pub urls: UrlSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSection {
    pub dir: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlSection {
    pub tiobe: Option<String>,
    pub tecsify: Option<String>,
    pub pypl: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Load the config file. An explicit path must exist; the default path is optional.
pub fn load(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path(), false),
    };
    if !path.exists() {
        if explicit {
            return Err(Error::Config(format!("{} does not exist", path.display())));
        }
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config = parse(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    logf!("Config: Loaded {}", path.display());
    Ok(Some(config))
}

/// Defaults overlaid with the config file at `path` (or the default location).
pub fn load_options(path: Option<&Path>) -> Result<AppOptions> {
    let mut opts = AppOptions::default();
    if let Some(cfg) = load(path)? {
        cfg.apply(&mut opts)?;
    }
    Ok(opts)
}

pub fn parse(text: &str) -> Result<ConfigFile> {
    toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
}

impl ConfigFile {
    /// Overlay every value the file sets onto `opts`.
    pub fn apply(&self, opts: &mut AppOptions) -> Result<()> {
        if let Some(langs) = &self.languages {
            opts.languages = AllowList::new(langs.iter().cloned());
        }
        if let Some(secs) = self.timeout_secs {
            opts.fetch.timeout = Duration::from_secs(secs);
        }
        if let Some(seq) = self.sequential {
            opts.fetch.sequential = seq;
        }
        if let Some(dir) = &self.export.dir {
            opts.export.set_dir(dir);
        }
        if let Some(fmt) = &self.export.format {
            opts.export.format = fmt.parse::<ExportFormat>().map_err(Error::Config)?;
        }
        if let Some(url) = &self.urls.tiobe { opts.fetch.urls.tiobe = url.clone(); }
        if let Some(url) = &self.urls.tecsify { opts.fetch.urls.tecsify = url.clone(); }
        if let Some(url) = &self.urls.pypl { opts.fetch.urls.pypl = url.clone(); }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_only_what_is_set() {
        let cfg = parse(
            r#"
            languages = ["Go", "Python"]
            timeout_secs = 3

            [export]
            format = "tsv"
            "#,
        )
        .unwrap();

        let mut opts = AppOptions::default();
        cfg.apply(&mut opts).unwrap();

        assert_eq!(opts.languages.names(), &[s!("Go"), s!("Python")]);
        assert_eq!(opts.fetch.timeout, Duration::from_secs(3));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.fetch.sequential);
        assert_eq!(opts.fetch.urls, AppOptions::default().fetch.urls);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("langauges = []").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_format_is_a_config_error() {
        let cfg = parse("[export]\nformat = \"ods\"").unwrap();
        let err = cfg.apply(&mut AppOptions::default()).unwrap_err();
        assert!(err.to_string().contains("ods"));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let p = std::env::temp_dir().join("lang_rank_missing_config.toml");
        let _ = std::fs::remove_file(&p);
        assert!(load(Some(&p)).is_err());
    }
}
