// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::xlsx::table_to_xlsx;
use crate::data::NamedDataset;
use crate::error::{Error, Result};

/// What a persist call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Persisted {
    Written(PathBuf),
    /// Nothing to write; carries the file that would have been written.
    Skipped(PathBuf),
}

impl Persisted {
    pub fn path(&self) -> &Path {
        match self {
            Persisted::Written(p) | Persisted::Skipped(p) => p,
        }
    }
}

/// "Persist a named dataset" capability.
/// Empty datasets are a no-op with a diagnostic, never an error.
pub trait DatasetSink {
    fn persist(&self, ds: &NamedDataset) -> Result<Persisted>;
}

/// Writes one CSV/TSV table, or one single-sheet workbook, per dataset into the export directory.
#[derive(Clone, Debug, Default)]
pub struct FileSink {
    export: ExportOptions,
}

impl FileSink {
    pub fn new(export: ExportOptions) -> Self {
        Self { export }
    }

    pub fn path_for(&self, ds: &NamedDataset) -> PathBuf {
        self.export.path_for(&ds.name)
    }
}

impl DatasetSink for FileSink {
    fn persist(&self, ds: &NamedDataset) -> Result<Persisted> {
        let path = self.path_for(ds);

        if ds.data.is_empty() {
            logw!("Export: No data to save in {} ({})", path.display(), ds.label);
            return Ok(Persisted::Skipped(path));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }

        match self.export.format.delim() {
            Some(sep) => write_atomic(&path, |out| write_table(out, &ds.data, sep))?,
            None => {
                let bytes = table_to_xlsx(&ds.data, &ds.label)?;
                write_atomic(&path, |out| out.write_all(&bytes))?;
            }
        }
        logf!(
            "Export: {} → {} (rows={})",
            ds.label,
            path.display(),
            ds.data.row_count()
        );
        Ok(Persisted::Written(path))
    }
}

/// Write to a sibling temp file, then rename over `path`.
/// Readers see either the old file or the complete new one.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let result = (|| -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(&tmp)?);
        fill(&mut out)?;
        out.flush()?;
        out.get_ref().sync_all()?;
        drop(out);
        fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSet;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("lang_rank_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    fn named(rows: Vec<Vec<String>>) -> NamedDataset {
        NamedDataset {
            name: s!("Average_Data"),
            label: s!("Average"),
            data: DataSet { headers: vec![s!("Language"), s!("Average")], rows },
        }
    }

    #[test]
    fn empty_dataset_writes_nothing() {
        let dir = tmp_dir("empty");
        let mut export = ExportOptions::default();
        export.set_dir(dir.to_str().unwrap());
        let sink = FileSink::new(export);

        let out = sink.persist(&named(vec![])).unwrap();
        assert!(matches!(out, Persisted::Skipped(_)));
        assert!(!out.path().exists());
        assert!(!dir.exists());
    }

    #[test]
    fn writes_header_and_rows_without_leftover_temp() {
        let dir = tmp_dir("write");
        let mut export = ExportOptions::default();
        export.set_dir(dir.to_str().unwrap());
        let sink = FileSink::new(export);

        let out = sink.persist(&named(vec![vec![s!("Go"), s!("1.5")]])).unwrap();
        let Persisted::Written(path) = out else { panic!("expected a write") };
        assert_eq!(fs::read_to_string(&path).unwrap(), "Language,Average\nGo,1.5\n");

        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["Average_Data.csv"]);
    }

    #[test]
    fn xlsx_sheet_carries_the_label() {
        use calamine::{open_workbook, Reader, Xlsx};
        use crate::config::options::ExportFormat;

        let dir = tmp_dir("xlsx");
        let mut export = ExportOptions::default();
        export.set_dir(dir.to_str().unwrap());
        export.format = ExportFormat::Xlsx;

        let out = FileSink::new(export)
            .persist(&named(vec![vec![s!("Go"), s!("1.5")], vec![s!("Rust"), s!("")]]))
            .unwrap();
        let Persisted::Written(path) = out else { panic!("expected a write") };
        assert!(path.ends_with("Average_Data.xlsx"));
        assert!(!dir.join("Average_Data.xlsx.tmp").exists());

        let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(wb.sheet_names(), ["Average"]);
        let range = wb.worksheet_range("Average").unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(rows, [["Language", "Average"], ["Go", "1.5"], ["Rust", ""]]);
    }

    #[test]
    fn out_dir_that_is_a_file_fails_cleanly() {
        let dir = tmp_dir("blocked");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        fs::write(&dir, "not a dir").unwrap();

        let mut export = ExportOptions::default();
        export.set_dir(dir.to_str().unwrap());
        let err = FileSink::new(export).persist(&named(vec![vec![s!("Go"), s!("1")]]));
        assert!(err.is_err());
        let _ = fs::remove_file(&dir);
    }
}
