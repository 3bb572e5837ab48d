// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table (header row first) into any writer.
pub fn write_table<W: Write>(mut w: W, ds: &DataSet, sep: char) -> io::Result<()> {
    write_row(&mut w, &ds.headers, sep)?;
    for row in &ds.rows {
        write_row(&mut w, row, sep)?;
    }
    Ok(())
}

/// Whole table as text (clipboard).
pub fn table_to_string(ds: &DataSet, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_table(&mut buf, ds, sep);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let ds = DataSet {
            headers: vec![s!("Language"), s!("Average")],
            rows: vec![vec![s!("C, the \"language\""), s!("1.5")]],
        };
        let txt = table_to_string(&ds, ',');
        assert_eq!(txt, "Language,Average\n\"C, the \"\"language\"\"\",1.5\n");
    }

    #[test]
    fn tsv_keeps_commas_bare() {
        let ds = DataSet { headers: vec![s!("a,b")], rows: vec![] };
        assert_eq!(table_to_string(&ds, '\t'), "a,b\n");
    }

    #[test]
    fn absent_values_are_empty_cells() {
        let ds = DataSet {
            headers: vec![s!("Language"), s!("PYPL")],
            rows: vec![vec![s!("Go"), s!("")], vec![s!("Java"), s!("2")]],
        };
        assert_eq!(table_to_string(&ds, ','), "Language,PYPL\nGo,\nJava,2\n");
    }
}
