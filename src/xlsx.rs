// src/xlsx.rs
//
// One-sheet workbooks. The sheet is named by the dataset label; numeric cells
// are stored as numbers, blanks stay blank.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::data::DataSet;
use crate::error::Result;

/// Build the workbook in memory. The caller decides where the bytes go.
pub fn table_to_xlsx(ds: &DataSet, sheet: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let ws = workbook.add_worksheet();
    ws.set_name(sheet)?;

    for (ci, header) in ds.headers.iter().enumerate() {
        ws.write_string_with_format(0, col(ci)?, header, &bold)?;
    }
    for (ri, row) in ds.rows.iter().enumerate() {
        let r = u32::try_from(ri + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (ci, cell) in row.iter().enumerate() {
            let c = col(ci)?;
            match number(cell) {
                Some(n) => { ws.write_number(r, c, n)?; }
                None if cell.is_empty() => {}
                None => { ws.write_string(r, c, cell)?; }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn col(ci: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(ci).map_err(|_| XlsxError::RowColumnLimitError)
}

fn number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
