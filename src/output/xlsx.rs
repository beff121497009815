use rust_xlsxwriter::{Workbook, XlsxError, Format};
use crate::output::{build_headers, build_rows, Cell};
use crate::report::Report;

/// Writes the ranked entries to an Excel (.xlsx) file.
///
/// # Errors
///
/// Returns an error if the workbook cannot be built or saved to `path`.
pub fn output_report(path: &str, report: &Report) -> Result<(), XlsxError> {
    let headers = build_headers();
    let rows = build_rows(report);
    write_excel_file(path, &headers, &rows)
}

fn write_excel_file(path: &str, headers: &[String], rows: &[Vec<Cell>]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Header row in bold
    let bold = Format::new().set_bold();

    for (col_idx, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col_idx as u16, header, &bold)?;
    }

    // Write rows (row 1 and beyond)
    for (row_idx, row) in rows.iter().enumerate() {
        let row_idx = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            match cell {
                Cell::String(s) => {
                    worksheet.write_string(row_idx, col_idx as u16, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_idx, col_idx as u16, *n)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
