use std::io::Write;
use crate::output::{build_headers, build_rows, Cell};
use crate::report::Report;

// Tab separated: rank, key, count
pub fn output_report(writer: &mut dyn Write, report: &Report) -> std::io::Result<()> {
    let headers = build_headers();
    let rows = build_rows(report);
    output_csv_header(writer, &headers)?;
    for row in rows {
        output_csv_row(writer, &row)?;
    }
    writer.flush()
}

fn output_csv_header(output: &mut dyn Write, headers: &[String]) -> std::io::Result<()> {
    writeln!(output, "{}", headers.join("\t"))
}

fn output_csv_row(output: &mut dyn Write, row: &[Cell]) -> std::io::Result<()> {
    let row_str = row.iter().map(|cell| match cell {
        Cell::String(s) => s.replace(['\t', '\n'], " "),
        Cell::Number(n) => n.to_string(),
    }).collect::<Vec<String>>().join("\t");
    writeln!(output, "{}", row_str)
}
