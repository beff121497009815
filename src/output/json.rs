use crate::report::Report;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    rank: usize,
    key: &'a str,
    count: u64,
}

fn build_rows(report: &Report) -> Vec<JsonRow<'_>> {
    report.ranked.entries.iter().enumerate().map(|(idx, entry)| JsonRow {
        rank: idx + 1,
        key: &entry.key,
        count: entry.count,
    }).collect()
}

pub fn output_report(writer: &mut dyn Write, report: &Report) -> Result<(), serde_json::Error> {
    let rows = build_rows(report);
    serde_json::to_writer_pretty(&mut *writer, &rows)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}
