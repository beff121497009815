use std::io::Write;
use crate::report::Report;

// One "<key><separator><count>" line per ranked entry, nothing else
pub fn output_report(writer: &mut dyn Write, report: &Report) -> std::io::Result<()> {
    for line in report.ranked.lines(report.separator) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
