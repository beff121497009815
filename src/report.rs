use crate::args::Config;
use crate::cmd::Cmd;
use crate::error::{Result, TermFreqError};
use crate::frequency::FrequencyTable;
use crate::output::Output;
use crate::ranking::RankedResult;
use std::io::Write;
use tracing::{debug, info};

// Everything the output layer needs about a finished run
#[derive(Debug)]
pub struct Report {
    pub ranked: RankedResult,
    pub separator: &'static str,
    pub total: u64,
    pub distinct: usize,
    pub partitions: Option<usize>,
    pub containing: Option<Containing>,
}

// Words containing a given character, counted with repeats and as distinct words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Containing {
    pub needle: char,
    pub total: u64,
    pub distinct: usize,
}

impl Report {
    pub fn new(config: &Config, table: &FrequencyTable, separator: &'static str) -> Report {
        Report {
            ranked: table.top_n(config.top),
            separator,
            total: table.total(),
            distinct: table.len(),
            partitions: None,
            containing: None,
        }
    }

    pub fn with_partitions(mut self, partitions: usize) -> Report {
        self.partitions = Some(partitions);
        self
    }

    pub fn with_containing(mut self, needle: Option<char>, table: &FrequencyTable) -> Report {
        self.containing = needle.map(|needle| {
            let (total, distinct) = table.containing(needle);
            info!("{} words contain '{}', {} distinct", total, needle, distinct);
            Containing { needle, total, distinct }
        });
        self
    }
}

// Write a markdown report file with the settings and statistics of the run.
// If the output is stdout, skip this step.
// Otherwise the report is written next to the output file, with the suffix -report.md
// instead of the original extension.
pub fn output_markdown_report(config: &Config, report: &Report) -> Result<()> {
    let filename = match &config.output {
        Output::Stdout => return Ok(()),
        Output::File(filename) => filename,
    };
    let report_filename = markdown_report_filename(filename);
    debug!("Writing run report to {}", report_filename);
    let mut report_file = std::fs::File::create(&report_filename).map_err(|e| TermFreqError::file(&report_filename, e))?;
    let markdown = create_markdown(config, report);
    report_file.write_all(markdown.as_bytes())?;
    Ok(())
}

// filename.csv or filename.txt becomes filename-report.md. There may be no extension at all.
fn markdown_report_filename(filename: &str) -> String {
    let path = std::path::Path::new(filename);
    let stem = match (path.extension(), filename.rfind('.')) {
        (Some(_), Some(pos)) => &filename[..pos],
        _ => filename,
    };
    format!("{}-report.md", stem)
}

fn create_markdown(config: &Config, report: &Report) -> String {
    let mut markdown = String::new();
    markdown.push_str("# Report\n\n");
    markdown.push_str("## Data\n\n");
    markdown.push_str(&format!("| {} | {} |\n", "Field", "Value"));
    markdown.push_str("| --- | --- |\n");
    markdown.push_str(&format!("| {} | {} |\n", "command", config.cmd));
    markdown.push_str(&format!("| {} | {} |\n", "input file", config.input));
    if let Output::File(filename) = &config.output {
        markdown.push_str(&format!("| {} | {} |\n", "output file", filename));
    }
    markdown.push_str(&format!("| {} | {} |\n", "output format", config.output_format));
    if config.options.keep_stop_words {
        markdown.push_str(&format!("| {} | {} |\n", "stop words file", "not used"));
    } else {
        markdown.push_str(&format!("| {} | {} |\n", "stop words file", config.stop_words_file));
    }
    if let Cmd::Partitioned = config.cmd {
        markdown.push_str(&format!("| {} | {} |\n", "accumulator file", config.accumulator_file));
    }
    markdown.push_str("\n");
    markdown.push_str("## Options\n\n");
    markdown.push_str(&format!("| {} | {} |\n", "Option", "Value"));
    markdown.push_str("| --- | --- |\n");
    markdown.push_str(&format!("| {} | {} |\n", "top", config.top));
    markdown.push_str(&format!("| {} | {} |\n", "min_length", config.options.min_length));
    markdown.push_str(&format!("| {} | {} |\n", "extra_chars", if config.options.extra_chars.is_empty() { "none" } else { config.options.extra_chars.as_str() }));
    markdown.push_str(&format!("| {} | {} |\n", "chunk_size", config.options.chunk_size));
    match config.cmd {
        Cmd::Ngrams => {
            markdown.push_str(&format!("| {} | {} |\n", "ngram_size", config.options.ngram_size));
            markdown.push_str(&format!("| {} | {} |\n", "ngram_unit", config.options.ngram_unit));
            markdown.push_str(&format!("| {} | {} |\n", "leet", config.options.leet));
        }
        Cmd::Partitioned => {
            markdown.push_str(&format!("| {} | {} |\n", "partition_lines", config.options.partition_lines));
        }
        Cmd::Words => {}
    }
    markdown.push_str("\n");
    markdown.push_str("## Statistics\n\n");
    markdown.push_str(&format!("| {} | {} |\n", "Field", "Value"));
    markdown.push_str("| --- | --- |\n");
    markdown.push_str(&format!("| {} | {} |\n", "Counted units", report.total));
    markdown.push_str(&format!("| {} | {} |\n", "Distinct units", report.distinct));
    markdown.push_str(&format!("| {} | {} |\n", "Reported entries", report.ranked.len()));
    if let Some(partitions) = report.partitions {
        markdown.push_str(&format!("| {} | {} |\n", "Partitions", partitions));
    }
    if let Some(containing) = &report.containing {
        markdown.push_str(&format!("| Words containing '{}' | {} |\n", containing.needle, containing.total));
        markdown.push_str(&format!("| Distinct words containing '{}' | {} |\n", containing.needle, containing.distinct));
    }
    cmdline_to_run(&mut markdown, config);
    markdown
}

// Replicate a command line from the config
fn cmdline_to_run(markdown: &mut String, config: &Config) {
    let command = format!("-c {}", config.cmd);
    let stop_words = if config.default_args.contains_key("stop-words") { "".to_string() } else { format!("-w {}", config.stop_words_file) };
    let top = if config.default_args.contains_key("top") { "".to_string() } else { format!("-n {}", config.top) };
    let accumulator_file = if config.default_args.contains_key("accumulator-file") { "".to_string() } else { format!("-A {}", config.accumulator_file) };
    let output = match &config.output {
        Output::Stdout => "".to_string(),
        Output::File(filename) => format!("-o {}", filename),
    };
    let output_format = format!("-F {}", config.output_format);
    let defaults = crate::args::ConfigOptions::default();
    let min_length = if config.options.min_length != defaults.min_length { format!("-O min-length={}", config.options.min_length) } else { "".to_string() };
    let extra_chars = if config.options.extra_chars.is_empty() { "".to_string() } else { format!("-O 'extra-chars={}'", config.options.extra_chars) };
    let keep_stop_words = if config.options.keep_stop_words { "-O keep-stop-words".to_string() } else { "".to_string() };
    let any_extension = if config.options.any_extension { "-O any-extension".to_string() } else { "".to_string() };
    let leet = if config.options.leet { "-O leet".to_string() } else { "".to_string() };
    let ngram_size = if config.options.ngram_size != defaults.ngram_size { format!("-O ngram-size={}", config.options.ngram_size) } else { "".to_string() };
    let ngram_unit = if config.options.ngram_unit != defaults.ngram_unit { format!("-O ngram-unit={}", config.options.ngram_unit) } else { "".to_string() };
    let partition_lines = if config.options.partition_lines != defaults.partition_lines { format!("-O partition-lines={}", config.options.partition_lines) } else { "".to_string() };
    let chunk_size = if config.options.chunk_size != defaults.chunk_size { format!("-O chunk-size={}", config.options.chunk_size) } else { "".to_string() };
    let contains = match config.options.contains {
        Some(c) => format!("-O contains={}", c),
        None => "".to_string(),
    };
    let verbose = if config.verbose { "-v".to_string() } else { "".to_string() };
    let input = config.input.clone();
    // Combine them in order above, input last
    let combined_options = vec![command, stop_words, top, accumulator_file, output, output_format, min_length, extra_chars, keep_stop_words, any_extension, leet, ngram_size, ngram_unit, partition_lines, chunk_size, contains, verbose, input];
    let options = combined_options.iter().filter(|x| !x.is_empty()).map(|x| x.to_string()).collect::<Vec<String>>().join(" ");
    let cmdline = format!("termfreq {}", options);
    markdown.push_str("\n");
    markdown.push_str("## Command line\n\n");
    markdown.push_str(&format!("```\n{}\n```\n", cmdline));
}
