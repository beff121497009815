mod accumulator;
mod args;
mod cmd;
mod error;
mod frequency;
mod input;
mod leet;
mod ngrams;
mod output;
mod partitioned;
mod ranking;
mod report;
mod stopwords;
mod tokenizer;
mod words;

use std::process;
use tracing::{debug, error, Level};

fn main() {
    let config = args::Config::new().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    // Logs go to stderr, stdout only carries the report
    let level = if config.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Running {} on {}", config.cmd, config.input);
    if let Err(e) = config.cmd.run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}
