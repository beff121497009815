use clap::Parser;
use crate::cmd::Cmd;
use crate::error::{Result, TermFreqError};
use crate::input;
use crate::output::Output;
use crate::stopwords::StopWords;
use crate::tokenizer::{Tokenizer, DEFAULT_CHUNK_SIZE, DEFAULT_MIN_LENGTH, MAX_CHUNK_SIZE};
use rustc_hash::FxHashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_STOP_WORDS_FILE: &str = "stop_words.txt";
pub const DEFAULT_ACCUMULATOR_FILE: &str = "frequencies.bin";
pub const DEFAULT_TOP_WORDS: usize = 25;
pub const DEFAULT_TOP_NGRAMS: usize = 5;
pub const DEFAULT_NGRAM_SIZE: usize = 2;
pub const DEFAULT_PARTITION_LINES: usize = 200;

#[derive(Parser)]
#[command(name = "termfreq", version, about = "Count term and n-gram frequencies in a text file")]
struct Args {
    /// Command to run: Available commands:
    /// 'words', 'partitioned', 'ngrams' (Default: 'words')
    #[clap(short = 'c', long = "command")]
    command: Option<String>,
    /// Text file to read. Must have a .txt extension unless '-O any-extension' is given.
    input: Option<String>,
    /// Comma separated stop word file
    /// [Defaults to 'stop_words.txt' in the working directory]
    #[clap(short = 'w', long = "stop-words")]
    stop_words: Option<String>,
    /// Number of entries to report
    /// [Defaults to 25, or 5 for 'ngrams']
    #[clap(short = 'n', long = "top")]
    top: Option<usize>,
    /// File used to accumulate counts between partitions with the 'partitioned' command.
    /// Removed when the run completes. [Defaults to 'frequencies.bin']
    #[clap(short = 'A', long = "accumulator-file")]
    accumulator_file: Option<String>,
    /// Output. File to write output to. Defaults to stdout.
    #[clap(short = 'o', long = "output")]
    output: Option<String>,
    /// Output format. Available formats: 'text', 'json', 'csv', 'xlsx' ('xlsx' requires --output)
    /// [Defaults to 'text']
    #[clap(short = 'F', long = "output-format")]
    output_format: Option<String>,
    /// Print verbose output
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
    /// Options. Extra options, repeatable. For example '-O min-length=3 -O leet'.
    /// Available: min-length=N, extra-chars=CHARS, keep-stop-words, any-extension, leet,
    /// ngram-size=N, ngram-unit=word|char, partition-lines=N, chunk-size=BYTES, contains=CHAR
    #[clap(short = 'O', long = "option")]
    options: Vec<String>,
}

#[derive(Debug)]
pub struct Config {
    pub cmd: Cmd,
    pub input: String,
    pub stop_words_file: String,
    pub top: usize,
    pub accumulator_file: String,
    pub output: Output,
    pub output_format: OutputFormat,
    pub verbose: bool,
    pub options: ConfigOptions,
    // Arguments left at their default value, skipped when the command line is reproduced in the report
    pub default_args: FxHashMap<String, bool>,
}

#[derive(Debug, Clone)]
pub struct ConfigOptions {
    pub min_length: usize,
    pub extra_chars: String,
    pub keep_stop_words: bool,
    pub any_extension: bool,
    pub leet: bool,
    pub ngram_size: usize,
    pub ngram_unit: NgramUnit,
    pub partition_lines: usize,
    pub chunk_size: usize,
    // Count the words containing this character, reported in the run statistics
    pub contains: Option<char>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        ConfigOptions {
            min_length: DEFAULT_MIN_LENGTH,
            extra_chars: String::new(),
            keep_stop_words: false,
            any_extension: false,
            leet: false,
            ngram_size: DEFAULT_NGRAM_SIZE,
            ngram_unit: NgramUnit::Word,
            partition_lines: DEFAULT_PARTITION_LINES,
            chunk_size: DEFAULT_CHUNK_SIZE,
            contains: None,
        }
    }
}

impl ConfigOptions {
    fn usize_option(s: &str) -> Result<usize> {
        let value = ConfigOptions::string_option(s)?;
        match value.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(TermFreqError::Config(format!("Option {} expects a positive whole number", s))),
        }
    }

    fn char_option(s: &str) -> Result<char> {
        let value = ConfigOptions::string_option(s)?;
        let mut chars = value.chars().flat_map(char::to_lowercase);
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(TermFreqError::Config(format!("Option {} expects a single character", s))),
        }
    }

    fn string_option(s: &str) -> Result<String> {
        match s.split_once('=') {
            Some((_, value)) => Ok(value.to_string()),
            None => Err(TermFreqError::Config(format!("Option {} requires a value", s))),
        }
    }

    fn option_name(s: &str) -> &str {
        s.split('=').next().unwrap_or(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramUnit {
    Word,
    Char,
}

impl FromStr for NgramUnit {
    type Err = TermFreqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "word" => Ok(NgramUnit::Word),
            "char" => Ok(NgramUnit::Char),
            _ => Err(TermFreqError::Config(format!("Unknown n-gram unit: {}", s))),
        }
    }
}

impl Display for NgramUnit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NgramUnit::Word => write!(f, "word"),
            NgramUnit::Char => write!(f, "char"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    CSV,
    XLSX,
}

impl FromStr for OutputFormat {
    type Err = TermFreqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::CSV),
            "xlsx" => Ok(OutputFormat::XLSX),
            _ => Err(TermFreqError::Config(format!("Unknown output format: {}", s))),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::CSV => write!(f, "csv"),
            OutputFormat::XLSX => write!(f, "xlsx"),
        }
    }
}

impl Config {
    pub fn new() -> Result<Config> {
        let args = Args::parse();
        Config::from_parsed(&args)
    }

    // Build from an explicit argument list, the first item being the program name
    #[allow(dead_code)]
    pub fn from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Args::try_parse_from(args).map_err(|e| TermFreqError::Config(e.to_string()))?;
        Config::from_parsed(&args)
    }

    fn from_parsed(args: &Args) -> Result<Config> {
        let options = parse_options(args)?;
        let config = parse_command(args, options)?;
        input::validate_input_path(&config)?;
        Ok(config)
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.options.min_length, &self.options.extra_chars)
    }

    // None when stop word filtering was switched off with '-O keep-stop-words'
    pub fn load_stop_words(&self) -> Result<Option<StopWords>> {
        if self.options.keep_stop_words {
            return Ok(None);
        }
        StopWords::load(&self.stop_words_file).map(Some)
    }
}

fn parse_options(args: &Args) -> Result<ConfigOptions> {
    let mut options = ConfigOptions::default();
    for option in &args.options {
        match ConfigOptions::option_name(option) {
            "min-length" => options.min_length = ConfigOptions::usize_option(option)?,
            "extra-chars" => options.extra_chars = ConfigOptions::string_option(option)?,
            "keep-stop-words" => options.keep_stop_words = true,
            "any-extension" => options.any_extension = true,
            "leet" => options.leet = true,
            "ngram-size" => options.ngram_size = ConfigOptions::usize_option(option)?,
            "ngram-unit" => options.ngram_unit = ConfigOptions::string_option(option)?.parse()?,
            "partition-lines" => options.partition_lines = ConfigOptions::usize_option(option)?,
            "chunk-size" => {
                let chunk_size = ConfigOptions::usize_option(option)?;
                if chunk_size > MAX_CHUNK_SIZE {
                    return Err(TermFreqError::Config(format!("Option {} exceeds the maximum chunk size of {} bytes", option, MAX_CHUNK_SIZE)));
                }
                options.chunk_size = chunk_size;
            }
            "contains" => options.contains = Some(ConfigOptions::char_option(option)?),
            _ => return Err(TermFreqError::Config(format!("Unknown option: {}", option))),
        }
    }
    Ok(options)
}

fn parse_command(args: &Args, options: ConfigOptions) -> Result<Config> {
    let cmd: Cmd = args.command.as_deref().unwrap_or("words").parse()?;
    let input = match &args.input {
        Some(input) => input.clone(),
        None => return Err(TermFreqError::InvalidInput("Input file is required, usage: termfreq [OPTIONS] <INPUT>".to_string())),
    };
    let default_top = match cmd {
        Cmd::Ngrams => DEFAULT_TOP_NGRAMS,
        Cmd::Words | Cmd::Partitioned => DEFAULT_TOP_WORDS,
    };
    let top = args.top.unwrap_or(default_top);
    if top == 0 {
        return Err(TermFreqError::Config("--top must be at least 1".to_string()));
    }
    let output = match &args.output {
        Some(filename) => Output::File(filename.clone()),
        None => Output::Stdout,
    };
    let output_format: OutputFormat = args.output_format.as_deref().unwrap_or("text").parse()?;
    if output_format == OutputFormat::XLSX && output == Output::Stdout {
        return Err(TermFreqError::Config("Output format xlsx requires an output file (-o)".to_string()));
    }
    let mut config = Config {
        cmd,
        input,
        stop_words_file: args.stop_words.clone().unwrap_or(DEFAULT_STOP_WORDS_FILE.to_string()),
        top,
        accumulator_file: args.accumulator_file.clone().unwrap_or(DEFAULT_ACCUMULATOR_FILE.to_string()),
        output,
        output_format,
        verbose: args.verbose,
        options,
        default_args: FxHashMap::default(),
    };
    add_default_args(&mut config, default_top);
    Ok(config)
}

fn add_default_args(config: &mut Config, default_top: usize) {
    if config.stop_words_file == DEFAULT_STOP_WORDS_FILE {
        config.default_args.insert("stop-words".to_string(), true);
    }
    if config.accumulator_file == DEFAULT_ACCUMULATOR_FILE {
        config.default_args.insert("accumulator-file".to_string(), true);
    }
    if config.top == default_top {
        config.default_args.insert("top".to_string(), true);
    }
}
