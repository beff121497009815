use crate::args::Config;
use crate::error::{Result, TermFreqError};
use crate::ngrams;
use crate::partitioned;
use crate::words;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Words,
    Partitioned,
    Ngrams,
}

impl Cmd {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Cmd::Words => words::count_words(config),
            Cmd::Partitioned => partitioned::count_partitioned(config),
            Cmd::Ngrams => ngrams::count_ngrams(config),
        }
    }
}

impl FromStr for Cmd {
    type Err = TermFreqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "words" => Ok(Cmd::Words),
            "partitioned" => Ok(Cmd::Partitioned),
            "ngrams" => Ok(Cmd::Ngrams),
            _ => Err(TermFreqError::Config(format!("Unknown command: {}", s))),
        }
    }
}

impl Display for Cmd {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cmd::Words => write!(f, "words"),
            Cmd::Partitioned => write!(f, "partitioned"),
            Cmd::Ngrams => write!(f, "ngrams"),
        }
    }
}
