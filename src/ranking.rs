use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

// Separator between key and count in text output
pub const WORD_SEPARATOR: &str = " - ";
pub const NGRAM_SEPARATOR: &str = "  -  ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(key: &str, count: u64) -> RankedEntry {
        RankedEntry {
            key: key.to_string(),
            count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub entries: Vec<RankedEntry>,
}

impl RankedResult {
    // Sort by count descending, ties by key ascending, and keep the first n
    pub fn from_counts<'a>(counts: impl IntoIterator<Item = (&'a str, u64)>, n: usize) -> RankedResult {
        let mut entries: Vec<RankedEntry> = counts.into_iter().map(|(key, count)| RankedEntry::new(key, count)).collect();
        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        entries.truncate(n);
        RankedResult { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self, separator: &str) -> Vec<String> {
        self.entries.iter().map(|entry| format!("{}{}{}", entry.key, separator, entry.count)).collect()
    }
}

impl Display for RankedResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for line in self.lines(WORD_SEPARATOR) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
