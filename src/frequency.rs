use crate::error::{Result, TermFreqError};
use crate::ranking::RankedResult;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

type Count = u64;

// Exact occurrence count per key (a word token or an n-gram)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: FxHashMap<String, Count>,
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable::default()
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = String>) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.extend(tokens);
        table
    }

    pub fn add(&mut self, key: String) {
        self.add_count(key, 1);
    }

    pub fn add_count(&mut self, key: String, count: Count) {
        *self.counts.entry(key).or_insert(0) += count;
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = String>) {
        for token in tokens {
            self.add(token);
        }
    }

    // Counts from another table are added key by key
    pub fn merge(&mut self, other: FrequencyTable) {
        for (key, count) in other.counts {
            self.add_count(key, count);
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Count {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    // Sum of all counts, i.e. the number of tokens that went in
    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    // Occurrences and distinct keys containing the character
    pub fn containing(&self, c: char) -> (Count, usize) {
        self.iter()
            .filter(|(key, _)| key.contains(c))
            .fold((0, 0), |(total, distinct), (_, count)| (total + count, distinct + 1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn top_n(&self, n: usize) -> RankedResult {
        RankedResult::from_counts(self.iter(), n)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| TermFreqError::file(path, e))?;
        let mut writer = std::io::BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<FrequencyTable> {
        let file = std::fs::File::open(path).map_err(|e| TermFreqError::file(path, e))?;
        let reader = std::io::BufReader::new(file);
        Ok(bincode::deserialize_from(reader)?)
    }
}
