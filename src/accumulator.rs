use crate::error::{Result, TermFreqError};
use crate::frequency::FrequencyTable;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// Frequency table persisted between partitions of a single run.
// Each partition is merged with a read-modify-write of the file; the file is removed once
// the final report has been written.
#[derive(Debug)]
pub struct Accumulator {
    path: PathBuf,
    partitions: usize,
}

impl Accumulator {
    pub fn create(path: impl AsRef<Path>) -> Result<Accumulator> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            warn!("Removing stale accumulator file {}", path.display());
            std::fs::remove_file(&path).map_err(|e| TermFreqError::file(&path, e))?;
        }
        Ok(Accumulator { path, partitions: 0 })
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn merge(&mut self, partition: FrequencyTable) -> Result<()> {
        let table = if self.path.exists() {
            let mut current = FrequencyTable::load(&self.path)?;
            current.merge(partition);
            current
        } else {
            partition
        };
        table.save(&self.path)?;
        self.partitions += 1;
        debug!("Merged partition {} into {}", self.partitions, self.path.display());
        Ok(())
    }

    // Nothing was written when the input had no partitions
    pub fn load(&self) -> Result<FrequencyTable> {
        if !self.path.exists() {
            return Ok(FrequencyTable::new());
        }
        FrequencyTable::load(&self.path)
    }

    // Run `f` against the accumulator, then remove the file whether or not `f` succeeded.
    // An error from `f` takes precedence over a failed removal.
    pub fn run_then_remove<T>(mut self, f: impl FnOnce(&mut Accumulator) -> Result<T>) -> Result<T> {
        let result = f(&mut self);
        let removed = self.remove();
        let value = result?;
        removed?;
        Ok(value)
    }

    pub fn remove(self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| TermFreqError::file(&self.path, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str]) -> FrequencyTable {
        FrequencyTable::from_tokens(words.iter().map(|w| w.to_string()))
    }

    #[test]
    fn merges_partitions_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequencies.bin");
        let mut accumulator = Accumulator::create(&path).unwrap();
        assert!(!path.exists());
        accumulator.merge(table(&["cat", "hat"])).unwrap();
        assert!(path.exists());
        accumulator.merge(table(&["cat", "dog"])).unwrap();
        assert_eq!(accumulator.partitions(), 2);

        let totals = accumulator.load().unwrap();
        assert_eq!(totals.get("cat"), 2);
        assert_eq!(totals.get("hat"), 1);
        assert_eq!(totals.get("dog"), 1);

        accumulator.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn no_partitions_gives_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let accumulator = Accumulator::create(dir.path().join("frequencies.bin")).unwrap();
        assert!(accumulator.load().unwrap().is_empty());
        accumulator.remove().unwrap();
    }

    #[test]
    fn file_is_removed_when_a_partition_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequencies.bin");
        let accumulator = Accumulator::create(&path).unwrap();
        let result: Result<()> = accumulator.run_then_remove(|accumulator| {
            accumulator.merge(table(&["cat"]))?;
            assert!(path.exists());
            Err(TermFreqError::InvalidInput("partition failed".to_string()))
        });
        assert!(matches!(result, Err(TermFreqError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn file_is_removed_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequencies.bin");
        let accumulator = Accumulator::create(&path).unwrap();
        let totals = accumulator.run_then_remove(|accumulator| {
            accumulator.merge(table(&["cat", "cat"]))?;
            accumulator.load()
        }).unwrap();
        assert_eq!(totals.get("cat"), 2);
        assert!(!path.exists());
    }

    #[test]
    fn stale_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequencies.bin");
        table(&["old", "old"]).save(&path).unwrap();
        let mut accumulator = Accumulator::create(&path).unwrap();
        accumulator.merge(table(&["new"])).unwrap();
        let totals = accumulator.load().unwrap();
        assert_eq!(totals.get("old"), 0);
        assert_eq!(totals.get("new"), 1);
    }
}
