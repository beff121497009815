use crate::args::Config;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::input;
use crate::output;
use crate::ranking::{RankedResult, WORD_SEPARATOR};
use crate::report::Report;
use crate::stopwords::StopWords;
use crate::tokenizer::{Tokenizer, DEFAULT_CHUNK_SIZE};
use std::path::Path;
use tracing::info;

pub fn count_words(config: &Config) -> Result<()> {
    // Stop words are loaded before the input is touched
    let stop_words = config.load_stop_words()?;
    let tokenizer = config.tokenizer();
    info!("Counting words in {}", config.input);
    let table = count_file(Path::new(&config.input), &tokenizer, stop_words.as_ref(), config.options.chunk_size)?;
    info!("Counted {} tokens, {} distinct", table.total(), table.len());
    let report = Report::new(config, &table, WORD_SEPARATOR).with_containing(config.options.contains, &table);
    output::output_report(config, &report)
}

/// Top `top_n` words of a text file using the default tokenizer policy.
#[allow(dead_code)]
pub fn run(input_path: &Path, stop_words_path: &Path, top_n: usize) -> Result<RankedResult> {
    let stop_words = StopWords::load(stop_words_path)?;
    let table = count_file(input_path, &Tokenizer::default(), Some(&stop_words), DEFAULT_CHUNK_SIZE)?;
    Ok(table.top_n(top_n))
}

pub fn count_file(path: &Path, tokenizer: &Tokenizer, stop_words: Option<&StopWords>, chunk_size: usize) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    input::stream_tokens(path, tokenizer, chunk_size, |batch| {
        table.extend(without_stop_words(stop_words, batch));
    })?;
    Ok(table)
}

pub fn count_text(text: &str, tokenizer: &Tokenizer, stop_words: Option<&StopWords>) -> FrequencyTable {
    FrequencyTable::from_tokens(without_stop_words(stop_words, tokenizer.tokenize(text)))
}

// No stop words means no filtering ('-O keep-stop-words')
pub fn without_stop_words(stop_words: Option<&StopWords>, tokens: Vec<String>) -> Vec<String> {
    match stop_words {
        Some(stop_words) => stop_words.filter(tokens).collect(),
        None => tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankedEntry;

    fn fixture(text: &str, stop_words: &str) -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let stop = dir.path().join("stop_words.txt");
        std::fs::write(&input, text).unwrap();
        std::fs::write(&stop, stop_words).unwrap();
        (dir, input, stop)
    }

    #[test]
    fn cat_sat_example() {
        let (_dir, input, stop) = fixture("The Cat sat. The cat SAT!", "the");
        let ranked = run(&input, &stop, 2).unwrap();
        assert_eq!(ranked.entries, vec![RankedEntry::new("cat", 2), RankedEntry::new("sat", 2)]);
        assert_eq!(ranked.to_string(), "cat - 2\nsat - 2\n");
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let (_dir, input, stop) = fixture("", "the");
        assert!(run(&input, &stop, 25).unwrap().is_empty());
    }

    #[test]
    fn missing_stop_words_fail_before_reading_input() {
        let dir = tempfile::tempdir().unwrap();
        // Neither file exists: the stop word error must win
        let result = run(&dir.path().join("input.txt"), &dir.path().join("stop_words.txt"), 25);
        assert!(matches!(result, Err(crate::error::TermFreqError::Config(_))));
    }

    #[test]
    fn unreadable_input_is_reported() {
        let (dir, _input, stop) = fixture("", "the");
        let result = run(&dir.path().join("absent.txt"), &stop, 25);
        assert!(matches!(result, Err(crate::error::TermFreqError::File { .. })));
    }

    #[test]
    fn total_equals_counted_tokens() {
        let text = "It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife.";
        let stop_words = StopWords::parse("it,is,that,in,of,be");
        let tokenizer = Tokenizer::default();
        let table = count_text(text, &tokenizer, Some(&stop_words));
        let expected = tokenizer.tokenize(text).into_iter().filter(|t| !stop_words.is_stop_word(t)).count();
        assert_eq!(table.total(), expected as u64);
        assert_eq!(table.get("a"), 0);
        assert_eq!(table.get("truth"), 1);
    }

    #[test]
    fn file_and_text_counts_agree_for_small_chunks() {
        let text = "alpha beta gamma, alpha! beta alpha\nγάμμα γάμμα".repeat(20);
        let (_dir, input, _stop) = fixture(&text, "");
        let tokenizer = Tokenizer::default();
        for chunk_size in [1, 2, 3, 5, 4096] {
            let from_file = count_file(&input, &tokenizer, None, chunk_size).unwrap();
            assert_eq!(from_file, count_text(&text, &tokenizer, None));
        }
    }

    #[test]
    fn stop_words_are_removed_only_when_loaded() {
        let tokens = Tokenizer::default().tokenize("the cat and the hat");
        let stop_words = StopWords::parse("the,and");
        assert_eq!(without_stop_words(Some(&stop_words), tokens.clone()), vec!["cat", "hat"]);
        assert_eq!(without_stop_words(None, tokens.clone()), tokens);
    }

    #[test]
    fn top_n_length_is_bounded_by_distinct_tokens() {
        let (_dir, input, stop) = fixture("one two three two three three", "");
        assert_eq!(run(&input, &stop, 2).unwrap().len(), 2);
        assert_eq!(run(&input, &stop, 25).unwrap().len(), 3);
    }
}
