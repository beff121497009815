use crate::args::{Config, NgramUnit};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::input;
use crate::leet;
use crate::output;
use crate::ranking::NGRAM_SEPARATOR;
use crate::report::Report;
use crate::tokenizer;
use crate::words;
use std::path::Path;
use tracing::info;

pub fn count_ngrams(config: &Config) -> Result<()> {
    let stop_words = config.load_stop_words()?;
    let tokenizer = config.tokenizer();
    let mut tokens = vec![];
    input::stream_tokens(Path::new(&config.input), &tokenizer, config.options.chunk_size, |batch| {
        tokens.extend(words::without_stop_words(stop_words.as_ref(), batch));
    })?;
    if config.options.leet {
        tokens = tokens.iter().map(|token| leet::to_leet(token)).collect();
    }
    info!("Counting {} {}-grams over {} tokens", config.options.ngram_unit, config.options.ngram_size, tokens.len());
    let table = match config.options.ngram_unit {
        NgramUnit::Word => word_ngrams(&tokens, config.options.ngram_size),
        NgramUnit::Char => char_ngrams(&tokens, config.options.ngram_size),
    };
    let report = Report::new(config, &table, NGRAM_SEPARATOR);
    output::output_report(config, &report)
}

// Consecutive tokens across the whole text, keyed as a tuple: (first, second)
pub fn word_ngrams(tokens: &[String], n: usize) -> FrequencyTable {
    if n == 0 {
        return FrequencyTable::new();
    }
    FrequencyTable::from_tokens(tokens.windows(n).map(|window| format!("({})", window.join(", "))))
}

// Character windows inside each token, never across tokens
pub fn char_ngrams(tokens: &[String], n: usize) -> FrequencyTable {
    FrequencyTable::from_tokens(tokens.iter().flat_map(|token| tokenizer::char_ngrams(token, n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::default().tokenize(text)
    }

    #[test]
    fn counts_word_bigrams() {
        let table = word_ngrams(&tokens("the cat sat on the cat mat"), 2);
        assert_eq!(table.get("(the, cat)"), 2);
        assert_eq!(table.get("(cat, sat)"), 1);
        assert_eq!(table.get("(cat, mat)"), 1);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn counts_word_trigrams() {
        let table = word_ngrams(&tokens("one two three one two three"), 3);
        assert_eq!(table.get("(one, two, three)"), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn too_few_tokens_gives_no_ngrams() {
        assert!(word_ngrams(&tokens("lonely"), 2).is_empty());
        assert!(word_ngrams(&[], 2).is_empty());
    }

    #[test]
    fn leet_bigrams_are_reported_with_wide_separator() {
        let leet: Vec<String> = tokens("The cat sat. The cat sat. The dog!").iter().map(|t| leet::to_leet(t)).collect();
        let ranked = word_ngrams(&leet, 2).top_n(5);
        assert_eq!(ranked.lines(NGRAM_SEPARATOR), vec![
            "(547, 7h3)  -  2",
            "(7h3, c47)  -  2",
            "(c47, 547)  -  2",
            "(7h3, d09)  -  1",
        ]);
    }

    #[test]
    fn counts_char_ngrams_within_tokens() {
        let table = char_ngrams(&tokens("abc ab"), 2);
        assert_eq!(table.get("ab"), 2);
        assert_eq!(table.get("bc"), 1);
        // no window across the space
        assert_eq!(table.get("ca"), 0);
    }
}
