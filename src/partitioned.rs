use crate::accumulator::Accumulator;
use crate::args::Config;
use crate::error::Result;
use crate::input;
use crate::output;
use crate::ranking::WORD_SEPARATOR;
use crate::report::Report;
use crate::words;
use std::path::Path;
use tracing::info;

// Count the input partition by partition, merging every partition's counts into the
// accumulator file. The final table is read back from the accumulator.
pub fn count_partitioned(config: &Config) -> Result<()> {
    let stop_words = config.load_stop_words()?;
    let tokenizer = config.tokenizer();
    let contents = input::read_lossy(Path::new(&config.input))?;
    let accumulator = Accumulator::create(&config.accumulator_file)?;
    info!("Counting {} in partitions of {} lines", config.input, config.options.partition_lines);
    // The accumulator only lives for the duration of the run, failed or not
    accumulator.run_then_remove(|accumulator| {
        for partition in partitions(&contents, config.options.partition_lines) {
            let table = words::count_text(&partition, &tokenizer, stop_words.as_ref());
            accumulator.merge(table)?;
        }
        let table = accumulator.load()?;
        info!("Counted {} tokens, {} distinct, over {} partitions", table.total(), table.len(), accumulator.partitions());
        let report = Report::new(config, &table, WORD_SEPARATOR)
            .with_partitions(accumulator.partitions())
            .with_containing(config.options.contains, &table);
        output::output_report(config, &report)
    })
}

// Groups of `lines` lines. Tokens never span a newline, so partitions count independently.
pub fn partitions(contents: &str, lines: usize) -> Vec<String> {
    let all_lines: Vec<&str> = contents.split('\n').collect();
    all_lines.chunks(lines.max(1)).map(|chunk| chunk.join("\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::stopwords::StopWords;
    use crate::tokenizer::Tokenizer;
    use proptest::prelude::*;

    #[test]
    fn splits_into_line_groups() {
        let parts = partitions("a\nb\nc\nd\ne", 2);
        assert_eq!(parts, vec!["a\nb", "c\nd", "e"]);
        assert_eq!(partitions("", 200), vec![""]);
    }

    #[test]
    fn accumulated_counts_match_single_pass() {
        let dir = tempfile::tempdir().unwrap();
        let text = "It was the best of times,\nit was the worst of times,\nit was the age of wisdom,\n".repeat(30);
        let stop_words = StopWords::from_list(&["the", "of"]);
        let tokenizer = Tokenizer::default();

        let mut accumulator = Accumulator::create(dir.path().join("acc.bin")).unwrap();
        for partition in partitions(&text, 7) {
            accumulator.merge(words::count_text(&partition, &tokenizer, Some(&stop_words))).unwrap();
        }
        let accumulated = accumulator.load().unwrap();
        accumulator.remove().unwrap();

        assert_eq!(accumulated, words::count_text(&text, &tokenizer, Some(&stop_words)));
        assert_eq!(accumulated.get("times"), 60);
    }

    proptest! {
        #[test]
        fn partition_size_does_not_change_counts(lines in proptest::collection::vec("[a-c ]{0,12}", 0..20), size in 1usize..6) {
            let text = lines.join("\n");
            let tokenizer = Tokenizer::default();
            let mut merged = FrequencyTable::new();
            for partition in partitions(&text, size) {
                merged.merge(words::count_text(&partition, &tokenizer, None));
            }
            prop_assert_eq!(merged, words::count_text(&text, &tokenizer, None));
        }
    }
}
