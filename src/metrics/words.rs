//! Word counting across the paragraphs of writing.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::get_paragraphs;

lazy_static! {
    /// Punctuation and symbols that separate words like whitespace does.
    static ref WORD_SEPARATORS: Regex = Regex::new(r##"[!"#$%&()*+,./:;<=>?@\[\]^`{|}]"##).unwrap();
}

/// How the per-paragraph word counts are reduced to one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summarizer {
    /// Every paragraph must be long enough: the shortest paragraph counts.
    Minimum,
    /// Total length across all paragraphs.
    Total,
}

impl Summarizer {
    fn apply(self, counts: &[usize]) -> Option<usize> {
        match self {
            Summarizer::Minimum => counts.iter().copied().min(),
            Summarizer::Total => (!counts.is_empty()).then(|| counts.iter().sum()),
        }
    }
}

/// Word counts for a piece of writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    /// The per-paragraph counts reduced by the summarizer; 0 without paragraphs.
    pub summary: usize,
    /// Word count of each paragraph, keyed by 1-based paragraph number.
    pub per_paragraph: BTreeMap<usize, usize>,
}

impl WordCount {
    /// The first paragraph with the fewest words, as `(number, words)`.
    pub fn shortest(&self) -> Option<(usize, usize)> {
        self.per_paragraph
            .iter()
            .min_by_key(|(_, words)| **words)
            .map(|(number, words)| (*number, *words))
    }
}

fn words_in(paragraph: &str) -> usize {
    WORD_SEPARATORS
        .replace_all(paragraph, " ")
        .split_whitespace()
        .count()
}

/// Count the words in each paragraph and summarize them.
pub fn count_words(content: &str, summarizer: Summarizer) -> WordCount {
    let per_paragraph: BTreeMap<usize, usize> = get_paragraphs(content)
        .iter()
        .enumerate()
        .map(|(index, paragraph)| (index + 1, words_in(paragraph)))
        .collect();

    let counts: Vec<usize> = per_paragraph.values().copied().collect();
    WordCount {
        summary: summarizer.apply(&counts).unwrap_or(0),
        per_paragraph,
    }
}

/// Words in the shortest paragraph.
pub fn count_minimum_words(content: &str) -> WordCount {
    count_words(content, Summarizer::Minimum)
}

/// Words across all paragraphs.
pub fn count_total_words(content: &str) -> WordCount {
    count_words(content, Summarizer::Total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESSAY: &str = "One two three four.\n\nFive six.\n\nSeven, eight; nine: ten!";

    #[test]
    fn test_minimum_and_total() {
        let minimum = count_minimum_words(ESSAY);
        assert_eq!(minimum.summary, 2);

        let total = count_total_words(ESSAY);
        assert_eq!(total.summary, 10);
        assert_eq!(
            total.per_paragraph.into_iter().collect::<Vec<_>>(),
            vec![(1, 4), (2, 2), (3, 4)]
        );
    }

    #[test]
    fn test_shortest_paragraph() {
        assert_eq!(count_total_words(ESSAY).shortest(), Some((2, 2)));
        assert_eq!(count_minimum_words("Alpha beta.\n\nGamma delta.").shortest(), Some((1, 2)));
        assert_eq!(count_total_words("").shortest(), None);
    }

    #[test]
    fn test_no_paragraphs_is_zero() {
        for summarizer in [Summarizer::Minimum, Summarizer::Total] {
            let count = count_words("", summarizer);
            assert_eq!(count.summary, 0);
            assert!(count.per_paragraph.is_empty());
        }
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(words_in("a/b.c"), 3);
        assert_eq!(words_in("(wrapped) [words]"), 2);
        assert_eq!(words_in("!!! ..."), 0);
    }

    #[test]
    fn test_apostrophes_and_hyphens_stay_inside_words() {
        assert_eq!(words_in("don't well-known"), 2);
    }
}
