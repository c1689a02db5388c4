//! Measuring a target and judging the count against a threshold.

use crate::metrics::{
    count_fragment, count_lines, count_paragraphs, count_regex_matches, count_words,
    is_valid_regex, CheckTarget, Summarizer,
};
use crate::report::CheckResult;
use crate::threshold::Threshold;

/// A countable property of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Measure {
    Lines,
    Paragraphs,
    Words(Summarizer),
    Fragment(String),
    Regex(String),
    /// Comments found by a fixed pattern, described by their kind.
    Comments { kind: String, pattern: &'static str },
}

impl Measure {
    /// Count the property in the text; `None` for an invalid regex.
    pub fn count(&self, text: &str) -> Option<usize> {
        match self {
            Measure::Lines => Some(count_lines(text)),
            Measure::Paragraphs => Some(count_paragraphs(text)),
            Measure::Words(summarizer) => Some(count_words(text, *summarizer).summary),
            Measure::Fragment(fragment) => Some(count_fragment(text, fragment)),
            Measure::Regex(pattern) => count_regex_matches(text, pattern),
            Measure::Comments { pattern, .. } => count_regex_matches(text, pattern),
        }
    }

    /// Extra detail for a failed check, pointing at what fell short.
    fn shortfall(&self, text: &str) -> Option<String> {
        match self {
            Measure::Words(Summarizer::Minimum) => count_words(text, Summarizer::Minimum)
                .shortest()
                .map(|(number, words)| format!("paragraph {} has only {} word(s)", number, words)),
            _ => None,
        }
    }

    /// What is being counted, phrased to follow a number.
    pub fn noun(&self) -> String {
        match self {
            Measure::Lines => "line(s)".to_string(),
            Measure::Paragraphs => "paragraph(s)".to_string(),
            Measure::Words(Summarizer::Minimum) => "word(s) in every paragraph".to_string(),
            Measure::Words(Summarizer::Total) => "word(s) in total".to_string(),
            Measure::Fragment(fragment) => format!("fragment(s) \"{}\"", fragment),
            Measure::Regex(pattern) => format!("match(es) of the regular expression \"{}\"", pattern),
            Measure::Comments { kind, .. } => format!("{} comment(s)", kind),
        }
    }
}

/// Measure a target and compare the count against a threshold.
///
/// A target with nothing to measure counts as zero. An invalid regular
/// expression fails the check without counting.
pub fn evaluate_count(measure: &Measure, target: &CheckTarget<'_>, threshold: Threshold) -> CheckResult {
    let noun = measure.noun();
    let check = format!("The {} has {} {}", target.describe(), threshold, noun);

    if let Measure::Regex(pattern) = measure {
        if !is_valid_regex(pattern) {
            tracing::debug!(pattern = %pattern, "invalid regular expression");
            return CheckResult::failed(check, "The regular expression is not valid");
        }
    }
    let counted = target
        .measure(|text| measure.count(text))
        .flatten()
        .unwrap_or(0);

    let (outcome, measured) = threshold.check(counted);
    tracing::debug!(measured, expected = threshold.expected, exact = threshold.exact, outcome, "evaluated count");

    let diagnostic = if target.path().is_some() && !target.file_exists() {
        format!("Did not find the {}", target.describe())
    } else {
        let found = format!("Found {} {}", measured, noun);
        let detail = if outcome {
            None
        } else {
            target.measure(|text| measure.shortfall(text)).flatten()
        };
        match detail {
            Some(detail) => format!("{}; {}", found, detail),
            None => found,
        }
    };
    CheckResult::new(check, outcome, diagnostic)
}
