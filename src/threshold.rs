//! Threshold comparison for measured counts.

use std::fmt;

/// Compare a measured count against an expected count.
///
/// With `exact` the counts must be equal, otherwise the measured count must
/// be at least the expected one. The measured value is handed back so callers
/// can build a diagnostic without measuring again.
pub fn at_least_or_exact(measured: usize, expected: usize, exact: bool) -> (bool, usize) {
    let passed = if exact {
        measured == expected
    } else {
        measured >= expected
    };
    (passed, measured)
}

/// An expected count together with its comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub expected: usize,
    pub exact: bool,
}

impl Threshold {
    pub fn at_least(expected: usize) -> Self {
        Self {
            expected,
            exact: false,
        }
    }

    pub fn exactly(expected: usize) -> Self {
        Self {
            expected,
            exact: true,
        }
    }

    pub fn new(expected: usize, exact: bool) -> Self {
        Self { expected, exact }
    }

    /// Evaluate a measured count against this threshold.
    pub fn check(&self, measured: usize) -> (bool, usize) {
        at_least_or_exact(measured, self.expected, self.exact)
    }

    /// Wording used in check descriptions, e.g. "at least".
    pub fn qualifier(&self) -> &'static str {
        if self.exact {
            "exactly"
        } else {
            "at least"
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.qualifier(), self.expected)
    }
}
