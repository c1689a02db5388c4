//! Literal fragment and regular expression counting.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    /// An inline flag group that turns on multi-line mode, like `(?m)` or `(?im:`.
    static ref MULTI_LINE_FLAG: Regex = Regex::new(r"\(\?[a-zA-Z]*m[a-zA-Z]*[:)]").unwrap();
}

/// `$` outside multi-line mode, matching at the end or before a final newline.
const END_OR_FINAL_NEWLINE: &str = r"(?:\n?\z)";

/// Count the non-overlapping, case-sensitive occurrences of a fragment.
pub fn count_fragment(content: &str, fragment: &str) -> usize {
    content.matches(fragment).count()
}

/// Rewrite each bare `$` so it also matches before a trailing newline.
///
/// Escaped dollars and dollars inside character classes are literal and
/// stay as they are. Patterns that enable multi-line mode already give `$`
/// line semantics and are returned unchanged.
fn anchor_final_newline(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains('$') || MULTI_LINE_FLAG.is_match(pattern) {
        return Cow::Borrowed(pattern);
    }

    let mut rewritten = String::with_capacity(pattern.len() + 8);
    let mut class_depth = 0usize;
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                rewritten.push(c);
                if let Some(escaped) = chars.next() {
                    rewritten.push(escaped);
                }
            }
            '[' => {
                rewritten.push(c);
                if class_depth == 0 {
                    // A leading `]` (after an optional `^`) is a literal member.
                    if chars.peek() == Some(&'^') {
                        rewritten.push('^');
                        chars.next();
                    }
                    if chars.peek() == Some(&']') {
                        rewritten.push(']');
                        chars.next();
                    }
                }
                class_depth += 1;
            }
            ']' if class_depth > 0 => {
                rewritten.push(c);
                class_depth -= 1;
            }
            '$' if class_depth == 0 => rewritten.push_str(END_OR_FINAL_NEWLINE),
            _ => rewritten.push(c),
        }
    }
    Cow::Owned(rewritten)
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&anchor_final_newline(pattern))
        .dot_matches_new_line(true)
        .build()
}

/// Return true if the pattern compiles as a regular expression.
pub fn is_valid_regex(pattern: &str) -> bool {
    compile(pattern).is_ok()
}

/// Count the non-overlapping matches of a regular expression.
///
/// `.` also matches newlines. Matches are scanned left to right, and an
/// empty match directly after a non-empty one is counted too, so `\w*`
/// over `"ab cd"` finds four matches. Only a second empty match at the same
/// position is skipped. Returns `None` when the pattern does not compile,
/// which callers treat as "no match possible".
pub fn count_regex_matches(content: &str, pattern: &str) -> Option<usize> {
    let regex = compile(pattern).ok()?;

    let mut count = 0;
    let mut position = 0;
    let mut last_empty: Option<usize> = None;
    while position <= content.len() {
        let Some(found) = regex.find_at(content, position) else {
            break;
        };
        if found.is_empty() && last_empty == Some(found.start()) {
            let Some(next) = content[found.start()..].chars().next() else {
                break;
            };
            position = found.start() + next.len_utf8();
            continue;
        }
        count += 1;
        last_empty = found.is_empty().then_some(found.end());
        position = found.end();
    }
    Some(count)
}
