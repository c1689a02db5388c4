//! Text measurements used by the checkers.
//!
//! Every function here is pure: it takes text and returns a count. The
//! [`CheckTarget`] type decides which text (a file on disk or supplied
//! content) a measurement runs against.

mod fragments;
mod lines;
mod paragraphs;
mod target;
mod words;

pub use fragments::{count_fragment, count_regex_matches, is_valid_regex};
pub use lines::{count_lines, get_line_list, is_blank_line};
pub use paragraphs::{count_paragraphs, get_paragraphs};
pub use target::CheckTarget;
pub use words::{count_minimum_words, count_total_words, count_words, Summarizer, WordCount};
