//! Line counting that ignores blank lines.

/// Characters that end a line, matching the usual "universal newlines" set.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Whitespace, counting the ASCII separators `\x1c` to `\x1f` as well.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Return true if a line is empty or made only of whitespace.
pub fn is_blank_line(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Return the non-blank lines of the content.
///
/// Accepts text or raw bytes; bytes are decoded as UTF-8, replacing invalid
/// sequences, so both forms of the same characters give the same lines.
/// A `\r\n` pair yields an empty piece between its two characters, which is
/// dropped with the other blank lines.
pub fn get_line_list(content: impl AsRef<[u8]>) -> Vec<String> {
    let decoded = String::from_utf8_lossy(content.as_ref());
    decoded
        .split(is_line_break)
        .filter(|line| !is_blank_line(line))
        .map(str::to_string)
        .collect()
}

/// Count the non-blank lines of the content.
pub fn count_lines(content: impl AsRef<[u8]>) -> usize {
    get_line_list(content).len()
}
