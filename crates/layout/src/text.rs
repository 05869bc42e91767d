//! Character-budget text fitting shared by every cell strategy.
//!
//! Lengths are counted in `char`s. The ellipsis marker is a single character so
//! the presentation layer can map it to whatever its typesetter uses.

pub const ELLIPSIS: char = '…';

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset just past the first `count` characters of `text`.
fn byte_offset(text: &str, count: usize) -> usize {
    text.char_indices()
        .nth(count)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Shortens `text` to at most `budget` characters, ellipsis included.
///
/// The cut is made at the last whitespace that leaves room for the ellipsis, so
/// words are kept whole and a dangling list comma is dropped. Only when the first
/// word alone exceeds the budget is it cut mid-word.
pub fn truncate(text: &str, budget: usize) -> String {
    if char_len(text) <= budget {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }
    let keep = budget - 1;

    // Whitespace at char index `keep` still leaves `keep` chars before it.
    let window = &text[..byte_offset(text, keep + 1)];
    if let Some(space) = window.rfind(char::is_whitespace) {
        let prefix = text[..space].trim_end_matches(|c: char| c.is_whitespace() || c == ',');
        if !prefix.is_empty() {
            return format!("{}{}", prefix, ELLIPSIS);
        }
    }
    hard_truncate(text, budget)
}

/// Cuts `text` at `budget - 1` characters regardless of word boundaries and
/// appends the ellipsis.
pub fn hard_truncate(text: &str, budget: usize) -> String {
    if char_len(text) <= budget {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }
    let head = text[..byte_offset(text, budget - 1)].trim_end();
    format!("{}{}", head, ELLIPSIS)
}
