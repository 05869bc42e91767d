//! Chooses how a title and its speakers are packed into a timetable cell.
//!
//! The decision only looks at three integers: the usable text lines of the cell,
//! the lines the title needs and the lines the speaker line needs. Speakers are
//! typeset in a smaller font, modelled as 4/5 of a title character.

use crate::config::LayoutConfig;
use crate::text::{char_len, hard_truncate, truncate};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Width of the ` -- ` separator placed before an inline speaker list.
pub const AUTHOR_SEPARATOR_LEN: usize = 4;

/// The visual template a cell is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// One grid row: the title on a single line.
    SingleLine,
    /// Two grid rows: an enlarged single-line title, no speakers.
    Emphasized,
    /// Title, a blank line, then the speaker line.
    Ample,
    /// Title and speakers fill the cell exactly; tighter line spacing.
    Compact,
    /// The title fits, the speakers are cut to the single line left.
    AuthorTruncated,
    /// The title fits, the speakers are cut to the several lines left, tight spacing.
    CompactTruncated,
    /// Shortened title followed by a short speaker list in the same paragraph.
    AuthorInline,
    /// Shortened title on its own lines, speakers below.
    TitleTruncated,
}

/// The fitted content of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellLayout {
    pub strategy: Strategy,
    pub title: String,
    /// Joined speaker list, empty when the strategy omits it.
    pub speakers: String,
    /// Grid rows the rendered cell spans downwards.
    pub row_span: u32,
    /// A budget fell to zero and the title was hard-cut instead.
    pub overflow: bool,
}

fn speaker_lines(speaker_len: usize, line_length: usize) -> usize {
    (4 * speaker_len).div_ceil(line_length.saturating_mul(5))
}

fn speaker_budget(lines: usize, line_length: usize) -> usize {
    lines.saturating_mul(line_length).saturating_mul(5) / 4
}

/// Picks a strategy and fits the text for a cell `timerows` rows tall and
/// `line_length` characters wide.
///
/// This is a pure function: the same inputs always produce the same layout.
pub fn choose_layout(
    title: &str,
    speakers: &[String],
    timerows: u32,
    line_length: usize,
) -> CellLayout {
    let line_length = line_length.max(1);
    let row_span = timerows.max(1);
    let joined = speakers.join(", ");

    match row_span {
        1 => CellLayout {
            strategy: Strategy::SingleLine,
            title: truncate(title, line_length),
            speakers: String::new(),
            row_span,
            overflow: false,
        },
        2 => CellLayout {
            strategy: Strategy::Emphasized,
            title: truncate(title, line_length),
            speakers: String::new(),
            row_span,
            overflow: false,
        },
        _ => multi_line(title, joined, row_span, line_length),
    }
}

fn multi_line(title: &str, joined: String, row_span: u32, line_length: usize) -> CellLayout {
    // Half of the rows carry text, the rest is line height.
    let lines = row_span.div_ceil(2) as usize;
    let title_len = char_len(title);
    let speaker_len = char_len(&joined);
    let title_lines = title_len.div_ceil(line_length);
    let author_lines = speaker_lines(speaker_len, line_length);

    let layout = |strategy, title: String, speakers: String, overflow| CellLayout {
        strategy,
        title,
        speakers,
        row_span,
        overflow,
    };

    if title_lines < lines {
        return match (title_lines + author_lines).cmp(&lines) {
            Ordering::Less => layout(Strategy::Ample, title.to_string(), joined, false),
            Ordering::Equal => layout(Strategy::Compact, title.to_string(), joined, false),
            Ordering::Greater => {
                let rest = lines - title_lines;
                let speakers = truncate(&joined, speaker_budget(rest, line_length));
                let strategy = if rest == 1 {
                    Strategy::AuthorTruncated
                } else {
                    Strategy::CompactTruncated
                };
                layout(strategy, title.to_string(), speakers, false)
            }
        };
    }

    // The title alone leaves no line for the speakers.
    if 10 * speaker_len <= line_length.saturating_mul(7) {
        let author_width = if speaker_len == 0 {
            0
        } else {
            (4 * (speaker_len + AUTHOR_SEPARATOR_LEN)).div_ceil(5)
        };
        let budget = line_length.saturating_mul(lines).saturating_sub(author_width);
        return if budget == 0 {
            layout(
                Strategy::AuthorInline,
                hard_truncate(title, line_length),
                joined,
                true,
            )
        } else {
            layout(Strategy::AuthorInline, truncate(title, budget), joined, false)
        };
    }

    let title = truncate(title, line_length.saturating_mul(lines - 1));
    let rest = lines - char_len(&title).div_ceil(line_length);
    let speakers = if author_lines <= rest {
        joined
    } else {
        truncate(&joined, speaker_budget(rest, line_length))
    };
    layout(Strategy::TitleTruncated, title, speakers, false)
}

/// Resolves per-column line lengths and delegates to [`choose_layout`].
#[derive(Debug, Clone)]
pub struct CellLayoutChooser<'c> {
    line_length_base: usize,
    title_line_lengths: &'c BTreeMap<String, usize>,
}

impl<'c> CellLayoutChooser<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self {
            line_length_base: config.line_length_base,
            title_line_lengths: &config.title_line_lengths,
        }
    }

    /// Characters per line for `title` on a page with `room_count` columns.
    pub fn line_length(&self, title: &str, room_count: usize) -> usize {
        if let Some(len) = self.title_line_lengths.get(title) {
            return *len;
        }
        (self.line_length_base / room_count.max(1)).max(1)
    }

    pub fn layout(
        &self,
        title: &str,
        speakers: &[String],
        timerows: u32,
        room_count: usize,
    ) -> CellLayout {
        choose_layout(title, speakers, timerows, self.line_length(title, room_count))
    }
}
