#![cfg(test)]

use crate::cell::{CellLayoutChooser, Strategy, choose_layout};
use crate::config::LayoutConfig;
use crate::text::{ELLIPSIS, char_len};

const LONG_TITLE: &str = "Building a distributed build system in a weekend";
const LONGER_TITLE: &str = "Building a distributed build system in a weekend with friends";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn four_speakers() -> Vec<String> {
    names(&["Alice Anderson", "Bob Brown", "Carol Clark", "Dave Davis"])
}

#[test]
fn one_row_is_a_single_line() {
    let layout = choose_layout("Intro to X", &[], 1, 25);
    assert_eq!(layout.strategy, Strategy::SingleLine);
    assert_eq!(layout.title, "Intro to X");
    assert_eq!(layout.speakers, "");
    assert_eq!(layout.row_span, 1);
}

#[test]
fn one_row_truncates_long_titles() {
    let layout = choose_layout(LONG_TITLE, &names(&["Ada"]), 1, 25);
    assert_eq!(layout.strategy, Strategy::SingleLine);
    assert_eq!(layout.title, format!("Building a distributed{}", ELLIPSIS));
    assert_eq!(layout.speakers, "");
}

#[test]
fn two_rows_are_emphasized_without_speakers() {
    let layout = choose_layout(LONG_TITLE, &names(&["Ada"]), 2, 20);
    assert_eq!(layout.strategy, Strategy::Emphasized);
    assert!(char_len(&layout.title) <= 20);
    assert!(layout.title.ends_with(ELLIPSIS));
    assert_eq!(layout.speakers, "");
    assert_eq!(layout.row_span, 2);
}

#[test]
fn ample_space_keeps_everything() {
    let layout = choose_layout("Short title", &names(&["Ada Lovelace"]), 6, 25);
    assert_eq!(layout.strategy, Strategy::Ample);
    assert_eq!(layout.title, "Short title");
    assert_eq!(layout.speakers, "Ada Lovelace");
    assert!(!layout.overflow);
}

#[test]
fn ample_without_speakers() {
    let layout = choose_layout("Short title", &[], 3, 25);
    assert_eq!(layout.strategy, Strategy::Ample);
    assert_eq!(layout.speakers, "");
}

#[test]
fn exact_fit_is_compact() {
    let title = "0123456789 ".repeat(5) + "01234";
    assert_eq!(char_len(&title), 60);
    let layout = choose_layout(&title, &names(&["A", "B", "C"]), 8, 25);
    assert_eq!(layout.strategy, Strategy::Compact);
    assert_eq!(layout.title, title);
    assert_eq!(layout.speakers, "A, B, C");
}

#[test]
fn single_remaining_line_truncates_speakers() {
    let layout = choose_layout("Short title", &four_speakers(), 4, 25);
    assert_eq!(layout.strategy, Strategy::AuthorTruncated);
    assert_eq!(layout.title, "Short title");
    assert_eq!(layout.speakers, format!("Alice Anderson, Bob Brown{}", ELLIPSIS));
}

#[test]
fn several_remaining_lines_truncate_speakers_compactly() {
    let speakers: Vec<String> = (1..=10).map(|i| format!("Speaker {:02}", i)).collect();
    let layout = choose_layout("Short title", &speakers, 8, 25);
    assert_eq!(layout.strategy, Strategy::CompactTruncated);
    assert!(char_len(&layout.speakers) <= 93);
    assert!(layout.speakers.starts_with("Speaker 01, Speaker 02"));
    assert!(layout.speakers.ends_with(ELLIPSIS));
}

#[test]
fn short_speakers_go_inline_with_a_shortened_title() {
    let layout = choose_layout(LONG_TITLE, &names(&["Ada"]), 3, 25);
    assert_eq!(layout.strategy, Strategy::AuthorInline);
    assert_eq!(layout.title, format!("Building a distributed build system in a{}", ELLIPSIS));
    assert_eq!(layout.speakers, "Ada");
}

#[test]
fn long_title_without_speakers_uses_every_line() {
    let layout = choose_layout(LONGER_TITLE, &[], 3, 25);
    assert_eq!(layout.strategy, Strategy::AuthorInline);
    assert_eq!(layout.title, format!("{}{}", LONG_TITLE, ELLIPSIS));
}

#[test]
fn long_title_and_long_speakers_truncate_the_title() {
    let layout = choose_layout(LONGER_TITLE, &names(&["Alice Anderson", "Bob Brown"]), 5, 25);
    assert_eq!(layout.strategy, Strategy::TitleTruncated);
    assert_eq!(layout.title, format!("{}{}", LONG_TITLE, ELLIPSIS));
    assert_eq!(layout.speakers, "Alice Anderson, Bob Brown");
}

#[test]
fn two_text_lines_split_between_title_and_speakers() {
    let layout = choose_layout(LONG_TITLE, &four_speakers(), 4, 25);
    assert_eq!(layout.strategy, Strategy::TitleTruncated);
    assert_eq!(layout.title, format!("Building a distributed{}", ELLIPSIS));
    assert_eq!(layout.speakers, format!("Alice Anderson, Bob Brown{}", ELLIPSIS));
}

#[test]
fn zero_budget_degrades_to_hard_cut() {
    let layout = choose_layout("Supercalifragilistic expialidocious", &names(&["X"]), 3, 2);
    assert_eq!(layout.strategy, Strategy::AuthorInline);
    assert!(layout.overflow);
    assert_eq!(layout.title, format!("S{}", ELLIPSIS));
}

#[test]
fn selection_is_deterministic() {
    let speakers = four_speakers();
    for rows in 1..20 {
        for width in 1..40 {
            let a = choose_layout(LONGER_TITLE, &speakers, rows, width);
            let b = choose_layout(LONGER_TITLE, &speakers, rows, width);
            assert_eq!(a, b);
            assert_eq!(a.row_span, rows);
        }
    }
}

#[test]
fn zero_rows_are_treated_as_one() {
    let layout = choose_layout("Intro to X", &[], 0, 25);
    assert_eq!(layout.strategy, Strategy::SingleLine);
    assert_eq!(layout.row_span, 1);
}

#[test]
fn chooser_divides_the_base_width_by_room_count() {
    let mut config = LayoutConfig::default();
    config
        .title_line_lengths
        .insert("Supercalifragilisticexpialidocious".to_string(), 18);
    let chooser = CellLayoutChooser::new(&config);
    assert_eq!(chooser.line_length("Any title", 4), 32);
    assert_eq!(chooser.line_length("Any title", 3), 42);
    assert_eq!(chooser.line_length("Any title", 0), 128);
    assert_eq!(chooser.line_length("Supercalifragilisticexpialidocious", 4), 18);
}

#[test]
fn enormous_line_lengths_fit_everything() {
    for rows in 1..=8 {
        for speakers in [Vec::new(), four_speakers()] {
            let layout = choose_layout(LONG_TITLE, &speakers, rows, usize::MAX);
            assert_eq!(layout.title, LONG_TITLE, "rows {}", rows);
            assert!(!layout.overflow);
        }
    }

    let mut config = LayoutConfig::default();
    config.title_line_lengths.insert(LONGER_TITLE.to_string(), usize::MAX);
    let layout = CellLayoutChooser::new(&config).layout(LONGER_TITLE, &four_speakers(), 6, 4);
    assert_eq!(layout.strategy, Strategy::Ample);
    assert_eq!(layout.speakers, four_speakers().join(", "));
}
