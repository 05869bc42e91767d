//! LaTeX presentation layer for the program book.
//!
//! Turns laid-out page grids into `tabu` timetables and normalized events into
//! room overviews, track overviews and per-kind chapters. Everything is
//! produced as [`Fragment`]s; writing them is left to the caller.

mod chapters;
mod description;
mod error;
pub mod escape;
pub mod naming;
mod overview;
mod timetable;

pub use chapters::ChapterRenderer;
pub use description::{DescriptionProvider, NoDescriptions};
pub use error::RenderError;
pub use overview::{OverviewOptions, abstracts, room_overview, track_list, track_table};
pub use timetable::{render_cell, render_page};

/// A named piece of LaTeX destined for its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Path relative to the output directory, e.g. `gen-chap-tables.tex`.
    pub name: String,
    pub content: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, content: String) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}
