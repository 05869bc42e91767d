//! Room overviews, abstract listings and track overviews.

use crate::RenderError;
use crate::description::DescriptionProvider;
use crate::escape::{latex_paragraphs, latex_title, latexify};
use crate::naming::{event_group_name, group_name};
use itertools::Itertools;
use progbook_layout::{CellStatus, TrackOverview, TrackSpan};
use progbook_types::{Event, TrackName};
use std::fmt::Write;

/// What to print around a room overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewOptions {
    /// `\Room{track}{room}` heading followed by the track description.
    pub title: bool,
    /// `\label{group}` before and `\label{group-end}` after.
    pub label: bool,
    pub subtitle: bool,
}

impl Default for OverviewOptions {
    fn default() -> Self {
        Self {
            title: true,
            label: true,
            subtitle: true,
        }
    }
}

/// The track's description as LaTeX, empty when it has none.
pub fn track_description(
    descriptions: &dyn DescriptionProvider,
    track: &TrackName,
) -> Result<String, RenderError> {
    Ok(descriptions
        .description(track)?
        .map(|html| latex_paragraphs(&html))
        .unwrap_or_default())
}

fn event_line(command: &str, event: &Event, subtitle: bool) -> String {
    format!(
        "\\{}{{{}}}{{{}}}{{{}}}{{{}}}{{{}}}{{{}}}",
        command,
        latex_title(&event.title),
        if subtitle { latex_title(&event.subtitle) } else { String::new() },
        latexify(&event.all_speakers()),
        event.day.weekday_abbrev(),
        event.start(),
        event.stop()
    )
}

/// A `roomoverview` list of `events`, which share a room and track.
pub fn room_overview(
    events: &[&Event],
    options: OverviewOptions,
    descriptions: &dyn DescriptionProvider,
) -> Result<String, RenderError> {
    let Some(first) = events.first() else {
        return Ok(String::new());
    };
    let group = event_group_name(first);
    let mut out = String::new();

    if options.label {
        writeln!(out, "\\label{{{}}}", group)?;
    }
    if options.title {
        writeln!(
            out,
            "\\Room{{{}}}{{{}}}",
            latexify(first.track.as_str()),
            latexify(first.room.as_str())
        )?;
        out.push_str(&track_description(descriptions, &first.track)?);
    }

    out.push_str("\\begin{roomoverview}\n");
    for event in events {
        writeln!(out, "{}", event_line("Event", event, options.subtitle))?;
    }
    out.push_str("\\end{roomoverview}\n");

    if options.label {
        writeln!(out, "\\label{{{}-end}}", group)?;
    }
    Ok(out)
}

/// Two-column listing of every event with its abstract.
pub fn abstracts(events: &[&Event]) -> Result<String, RenderError> {
    let mut out = String::from("\\begin{multicols}{2}\n");
    for event in events {
        writeln!(out, "{}\n", event_line("Maintrack", event, true))?;
        writeln!(out, "{}\n", latex_paragraphs(&event.abstract_text))?;
    }
    out.push_str("\\end{multicols}\n");
    Ok(out)
}

/// `trackoverview` list pointing at each track's room overview.
pub fn track_list(spans: &[TrackSpan]) -> Result<String, RenderError> {
    let mut out = String::from("\\begin{trackoverview}\n");
    for span in spans {
        writeln!(
            out,
            "\\ItemTrack{{{}}}{{{}}}",
            latexify(span.track.as_str()),
            group_name(&span.kind, span.day, &span.track, &span.room)
        )?;
    }
    out.push_str("\\end{trackoverview}\n");
    Ok(out)
}

/// Hour-by-room table of tracks with page references.
pub fn track_table(overview: &TrackOverview, heading: &str) -> Result<String, RenderError> {
    if overview.rows.is_empty() {
        return Ok(String::new());
    }
    let mut out = String::from("\\begin{center}\n");
    writeln!(out, "\\begin{{tabular}}{{|l{}|}}", "|l".repeat(overview.rooms.len()))?;
    let rooms = overview.rooms.iter().map(|r| latexify(r.as_str())).join(" & ");
    writeln!(out, "{{\\bf {}}} & {}\\\\ \\hline", heading, rooms)?;

    for row in &overview.rows {
        write!(out, "{} ", row.time)?;
        let mut clines = String::from("\\cline{1-1} ");
        for (i, cell) in row.cells.iter().enumerate() {
            out.push_str(" & ");
            if let (CellStatus::Start | CellStatus::StartEnd, Some(span)) = (cell.status, &cell.span) {
                let text = format!(
                    "{} (page \\pageref{{{}}})",
                    latexify(span.track.as_str()),
                    group_name(&span.kind, span.day, &span.track, &span.room)
                );
                if cell.row_span > 1 {
                    write!(out, "\\multirow{{{}}}{{*}}{{{}}}", cell.row_span, text)?;
                } else {
                    out.push_str(&text);
                }
            }
            if cell.rule_below {
                write!(clines, "\\cline{{{}-{}}} ", i + 2, i + 2)?;
            }
        }
        writeln!(out, "\\\\ {}", clines)?;
    }
    out.push_str("\\hline \n");
    out.push_str("\\end{tabular}\n");
    out.push_str("\\end{center}\n");
    Ok(out)
}
