//! Whole chapters of the program book, one per event kind, plus the
//! timetable chapter.

use crate::description::DescriptionProvider;
use crate::escape::latexify;
use crate::naming::{event_group_name, table_name};
use crate::overview::{OverviewOptions, abstracts, room_overview, track_description, track_list, track_table};
use crate::timetable::render_page;
use crate::{Fragment, RenderError};
use progbook_layout::{PageGrid, TrackOverview, TrackSpan};
use progbook_types::{Day, Event, EventKind, TrackName};
use std::collections::BTreeMap;
use std::fmt::Write;

type ByDay<'e> = BTreeMap<Day, Vec<&'e Event>>;
type ByTrack<'e> = BTreeMap<TrackName, Vec<&'e Event>>;

fn by_day<'e>(events: &[&'e Event]) -> ByDay<'e> {
    let mut days = ByDay::new();
    for event in events {
        days.entry(event.day).or_default().push(*event);
    }
    days
}

fn by_day_and_track<'e>(events: &[&'e Event]) -> BTreeMap<Day, ByTrack<'e>> {
    let mut days: BTreeMap<Day, ByTrack<'e>> = BTreeMap::new();
    for event in events {
        days.entry(event.day)
            .or_default()
            .entry(event.track.clone())
            .or_default()
            .push(*event);
    }
    days
}

fn spans(tracks: &ByTrack<'_>) -> Vec<TrackSpan> {
    tracks.values().filter_map(|events| TrackSpan::of(events)).collect()
}

/// Renders chapter fragments. Sub-fragments are written to, and `\input` from,
/// `generated_dir`.
pub struct ChapterRenderer<'a> {
    generated_dir: String,
    descriptions: &'a dyn DescriptionProvider,
}

impl<'a> ChapterRenderer<'a> {
    pub fn new(generated_dir: impl Into<String>, descriptions: &'a dyn DescriptionProvider) -> Self {
        Self {
            generated_dir: generated_dir.into(),
            descriptions,
        }
    }

    fn subfile(&self, stem: &str) -> String {
        if self.generated_dir.is_empty() {
            format!("{}.tex", stem)
        } else {
            format!("{}/{}.tex", self.generated_dir, stem)
        }
    }

    /// Adds a sub-fragment and returns the `\input` line for it.
    fn include(&self, fragments: &mut Vec<Fragment>, stem: &str, content: String) -> String {
        let path = self.subfile(stem);
        let line = format!("\\input{{{}}}\n", path);
        fragments.push(Fragment::new(path, content));
        line
    }

    /// Every per-kind chapter. Kinds without a chapter are skipped.
    pub fn chapters(&self, events: &[Event]) -> Result<Vec<Fragment>, RenderError> {
        let mut kinds: BTreeMap<&EventKind, Vec<&Event>> = BTreeMap::new();
        for event in events {
            kinds.entry(&event.kind).or_default().push(event);
        }

        let mut fragments = Vec::new();
        for (kind, events) in kinds {
            match kind {
                EventKind::LightningTalk => self.lightning_talks(&events, &mut fragments)?,
                EventKind::Keynote => self.keynotes(&events, &mut fragments)?,
                EventKind::Certification => self.certification(&events, &mut fragments)?,
                EventKind::MainTrack => self.main_tracks(&events, &mut fragments)?,
                EventKind::Devroom => self.devrooms(&events, &mut fragments)?,
                other => {
                    log::debug!("No chapter for {} event(s) of type '{}'", events.len(), other);
                }
            }
        }
        Ok(fragments)
    }

    pub fn lightning_talks(&self, events: &[&Event], fragments: &mut Vec<Fragment>) -> Result<(), RenderError> {
        let Some(first) = events.first() else {
            return Ok(());
        };
        let mut out = String::new();
        writeln!(out, "\\section{{{}}}", latexify(first.track.as_str()))?;
        writeln!(out, "{{\\bf {}}}", latexify(first.room.as_str()))?;
        out.push('\n');
        out.push_str(&track_description(self.descriptions, &first.track)?);

        let options = OverviewOptions {
            title: false,
            label: true,
            subtitle: true,
        };
        for (day, day_events) in by_day(events) {
            writeln!(out, "\\subsection*{{Lightning talks, {}}}", day.weekday_name())?;
            let content = room_overview(&day_events, options, self.descriptions)?;
            out.push_str(&self.include(fragments, &event_group_name(day_events[0]), content));
            out.push_str("\\pagebreak\n");
        }

        fragments.push(Fragment::new("gen-chap-lightningtalks.tex", out));
        Ok(())
    }

    pub fn keynotes(&self, events: &[&Event], fragments: &mut Vec<Fragment>) -> Result<(), RenderError> {
        let Some(first) = events.first() else {
            return Ok(());
        };
        let mut out = String::new();
        writeln!(out, "\\section{{{}}}", latexify(first.track.as_str()))?;
        writeln!(out, "{{\\bf {}}}", latexify(first.room.as_str()))?;
        out.push('\n');

        let options = OverviewOptions {
            title: false,
            label: false,
            subtitle: true,
        };
        let mut content = String::from("% overview of all keynotes\n");
        content.push_str(&room_overview(events, options, self.descriptions)?);
        content.push('\n');
        content.push_str(&abstracts(events)?);
        out.push_str(&self.include(fragments, "keynotes", content));

        fragments.push(Fragment::new("gen-chap-keynotes.tex", out));
        Ok(())
    }

    /// Exams grouped by organizer, then by day.
    pub fn certification(&self, events: &[&Event], fragments: &mut Vec<Fragment>) -> Result<(), RenderError> {
        let Some(first) = events.first() else {
            return Ok(());
        };
        let mut organizers: BTreeMap<String, Vec<&Event>> = BTreeMap::new();
        for event in events {
            organizers.entry(event.all_speakers()).or_default().push(*event);
        }

        let mut out = String::new();
        writeln!(out, "\\section{{{}}}", latexify(first.track.as_str()))?;
        out.push_str(
            "Please note that in order to take part in these exams, you need to have registered beforehand!\n\n",
        );

        let options = OverviewOptions {
            title: false,
            label: false,
            subtitle: true,
        };
        for (organizer, organizer_events) in organizers {
            writeln!(out, "\\subsection{{{}}}", latexify(&organizer))?;
            for (day, day_events) in by_day(&organizer_events) {
                writeln!(
                    out,
                    "\\paragraph{{{} -- {}}}",
                    day.weekday_name(),
                    latexify(day_events[0].room.as_str())
                )?;
                out.push_str(&room_overview(&day_events, options, self.descriptions)?);
            }
            out.push('\n');
        }

        fragments.push(Fragment::new("gen-chap-certification.tex", out));
        Ok(())
    }

    pub fn main_tracks(&self, events: &[&Event], fragments: &mut Vec<Fragment>) -> Result<(), RenderError> {
        let days = by_day_and_track(events);
        let mut out = String::from("\\part{Main tracks}\n\n");

        // Chapter title page.
        for (day, tracks) in &days {
            writeln!(out, "\\paragraph{{{}}}", day.long_name())?;
            let spans = spans(tracks);
            out.push_str(&track_list(&spans)?);
            out.push_str(&track_table(&TrackOverview::build(&spans), &day.weekday_name())?);
        }
        out.push_str("\\vspace*{\\fill}\n\\pagebreak\n\\pagestyle{plain}\n");

        let options = OverviewOptions {
            title: true,
            label: true,
            subtitle: false,
        };
        for (day, tracks) in &days {
            out.push('\n');
            write!(
                out,
                "\\begin{{center}}{{\\Large \\bf Main tracks, {}}}\\end{{center}}",
                day.weekday_name()
            )?;
            writeln!(out, "% {}", day.long_name())?;
            writeln!(out, "\\label{{{}-maintracks}}", day.short())?;
            for track_events in tracks.values() {
                let mut content = room_overview(track_events, options, self.descriptions)?;
                content.push('\n');
                content.push_str(&abstracts(track_events)?);
                out.push_str(&self.include(fragments, &event_group_name(track_events[0]), content));
            }
            writeln!(out, "\\label{{{}-maintracks-end}}", day.short())?;
            out.push_str("\\vspace{2em}\n");
        }

        fragments.push(Fragment::new("gen-chap-maintracks.tex", out));
        Ok(())
    }

    /// One part per day; two devrooms per page.
    pub fn devrooms(&self, events: &[&Event], fragments: &mut Vec<Fragment>) -> Result<(), RenderError> {
        let mut out = String::new();
        for (day, tracks) in by_day_and_track(events) {
            writeln!(out, "\\part{{Devrooms {}}}", day.weekday_name())?;
            writeln!(out, "\\label{{{}-devrooms}}", day.short())?;
            out.push('\n');

            let spans = spans(&tracks);
            out.push_str(&track_list(&spans)?);
            out.push_str(&track_table(&TrackOverview::build(&spans), &day.weekday_name())?);
            out.push_str("\\vspace*{\\fill}\n\\pagebreak\n\\pagestyle{plain}\n\n");

            writeln!(out, "% devrooms of {}", day.long_name())?;
            for (i, track_events) in tracks.values().enumerate() {
                let mut content = room_overview(track_events, OverviewOptions::default(), self.descriptions)?;
                content.push('\n');
                content.push_str(&abstracts(track_events)?);
                out.push_str(&self.include(fragments, &event_group_name(track_events[0]), content));
                if (i + 1) % 2 == 0 {
                    out.push_str("\\pagebreak\n");
                }
            }
            writeln!(out, "\\label{{{}-devrooms-end}}", day.short())?;
            out.push('\n');
        }

        fragments.push(Fragment::new("gen-chap-devrooms.tex", out));
        Ok(())
    }

    /// One fragment per timetable page and the chapter including them.
    pub fn tables(&self, grids: &[PageGrid]) -> Result<Vec<Fragment>, RenderError> {
        let mut fragments = Vec::with_capacity(grids.len() + 1);
        let mut out = String::new();
        for grid in grids {
            let content = render_page(grid)?;
            out.push_str(&self.include(&mut fragments, &table_name(grid.day, grid.index), content));
        }
        fragments.push(Fragment::new("gen-chap-tables.tex", out));
        Ok(fragments)
    }
}
