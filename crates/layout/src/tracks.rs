//! Hour-by-hour overview of which track runs in which room, printed on chapter
//! title pages.

use crate::slicer::{CellStatus, DayBounds, TimeSpan, classify};
use progbook_types::{ClockTime, Day, Event, EventKind, Quantum, RoomName, TrackName};
use serde::Serialize;
use std::collections::BTreeMap;

/// The time a track occupies its room on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSpan {
    pub track: TrackName,
    /// Room of the track's first event.
    pub room: RoomName,
    /// Kind of the track's first event.
    pub kind: EventKind,
    pub day: Day,
    pub start: ClockTime,
    pub stop: ClockTime,
}

impl TrackSpan {
    /// The span covering `events`, which must all belong to one track.
    pub fn of(events: &[&Event]) -> Option<Self> {
        let first = events.first()?;
        let bounds = DayBounds::of(events.iter().copied(), None)?;
        Some(Self {
            track: first.track.clone(),
            room: first.room.clone(),
            kind: first.kind.clone(),
            day: first.day,
            start: bounds.start,
            stop: bounds.stop,
        })
    }

    /// Spans of every track in `events`, sorted by track name.
    pub fn group(events: &[Event]) -> Vec<Self> {
        let mut by_track: BTreeMap<&TrackName, Vec<&Event>> = BTreeMap::new();
        for event in events {
            by_track.entry(&event.track).or_default().push(event);
        }
        by_track.values().filter_map(|events| Self::of(events)).collect()
    }
}

impl TimeSpan for TrackSpan {
    fn start(&self) -> ClockTime {
        self.start
    }

    fn stop(&self) -> ClockTime {
        self.stop
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCell {
    pub status: CellStatus,
    /// Set on the row a track starts in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<TrackSpan>,
    /// Hour rows the track covers, rounded up.
    pub row_span: u32,
    pub rule_below: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRow {
    pub time: ClockTime,
    pub cells: Vec<TrackCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOverview {
    /// Columns, in the order rooms are first met among the spans.
    pub rooms: Vec<RoomName>,
    pub rows: Vec<TrackRow>,
}

impl TrackOverview {
    pub fn build(spans: &[TrackSpan]) -> Self {
        let quantum = Quantum::ONE_HOUR;
        let mut rooms: Vec<RoomName> = Vec::new();
        let mut by_room: Vec<Vec<&TrackSpan>> = Vec::new();
        for span in spans {
            match rooms.iter().position(|room| room == &span.room) {
                Some(col) => by_room[col].push(span),
                None => {
                    rooms.push(span.room.clone());
                    by_room.push(vec![span]);
                }
            }
        }

        let Some(bounds) = DayBounds::of(spans, None) else {
            return Self {
                rooms,
                rows: Vec::new(),
            };
        };

        let rows = bounds
            .quanta(quantum)
            .map(|time| TrackRow {
                time,
                cells: by_room
                    .iter()
                    .map(|spans| {
                        let found = classify(spans, time, quantum);
                        let span = found
                            .item
                            .filter(|_| found.status.is_start())
                            .map(|span| (*span).clone());
                        let row_span = span
                            .as_ref()
                            .map_or(0, |span| quantum.rows_for(span.stop.since(span.start)));
                        TrackCell {
                            status: found.status,
                            span,
                            row_span,
                            rule_below: found.status.is_end() || !found.status.is_occupied(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { rooms, rows }
    }

    /// Overview of all tracks in `events`.
    pub fn for_events(events: &[Event]) -> Self {
        Self::build(&TrackSpan::group(events))
    }
}
