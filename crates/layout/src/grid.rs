//! Assembles a page's timetable grid from the slicer, the cell chooser and the
//! border emitter.

use crate::LayoutError;
use crate::border::{Border, Shading, border_below, shading_for, time_label};
use crate::cell::{CellLayout, CellLayoutChooser};
use crate::config::LayoutConfig;
use crate::diagnostics::Diagnostic;
use crate::partition::Page;
use crate::slicer::{CellStatus, DayBounds, classify};
use progbook_types::{ClockTime, Day, Event, EventId, RoomName};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub status: CellStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventId>,
    /// Present on the first row of an event only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<CellLayout>,
    pub border_below: Border,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub time: ClockTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
    pub shading: Shading,
    /// One cell per room, in page column order.
    pub cells: Vec<GridCell>,
}

/// The laid-out timetable of one page, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGrid {
    pub day: Day,
    pub index: usize,
    pub rooms: Vec<RoomName>,
    pub header_titles: Vec<String>,
    /// `None` when the page holds only empty rooms.
    pub day_start: Option<ClockTime>,
    pub day_stop: Option<ClockTime>,
    pub rows: Vec<GridRow>,
}

impl PageGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub grid: PageGrid,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lays out pages against a shared, read-only configuration.
///
/// The engine holds no per-page state, so one instance can serve pages from
/// several threads at once. Diagnostics are returned in the [`PageLayout`],
/// never logged here.
#[derive(Debug, Clone)]
pub struct GridEngine {
    config: Arc<LayoutConfig>,
}

impl GridEngine {
    pub fn new(config: Arc<LayoutConfig>) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout_page(&self, page: &Page) -> Result<PageLayout, LayoutError> {
        let config = &*self.config;
        let quantum = config.quantum;
        let chooser = CellLayoutChooser::new(config);

        let Some(bounds) = DayBounds::of(&page.events, Some(config.label_interval)) else {
            log::debug!("{} page {}: no events, empty grid", page.day, page.index);
            return Ok(PageLayout {
                grid: PageGrid {
                    day: page.day,
                    index: page.index,
                    rooms: page.rooms.clone(),
                    header_titles: page.header_titles.clone(),
                    day_start: None,
                    day_stop: None,
                    rows: Vec::new(),
                },
                diagnostics: Vec::new(),
            });
        };

        let room_events: Vec<Vec<&Event>> = page
            .rooms
            .iter()
            .map(|room| page.room_events(room).collect())
            .collect();
        let times: Vec<ClockTime> = bounds.quanta(quantum).collect();

        let mut diagnostics = Vec::new();
        let mut reported: HashSet<(usize, EventId, EventId)> = HashSet::new();

        // Column-major: statuses[room][row].
        let mut statuses: Vec<Vec<(CellStatus, Option<&Event>)>> = Vec::with_capacity(page.rooms.len());
        for (col, events) in room_events.iter().enumerate() {
            let mut column = Vec::with_capacity(times.len());
            for &cur in &times {
                let found = classify(events, cur, quantum);
                if let (Some(kept), Some(shadowed)) = (found.item, found.shadowed) {
                    if reported.insert((col, kept.id.clone(), shadowed.id.clone())) {
                        let diagnostic = Diagnostic::OverlappingBooking {
                            day: page.day,
                            room: page.rooms[col].clone(),
                            at: cur,
                            kept: kept.id.clone(),
                            shadowed: shadowed.id.clone(),
                        };
                        if config.strict_overlaps {
                            if let Some(err) = diagnostic.clone().into_error() {
                                return Err(err);
                            }
                        }
                        diagnostics.push(diagnostic);
                    }
                }
                column.push((found.status, found.item.copied()));
            }
            statuses.push(column);
        }

        let mut rows = Vec::with_capacity(times.len());
        for (row, &time) in times.iter().enumerate() {
            let mut cells = Vec::with_capacity(page.rooms.len());
            for (col, column) in statuses.iter().enumerate() {
                let (status, event) = column[row];
                let next = column.get(row + 1).map(|(status, _)| *status);
                let layout = match event {
                    Some(event) if status.is_start() => {
                        let layout = chooser.layout(
                            &event.title,
                            &event.speakers,
                            event.timerows(quantum),
                            page.rooms.len(),
                        );
                        if layout.overflow {
                            let diagnostic = Diagnostic::LayoutOverflow {
                                day: page.day,
                                room: page.rooms[col].clone(),
                                event: event.id.clone(),
                            };
                            diagnostics.push(diagnostic);
                        }
                        Some(layout)
                    }
                    _ => None,
                };
                cells.push(GridCell {
                    status,
                    event: event.map(|event| event.id.clone()),
                    layout,
                    border_below: border_below(status, next),
                });
            }
            rows.push(GridRow {
                time,
                time_label: time_label(time, config.label_interval),
                shading: shading_for(time),
                cells,
            });
        }

        log::debug!(
            "{} page {}: {} rows x {} rooms, {} diagnostic(s)",
            page.day,
            page.index,
            rows.len(),
            page.rooms.len(),
            diagnostics.len()
        );

        Ok(PageLayout {
            grid: PageGrid {
                day: page.day,
                index: page.index,
                rooms: page.rooms.clone(),
                header_titles: page.header_titles.clone(),
                day_start: Some(bounds.start),
                day_stop: Some(bounds.stop),
                rows,
            },
            diagnostics,
        })
    }
}
