//! Separators and background shading of the timetable.

use crate::slicer::CellStatus;
use progbook_types::ClockTime;
use serde::Serialize;
use std::num::NonZeroU32;

/// Rule drawn below a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Border {
    None,
    /// Inside an event, between its rows.
    Weak,
    /// An event boundary.
    Strong,
}

/// Background of empty cells and the time column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Shading {
    None,
    Light,
    Strong,
}

/// The separator below a cell given its status and the status of the same
/// room one quantum later.
pub fn border_below(status: CellStatus, next: Option<CellStatus>) -> Border {
    if status.is_end() || next.is_some_and(CellStatus::is_start) {
        return Border::Strong;
    }
    match status {
        CellStatus::Mid | CellStatus::Start => Border::Weak,
        _ => Border::None,
    }
}

/// Strong on full hours, light on half hours.
pub fn shading_for(time: ClockTime) -> Shading {
    match time.minute() {
        0 => Shading::Strong,
        30 => Shading::Light,
        _ => Shading::None,
    }
}

/// `HH:MM` for rows on a label boundary.
pub fn time_label(time: ClockTime, label_interval: NonZeroU32) -> Option<String> {
    time.is_aligned(label_interval).then(|| time.to_string())
}
