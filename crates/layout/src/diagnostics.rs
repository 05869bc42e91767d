use crate::LayoutError;
use progbook_types::{ClockTime, Day, EventId, RoomName};
use serde::Serialize;
use std::fmt;

/// A non-fatal finding produced while laying out a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// Two events claim the same room at the same quantum. The first one in
    /// schedule order is drawn.
    #[serde(rename_all = "camelCase")]
    OverlappingBooking {
        day: Day,
        room: RoomName,
        at: ClockTime,
        kept: EventId,
        shadowed: EventId,
    },
    /// A text budget collapsed to zero and the title was hard-cut.
    #[serde(rename_all = "camelCase")]
    LayoutOverflow {
        day: Day,
        room: RoomName,
        event: EventId,
    },
}

impl Diagnostic {
    /// The error a strict run raises instead of this diagnostic, if any.
    pub fn into_error(self) -> Option<LayoutError> {
        match self {
            Diagnostic::OverlappingBooking {
                day,
                room,
                at,
                kept,
                shadowed,
            } => Some(LayoutError::OverlappingBooking {
                day,
                room,
                at,
                kept,
                shadowed,
            }),
            Diagnostic::LayoutOverflow { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OverlappingBooking {
                day,
                room,
                at,
                kept,
                shadowed,
            } => write!(
                f,
                "{} {} at {}: event {} overlaps event {}, keeping {}",
                day, room, at, shadowed, kept, kept
            ),
            Diagnostic::LayoutOverflow { day, room, event } => write!(
                f,
                "{} {}: title of event {} does not fit its cell and was cut",
                day, room, event
            ),
        }
    }
}
