use progbook_types::{ClockTime, Day, EventId, RoomName};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Overlapping booking in room '{room}' on {day} at {at}: event {kept} collides with event {shadowed}.")]
    OverlappingBooking {
        day: Day,
        room: RoomName,
        at: ClockTime,
        kept: EventId,
        shadowed: EventId,
    },
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod border;
pub mod cell;
pub mod config;
pub mod diagnostics;
pub mod grid;
pub mod partition;
pub mod slicer;
pub mod text;
pub mod tracks;

pub use self::border::{Border, Shading};
pub use self::cell::{CellLayout, CellLayoutChooser, Strategy, choose_layout};
pub use self::config::{EmptyRoom, LayoutConfig};
pub use self::diagnostics::Diagnostic;
pub use self::grid::{GridCell, GridEngine, GridRow, PageGrid, PageLayout};
pub use self::partition::{Page, Partitioner};
pub use self::slicer::{CellStatus, DayBounds, TimeSpan};
pub use self::text::{ELLIPSIS, truncate};
pub use self::tracks::{TrackCell, TrackOverview, TrackRow, TrackSpan};

#[cfg(test)]
mod cell_test;
#[cfg(test)]
mod test_utils;
