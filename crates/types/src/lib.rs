//! Foundation types shared by every progbook crate.
//!
//! The schedule normalizer produces [`Event`]s, the layout engine consumes them
//! read-only, and the renderer turns the layout output into document fragments.

pub mod day;
pub mod event;
pub mod ids;
pub mod time;

pub use day::Day;
pub use event::{Event, EventKind};
pub use ids::{EventId, RoomName, TrackName};
pub use time::{ClockTime, Quantum, TimeError};
