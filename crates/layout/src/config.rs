use crate::LayoutError;
use progbook_types::{Day, EventKind, Quantum, RoomName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// A room that appears on the timetable even when nothing is scheduled in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyRoom {
    pub name: RoomName,
    /// Days the room is shown on. Empty means every day.
    #[serde(default)]
    pub days: Vec<Day>,
    /// Permanently keeps the room off the timetable.
    #[serde(default)]
    pub excluded: bool,
    /// Header title shown above the empty column.
    #[serde(default)]
    pub title: Option<String>,
}

impl EmptyRoom {
    pub fn new(name: impl Into<RoomName>) -> Self {
        Self {
            name: name.into(),
            days: Vec::new(),
            excluded: false,
            title: None,
        }
    }

    pub fn applies_to(&self, day: Day) -> bool {
        !self.excluded && (self.days.is_empty() || self.days.contains(&day))
    }
}

/// Tunables for partitioning days into pages and laying out their grids.
///
/// Every table in here is read-only for the lifetime of a run; the engine never
/// mutates it, so a single instance is shared by all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Grid row unit. Defaults to 5 minutes.
    pub quantum: Quantum,
    /// Minutes between time labels. The page's first row is rounded down to
    /// this boundary. Defaults to 15.
    pub label_interval: NonZeroU32,
    /// Maximum number of rooms per page. Defaults to 4.
    pub page_capacity: usize,
    /// Rooms that share a leading page of their own, in this order.
    pub pinned_rooms: Vec<RoomName>,
    /// Room moved to the end of whichever page it lands on.
    pub trailing_room: Option<RoomName>,
    /// Event kinds that do not cause their room to be selected for the timetable.
    pub excluded_kinds: Vec<EventKind>,
    pub empty_rooms: Vec<EmptyRoom>,
    /// Characters per line for a page holding a single room. The budget per
    /// column is this divided by the number of rooms on the page.
    pub line_length_base: usize,
    /// Per-title character budgets for titles that wrap badly, such as long
    /// single words.
    pub title_line_lengths: BTreeMap<String, usize>,
    /// Header titles that replace the track name of a room.
    pub room_titles: BTreeMap<String, String>,
    /// Kinds whose rooms are headed by `main_track_title`.
    pub main_track_kinds: Vec<EventKind>,
    pub main_track_title: String,
    /// Fail the page on overlapping bookings instead of reporting them.
    pub strict_overlaps: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            quantum: Quantum::FIVE_MINUTES,
            label_interval: NonZeroU32::MIN.saturating_add(14),
            page_capacity: 4,
            pinned_rooms: vec![RoomName::from("J.Janson"), RoomName::from("K.1.105")],
            trailing_room: None,
            excluded_kinds: vec![EventKind::Certification],
            empty_rooms: Vec::new(),
            line_length_base: 32 * 4,
            title_line_lengths: BTreeMap::new(),
            room_titles: BTreeMap::new(),
            main_track_kinds: vec![EventKind::MainTrack, EventKind::Keynote],
            main_track_title: "Main tracks".to_string(),
            strict_overlaps: false,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.page_capacity == 0 {
            return Err(LayoutError::InvalidConfig(
                "pageCapacity must be at least 1".to_string(),
            ));
        }
        if 60 % self.label_interval.get() != 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "labelInterval must divide 60, got {}",
                self.label_interval
            )));
        }
        if self.line_length_base == 0 {
            return Err(LayoutError::InvalidConfig(
                "lineLengthBase must be at least 1".to_string(),
            ));
        }
        if let Some((title, _)) = self.title_line_lengths.iter().find(|(_, len)| **len == 0) {
            return Err(LayoutError::InvalidConfig(format!(
                "titleLineLengths entry for '{}' must be at least 1",
                title
            )));
        }
        Ok(())
    }

    pub fn is_excluded_kind(&self, kind: &EventKind) -> bool {
        self.excluded_kinds.contains(kind)
    }

    pub fn is_main_track_kind(&self, kind: &EventKind) -> bool {
        self.main_track_kinds.contains(kind)
    }
}
