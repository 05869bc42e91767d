//! Names of generated fragments and the LaTeX labels pointing at them.

use progbook_types::{Day, Event, EventKind, RoomName, TrackName};

/// `type-shortday-track-room`, e.g. `devroom-sat-rust-h-1302`.
///
/// Used both as the fragment file stem and as the `\label` of a room overview,
/// so it must stay stable for a given event group.
pub fn group_name(kind: &EventKind, day: Day, track: &TrackName, room: &RoomName) -> String {
    [
        slug::slugify(kind.as_str()),
        day.short().to_string(),
        slug::slugify(track.as_str()),
        slug::slugify(room.as_str()),
    ]
    .join("-")
}

pub fn event_group_name(event: &Event) -> String {
    group_name(&event.kind, event.day, &event.track, &event.room)
}

/// Stem of the timetable fragment for page `index` of `day`.
pub fn table_name(day: Day, index: usize) -> String {
    format!("tableify_events_{}_{}", day.short(), index)
}

/// File stem of a track's description, e.g. `go_rust` for `Go & Rust`.
pub fn description_slug(track: &TrackName) -> String {
    slug::slugify(track.as_str()).replace('-', "_")
}
