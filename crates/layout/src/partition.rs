//! Groups events by day and splits each day's rooms into timetable pages.

use crate::LayoutError;
use crate::config::LayoutConfig;
use itertools::Itertools;
use progbook_types::{Day, Event, RoomName};
use std::collections::{BTreeMap, BTreeSet};

/// One printed timetable page: a day and up to `page_capacity` room columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub day: Day,
    /// Position of the page within its day, starting at zero.
    pub index: usize,
    /// Column order.
    pub rooms: Vec<RoomName>,
    /// Column headers, parallel to `rooms`.
    pub header_titles: Vec<String>,
    /// Every event of the day held in one of `rooms`, in schedule order.
    pub events: Vec<Event>,
}

impl Page {
    /// Events of `room`, in schedule order.
    pub fn room_events<'a>(&'a self, room: &'a RoomName) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |event| &event.room == room)
    }
}

pub struct Partitioner<'c> {
    config: &'c LayoutConfig,
}

impl<'c> Partitioner<'c> {
    pub fn new(config: &'c LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Pages for every day in `events`, days in calendar order.
    pub fn partition(&self, events: &[Event]) -> Vec<Page> {
        let by_day: BTreeMap<Day, Vec<&Event>> = events.iter().fold(BTreeMap::new(), |mut acc, event| {
            acc.entry(event.day).or_insert_with(Vec::new).push(event);
            acc
        });
        by_day
            .into_iter()
            .flat_map(|(day, events)| self.partition_day(day, &events))
            .collect()
    }

    /// Pages for a single day. No rooms means no pages.
    pub fn partition_day(&self, day: Day, events: &[&Event]) -> Vec<Page> {
        let mut rooms: BTreeSet<RoomName> = events
            .iter()
            .filter(|event| !self.config.is_excluded_kind(&event.kind))
            .map(|event| event.room.clone())
            .collect();
        rooms.extend(
            self.config
                .empty_rooms
                .iter()
                .filter(|empty| empty.applies_to(day))
                .map(|empty| empty.name.clone()),
        );
        for excluded in self.config.empty_rooms.iter().filter(|e| e.excluded) {
            rooms.remove(&excluded.name);
        }

        let pinned: Vec<RoomName> = self
            .config
            .pinned_rooms
            .iter()
            .filter(|room| rooms.remove(*room))
            .cloned()
            .collect();

        let mut groups: Vec<Vec<RoomName>> = Vec::new();
        if !pinned.is_empty() {
            groups.push(pinned);
        }
        let rest: Vec<RoomName> = rooms.into_iter().collect();
        groups.extend(rest.chunks(self.config.page_capacity).map(<[RoomName]>::to_vec));

        let pages: Vec<Page> = groups
            .into_iter()
            .enumerate()
            .map(|(index, mut rooms)| {
                self.float_trailing_room(&mut rooms);
                let events: Vec<Event> = events
                    .iter()
                    .filter(|event| rooms.contains(&event.room))
                    .map(|event| (*event).clone())
                    .collect();
                let header_titles = rooms
                    .iter()
                    .map(|room| self.header_title(day, room, &events))
                    .collect();
                Page {
                    day,
                    index,
                    rooms,
                    header_titles,
                    events,
                }
            })
            .collect();

        log::debug!(
            "{}: {} page(s) [{}]",
            day,
            pages.len(),
            pages.iter().map(|p| p.rooms.iter().join(", ")).join("] [")
        );
        pages
    }

    fn float_trailing_room(&self, rooms: &mut Vec<RoomName>) {
        if let Some(trailing) = &self.config.trailing_room {
            if let Some(pos) = rooms.iter().position(|room| room == trailing) {
                let room = rooms.remove(pos);
                rooms.push(room);
            }
        }
    }

    fn header_title(&self, day: Day, room: &RoomName, events: &[Event]) -> String {
        if let Some(title) = self.config.room_titles.get(room.as_str()) {
            return title.clone();
        }
        let mut in_room = events.iter().filter(|event| &event.room == room).peekable();
        if in_room.peek().is_some() {
            let mut last = None;
            for event in in_room {
                if self.config.is_main_track_kind(&event.kind) {
                    return self.config.main_track_title.clone();
                }
                last = Some(event);
            }
            return last.map(|event| event.track.to_string()).unwrap_or_default();
        }
        self.config
            .empty_rooms
            .iter()
            .find(|empty| &empty.name == room && empty.applies_to(day))
            .and_then(|empty| empty.title.clone())
            .unwrap_or_default()
    }
}
