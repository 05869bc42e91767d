use crate::config::LayoutConfig;
use crate::grid::{GridEngine, PageLayout};
use crate::partition::{Page, Partitioner};
use progbook_types::{ClockTime, Day, Event};
use std::sync::Arc;

/// Saturday of the sample conference.
pub fn day() -> Day {
    Day::parse("2014-02-01").expect("valid date")
}

/// A talk on [`day`] from `start` to `stop` (hour, minute).
pub fn talk(id: &str, room: &str, start: (u32, u32), stop: (u32, u32)) -> Event {
    Event::new(
        id,
        day(),
        room,
        ClockTime::from_hm(start.0, start.1),
        ClockTime::from_hm(stop.0, stop.1),
    )
    .expect("stop after start")
    .with_title(format!("Talk {}", id))
}

/// Partitions `events` and lays out every page with `config`.
pub fn layout_all(config: LayoutConfig, events: &[Event]) -> Vec<PageLayout> {
    let pages = Partitioner::new(&config).expect("valid config").partition(events);
    let engine = GridEngine::new(Arc::new(config)).expect("valid config");
    pages
        .iter()
        .map(|page| engine.layout_page(page).expect("page lays out"))
        .collect()
}

/// A single page holding `events`, with one column per distinct room in
/// first-seen order.
pub fn single_page(events: Vec<Event>) -> Page {
    let mut rooms = Vec::new();
    for event in &events {
        if !rooms.contains(&event.room) {
            rooms.push(event.room.clone());
        }
    }
    Page {
        day: day(),
        index: 0,
        header_titles: rooms.iter().map(|r| r.to_string()).collect(),
        rooms,
        events,
    }
}
