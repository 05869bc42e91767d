//! Pentabarf schedule export: `schedule/day[@date]/room/event`.

use crate::ScheduleError;
use crate::raw::RawEvent;
use roxmltree::{Document, Node};

/// Reads every event of a Pentabarf schedule document.
pub fn parse_xml(text: &str) -> Result<Vec<RawEvent>, ScheduleError> {
    let doc = Document::parse(text)?;
    let mut events = Vec::new();

    for day in elements(doc.root_element(), "day") {
        let date = day.attribute("date").map(str::to_string);
        for room in elements(day, "room") {
            let room_name = room.attribute("name");
            for node in elements(room, "event") {
                let mut event = read_event(node);
                event.day = date.clone();
                if event.room.is_none() {
                    event.room = room_name.map(str::to_string);
                }
                events.push(event);
            }
        }
    }

    log::debug!("Read {} events from XML schedule", events.len());
    Ok(events)
}

fn elements<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    parent
        .children()
        .filter(move |node| node.is_element() && node.tag_name().name() == tag)
}

/// Trimmed text of the first `tag` child; empty text counts as absent.
fn child_text(node: Node, tag: &'static str) -> Option<String> {
    let child = elements(node, tag).next()?;
    let text = child.text().unwrap_or_default().trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn read_event(node: Node) -> RawEvent {
    let speakers = elements(node, "persons")
        .flat_map(|persons| elements(persons, "person"))
        .filter_map(|person| person.text())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    RawEvent {
        id: node.attribute("id").map(str::to_string),
        day: None,
        room: child_text(node, "room"),
        track: child_text(node, "track"),
        kind: child_text(node, "type"),
        title: child_text(node, "title"),
        subtitle: child_text(node, "subtitle"),
        abstract_text: child_text(node, "abstract"),
        description: child_text(node, "description"),
        speakers,
        start: child_text(node, "start"),
        duration: child_text(node, "duration"),
        stop: child_text(node, "end"),
    }
}
