use crate::day::Day;
use crate::ids::{EventId, RoomName, TrackName};
use crate::time::{ClockTime, Quantum, TimeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The schedule's event type. Unknown types are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Talk,
    Keynote,
    MainTrack,
    LightningTalk,
    Certification,
    Devroom,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Talk => "talk",
            EventKind::Keynote => "keynote",
            EventKind::MainTrack => "maintrack",
            EventKind::LightningTalk => "lightningtalk",
            EventKind::Certification => "certification",
            EventKind::Devroom => "devroom",
            EventKind::Other(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s.trim() {
            "talk" => EventKind::Talk,
            "keynote" => EventKind::Keynote,
            "maintrack" => EventKind::MainTrack,
            "lightningtalk" => EventKind::LightningTalk,
            "certification" => EventKind::Certification,
            "devroom" => EventKind::Devroom,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        EventKind::from(s.as_str())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized, immutable schedule event.
///
/// Start and stop are only reachable through accessors so the `stop > start`
/// invariant established by [`Event::new`] holds for every event downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub day: Day,
    pub room: RoomName,
    pub track: TrackName,
    pub kind: EventKind,
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub description: String,
    pub speakers: Vec<String>,
    start: ClockTime,
    stop: ClockTime,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        day: Day,
        room: impl Into<RoomName>,
        start: ClockTime,
        stop: ClockTime,
    ) -> Result<Self, TimeError> {
        if stop <= start {
            return Err(TimeError::EmptySpan { start, stop });
        }
        Ok(Self {
            id: id.into(),
            day,
            room: room.into(),
            track: TrackName::from(""),
            kind: EventKind::Talk,
            title: String::new(),
            subtitle: String::new(),
            abstract_text: String::new(),
            description: String::new(),
            speakers: Vec::new(),
            start,
            stop,
        })
    }

    pub fn with_track(mut self, track: impl Into<TrackName>) -> Self {
        self.track = track.into();
        self
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_speakers<I, S>(mut self, speakers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speakers = speakers.into_iter().map(Into::into).collect();
        self
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn stop(&self) -> ClockTime {
        self.stop
    }

    pub fn duration_minutes(&self) -> u32 {
        self.stop.since(self.start)
    }

    /// Number of grid rows this event spans, never less than one.
    pub fn timerows(&self, quantum: Quantum) -> u32 {
        quantum.rows_for(self.duration_minutes()).max(1)
    }

    /// Speakers joined for display, e.g. `Ada Lovelace, Alan Turing`.
    pub fn all_speakers(&self) -> String {
        self.speakers.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> Day {
        Day::parse("2014-02-01").unwrap()
    }

    #[test]
    fn rejects_events_that_do_not_move_forward() {
        let t = ClockTime::from_hm(10, 0);
        let err = Event::new("1", day(), "Janson", t, t).unwrap_err();
        assert!(matches!(err, TimeError::EmptySpan { .. }));
    }

    #[test]
    fn computes_timerows_from_duration() {
        let event = Event::new("1", day(), "Janson", ClockTime::from_hm(10, 0), ClockTime::from_hm(10, 50)).unwrap();
        assert_eq!(event.duration_minutes(), 50);
        assert_eq!(event.timerows(Quantum::FIVE_MINUTES), 10);

        let short = Event::new("2", day(), "Janson", ClockTime::from_hm(10, 0), ClockTime::from_hm(10, 2)).unwrap();
        assert_eq!(short.timerows(Quantum::FIVE_MINUTES), 1);
    }

    #[test]
    fn joins_speakers() {
        let event = Event::new("1", day(), "Janson", ClockTime::from_hm(10, 0), ClockTime::from_hm(11, 0))
            .unwrap()
            .with_speakers(["Ada", "Grace"]);
        assert_eq!(event.all_speakers(), "Ada, Grace");
    }

    #[test]
    fn event_kinds_round_trip_through_strings() {
        assert_eq!(EventKind::from("lightningtalk"), EventKind::LightningTalk);
        assert_eq!(EventKind::from("workshop"), EventKind::Other("workshop".into()));
        assert_eq!(EventKind::MainTrack.to_string(), "maintrack");
    }
}
