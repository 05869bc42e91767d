use crate::ScheduleError;
use crate::config::NormalizerConfig;
use crate::raw::RawEvent;
use progbook_types::{ClockTime, Day, Event, EventKind, TimeError, time::parse_duration};

/// Turns raw schedule records into validated [`Event`]s.
pub struct Normalizer<'c> {
    config: &'c NormalizerConfig,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

impl<'c> Normalizer<'c> {
    pub fn new(config: &'c NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes every event, keeping schedule order. The first malformed
    /// event aborts the run.
    pub fn normalize(&self, raw: Vec<RawEvent>) -> Result<Vec<Event>, ScheduleError> {
        let events = raw
            .into_iter()
            .enumerate()
            .map(|(position, event)| self.normalize_event(position, event))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Normalized {} events", events.len());
        Ok(events)
    }

    pub fn normalize_event(&self, position: usize, raw: RawEvent) -> Result<Event, ScheduleError> {
        let label = raw.label(position);
        let day_text = present(&raw.day).unwrap_or("unknown day").to_string();
        let malformed = |field| ScheduleError::MalformedEvent {
            day: day_text.clone(),
            event: label.clone(),
            field,
        };
        let invalid_time = |source| ScheduleError::InvalidTime {
            day: day_text.clone(),
            event: label.clone(),
            source,
        };

        let day = present(&raw.day).ok_or_else(|| malformed("day"))?;
        let day = Day::parse(day).map_err(|source| ScheduleError::InvalidDate {
            event: label.clone(),
            source,
        })?;
        let room = present(&raw.room).ok_or_else(|| malformed("room"))?;
        let start = present(&raw.start).ok_or_else(|| malformed("start"))?;
        let start = ClockTime::parse(start).map_err(invalid_time)?;

        let stop = match (present(&raw.duration), present(&raw.stop)) {
            (Some(duration), _) => {
                let minutes = parse_duration(duration).map_err(invalid_time)?;
                start
                    .checked_plus(minutes)
                    .ok_or_else(|| invalid_time(TimeError::InvalidDuration(duration.to_string())))?
            }
            (None, Some(stop)) => ClockTime::parse(stop).map_err(invalid_time)?,
            (None, None) => return Err(malformed("duration")),
        };

        let id = present(&raw.id).map(str::to_string).unwrap_or_else(|| label.clone());
        let room = self.config.canonical_room(room);
        let event = Event::new(id, day, room, start, stop).map_err(invalid_time)?;

        Ok(event
            .with_track(text(raw.track))
            .with_kind(present(&raw.kind).map(EventKind::from).unwrap_or(EventKind::Talk))
            .with_title(text(raw.title))
            .with_subtitle(text(raw.subtitle))
            .with_abstract(text(raw.abstract_text))
            .with_description(text(raw.description))
            .with_speakers(raw.speakers.iter().map(|s| s.trim()).filter(|s| !s.is_empty())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawEvent {
        RawEvent {
            id: Some("1510".to_string()),
            day: Some("2014-02-01".to_string()),
            room: Some("Janson".to_string()),
            track: Some(" Keynotes ".to_string()),
            kind: Some("keynote".to_string()),
            title: Some("Welcome".to_string()),
            speakers: vec!["FOSDEM Staff".to_string(), "  ".to_string()],
            start: Some("10:30".to_string()),
            duration: Some("00:25".to_string()),
            ..Default::default()
        }
    }

    fn normalize(raw: RawEvent) -> Result<Event, ScheduleError> {
        let config = NormalizerConfig::default();
        Normalizer::new(&config).normalize_event(0, raw)
    }

    #[test]
    fn computes_stop_and_canonical_room() {
        let event = normalize(raw()).unwrap();
        assert_eq!(event.id.as_str(), "1510");
        assert_eq!(event.room.as_str(), "J.Janson");
        assert_eq!(event.track.as_str(), "Keynotes");
        assert_eq!(event.kind, EventKind::Keynote);
        assert_eq!(event.start(), ClockTime::from_hm(10, 30));
        assert_eq!(event.stop(), ClockTime::from_hm(10, 55));
        assert_eq!(event.speakers, vec!["FOSDEM Staff"]);
    }

    #[test]
    fn stop_carries_across_the_hour() {
        let event = normalize(RawEvent {
            start: Some("9:50".to_string()),
            duration: Some("01:25".to_string()),
            ..raw()
        })
        .unwrap();
        assert_eq!(event.stop(), ClockTime::from_hm(11, 15));
    }

    #[test]
    fn accepts_an_explicit_stop() {
        let event = normalize(RawEvent {
            duration: None,
            stop: Some("11:00".to_string()),
            ..raw()
        })
        .unwrap();
        assert_eq!(event.duration_minutes(), 30);
    }

    #[test]
    fn missing_fields_name_the_event_and_day() {
        let err = normalize(RawEvent {
            room: Some(" ".to_string()),
            ..raw()
        })
        .unwrap_err();
        match err {
            ScheduleError::MalformedEvent { day, event, field } => {
                assert_eq!(day, "2014-02-01");
                assert_eq!(event, "1510");
                assert_eq!(field, "room");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = normalize(RawEvent {
            duration: None,
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedEvent { field: "duration", .. }));

        let err = normalize(RawEvent { start: None, ..raw() }).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedEvent { field: "start", .. }));
    }

    #[test]
    fn zero_length_events_are_rejected() {
        let err = normalize(RawEvent {
            duration: Some("00:00".to_string()),
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidTime { source: TimeError::EmptySpan { .. }, .. }
        ));
    }

    #[test]
    fn oversized_durations_are_errors() {
        for duration in ["99999999:00", "71582788:00"] {
            let err = normalize(RawEvent {
                duration: Some(duration.to_string()),
                ..raw()
            })
            .unwrap_err();
            assert!(
                matches!(
                    err,
                    ScheduleError::InvalidTime { source: TimeError::InvalidDuration(_), .. }
                ),
                "{duration}: {err}"
            );
        }
    }

    #[test]
    fn unnamed_events_use_their_position() {
        let config = NormalizerConfig::default();
        let err = Normalizer::new(&config)
            .normalize(vec![raw(), RawEvent { id: None, room: None, ..raw() }])
            .unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedEvent { ref event, .. } if event == "#2"));
    }

    #[test]
    fn unknown_types_are_kept_and_missing_types_are_talks() {
        let event = normalize(RawEvent {
            kind: Some("workshop".to_string()),
            ..raw()
        })
        .unwrap();
        assert_eq!(event.kind, EventKind::Other("workshop".to_string()));

        let event = normalize(RawEvent { kind: None, ..raw() }).unwrap();
        assert_eq!(event.kind, EventKind::Talk);
    }
}
