use crate::ScheduleError;
use crate::raw::RawEvent;

/// Reads a JSON array of raw events.
pub fn parse_json(text: &str) -> Result<Vec<RawEvent>, ScheduleError> {
    let events: Vec<RawEvent> = serde_json::from_str(text)?;
    log::debug!("Read {} events from JSON schedule", events.len());
    Ok(events)
}
