use progbook_types::TimeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Malformed event '{event}' on {day}: missing or empty '{field}'")]
    MalformedEvent {
        day: String,
        event: String,
        field: &'static str,
    },

    #[error("Invalid time in event '{event}' on {day}: {source}")]
    InvalidTime {
        day: String,
        event: String,
        #[source]
        source: TimeError,
    },

    #[error("Invalid day in event '{event}': {source}")]
    InvalidDate {
        event: String,
        #[source]
        source: TimeError,
    },

    #[error("XML schedule error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON schedule error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized schedule format, expected Pentabarf XML or a JSON event list")]
    UnknownFormat,
}
