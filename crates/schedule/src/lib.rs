//! Schedule input for progbook.
//!
//! Parses a Pentabarf XML export or a JSON list of raw events and normalizes
//! them into [`Event`]s with computed stop times and canonical room names.

pub mod config;
pub mod error;
pub mod json;
pub mod normalize;
pub mod raw;
pub mod xml;

pub use config::NormalizerConfig;
pub use error::ScheduleError;
pub use normalize::Normalizer;
pub use raw::RawEvent;

use progbook_types::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    Xml,
    Json,
}

impl ScheduleFormat {
    /// Guesses the format from the first non-blank character.
    pub fn detect(text: &str) -> Result<Self, ScheduleError> {
        match text.trim_start_matches('\u{feff}').trim_start().chars().next() {
            Some('<') => Ok(ScheduleFormat::Xml),
            Some('[') => Ok(ScheduleFormat::Json),
            _ => Err(ScheduleError::UnknownFormat),
        }
    }
}

/// Reads raw events in `format`.
pub fn parse_schedule(text: &str, format: ScheduleFormat) -> Result<Vec<RawEvent>, ScheduleError> {
    match format {
        ScheduleFormat::Xml => xml::parse_xml(text),
        ScheduleFormat::Json => json::parse_json(text),
    }
}

/// Detects the format, parses and normalizes a whole schedule.
pub fn load_schedule(text: &str, config: &NormalizerConfig) -> Result<Vec<Event>, ScheduleError> {
    let format = ScheduleFormat::detect(text)?;
    let raw = parse_schedule(text, format)?;
    Normalizer::new(config).normalize(raw)
}
