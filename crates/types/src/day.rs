use crate::time::TimeError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A conference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(NaiveDate);

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses the schedule's `YYYY-MM-DD` date attribute.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| TimeError::InvalidDate(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `Saturday 01 February`
    pub fn long_name(&self) -> String {
        self.0.format("%A %d %B").to_string()
    }

    /// `Saturday`
    pub fn weekday_name(&self) -> String {
        self.0.format("%A").to_string()
    }

    /// `Sat.`
    pub fn weekday_abbrev(&self) -> String {
        format!("{}.", self.0.format("%a"))
    }

    /// Slug used in labels and file names, unique within a week.
    pub fn short(&self) -> &'static str {
        match self.0.weekday() {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_name())
    }
}
