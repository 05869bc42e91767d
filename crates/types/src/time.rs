//! Minute-resolution clock arithmetic for a single conference day.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid clock time '{0}', expected HH:MM")]
    InvalidClock(String),
    #[error("Invalid duration '{0}', expected HH:MM")]
    InvalidDuration(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Event stops at {stop} which is not after its start {start}")]
    EmptySpan { start: ClockTime, stop: ClockTime },
}

/// A time of day, stored as minutes since midnight.
///
/// Values past `24:00` are allowed so that a late event computed as
/// `start + duration` never wraps around to the morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    /// Parses `H:MM` or `HH:MM`.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        NaiveTime::parse_from_str(text.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|_| TimeError::InvalidClock(text.to_string()))
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }

    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    pub const fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Steps forward by `minutes`, stopping at the largest representable time.
    pub const fn plus(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    pub const fn checked_plus(self, minutes: u32) -> Option<Self> {
        match self.0.checked_add(minutes) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }

    /// Steps back by `minutes`, stopping at midnight.
    pub const fn minus(self, minutes: u32) -> Self {
        Self(self.0.saturating_sub(minutes))
    }

    /// Minutes from `earlier` to `self`, zero if `earlier` is later.
    pub const fn since(self, earlier: ClockTime) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Rounds down to the previous multiple of `interval` minutes past the hour.
    pub fn floor_to(self, interval: NonZeroU32) -> Self {
        Self(self.0 - self.0 % interval.get())
    }

    /// True when the minute component is a multiple of `interval`.
    pub fn is_aligned(self, interval: NonZeroU32) -> bool {
        self.minute() % interval.get() == 0
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight() / 60)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parses an `HH:MM` duration into whole minutes.
pub fn parse_duration(text: &str) -> Result<u32, TimeError> {
    let invalid = || TimeError::InvalidDuration(text.to_string());
    let (hours, minutes) = text.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .ok_or_else(invalid)
}

/// The grid's row unit in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantum(NonZeroU32);

impl Quantum {
    pub const FIVE_MINUTES: Quantum = Quantum(NonZeroU32::MIN.saturating_add(4));
    pub const ONE_HOUR: Quantum = Quantum(NonZeroU32::MIN.saturating_add(59));

    pub fn new(minutes: NonZeroU32) -> Self {
        Self(minutes)
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        NonZeroU32::new(minutes).map(Self)
    }

    pub fn minutes(self) -> u32 {
        self.0.get()
    }

    pub fn as_nonzero(self) -> NonZeroU32 {
        self.0
    }

    /// Number of grid rows a span of `minutes` occupies, rounded up.
    pub fn rows_for(self, minutes: u32) -> u32 {
        minutes.div_ceil(self.0.get())
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::FIVE_MINUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_clock_times() {
        let t = ClockTime::parse("9:05").unwrap();
        assert_eq!(t, ClockTime::from_hm(9, 5));
        assert_eq!(t.to_string(), "09:05");
        assert!(ClockTime::parse("25:00").is_err());
        assert!(ClockTime::parse("noon").is_err());
    }

    #[test]
    fn displays_times_past_midnight_without_wrapping() {
        let late = ClockTime::from_hm(23, 40).plus(50);
        assert_eq!(late.to_string(), "24:30");
    }

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("00:25").unwrap(), 25);
        assert_eq!(parse_duration("01:30").unwrap(), 90);
        assert!(parse_duration("0:75").is_err());
        assert!(parse_duration("90").is_err());
    }

    #[test]
    fn oversized_durations_are_invalid() {
        assert!(matches!(
            parse_duration("99999999:00"),
            Err(TimeError::InvalidDuration(_))
        ));
        assert_eq!(ClockTime::from_minutes(u32::MAX).checked_plus(1), None);
        assert_eq!(ClockTime::from_minutes(u32::MAX).plus(1), ClockTime::from_minutes(u32::MAX));
    }

    #[test]
    fn floors_to_quarter_hours() {
        let quarter = NonZeroU32::new(15).unwrap();
        assert_eq!(ClockTime::from_hm(9, 55).floor_to(quarter), ClockTime::from_hm(9, 45));
        assert_eq!(ClockTime::from_hm(10, 0).floor_to(quarter), ClockTime::from_hm(10, 0));
        assert!(ClockTime::from_hm(10, 30).is_aligned(quarter));
        assert!(!ClockTime::from_hm(10, 35).is_aligned(quarter));
    }

    #[test]
    fn rows_round_up() {
        let q = Quantum::FIVE_MINUTES;
        assert_eq!(q.rows_for(5), 1);
        assert_eq!(q.rows_for(6), 2);
        assert_eq!(q.rows_for(25), 5);
        assert_eq!(Quantum::ONE_HOUR.rows_for(90), 2);
    }
}
