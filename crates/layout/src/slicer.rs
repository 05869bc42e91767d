//! Walks a page's time span in fixed quanta and classifies what each room is
//! doing at every step.

use progbook_types::{ClockTime, Event, Quantum};
use serde::Serialize;
use std::num::NonZeroU32;

/// Anything that occupies a room from `start` until `stop`.
pub trait TimeSpan {
    fn start(&self) -> ClockTime;
    fn stop(&self) -> ClockTime;
}

impl TimeSpan for Event {
    fn start(&self) -> ClockTime {
        Event::start(self)
    }

    fn stop(&self) -> ClockTime {
        Event::stop(self)
    }
}

impl<T: TimeSpan> TimeSpan for &T {
    fn start(&self) -> ClockTime {
        (**self).start()
    }

    fn stop(&self) -> ClockTime {
        (**self).stop()
    }
}

/// What a (quantum, room) cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellStatus {
    Empty,
    Start,
    Mid,
    End,
    /// The whole event fits in one quantum.
    StartEnd,
}

impl CellStatus {
    pub fn is_start(self) -> bool {
        matches!(self, CellStatus::Start | CellStatus::StartEnd)
    }

    pub fn is_end(self) -> bool {
        matches!(self, CellStatus::End | CellStatus::StartEnd)
    }

    pub fn is_occupied(self) -> bool {
        self != CellStatus::Empty
    }
}

/// Status of a single span at quantum `cur`.
///
/// START: `start ∈ (cur - q, cur]`, STARTEND when it also stops by `cur + q`.
/// END: already running and `stop ∈ (cur, cur + q]`. MID: `start < cur < stop`.
pub fn status_at<T: TimeSpan>(span: &T, cur: ClockTime, quantum: Quantum) -> CellStatus {
    let q = quantum.minutes();
    let (start, stop) = (span.start(), span.stop());
    let next = cur.plus(q);

    if start <= cur && start.minutes() + q > cur.minutes() {
        if stop <= next {
            CellStatus::StartEnd
        } else {
            CellStatus::Start
        }
    } else if start < cur && cur < stop {
        if stop <= next {
            CellStatus::End
        } else {
            CellStatus::Mid
        }
    } else {
        CellStatus::Empty
    }
}

/// The result of classifying one room at one quantum.
#[derive(Debug)]
pub struct Classification<'a, T> {
    pub status: CellStatus,
    pub item: Option<&'a T>,
    /// A later span that also claims this quantum. Its presence means the
    /// room is double-booked; the first span wins.
    pub shadowed: Option<&'a T>,
}

/// Classifies a room's spans at `cur`. The first matching span in slice order wins.
pub fn classify<'a, T: TimeSpan>(
    items: &'a [T],
    cur: ClockTime,
    quantum: Quantum,
) -> Classification<'a, T> {
    let mut matches = items
        .iter()
        .map(|item| (status_at(item, cur, quantum), item))
        .filter(|(status, _)| status.is_occupied());

    match matches.next() {
        Some((status, item)) => Classification {
            status,
            item: Some(item),
            shadowed: matches.next().map(|(_, other)| other),
        },
        None => Classification {
            status: CellStatus::Empty,
            item: None,
            shadowed: None,
        },
    }
}

/// The vertical extent of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBounds {
    pub start: ClockTime,
    pub stop: ClockTime,
}

impl DayBounds {
    /// Earliest start and latest stop of `items`, or `None` when there are none.
    ///
    /// With a `label_interval` the start is walked back to the previous label
    /// boundary (`:00`, `:15`, ... for 15 minutes) so the first row carries a
    /// time label. The stop is never rounded.
    pub fn of<'a, T, I>(items: I, label_interval: Option<NonZeroU32>) -> Option<Self>
    where
        T: TimeSpan + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let (start, stop) = items.into_iter().fold(None, |acc, item| match acc {
            None => Some((item.start(), item.stop())),
            Some((start, stop)) => Some((
                std::cmp::min(start, item.start()),
                std::cmp::max(stop, item.stop()),
            )),
        })?;
        let start = match label_interval {
            Some(interval) => start.floor_to(interval),
            None => start,
        };
        Some(Self { start, stop })
    }

    /// Row times from `start` while strictly before `stop`.
    pub fn quanta(self, quantum: Quantum) -> impl Iterator<Item = ClockTime> {
        let q = quantum.minutes();
        let stop = self.stop;
        std::iter::successors(Some(self.start), move |t| Some(t.plus(q)))
            .take_while(move |t| *t < stop)
    }

    /// `ceil((stop - start) / quantum)`
    pub fn row_count(self, quantum: Quantum) -> usize {
        quantum.rows_for(self.stop.since(self.start)) as usize
    }
}
