use std::cmp::{max, min};
use std::fmt;
use std::str::FromStr;

use jiff::Zoned;
use log::trace;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::minute::{Minute, MINUTES_IN_DAY};
use crate::Error;

pub(crate) const INTERVAL_SEPARATOR: char = '-';

/// A closed range of minutes on the 24 hour clock.
///
/// When `end < start` the range wraps: it runs from `start` to midnight and
/// on from midnight to `end`. Both ends are inside the range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct TimeInterval {
    start: Minute,
    end: Minute,
    wraps: bool,
}

/// Integer form of a [`TimeInterval`], as kept in storage rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimeInterval {
    pub start: u16,
    pub end: u16,
    pub wraps: bool,
}

/// Which branch of [`TimeInterval::intersect`] handles a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IntersectionCase {
    /// Neither interval passes midnight.
    Linear,
    /// Exactly one interval passes midnight.
    Mixed,
    /// Both intervals pass midnight.
    BothWrap,
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl TimeInterval {
    /// The "no overlap" result. Its duration is 0.
    pub const EMPTY: Self = Self {
        start: Minute::MIDNIGHT,
        end: Minute::MIDNIGHT,
        wraps: false,
    };

    pub fn new(start: Minute, end: Minute) -> Self {
        Self {
            start,
            end,
            wraps: end < start,
        }
    }

    pub fn start(&self) -> Minute {
        self.start
    }

    pub fn end(&self) -> Minute {
        self.end
    }

    pub fn wraps(&self) -> bool {
        self.wraps
    }

    pub fn contains(&self, point: Minute) -> bool {
        // Not passing midnight
        if !self.wraps {
            point >= self.start && point <= self.end
        // Passing midnight
        } else {
            point >= self.start || point <= self.end
        }
    }

    /// Whether the wall-clock minute of `time` falls inside the interval.
    pub fn contains_time(&self, time: &Zoned) -> bool {
        self.contains(Minute::of(time))
    }

    /// Number of minutes covered, counting both ends of a non-wrapping
    /// interval. [`TimeInterval::EMPTY`] covers none.
    pub fn duration(&self) -> u16 {
        if *self == Self::EMPTY {
            return 0;
        }

        self.span()
    }

    /// Length of the bounds alone. `00:00-00:00` spans one minute here.
    fn span(&self) -> u16 {
        let (start, end) = (self.start.get(), self.end.get());
        if self.wraps {
            MINUTES_IN_DAY - start + end
        } else {
            (end + 1).saturating_sub(start)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.duration() == 0
    }

    pub fn intersection_case(&self, other: &Self) -> IntersectionCase {
        match (self.wraps, other.wraps) {
            (false, false) => IntersectionCase::Linear,
            (true, true) => IntersectionCase::BothWrap,
            _ => IntersectionCase::Mixed,
        }
    }

    /// The common part of two intervals and its duration in minutes.
    ///
    /// Returns `(EMPTY, 0)` when there is no common part. The result does not
    /// depend on argument order.
    pub fn intersect(&self, other: &Self) -> (Self, u16) {
        trace!(
            "Intersecting {self} with {other} ({})",
            self.intersection_case(other)
        );

        let common = match (self.wraps, other.wraps) {
            (false, false) => self.common_linear(other),
            (true, false) => self.common_with_inner(other),
            (false, true) => other.common_with_inner(self),
            (true, true) => self.common_both_wrapping(other),
        };

        // A common part may be the single minute 00:00, which looks like
        // EMPTY but still spans one minute.
        match common {
            Some(common) => (common, common.span()),
            None => (Self::EMPTY, 0),
        }
    }

    fn common_linear(&self, other: &Self) -> Option<Self> {
        if self.start > other.end || self.end < other.start {
            return None;
        }

        Some(Self {
            start: max(self.start, other.start),
            end: min(self.end, other.end),
            wraps: false,
        })
    }

    /// `self` wraps, `inner` does not.
    fn common_with_inner(&self, inner: &Self) -> Option<Self> {
        if self.covers_clock_with(inner) {
            return None;
        }

        Some(Self::new(
            min(self.end, inner.start),
            min(self.start, inner.end),
        ))
    }

    fn common_both_wrapping(&self, other: &Self) -> Option<Self> {
        // Never true for two wrapping intervals, kept so the rule reads the
        // same in both branches.
        if self.covers_clock_with(other) || other.covers_clock_with(self) {
            return None;
        }

        Some(Self::new(
            max(self.start, other.start),
            min(self.end, other.end),
        ))
    }

    /// Together the two intervals leave no gap on the clock. Such pairs are
    /// reported as having no overlap.
    fn covers_clock_with(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

impl From<RawTimeInterval> for TimeInterval {
    fn from(raw: RawTimeInterval) -> Self {
        Self {
            start: Minute::new(raw.start),
            end: Minute::new(raw.end),
            wraps: raw.wraps,
        }
    }
}

impl From<TimeInterval> for RawTimeInterval {
    fn from(interval: TimeInterval) -> Self {
        Self {
            start: interval.start.get(),
            end: interval.end.get(),
            wraps: interval.wraps,
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{INTERVAL_SEPARATOR}{}", self.start, self.end)
    }
}

impl FromStr for TimeInterval {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hours = input.trim_matches('"');
        let mut parts = hours.split(INTERVAL_SEPARATOR);

        let (Some(start), Some(end), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::bad_format(input, "interval needs exactly one '-'"));
        };
        if start.is_empty() || end.is_empty() {
            return Err(Error::bad_format(input, "interval bound is missing"));
        }

        let start: Minute = start.parse().map_err(|err: Error| err.within(input))?;
        let end: Minute = end.parse().map_err(|err: Error| err.within(input))?;

        let interval = Self::new(start, end);
        trace!("Parsed {input:?} as {interval:?}");
        Ok(interval)
    }
}
