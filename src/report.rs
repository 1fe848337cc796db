use serde::Serialize;

use crate::config::Overlap;
use crate::time_interval::{RawTimeInterval, TimeInterval};

/// JSON shape printed by `parse --json` and `intersect --json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IntervalReport {
    pub interval: TimeInterval,
    #[serde(flatten)]
    pub raw: RawTimeInterval,
    pub minutes: u16,
}

impl IntervalReport {
    pub fn new(interval: TimeInterval, minutes: u16) -> Self {
        Self {
            interval,
            raw: interval.into(),
            minutes,
        }
    }
}

impl From<TimeInterval> for IntervalReport {
    fn from(interval: TimeInterval) -> Self {
        Self::new(interval, interval.duration())
    }
}

/// `minutes` is the count reported next to the interval. Zero reads as no
/// overlap.
pub fn describe(interval: &TimeInterval, minutes: u16) -> String {
    if minutes == 0 {
        return "no overlap".to_owned();
    }

    let midnight = if interval.wraps() {
        ", through midnight"
    } else {
        ""
    };
    format!(
        "{interval} ({}{midnight})",
        format_minutes(minutes)
    )
}

pub fn describe_overlap(overlap: &Overlap<'_>) -> String {
    format!(
        "courier {} {} / order {} {}: {}",
        overlap.courier,
        overlap.working,
        overlap.order,
        overlap.delivery,
        describe(&overlap.common, overlap.minutes)
    )
}

fn format_minutes(minutes: u16) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;

    format!("{hours}h{minutes:02}m")
}
