//! Time-of-day arithmetic for courier working hours and order delivery hours.
//!
//! Hours travel as `HH:MM-HH:MM` strings. A range whose end is before its
//! start runs through midnight. [`TimeInterval`] parses and prints that form,
//! answers membership for a [`Minute`] and computes the overlap of two ranges.

use const_format::formatcp;

pub mod config;
pub mod file_io;
pub mod logging;
pub mod minute;
pub mod report;
pub mod run;
pub mod time_interval;

pub use minute::Minute;
pub use run::{run, Cli};
pub use time_interval::{IntersectionCase, RawTimeInterval, TimeInterval};

pub(crate) const TIME_FORMAT: &str = "HH:MM";
pub(crate) const INTERVAL_FORMAT: &str = formatcp!(
    "{}{}{}",
    TIME_FORMAT,
    time_interval::INTERVAL_SEPARATOR,
    TIME_FORMAT
);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{input:?} is not in {format} format: {reason}", format = INTERVAL_FORMAT)]
    BadFormat { input: String, reason: &'static str },
}

impl Error {
    pub(crate) fn bad_format(input: &str, reason: &'static str) -> Self {
        Self::BadFormat {
            input: input.to_owned(),
            reason,
        }
    }

    /// Reports the error against the whole input instead of one field of it.
    pub(crate) fn within(self, input: &str) -> Self {
        match self {
            Self::BadFormat { reason, .. } => Self::bad_format(input, reason),
        }
    }
}
