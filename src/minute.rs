use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use jiff::{civil::Time, Zoned};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::Error;

pub const MINUTES_IN_DAY: u16 = 24 * 60;

const MINUTES_IN_HOUR: u16 = 60;
const MAX_HOUR: u16 = 23;
const MAX_MINUTE: u16 = 59;
const TIME_SEPARATOR: char = ':';

/// A time of day, counted in minutes since midnight.
///
/// Always in `0..1440`. Serializes as `"HH:MM"`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Minute(u16);

impl Minute {
    pub const MIDNIGHT: Self = Self(0);

    /// Wraps `minutes` onto the clock, so `Minute::new(1440) == MIDNIGHT`.
    pub const fn new(minutes: u16) -> Self {
        Self(minutes % MINUTES_IN_DAY)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / MINUTES_IN_HOUR
    }

    pub const fn minute(self) -> u16 {
        self.0 % MINUTES_IN_HOUR
    }

    /// The wall-clock minute of `time` in its own time zone.
    pub fn of(time: &Zoned) -> Self {
        Self::from(time.time())
    }
}

impl From<Time> for Minute {
    fn from(time: Time) -> Self {
        let hour = u16::from(time.hour().unsigned_abs());
        let minute = u16::from(time.minute().unsigned_abs());
        Self::new(hour * MINUTES_IN_HOUR + minute)
    }
}

impl From<Minute> for u16 {
    fn from(minute: Minute) -> Self {
        minute.0
    }
}

impl Add<i32> for Minute {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)] // rem_euclid keeps it below 1440
    #[allow(clippy::cast_sign_loss)] // rem_euclid of a positive modulus is >= 0
    fn add(self, rhs: i32) -> Self::Output {
        let day = i32::from(MINUTES_IN_DAY);
        let sum = (i32::from(self.0) + rhs.rem_euclid(day)).rem_euclid(day);
        Self(sum as u16)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{TIME_SEPARATOR}{:02}",
            self.hour(),
            self.minute()
        )
    }
}

impl FromStr for Minute {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bad = |reason| Error::bad_format(input, reason);

        let mut fields = input.split(TIME_SEPARATOR);
        let (Some(hour), Some(minute), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(bad("time needs exactly one ':'"));
        };

        let hour = two_digits(hour).ok_or_else(|| bad("hour must be two digits"))?;
        let minute =
            two_digits(minute).ok_or_else(|| bad("minute must be two digits"))?;

        if hour > MAX_HOUR {
            return Err(bad("hour must be less than 24"));
        }
        if minute > MAX_MINUTE {
            return Err(bad("minute must be less than 60"));
        }

        Ok(Self(hour * MINUTES_IN_HOUR + minute))
    }
}

fn two_digits(field: &str) -> Option<u16> {
    match field.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u16::from(tens - b'0') * 10 + u16::from(ones - b'0'))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hm(hour: u16, minute: u16) -> Minute {
        Minute::new(hour * 60 + minute)
    }

    #[test]
    fn parses_two_digit_fields() {
        let parsed: Minute = "09:30".parse().unwrap();
        assert_eq!(parsed.get(), 9 * 60 + 30);
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.minute(), 30);

        assert_eq!("00:00".parse::<Minute>().unwrap(), Minute::MIDNIGHT);
        assert_eq!("23:59".parse::<Minute>().unwrap().get(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        let cases = [
            ("single digit hour", "9:30"),
            ("single digit minute", "22:2"),
            ("too many ':'", "123:123:123"),
            ("no ':'", "1230"),
            ("empty", ""),
            ("hour is not a number", "12d:23"),
            ("minute is not a number", "22:as"),
            ("hour too big", "24:22"),
            ("minute too big", "22:60"),
            ("negative hour", "-1:22"),
            ("negative minute", "22:-1"),
            ("signed hour", "+1:22"),
            ("padded with spaces", " 9:30"),
            ("non ascii digits", "\u{661}\u{662}:00"),
        ];

        for (name, input) in cases {
            let result = input.parse::<Minute>();
            assert!(
                matches!(result, Err(Error::BadFormat { .. })),
                "{name}: {input:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = "9:30".parse::<Minute>().unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                input: "9:30".to_owned(),
                reason: "hour must be two digits",
            }
        );
        assert!(err.to_string().contains("HH:MM-HH:MM"));
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(hm(10, 10).to_string(), "10:10");
        assert_eq!(hm(9, 10).to_string(), "09:10");
        assert_eq!(hm(10, 9).to_string(), "10:09");
        assert_eq!(hm(9, 5).to_string(), "09:05");
        assert_eq!(Minute::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn new_wraps_past_midnight() {
        assert_eq!(Minute::new(MINUTES_IN_DAY), Minute::MIDNIGHT);
        assert_eq!(Minute::new(MINUTES_IN_DAY + 61), hm(1, 1));
    }

    #[test]
    fn add_is_modulo_one_day() {
        assert_eq!(hm(12, 22) + 78, hm(13, 40));
        assert_eq!(hm(12, 22) + 38, hm(13, 0));
        assert_eq!(hm(23, 59) + 180, hm(2, 59));
        assert_eq!(hm(0, 10) + -20, hm(23, 50));
        assert_eq!(hm(5, 0) + i32::MAX, hm(5, 0) + (i32::MAX % 1440));
        assert_eq!(hm(5, 0) + i32::MIN, hm(5, 0) + i32::MIN.rem_euclid(1440));
    }

    #[test]
    fn from_clock_time_drops_seconds() {
        let time = jiff::civil::time(11, 12, 59, 0);
        assert_eq!(Minute::from(time), hm(11, 12));
    }

    #[test]
    fn of_zoned_uses_local_wall_clock() {
        let zoned = jiff::civil::date(2000, 12, 1)
            .at(22, 33, 0, 0)
            .to_zoned(jiff::tz::TimeZone::UTC)
            .unwrap();
        assert_eq!(Minute::of(&zoned), hm(22, 33));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&hm(9, 5)).unwrap();
        assert_eq!(json, "\"09:05\"");
        let back: Minute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hm(9, 5));
        assert!(serde_json::from_str::<Minute>("\"9:05\"").is_err());
        assert!(serde_json::from_str::<Minute>("545").is_err());
    }

    proptest! {
        #[test]
        fn format_then_parse_is_identity(raw in 0u16..MINUTES_IN_DAY) {
            let minute = Minute::new(raw);
            prop_assert_eq!(minute.to_string().parse::<Minute>(), Ok(minute));
        }

        #[test]
        fn add_matches_modular_arithmetic(raw in 0u16..MINUTES_IN_DAY, delta in -5000i32..5000) {
            let expected = (i32::from(raw) + delta).rem_euclid(1440);
            prop_assert_eq!(i32::from((Minute::new(raw) + delta).get()), expected);
        }
    }
}
