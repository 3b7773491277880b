//! History window and bar spacing, parsed leniently from CLI strings.
//!
//! Unrecognized period or interval strings are not errors: they fall back to
//! the `1d`/`1m` defaults, matching the forgiving behavior of the command
//! surface. The string forms double as the external provider's own
//! range/interval values.

use strum_macros::{Display, EnumString};

/// Length of the requested history window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Period {
    /// One day (24 hours).
    #[default]
    #[strum(serialize = "1d")]
    Day1,
    /// Five days.
    #[strum(serialize = "5d")]
    Day5,
    /// One month (30 days).
    #[strum(serialize = "1mo")]
    Month1,
}

impl Period {
    /// Window length in hours.
    pub fn hours(&self) -> u32 {
        match self {
            Period::Day1 => 24,
            Period::Day5 => 120,
            Period::Month1 => 720,
        }
    }

    /// Lenient parse: unrecognized strings fall back to the 1d default.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Spacing between consecutive bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Interval {
    /// One minute.
    #[default]
    #[strum(serialize = "1m")]
    Minute1,
    /// Five minutes.
    #[strum(serialize = "5m")]
    Minute5,
    /// Fifteen minutes.
    #[strum(serialize = "15m")]
    Minute15,
    /// One hour.
    #[strum(serialize = "1h")]
    Hour1,
}

impl Interval {
    /// Bar spacing in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Interval::Minute1 => 1,
            Interval::Minute5 => 5,
            Interval::Minute15 => 15,
            Interval::Hour1 => 60,
        }
    }

    /// Lenient parse: unrecognized strings fall back to the 1m default.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Number of bars in a series covering `period` at `interval` spacing.
pub fn bar_count(period: Period, interval: Interval) -> usize {
    (period.hours() as usize * 60) / interval.minutes() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_periods_map_to_hours() {
        assert_eq!(Period::parse_or_default("1d").hours(), 24);
        assert_eq!(Period::parse_or_default("5d").hours(), 120);
        assert_eq!(Period::parse_or_default("1mo").hours(), 720);
    }

    #[test]
    fn recognized_intervals_map_to_minutes() {
        assert_eq!(Interval::parse_or_default("1m").minutes(), 1);
        assert_eq!(Interval::parse_or_default("5m").minutes(), 5);
        assert_eq!(Interval::parse_or_default("15m").minutes(), 15);
        assert_eq!(Interval::parse_or_default("1h").minutes(), 60);
    }

    #[test]
    fn unrecognized_strings_fall_back_to_defaults() {
        assert_eq!(Period::parse_or_default("2y"), Period::Day1);
        assert_eq!(Period::parse_or_default(""), Period::Day1);
        assert_eq!(Interval::parse_or_default("3h"), Interval::Minute1);
        assert_eq!(Interval::parse_or_default("bogus"), Interval::Minute1);
    }

    #[test]
    fn bar_counts_for_all_recognized_combinations() {
        assert_eq!(bar_count(Period::Day1, Interval::Minute1), 1440);
        assert_eq!(bar_count(Period::Day1, Interval::Hour1), 24);
        assert_eq!(bar_count(Period::Day5, Interval::Minute15), 480);
        assert_eq!(bar_count(Period::Month1, Interval::Hour1), 720);
    }
}
