//! Time-of-day handling for pass validity windows.
//!
//! Catalogs give times as "HH:MM" strings. Validity windows may wrap past
//! midnight (a night pass valid 19:00-05:00), so containment checks work on
//! a 24-hour circle rather than a line.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minutes in a day.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute resolution.
///
/// # Examples
///
/// ```
/// use pass_planner::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Midnight, the start of the all-day window.
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// 23:59, the end of the all-day window.
    pub const LAST_MINUTE: Self = match NaiveTime::from_hms_opt(23, 59, 0) {
        Some(t) => Self(t),
        None => panic!("23:59 is a valid time"),
    };

    /// Build a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Parse a time from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Returns true if `time` falls inside the inclusive window `start..=end`.
///
/// When `start > end` the window wraps past midnight.
///
/// ```
/// use pass_planner::domain::{TimeOfDay, in_range};
///
/// let t = |s| TimeOfDay::parse_hhmm(s).unwrap();
/// assert!(in_range(t("12:00"), t("09:00"), t("17:00")));
/// assert!(in_range(t("02:00"), t("19:00"), t("05:00")));
/// assert!(!in_range(t("12:00"), t("19:00"), t("05:00")));
/// ```
pub fn in_range(time: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> bool {
    if start <= end {
        start <= time && time <= end
    } else {
        time >= start || time <= end
    }
}

/// A daily validity window, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(TimeOfDay, TimeOfDay)", into = "(TimeOfDay, TimeOfDay)")]
pub struct TimeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// The all-day window, 00:00-23:59.
    pub const ALL_DAY: Self = Self {
        start: TimeOfDay::MIDNIGHT,
        end: TimeOfDay::LAST_MINUTE,
    };

    /// Create a window from its start and end.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse a window from two "HH:MM" strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeError> {
        Ok(Self::new(
            TimeOfDay::parse_hhmm(start)?,
            TimeOfDay::parse_hhmm(end)?,
        ))
    }

    /// Returns true if the window includes every minute of the day.
    ///
    /// Besides the all-day sentinel, a wrapping window whose end is the
    /// minute before its start (05:00-04:59) also spans the whole day.
    pub fn spans_full_day(&self) -> bool {
        (self.end.minutes_since_midnight() + 1) % MINUTES_PER_DAY
            == self.start.minutes_since_midnight()
    }

    /// Returns true if `time` is inside this window.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        in_range(time, self.start, self.end)
    }

    /// Returns true if every minute of `other` is also inside `self`.
    ///
    /// Both windows are measured as arcs starting at `self.start`; `other`
    /// fits when it neither wraps past `self.start` nor runs beyond
    /// `self.end`.
    pub fn covers_window(&self, other: &TimeWindow) -> bool {
        if self.spans_full_day() {
            return true;
        }
        if other.spans_full_day() {
            return false;
        }
        let offset = |t: TimeOfDay| {
            (t.minutes_since_midnight() + MINUTES_PER_DAY - self.start.minutes_since_midnight())
                % MINUTES_PER_DAY
        };
        let own_end = offset(self.end);
        let other_start = offset(other.start);
        let other_end = offset(other.end);
        other_start <= other_end && other_end <= own_end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::ALL_DAY
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(TimeOfDay, TimeOfDay)> for TimeWindow {
    fn from((start, end): (TimeOfDay, TimeOfDay)) -> Self {
        Self::new(start, end)
    }
}

impl From<TimeWindow> for (TimeOfDay, TimeOfDay) {
    fn from(window: TimeWindow) -> Self {
        (window.start, window.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::parse(start, end).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let time = t("00:00");
        assert_eq!(time.hour(), 0);
        assert_eq!(time.minute(), 0);

        let time = t("23:59");
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);
        assert_eq!(time, TimeOfDay::LAST_MINUTE);

        let time = t("14:30");
        assert_eq!(time.minutes_since_midnight(), 14 * 60 + 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(TimeOfDay::parse_hhmm("1430").is_err());
        assert!(TimeOfDay::parse_hhmm("14:3").is_err());
        assert!(TimeOfDay::parse_hhmm("14:300").is_err());

        // Missing colon
        assert!(TimeOfDay::parse_hhmm("14-30").is_err());

        // Non-digit characters
        assert!(TimeOfDay::parse_hhmm("ab:cd").is_err());
        assert!(TimeOfDay::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(TimeOfDay::parse_hhmm("24:00").is_err());
        assert!(TimeOfDay::parse_hhmm("12:60").is_err());
        assert_eq!(
            TimeOfDay::parse_hhmm("25:00").unwrap_err().to_string(),
            "invalid time: hour must be 0-23"
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(t("09:05").to_string(), "09:05");
        assert_eq!(format!("{:?}", t("09:05")), "TimeOfDay(09:05)");
        assert_eq!(window("19:00", "05:00").to_string(), "19:00-05:00");
    }

    #[test]
    fn same_day_range_is_inclusive() {
        assert!(in_range(t("09:00"), t("09:00"), t("17:00")));
        assert!(in_range(t("17:00"), t("09:00"), t("17:00")));
        assert!(!in_range(t("08:59"), t("09:00"), t("17:00")));
        assert!(!in_range(t("17:01"), t("09:00"), t("17:00")));
    }

    #[test]
    fn wrapping_range() {
        let night = window("19:00", "05:00");
        assert!(night.contains(t("19:00")));
        assert!(night.contains(t("23:30")));
        assert!(night.contains(t("00:00")));
        assert!(night.contains(t("05:00")));
        assert!(!night.contains(t("12:00")));
        assert!(!night.contains(t("08:00")));
    }

    #[test]
    fn all_day_sentinel() {
        assert!(TimeWindow::ALL_DAY.spans_full_day());
        assert!(!window("00:00", "23:58").spans_full_day());
        assert!(TimeWindow::ALL_DAY.contains(t("23:59")));
        assert_eq!(TimeWindow::default(), TimeWindow::ALL_DAY);
    }

    #[test]
    fn window_containment() {
        let all_day = TimeWindow::ALL_DAY;
        let night = window("19:00", "05:00");
        let off_peak = window("09:00", "05:00");

        assert!(all_day.covers_window(&night));
        assert!(all_day.covers_window(&off_peak));
        assert!(off_peak.covers_window(&night));
        assert!(!night.covers_window(&off_peak));
        assert!(!off_peak.covers_window(&all_day));
        assert!(!night.covers_window(&all_day));

        // Late evening fits inside the night window, midday does not.
        assert!(night.covers_window(&window("21:00", "23:00")));
        assert!(night.covers_window(&window("01:00", "03:00")));
        assert!(!night.covers_window(&window("10:00", "12:00")));
        assert!(!night.covers_window(&window("20:00", "11:00")));

        // A wrapped window ending just before its start is all day too.
        let shifted = window("05:00", "04:59");
        assert!(shifted.spans_full_day());
        assert!(shifted.covers_window(&all_day));
        assert!(all_day.covers_window(&shifted));
    }

    #[test]
    fn serde_as_pair() {
        let w: TimeWindow = serde_json::from_str(r#"["19:00", "05:00"]"#).unwrap();
        assert_eq!(w, window("19:00", "05:00"));
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"["19:00","05:00"]"#);

        let bad: Result<TimeWindow, _> = serde_json::from_str(r#"["19:00", "5:00"]"#);
        assert!(bad.is_err());
    }
}
