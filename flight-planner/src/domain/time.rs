//! Weekly-cyclic time handling.
//!
//! The timetable repeats every week, so a scheduled departure is a point in
//! a recurring 7-day cycle rather than a calendar instant. This module
//! provides [`WeekTime`] for those cyclic points and [`TripTime`] for the
//! unwrapped instants an itinerary accumulates as it crosses week
//! boundaries.
//!
//! All wrap-around happens in one place: [`WeekTime::from_seconds_into_week`].

use chrono::{Duration, NaiveTime, Timelike, Weekday};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Length of one timetable cycle in seconds.
pub const SECS_PER_WEEK: i64 = 7 * SECS_PER_DAY;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the length of one timetable cycle.
pub fn week() -> Duration {
    Duration::seconds(SECS_PER_WEEK)
}

/// Error returned when parsing or building an invalid weekly time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekly time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A point in the recurring 7-day week.
///
/// Weekday numbering follows the timetable convention: 1 is Monday and 7
/// is Sunday. The time of day is always in `[00:00, 24:00)`.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::WeekTime;
/// use chrono::Duration;
///
/// let sunday_late = WeekTime::from_hm(7, 23, 0).unwrap();
/// let next = sunday_late + Duration::hours(3);
/// assert_eq!(next.day_number(), 1);
/// assert_eq!(next.to_string(), "Mon 02:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekTime {
    weekday: Weekday,
    time: NaiveTime,
}

impl WeekTime {
    /// Create a weekly time from its components.
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }

    /// Create from a day number (1 = Monday ... 7 = Sunday), hour and minute.
    pub fn from_hm(day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        let weekday = weekday_from_number(day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))?;
        Ok(Self { weekday, time })
    }

    /// Build from an offset into the week, wrapping into `[0, 7 days)`.
    ///
    /// Negative offsets and offsets past the end of the week are folded
    /// back into the cycle, so `Sun 23:00 + 3h` lands on `Mon 02:00`.
    pub fn from_seconds_into_week(secs: i64) -> Self {
        let secs = secs.rem_euclid(SECS_PER_WEEK);
        let day = (secs / SECS_PER_DAY) as usize;
        let secs_of_day = (secs % SECS_PER_DAY) as u32;
        let time =
            NaiveTime::from_num_seconds_from_midnight_opt(secs_of_day, 0).unwrap_or_default();
        Self {
            weekday: WEEKDAYS[day],
            time,
        }
    }

    /// Parse `"<day> HH:MM"`, where the day is a name ("Mon", "monday") or
    /// a number from 1 (Monday) to 7 (Sunday).
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::WeekTime;
    ///
    /// assert_eq!(WeekTime::parse("Tue 09:30").unwrap().to_string(), "Tue 09:30");
    /// assert_eq!(WeekTime::parse("7 23:59").unwrap().to_string(), "Sun 23:59");
    ///
    /// assert!(WeekTime::parse("8 10:00").is_err());
    /// assert!(WeekTime::parse("Mon 24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (day, hhmm) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| TimeError::new("expected '<day> HH:MM'"))?;

        let weekday = match day.parse::<u32>() {
            Ok(n) => weekday_from_number(n)?,
            Err(_) => day
                .parse::<Weekday>()
                .map_err(|_| TimeError::new("unknown weekday"))?,
        };

        let time = parse_hhmm(hhmm.trim())?;
        Ok(Self { weekday, time })
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the day number, 1 (Monday) to 7 (Sunday).
    pub fn day_number(&self) -> u32 {
        self.weekday.number_from_monday()
    }

    /// Returns the time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Seconds since Monday 00:00.
    pub fn seconds_into_week(&self) -> i64 {
        i64::from(self.weekday.num_days_from_monday()) * SECS_PER_DAY
            + i64::from(self.time.num_seconds_from_midnight())
    }

    /// Forward gap from `self` to the next occurrence of `later`.
    ///
    /// Always in `[0, 7 days)`; a `later` that is earlier in the week is
    /// reached in the following cycle.
    pub fn duration_until(&self, later: WeekTime) -> Duration {
        let gap = (later.seconds_into_week() - self.seconds_into_week()).rem_euclid(SECS_PER_WEEK);
        Duration::seconds(gap)
    }
}

impl Add<Duration> for WeekTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self::from_seconds_into_week(self.seconds_into_week() + rhs.num_seconds())
    }
}

impl Ord for WeekTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds_into_week().cmp(&other.seconds_into_week())
    }
}

impl PartialOrd for WeekTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeekTime({} {:02}:{:02})",
            self.weekday,
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.weekday, self.hour(), self.minute())
    }
}

/// An unwrapped instant along an itinerary.
///
/// Measured from Monday 00:00 of the week the itinerary starts in, so it
/// keeps increasing when a connection rolls over into the next cycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripTime(Duration);

impl TripTime {
    /// The instant `at` in the first cycle of a trip.
    pub fn starting_at(at: WeekTime) -> Self {
        Self(Duration::seconds(at.seconds_into_week()))
    }

    /// The instant `at` in cycle `week` (0-based).
    pub fn in_week(week: i64, at: WeekTime) -> Self {
        Self(Duration::seconds(week * SECS_PER_WEEK + at.seconds_into_week()))
    }

    /// Cycle index this instant falls in.
    pub fn week(&self) -> i64 {
        self.0.num_seconds().div_euclid(SECS_PER_WEEK)
    }

    /// Projection onto the recurring week.
    pub fn week_time(&self) -> WeekTime {
        WeekTime::from_seconds_into_week(self.0.num_seconds())
    }

    /// Offset from Monday 00:00 of the first cycle.
    pub fn offset(&self) -> Duration {
        self.0
    }

    /// Returns the duration between two instants.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0 - other.0
    }
}

impl Add<Duration> for TripTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl fmt::Debug for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripTime(week {}, {})", self.week(), self.week_time())
    }
}

impl fmt::Display for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.week() {
            0 => write!(f, "{}", self.week_time()),
            w => write!(f, "{} (+{}w)", self.week_time(), w),
        }
    }
}

fn weekday_from_number(day: u32) -> Result<Weekday, TimeError> {
    match day {
        1..=7 => Ok(WEEKDAYS[(day - 1) as usize]),
        _ => Err(TimeError::new("day must be 1-7")),
    }
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
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
    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn wt(day: u32, hour: u32, minute: u32) -> WeekTime {
        WeekTime::from_hm(day, hour, minute).unwrap()
    }

    #[test]
    fn from_hm_valid() {
        let t = wt(1, 0, 0);
        assert_eq!(t.weekday(), Weekday::Mon);
        assert_eq!(t.seconds_into_week(), 0);

        let t = wt(7, 23, 59);
        assert_eq!(t.weekday(), Weekday::Sun);
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
    }

    #[test]
    fn from_hm_rejects_out_of_range() {
        assert!(WeekTime::from_hm(0, 10, 0).is_err());
        assert!(WeekTime::from_hm(8, 10, 0).is_err());
        assert!(WeekTime::from_hm(1, 24, 0).is_err());
        assert!(WeekTime::from_hm(1, 12, 60).is_err());
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!(WeekTime::parse("Mon 08:00").unwrap(), wt(1, 8, 0));
        assert_eq!(WeekTime::parse("monday 08:00").unwrap(), wt(1, 8, 0));
        assert_eq!(WeekTime::parse("Sunday 22:15").unwrap(), wt(7, 22, 15));
        assert_eq!(WeekTime::parse("3 12:30").unwrap(), wt(3, 12, 30));
        assert_eq!(WeekTime::parse("  Fri   06:05 ").unwrap(), wt(5, 6, 5));
    }

    #[test]
    fn parse_invalid() {
        assert!(WeekTime::parse("Mon").is_err());
        assert!(WeekTime::parse("Funday 10:00").is_err());
        assert!(WeekTime::parse("0 10:00").is_err());
        assert!(WeekTime::parse("Mon 1000").is_err());
        assert!(WeekTime::parse("Mon 10-00").is_err());
        assert!(WeekTime::parse("Mon 24:00").is_err());
        assert!(WeekTime::parse("Mon ab:cd").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(wt(1, 8, 0).to_string(), "Mon 08:00");
        assert_eq!(wt(7, 23, 5).to_string(), "Sun 23:05");
        assert_eq!(format!("{:?}", wt(2, 9, 30)), "WeekTime(Tue 09:30)");
    }

    #[test]
    fn add_within_day() {
        assert_eq!(wt(1, 10, 0) + Duration::hours(3), wt(1, 13, 0));
        assert_eq!(wt(1, 10, 30) + Duration::minutes(45), wt(1, 11, 15));
    }

    #[test]
    fn add_crosses_midnight() {
        assert_eq!(wt(3, 22, 0) + Duration::hours(3), wt(4, 1, 0));
    }

    #[test]
    fn add_exactly_to_midnight() {
        // Lands on 00:00 of the next day, never "24:00"
        let t = wt(2, 21, 0) + Duration::hours(3);
        assert_eq!(t, wt(3, 0, 0));
        assert_eq!(t.hour(), 0);
    }

    #[test]
    fn add_wraps_week() {
        // Sunday 23:00 + 3h wraps to Monday 02:00
        assert_eq!(wt(7, 23, 0) + Duration::hours(3), wt(1, 2, 0));
        // Sunday 22:00 + 3h wraps to Monday 01:00
        assert_eq!(wt(7, 22, 0) + Duration::hours(3), wt(1, 1, 0));
        // Exactly one week later is the same point
        assert_eq!(wt(4, 7, 45) + week(), wt(4, 7, 45));
    }

    #[test]
    fn sunday_end_of_day_boundary() {
        // Sunday 21:00 + 3h is Monday 00:00, the start of the cycle
        let t = wt(7, 21, 0) + Duration::hours(3);
        assert_eq!(t.day_number(), 1);
        assert_eq!(t.seconds_into_week(), 0);
    }

    #[test]
    fn from_seconds_normalizes_negative() {
        let t = WeekTime::from_seconds_into_week(-3600);
        assert_eq!(t, wt(7, 23, 0));
    }

    #[test]
    fn ordering_follows_week() {
        assert!(wt(1, 23, 0) < wt(2, 0, 0));
        assert!(wt(7, 0, 0) > wt(6, 23, 59));
        assert!(wt(3, 8, 0) < wt(3, 8, 1));
    }

    #[test]
    fn duration_until_same_week() {
        assert_eq!(wt(1, 13, 0).duration_until(wt(1, 20, 0)), Duration::hours(7));
        assert_eq!(wt(1, 13, 0).duration_until(wt(1, 13, 0)), Duration::zero());
    }

    #[test]
    fn duration_until_wraps() {
        // Monday 01:00 to Sunday 09:00 in the same week
        assert_eq!(
            wt(1, 1, 0).duration_until(wt(7, 9, 0)),
            Duration::days(6) + Duration::hours(8)
        );
        // Tuesday back to Monday is reached in the next cycle
        assert_eq!(
            wt(2, 9, 0).duration_until(wt(1, 9, 0)),
            Duration::days(6)
        );
    }

    #[test]
    fn trip_time_week_projection() {
        let start = TripTime::starting_at(wt(7, 22, 0));
        assert_eq!(start.week(), 0);

        let later = start + Duration::hours(3);
        assert_eq!(later.week(), 1);
        assert_eq!(later.week_time(), wt(1, 1, 0));
        assert_eq!(later.signed_duration_since(start), Duration::hours(3));
    }

    #[test]
    fn trip_time_in_week() {
        let t = TripTime::in_week(2, wt(2, 9, 0));
        assert_eq!(t.week(), 2);
        assert_eq!(t.week_time(), wt(2, 9, 0));
        assert_eq!(
            t.signed_duration_since(TripTime::starting_at(wt(2, 9, 0))),
            Duration::days(14)
        );
    }

    #[test]
    fn trip_time_display() {
        assert_eq!(TripTime::starting_at(wt(1, 8, 0)).to_string(), "Mon 08:00");
        assert_eq!(
            TripTime::in_week(1, wt(2, 9, 0)).to_string(),
            "Tue 09:00 (+1w)"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn week_time()(day in 1u32..=7, hour in 0u32..24, minute in 0u32..60) -> WeekTime {
            WeekTime::from_hm(day, hour, minute).unwrap()
        }
    }

    proptest! {
        /// Adding in one step or two gives the same weekly time
        #[test]
        fn addition_associative(
            t in week_time(),
            a in 0i64..30_000,
            b in 0i64..30_000,
        ) {
            let a = Duration::minutes(a);
            let b = Duration::minutes(b);
            prop_assert_eq!(t + (a + b), (t + a) + b);
        }

        /// Results are always normalized into the week
        #[test]
        fn addition_stays_in_range(t in week_time(), mins in 0i64..100_000) {
            let r = t + Duration::minutes(mins);
            prop_assert!((1..=7).contains(&r.day_number()));
            prop_assert!(r.hour() < 24);
            prop_assert!((0..SECS_PER_WEEK).contains(&r.seconds_into_week()));
        }

        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(t in week_time()) {
            prop_assert_eq!(WeekTime::parse(&t.to_string()).unwrap(), t);
        }

        /// The forward gap really reaches the target
        #[test]
        fn duration_until_reaches_target(a in week_time(), b in week_time()) {
            let gap = a.duration_until(b);
            prop_assert!(gap >= Duration::zero());
            prop_assert!(gap < week());
            prop_assert_eq!(a + gap, b);
        }

        /// TripTime projection agrees with WeekTime arithmetic
        #[test]
        fn trip_time_projection(t in week_time(), mins in 0i64..100_000) {
            let d = Duration::minutes(mins);
            let trip = TripTime::starting_at(t) + d;
            prop_assert_eq!(trip.week_time(), t + d);
        }
    }
}
