//! Calendar date and clock time arithmetic.
//!
//! This module provides strict parsing for the `YYYY-MM-DD` and `HH:MM`
//! string formats the engine accepts at its boundaries, and duration
//! computation between two clock times with correct midnight rollover.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Accepts exactly ten characters with `-` separators and numeric fields.
/// Malformed input (wrong separator, missing parts, empty string, an
/// impossible date) fails with [`EngineError::InvalidDate`] rather than
/// mapping to an arbitrary default instant.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let date = parse_calendar_date("2025-06-02").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
///
/// assert!(parse_calendar_date("2025/06/02").is_err());
/// assert!(parse_calendar_date("2025-6-2").is_err());
/// assert!(parse_calendar_date("").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> EngineResult<NaiveDate> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());

    if !well_formed {
        return Err(EngineError::InvalidDate {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        input: input.to_string(),
    })
}

/// Parses a strict `HH:MM` clock time.
///
/// An empty (or whitespace-only) input fails with [`EngineError::MissingTime`]
/// so that a missing time is distinguishable from a genuine zero-duration
/// booking; any other malformed input fails with [`EngineError::InvalidTime`].
///
/// # Example
///
/// ```
/// use roster_engine::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// let time = parse_clock_time("22:00").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
///
/// assert!(parse_clock_time("").is_err());
/// assert!(parse_clock_time("7 am").is_err());
/// ```
pub fn parse_clock_time(input: &str) -> EngineResult<NaiveTime> {
    if input.trim().is_empty() {
        return Err(EngineError::MissingTime);
    }

    NaiveTime::parse_from_str(input, "%H:%M").map_err(|_| EngineError::InvalidTime {
        input: input.to_string(),
    })
}

/// Computes the elapsed hours between two clock times.
///
/// Equal times return exactly `0`, never a full day. An end time earlier than
/// the start time means the end falls on the next calendar day (an overnight
/// span). The result is the whole-minute wall-clock difference converted to
/// hours and rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::hours_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(hours_between(t(8, 0), t(10, 30)), Decimal::new(25, 1)); // 2.5
/// assert_eq!(hours_between(t(22, 0), t(2, 0)), Decimal::new(40, 1)); // overnight, 4.0
/// assert_eq!(hours_between(t(9, 0), t(9, 0)), Decimal::ZERO);
/// ```
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    if start == end {
        return Decimal::ZERO;
    }

    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }

    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

/// Computes elapsed hours like [`hours_between`], but fails on a zero span.
///
/// Callers that expect a strictly positive duration (entry forms, the on-call
/// splitter) get [`EngineError::InvalidTimeRange`] as a typed condition
/// instead of a magic `0` return.
pub fn positive_hours_between(start: NaiveTime, end: NaiveTime) -> EngineResult<Decimal> {
    let hours = hours_between(start, end);
    if hours <= Decimal::ZERO {
        return Err(EngineError::InvalidTimeRange { start, end });
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // ==========================================================================
    // parse_calendar_date
    // ==========================================================================

    #[test]
    fn test_parse_valid_date() {
        let date = parse_calendar_date("2025-06-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    }

    #[test]
    fn test_parse_date_wrong_separator_fails() {
        let result = parse_calendar_date("2025/06/02");
        match result.unwrap_err() {
            EngineError::InvalidDate { input } => assert_eq!(input, "2025/06/02"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_date_missing_parts_fails() {
        assert!(parse_calendar_date("2025-06").is_err());
        assert!(parse_calendar_date("2025").is_err());
    }

    #[test]
    fn test_parse_empty_date_fails() {
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_parse_unpadded_date_fails() {
        // strict format: single-digit month/day must be zero-padded
        assert!(parse_calendar_date("2025-6-02").is_err());
        assert!(parse_calendar_date("2025-06-2").is_err());
    }

    #[test]
    fn test_parse_impossible_date_fails() {
        assert!(parse_calendar_date("2025-02-30").is_err());
        assert!(parse_calendar_date("2025-13-01").is_err());
    }

    #[test]
    fn test_parse_date_trailing_garbage_fails() {
        assert!(parse_calendar_date("2025-06-02x").is_err());
    }

    // ==========================================================================
    // parse_clock_time
    // ==========================================================================

    #[test]
    fn test_parse_valid_time() {
        assert_eq!(parse_clock_time("07:30").unwrap(), make_time(7, 30));
        assert_eq!(parse_clock_time("00:00").unwrap(), make_time(0, 0));
        assert_eq!(parse_clock_time("23:59").unwrap(), make_time(23, 59));
    }

    #[test]
    fn test_parse_empty_time_is_missing() {
        match parse_clock_time("").unwrap_err() {
            EngineError::MissingTime => {}
            other => panic!("Expected MissingTime, got {:?}", other),
        }
        assert!(matches!(
            parse_clock_time("   ").unwrap_err(),
            EngineError::MissingTime
        ));
    }

    #[test]
    fn test_parse_malformed_time_is_invalid() {
        match parse_clock_time("25:00").unwrap_err() {
            EngineError::InvalidTime { input } => assert_eq!(input, "25:00"),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
        assert!(parse_clock_time("7h30").is_err());
    }

    // ==========================================================================
    // hours_between
    // ==========================================================================

    #[test]
    fn test_equal_times_is_zero_not_twenty_four() {
        assert_eq!(hours_between(make_time(9, 0), make_time(9, 0)), dec("0"));
        assert_eq!(hours_between(make_time(0, 0), make_time(0, 0)), dec("0"));
    }

    #[test]
    fn test_same_day_span() {
        assert_eq!(hours_between(make_time(8, 0), make_time(10, 30)), dec("2.5"));
        assert_eq!(hours_between(make_time(6, 0), make_time(14, 0)), dec("8"));
    }

    #[test]
    fn test_overnight_span() {
        assert_eq!(hours_between(make_time(22, 0), make_time(2, 0)), dec("4"));
        assert_eq!(hours_between(make_time(22, 0), make_time(7, 0)), dec("9"));
    }

    #[test]
    fn test_span_ending_at_midnight() {
        assert_eq!(hours_between(make_time(22, 0), make_time(0, 0)), dec("2"));
    }

    #[test]
    fn test_span_starting_at_midnight() {
        assert_eq!(hours_between(make_time(0, 0), make_time(7, 0)), dec("7"));
    }

    #[test]
    fn test_one_minute_spans() {
        // 1 minute = 0.0166... hours, rounded to 2 decimal places
        assert_eq!(hours_between(make_time(9, 0), make_time(9, 1)), dec("0.02"));
        // 23h59m just misses a full day
        assert_eq!(
            hours_between(make_time(9, 1), make_time(9, 0)),
            dec("23.98")
        );
    }

    #[test]
    fn test_result_rounded_to_two_decimals() {
        // 50 minutes = 0.8333... hours
        assert_eq!(hours_between(make_time(9, 0), make_time(9, 50)), dec("0.83"));
        // 100 minutes = 1.6666... hours
        assert_eq!(
            hours_between(make_time(9, 0), make_time(10, 40)),
            dec("1.67")
        );
    }

    // ==========================================================================
    // positive_hours_between
    // ==========================================================================

    #[test]
    fn test_positive_span_ok() {
        assert_eq!(
            positive_hours_between(make_time(8, 0), make_time(10, 0)).unwrap(),
            dec("2")
        );
    }

    #[test]
    fn test_zero_span_is_invalid_range() {
        let result = positive_hours_between(make_time(8, 0), make_time(8, 0));
        match result.unwrap_err() {
            EngineError::InvalidTimeRange { start, end } => {
                assert_eq!(start, make_time(8, 0));
                assert_eq!(end, make_time(8, 0));
            }
            other => panic!("Expected InvalidTimeRange, got {:?}", other),
        }
    }
}
