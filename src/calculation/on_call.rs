//! Cross-midnight on-call splitting.
//!
//! An on-call booking typically covers a late-night window such as
//! 22:00-07:00. It is never stored as a single cross-midnight record: this
//! module converts the window into two independent, day-bound entries split
//! at midnight, whose combined duration equals the original window.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{OnCallEntry, OnCallType};

use super::time::hours_between;

/// An on-call duty window, from an evening start to a next-morning end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnCallWindow {
    /// The window start, on the booking day.
    pub start: NaiveTime,
    /// The window end, on the following day.
    pub end: NaiveTime,
}

impl Default for OnCallWindow {
    /// The customary 22:00-07:00 standby window.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(22, 0, 0).expect("valid literal clock time"),
            end: NaiveTime::from_hms_opt(7, 0, 0).expect("valid literal clock time"),
        }
    }
}

/// Splits an on-call window into two day-bound entries at midnight.
///
/// Part 1 covers `window.start` to midnight on the booking day; part 2 covers
/// midnight to `window.end` on the following day. The midnight boundary is
/// `00:00` on both sides, so `part1.hours + part2.hours` equals the duration
/// of the original overnight window. The parts share the on-call type and are
/// marked "(Part 1)"/"(Part 2)" in their notes, but are otherwise independent,
/// separately deletable entries.
///
/// A window that does not cross midnight (`start <= end`) fails with
/// [`EngineError::InvalidTimeRange`]: the split is only defined for overnight
/// windows.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{hours_between, split_on_call_window, OnCallWindow};
/// use roster_engine::models::OnCallType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let window = OnCallWindow::default(); // 22:00-07:00
///
/// let (part1, part2) = split_on_call_window(date, OnCallType::Weekday, window, "").unwrap();
/// assert_eq!(part1.hours, Decimal::from(2));
/// assert_eq!(part2.hours, Decimal::from(7));
/// assert_eq!(part2.date, NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
/// assert_eq!(part1.hours + part2.hours, hours_between(window.start, window.end));
/// ```
pub fn split_on_call_window(
    date: NaiveDate,
    on_call_type: OnCallType,
    window: OnCallWindow,
    notes: &str,
) -> EngineResult<(OnCallEntry, OnCallEntry)> {
    if window.start <= window.end {
        return Err(EngineError::InvalidTimeRange {
            start: window.start,
            end: window.end,
        });
    }

    let next_day = date.succ_opt().ok_or_else(|| EngineError::InvalidDate {
        input: date.to_string(),
    })?;
    let midnight = NaiveTime::MIN;

    let part1 = OnCallEntry {
        id: Uuid::new_v4(),
        date,
        hours: hours_between(window.start, midnight),
        on_call_type,
        start_time: Some(window.start),
        end_time: Some(midnight),
        notes: tag_notes(notes, 1),
    };

    let part2 = OnCallEntry {
        id: Uuid::new_v4(),
        date: next_day,
        hours: hours_between(midnight, window.end),
        on_call_type,
        start_time: Some(midnight),
        end_time: Some(window.end),
        notes: tag_notes(notes, 2),
    };

    Ok((part1, part2))
}

/// Splits one on-call window per day of a month, for bulk roster import.
///
/// Each entry of `days` is a day-of-month number anchored to `month`/`year`;
/// a number with no such day in the month fails with
/// [`EngineError::InvalidDate`]. Every produced pair follows the same
/// midnight convention as [`split_on_call_window`].
pub fn split_on_call_month(
    days: &[u32],
    month: u32,
    year: i32,
    on_call_type: OnCallType,
    window: OnCallWindow,
) -> EngineResult<Vec<(OnCallEntry, OnCallEntry)>> {
    days.iter()
        .map(|&day| {
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                EngineError::InvalidDate {
                    input: format!("{year:04}-{month:02}-{day:02}"),
                }
            })?;
            split_on_call_window(date, on_call_type, window, "")
        })
        .collect()
}

fn tag_notes(notes: &str, part: u8) -> String {
    if notes.is_empty() {
        format!("(Part {part})")
    } else {
        format!("{notes} (Part {part})")
    }
}
