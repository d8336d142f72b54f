//! Holiday expansion and splitting.
//!
//! A holiday entry is stored as a start date plus a day count. This module
//! expands that record into the individual calendar days it occupies, and
//! implements the split-on-delete operation that excises a single day from a
//! multi-day holiday.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::HolidayEntry;

/// Expands a holiday entry into the calendar days it occupies.
///
/// Returns exactly `entry.days` consecutive dates starting at `entry.date`.
/// Used to mark calendar cells as holiday-occupied and to exclude those days
/// from shift-hour accumulation in the monthly payroll.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::expand_holiday_days;
/// use roster_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let entry = HolidayEntry {
///     id: Uuid::new_v4(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     days: 3,
///     notes: String::new(),
/// };
///
/// let days = expand_holiday_days(&entry);
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
/// assert_eq!(days[2], NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
/// ```
pub fn expand_holiday_days(entry: &HolidayEntry) -> Vec<NaiveDate> {
    entry.date.iter_days().take(entry.days as usize).collect()
}

/// Excises one day from a holiday entry, returning the replacement entries.
///
/// The caller replaces the original entry with whatever is returned:
/// - removing the first day keeps one entry starting the next day;
/// - removing the last day keeps one entry with the start unchanged;
/// - removing an interior day yields a "before" and an "after" segment;
/// - removing the only day of a 1-day holiday yields nothing (deletion).
///
/// A `day` outside the holiday leaves the entry unchanged. Replacement
/// segments receive fresh ids and carry the original notes.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::split_holiday_at_day;
/// use roster_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let entry = HolidayEntry {
///     id: Uuid::new_v4(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     days: 5,
///     notes: String::new(),
/// };
///
/// // excise 2025-06-04 (the middle day)
/// let segments = split_holiday_at_day(&entry, NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].days, 2);
/// assert_eq!(segments[1].date, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
/// assert_eq!(segments[1].days, 2);
/// ```
pub fn split_holiday_at_day(entry: &HolidayEntry, day: NaiveDate) -> Vec<HolidayEntry> {
    let offset = (day - entry.date).num_days();
    if offset < 0 || offset >= i64::from(entry.days) {
        return vec![entry.clone()];
    }

    let before_days = offset;
    let after_days = i64::from(entry.days) - offset - 1;
    let mut segments = Vec::new();

    if before_days > 0 {
        segments.push(HolidayEntry {
            id: Uuid::new_v4(),
            date: entry.date,
            days: before_days as u32,
            notes: entry.notes.clone(),
        });
    }

    if after_days > 0 {
        let Some(after_start) = day.succ_opt() else {
            return segments;
        };
        segments.push(HolidayEntry {
            id: Uuid::new_v4(),
            date: after_start,
            days: after_days as u32,
            notes: entry.notes.clone(),
        });
    }

    segments
}
