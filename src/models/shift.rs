//! Shift slot, override, and cycle models.
//!
//! This module defines the types that describe a repeating shift pattern:
//! the individual pattern rows, per-date overrides, the cycle bounds the
//! pattern repeats within, and the unified result of resolving a date.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::hours_between;

/// Sentinel name used for pattern rows that omit the shift name.
pub const UNNAMED_SHIFT: &str = "N/D";

/// Name of the rest-day shift. Rest days carry no start/end times and are
/// counted separately from worked shifts in the monthly breakdown.
pub const REST_SHIFT: &str = "Rest";

/// One row of a parsed shift pattern.
///
/// A pattern is an ordered list of slots; the position of a slot in that list
/// defines its phase within the repeating cycle. Rest/Empty slots carry no
/// start/end times.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftSlot;
/// use chrono::NaiveTime;
///
/// let slot = ShiftSlot {
///     day_of_week: "Monday".to_string(),
///     name: "Morning".to_string(),
///     start: NaiveTime::from_hms_opt(6, 0, 0),
///     end: NaiveTime::from_hms_opt(14, 0, 0),
/// };
/// assert!(slot.has_times());
/// assert!(!slot.is_rest());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// The day-of-week label carried by the pattern row (e.g. "Monday").
    ///
    /// Labels stay meaningful only when the cycle starts on a Monday; see
    /// [`ShiftCycle::is_monday_aligned`].
    pub day_of_week: String,
    /// The shift name (e.g. "Morning", "Night", "Rest"); [`UNNAMED_SHIFT`]
    /// when the pattern row omitted it.
    pub name: String,
    /// The shift start time, if the slot represents worked hours.
    pub start: Option<NaiveTime>,
    /// The shift end time, if the slot represents worked hours.
    pub end: Option<NaiveTime>,
}

impl ShiftSlot {
    /// Returns `true` if this slot is a rest day.
    pub fn is_rest(&self) -> bool {
        self.name == REST_SHIFT
    }

    /// Returns `true` if this slot carries both a start and an end time.
    pub fn has_times(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// A one-off replacement of the pattern-derived shift for a single date.
///
/// Overrides are keyed by date in the profile and always take precedence over
/// the pattern, including for dates outside the cycle bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOverride {
    /// The replacement shift name.
    pub name: String,
    /// The replacement start time, if the shift has worked hours.
    pub start: Option<NaiveTime>,
    /// The replacement end time, if the shift has worked hours.
    pub end: Option<NaiveTime>,
}

/// The bounds within which a shift pattern repeats.
///
/// The pattern repeats with period `L = pattern.len()` starting at
/// `start_date`; if `end_date` is set, no shift is resolved beyond it.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftCycle;
/// use chrono::NaiveDate;
///
/// let cycle = ShiftCycle {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6), // a Monday
///     end_date: None,
/// };
/// assert!(cycle.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
/// assert!(cycle.is_monday_aligned());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCycle {
    /// The first day the pattern applies to. `None` means no cycle is
    /// configured and no shift resolves from the pattern.
    pub start_date: Option<NaiveDate>,
    /// The last day the pattern applies to, inclusive. `None` means the cycle
    /// is open-ended.
    pub end_date: Option<NaiveDate>,
}

impl ShiftCycle {
    /// Checks whether a date falls within the cycle bounds.
    ///
    /// Returns `false` when no start date is configured. The end bound is
    /// inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let Some(start) = self.start_date else {
            return false;
        };
        date >= start && self.end_date.is_none_or(|end| date <= end)
    }

    /// Returns `true` when the cycle starts on a Monday (or has no start).
    ///
    /// Day-of-week labels in the pattern rows stay meaningful only for a
    /// Monday start; callers may surface a warning otherwise. A non-Monday
    /// start is not an error.
    pub fn is_monday_aligned(&self) -> bool {
        self.start_date
            .is_none_or(|start| start.weekday() == Weekday::Mon)
    }
}

/// Where a resolved shift came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSource {
    /// The shift was derived from the cyclic pattern.
    Pattern,
    /// The shift was a per-date override.
    Override,
}

/// The effective shift for a calendar day, from either the pattern or an
/// override.
///
/// This is the unified output of shift resolution: a calendar renderer can
/// display it directly, and the payroll aggregation reads its times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedShift {
    /// The shift name.
    pub name: String,
    /// The shift start time, if the shift has worked hours.
    pub start: Option<NaiveTime>,
    /// The shift end time, if the shift has worked hours.
    pub end: Option<NaiveTime>,
    /// Whether the shift came from the pattern or an override.
    pub source: ShiftSource,
}

impl ResolvedShift {
    /// Returns `true` if this shift is a rest day.
    pub fn is_rest(&self) -> bool {
        self.name == REST_SHIFT
    }

    /// Returns the worked hours for this shift, rounded to 2 decimal places.
    ///
    /// Shifts without both a start and an end time (rest days, empty slots,
    /// half-filled pattern rows) contribute zero hours. An end time earlier
    /// than the start time means the shift runs past midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::{ResolvedShift, ShiftSource};
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let night = ResolvedShift {
    ///     name: "Night".to_string(),
    ///     start: NaiveTime::from_hms_opt(22, 0, 0),
    ///     end: NaiveTime::from_hms_opt(6, 0, 0),
    ///     source: ShiftSource::Pattern,
    /// };
    /// assert_eq!(night.worked_hours(), Decimal::new(80, 1)); // 8.0
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        match (self.start, self.end) {
            (Some(start), Some(end)) => hours_between(start, end),
            _ => Decimal::ZERO,
        }
    }
}
