//! Duration-bearing entry models.
//!
//! This module defines the closed tagged union of entry kinds the engine
//! aggregates: holidays, permits, overtime, on-call bookings, project hours,
//! and appointments. Behavior that differs by kind is matched exhaustively so
//! the type system enforces completeness.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of overtime hours for differentiated surcharge rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    /// Daytime overtime.
    Day,
    /// Night overtime.
    Night,
    /// Holiday overtime.
    Holiday,
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSlot::Day => write!(f, "Day"),
            TimeSlot::Night => write!(f, "Night"),
            TimeSlot::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Whether overtime hours are paid out or accrued as time off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeDestination {
    /// Hours are paid out in the monthly breakdown.
    Paid,
    /// Hours accrue to the banked-hours balance and never enter pay totals.
    Banked,
}

/// Classification of an on-call booking for flat-rate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnCallType {
    /// On-call duty on a working day.
    Weekday,
    /// On-call duty on a holiday.
    Holiday,
}

impl std::fmt::Display for OnCallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnCallType::Weekday => write!(f, "Weekday"),
            OnCallType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// A multi-day leave record.
///
/// A holiday with `days = N` occupies exactly the `N` consecutive calendar
/// days starting at `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The first day of the holiday.
    pub date: NaiveDate,
    /// The number of consecutive calendar days occupied.
    pub days: u32,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: String,
}

/// An hours-based permit (e.g. medical leave, union leave).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day the permit applies to.
    pub date: NaiveDate,
    /// The permit duration in hours.
    pub hours: Decimal,
    /// The permit category label.
    pub category: String,
    /// The permit start time, when recorded.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The permit end time, when recorded.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: String,
}

/// An overtime booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// The overtime duration in hours.
    pub hours: Decimal,
    /// The surcharge classification of the hours.
    pub time_slot: TimeSlot,
    /// Whether the hours are paid out or banked.
    pub destination: OvertimeDestination,
    /// The overtime start time, when recorded.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The overtime end time, when recorded.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: String,
}

/// A day-bound on-call booking.
///
/// On-call windows spanning midnight are never stored as a single entry; the
/// splitter produces two sibling entries, one per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCallEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day the booking applies to.
    pub date: NaiveDate,
    /// The booking duration in hours.
    pub hours: Decimal,
    /// The flat-rate classification of the booking.
    pub on_call_type: OnCallType,
    /// The booking start time.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The booking end time.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Free-form user notes; split siblings carry a "(Part 1)"/"(Part 2)"
    /// marker here.
    #[serde(default)]
    pub notes: String,
}

/// Project hours billed at the flat project rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day the project hours were worked.
    pub date: NaiveDate,
    /// The project duration in hours.
    pub hours: Decimal,
    /// The project start time, when recorded.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The project end time, when recorded.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: String,
}

/// A personal appointment; tracked on the calendar, never paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day of the appointment.
    pub date: NaiveDate,
    /// The appointment duration in hours.
    pub hours: Decimal,
    /// The appointment start time, when recorded.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The appointment end time, when recorded.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: String,
}

/// A duration-bearing entry of any kind.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Entry, HolidayEntry};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let entry = Entry::Holiday(HolidayEntry {
///     id: Uuid::new_v4(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     days: 3,
///     notes: String::new(),
/// });
/// assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// A multi-day leave record.
    Holiday(HolidayEntry),
    /// An hours-based permit.
    Permit(PermitEntry),
    /// An overtime booking.
    Overtime(OvertimeEntry),
    /// A day-bound on-call booking.
    OnCall(OnCallEntry),
    /// Project hours.
    Project(ProjectEntry),
    /// A personal appointment.
    Appointment(AppointmentEntry),
}

impl Entry {
    /// Returns the entry's unique identifier.
    pub fn id(&self) -> Uuid {
        match self {
            Entry::Holiday(e) => e.id,
            Entry::Permit(e) => e.id,
            Entry::Overtime(e) => e.id,
            Entry::OnCall(e) => e.id,
            Entry::Project(e) => e.id,
            Entry::Appointment(e) => e.id,
        }
    }

    /// Returns the entry's anchor date (the first day for holidays).
    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Holiday(e) => e.date,
            Entry::Permit(e) => e.date,
            Entry::Overtime(e) => e.date,
            Entry::OnCall(e) => e.date,
            Entry::Project(e) => e.date,
            Entry::Appointment(e) => e.date,
        }
    }

    /// Returns the entry's notes.
    pub fn notes(&self) -> &str {
        match self {
            Entry::Holiday(e) => &e.notes,
            Entry::Permit(e) => &e.notes,
            Entry::Overtime(e) => &e.notes,
            Entry::OnCall(e) => &e.notes,
            Entry::Project(e) => &e.notes,
            Entry::Appointment(e) => &e.notes,
        }
    }
}
