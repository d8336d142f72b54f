//! Calculation logic for the shift and compensation engine.
//!
//! This module contains all the calculation functions: calendar date and
//! clock time parsing, duration computation with midnight rollover, shift
//! pattern parsing and per-day resolution, holiday expansion and splitting,
//! cross-midnight on-call splitting, and the monthly payroll aggregation.

mod holiday;
mod on_call;
mod pattern;
mod payroll;
mod time;

pub use holiday::{expand_holiday_days, split_holiday_at_day};
pub use on_call::{OnCallWindow, split_on_call_month, split_on_call_window};
pub use pattern::{parse_pattern, resolve_shift};
pub use payroll::compute_monthly_payroll;
pub use time::{
    hours_between, parse_calendar_date, parse_clock_time, positive_hours_between,
};
