//! The full in-memory profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::{compute_monthly_payroll, parse_pattern};
use crate::models::{Entry, PayrollBreakdown, RateTable, ShiftCycle, ShiftOverride, ShiftSlot};

/// Everything the engine needs about one user: the shift pattern text, cycle
/// bounds, per-date overrides, duration entries, and the rate table.
///
/// Every field defaults, so an empty file loads as an empty profile; a
/// partially-filled profile is an expected steady state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    /// The cyclic shift pattern as entered by the user, one comma-delimited
    /// row per line.
    #[serde(default)]
    pub pattern_text: String,
    /// The bounds within which the pattern repeats.
    #[serde(default)]
    pub cycle: ShiftCycle,
    /// One-off shift replacements, keyed by date.
    #[serde(default)]
    pub overrides: HashMap<NaiveDate, ShiftOverride>,
    /// All duration-bearing entries.
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// The pay settings.
    #[serde(default)]
    pub rates: RateTable,
}

impl ProfileState {
    /// Parses the stored pattern text into its ordered slot list.
    pub fn pattern(&self) -> Vec<ShiftSlot> {
        parse_pattern(&self.pattern_text)
    }

    /// Computes the compensation breakdown for a month of this profile.
    ///
    /// Convenience over [`compute_monthly_payroll`] with the profile's own
    /// pattern, cycle, overrides, entries, and rates.
    pub fn monthly_payroll(&self, month: u32, year: i32) -> PayrollBreakdown {
        compute_monthly_payroll(
            month,
            year,
            &self.entries,
            &self.cycle,
            &self.pattern(),
            &self.overrides,
            &self.rates,
        )
    }
}
