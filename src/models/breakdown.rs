//! Monthly payroll breakdown models.
//!
//! This module contains the [`PayrollBreakdown`] type produced by the monthly
//! compensation aggregation, plus the [`PayComponent`] hour/pay pairs it is
//! built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An hours total and the pay it produced, for one breakdown component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Total hours accumulated into this component.
    pub hours: Decimal,
    /// Pay for those hours at the component's rate.
    pub pay: Decimal,
}

/// The monthly compensation breakdown.
///
/// Produced on demand by the payroll aggregation from the current entries and
/// settings; owns no persistent state. The `total` field always equals the
/// literal sum of `base_pay` and the six component pays. Banked overtime
/// hours are tracked separately and never enter `total`.
///
/// # Example
///
/// ```
/// use roster_engine::models::PayrollBreakdown;
///
/// let breakdown = PayrollBreakdown::empty(6, 2025);
/// assert_eq!(breakdown.total, breakdown.components_total());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The calendar month (1-12) this breakdown covers.
    pub month: u32,
    /// The calendar year this breakdown covers.
    pub year: i32,
    /// Total worked hours from resolved shifts, excluding holiday-occupied days.
    pub base_pay_hours: Decimal,
    /// `base_pay_hours` at the base hourly rate.
    pub base_pay: Decimal,
    /// Number of rest days resolved in the month.
    pub rest_days: u32,
    /// Worked hours rolled up per shift name.
    pub shift_summary: BTreeMap<String, Decimal>,
    /// Paid daytime overtime.
    pub overtime_day: PayComponent,
    /// Paid night overtime.
    pub overtime_night: PayComponent,
    /// Paid holiday overtime.
    pub overtime_holiday: PayComponent,
    /// Overtime hours accrued as time off; never paid.
    pub banked_hours: Decimal,
    /// Weekday on-call duty.
    pub on_call_weekday: PayComponent,
    /// Holiday on-call duty.
    pub on_call_holiday: PayComponent,
    /// Project hours at the flat project rate.
    pub project: PayComponent,
    /// The sum of `base_pay` and the six component pays.
    pub total: Decimal,
}

impl PayrollBreakdown {
    /// Creates an all-zero breakdown for the given month.
    pub fn empty(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            base_pay_hours: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            rest_days: 0,
            shift_summary: BTreeMap::new(),
            overtime_day: PayComponent::default(),
            overtime_night: PayComponent::default(),
            overtime_holiday: PayComponent::default(),
            banked_hours: Decimal::ZERO,
            on_call_weekday: PayComponent::default(),
            on_call_holiday: PayComponent::default(),
            project: PayComponent::default(),
            total: Decimal::ZERO,
        }
    }

    /// Recomputes the sum `total` is defined as, from the stored components.
    ///
    /// Useful for asserting the output invariant: for every breakdown the
    /// engine produces, `total == components_total()` exactly.
    pub fn components_total(&self) -> Decimal {
        self.base_pay
            + self.overtime_day.pay
            + self.overtime_night.pay
            + self.overtime_holiday.pay
            + self.on_call_weekday.pay
            + self.on_call_holiday.pay
            + self.project.pay
    }
}
