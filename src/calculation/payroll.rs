//! Monthly compensation aggregation.
//!
//! This module combines resolved shifts (minus holiday-occupied days) with
//! all duration-bearing entries and the rate table into a monthly pay
//! breakdown. The aggregation is a pure, total function: it never fails and
//! degrades to zero components when data is sparse.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::models::{
    Entry, OnCallType, OvertimeDestination, PayrollBreakdown, RateTable, ShiftCycle,
    ShiftOverride, ShiftSlot, TimeSlot,
};

use super::holiday::expand_holiday_days;
use super::pattern::resolve_shift;

/// Computes the compensation breakdown for a calendar month.
///
/// The aggregation:
/// 1. expands every holiday entry and collects the holiday-occupied days of
///    the month;
/// 2. resolves the shift for each remaining day (override over pattern),
///    counting rest days and accumulating worked hours into `base_pay_hours`
///    and the per-shift-name rollup;
/// 3. prices base hours at the base hourly rate;
/// 4. sums paid overtime per time slot at the slot's surcharge, and banked
///    overtime into the unpaid `banked_hours` balance;
/// 5. sums on-call hours per type at the type's flat rate;
/// 6. sums project hours at the project rate;
/// 7. totals base pay plus the six component pays.
///
/// An unknown or zero-length pattern yields zero base hours without error,
/// and missing rate fields contribute zero pay: a partially-filled profile is
/// an expected steady state, not an error. The function is pure and
/// idempotent over its inputs.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{compute_monthly_payroll, parse_pattern};
/// use roster_engine::models::{RateTable, ShiftCycle};
/// use chrono::NaiveDate;
/// use std::collections::HashMap;
///
/// let pattern = parse_pattern("Monday,Morning,06:00,14:00\nTuesday,Rest,,");
/// let cycle = ShiftCycle {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
///     end_date: None,
/// };
///
/// let breakdown =
///     compute_monthly_payroll(1, 2025, &[], &cycle, &pattern, &HashMap::new(), &RateTable::default());
/// assert_eq!(breakdown.total, breakdown.components_total());
/// ```
pub fn compute_monthly_payroll(
    month: u32,
    year: i32,
    entries: &[Entry],
    cycle: &ShiftCycle,
    pattern: &[ShiftSlot],
    overrides: &HashMap<NaiveDate, ShiftOverride>,
    rates: &RateTable,
) -> PayrollBreakdown {
    debug!(month, year, entries = entries.len(), "computing monthly payroll");

    let mut breakdown = PayrollBreakdown::empty(month, year);

    // Step 1: holiday-occupied days of the month
    let holiday_days: HashSet<NaiveDate> = entries
        .iter()
        .filter_map(|entry| match entry {
            Entry::Holiday(h) => Some(h),
            _ => None,
        })
        .flat_map(expand_holiday_days)
        .filter(|day| in_month(*day, month, year))
        .collect();

    // Step 2: resolved shift hours for the remaining days
    for day in month_days(month, year) {
        if holiday_days.contains(&day) {
            continue;
        }
        let Some(shift) = resolve_shift(day, cycle, pattern, overrides) else {
            continue;
        };
        if shift.is_rest() {
            breakdown.rest_days += 1;
            continue;
        }
        let hours = shift.worked_hours();
        if hours > Decimal::ZERO {
            breakdown.base_pay_hours += hours;
            *breakdown
                .shift_summary
                .entry(shift.name)
                .or_insert(Decimal::ZERO) += hours;
        }
    }

    // Step 3: base pay
    breakdown.base_pay = breakdown.base_pay_hours * rates.base_hourly;

    // Steps 4-6: duration-bearing entries of the month
    for entry in entries.iter().filter(|e| in_month(e.date(), month, year)) {
        match entry {
            Entry::Overtime(o) => match o.destination {
                OvertimeDestination::Banked => breakdown.banked_hours += o.hours,
                OvertimeDestination::Paid => {
                    let (component, surcharge_pct) = match o.time_slot {
                        TimeSlot::Day => (&mut breakdown.overtime_day, rates.overtime_day_pct),
                        TimeSlot::Night => {
                            (&mut breakdown.overtime_night, rates.overtime_night_pct)
                        }
                        TimeSlot::Holiday => {
                            (&mut breakdown.overtime_holiday, rates.overtime_holiday_pct)
                        }
                    };
                    let rate =
                        rates.base_hourly * (Decimal::ONE + surcharge_pct / Decimal::from(100));
                    component.hours += o.hours;
                    component.pay += o.hours * rate;
                }
            },
            Entry::OnCall(c) => {
                let (component, rate) = match c.on_call_type {
                    OnCallType::Weekday => (&mut breakdown.on_call_weekday, rates.on_call_weekday),
                    OnCallType::Holiday => (&mut breakdown.on_call_holiday, rates.on_call_holiday),
                };
                component.hours += c.hours;
                component.pay += c.hours * rate;
            }
            Entry::Project(p) => {
                breakdown.project.hours += p.hours;
                breakdown.project.pay += p.hours * rates.project_hourly;
            }
            // holidays are consumed in step 1; permits and appointments carry
            // no pay
            Entry::Holiday(_) | Entry::Permit(_) | Entry::Appointment(_) => {}
        }
    }

    // Step 7: the total is the literal sum of the components
    breakdown.total = breakdown.components_total();

    debug!(
        month,
        year,
        base_pay_hours = %breakdown.base_pay_hours,
        total = %breakdown.total,
        "monthly payroll computed"
    );

    breakdown
}

fn in_month(date: NaiveDate, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}

/// All calendar days of the given month, in order. An invalid month yields
/// no days.
fn month_days(month: u32, year: i32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first.iter_days().take_while(|d| d.month() == month).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_pattern;
    use crate::models::{HolidayEntry, OnCallEntry, OvertimeEntry, ProjectEntry};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Morning/Rest alternating from Monday 2025-01-06 (L=2), 8-hour mornings.
    fn simple_setup() -> (ShiftCycle, Vec<ShiftSlot>) {
        let pattern = parse_pattern("Monday,Morning,06:00,14:00\nTuesday,Rest,,");
        let cycle = ShiftCycle {
            start_date: Some(make_date("2025-01-06")),
            end_date: None,
        };
        (cycle, pattern)
    }

    fn simple_rates() -> RateTable {
        RateTable {
            base_hourly: dec("10.00"),
            overtime_day_pct: dec("15"),
            overtime_night_pct: dec("30"),
            overtime_holiday_pct: dec("50"),
            on_call_weekday: dec("2.00"),
            on_call_holiday: dec("4.00"),
            project_hourly: dec("12.00"),
        }
    }

    fn overtime(date: &str, hours: &str, slot: TimeSlot, destination: OvertimeDestination) -> Entry {
        Entry::Overtime(OvertimeEntry {
            id: Uuid::new_v4(),
            date: make_date(date),
            hours: dec(hours),
            time_slot: slot,
            destination,
            start_time: None,
            end_time: None,
            notes: String::new(),
        })
    }

    fn on_call(date: &str, hours: &str, on_call_type: OnCallType) -> Entry {
        Entry::OnCall(OnCallEntry {
            id: Uuid::new_v4(),
            date: make_date(date),
            hours: dec(hours),
            on_call_type,
            start_time: None,
            end_time: None,
            notes: String::new(),
        })
    }

    fn project(date: &str, hours: &str) -> Entry {
        Entry::Project(ProjectEntry {
            id: Uuid::new_v4(),
            date: make_date(date),
            hours: dec(hours),
            start_time: None,
            end_time: None,
            notes: String::new(),
        })
    }

    fn holiday(date: &str, days: u32) -> Entry {
        Entry::Holiday(HolidayEntry {
            id: Uuid::new_v4(),
            date: make_date(date),
            days,
            notes: String::new(),
        })
    }

    // ==========================================================================
    // Base hours from the resolved pattern
    // ==========================================================================

    #[test]
    fn test_base_hours_from_pattern() {
        let (cycle, pattern) = simple_setup();
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &[],
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );

        // cycle runs 2025-01-06..-31: 26 days, alternating Morning/Rest
        // 13 mornings of 8h, 13 rest days
        assert_eq!(breakdown.base_pay_hours, dec("104"));
        assert_eq!(breakdown.base_pay, dec("1040.00"));
        assert_eq!(breakdown.rest_days, 13);
        assert_eq!(breakdown.shift_summary.get("Morning"), Some(&dec("104")));
        assert_eq!(breakdown.total, dec("1040.00"));
    }

    #[test]
    fn test_days_before_cycle_start_contribute_nothing() {
        let (cycle, pattern) = simple_setup();
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &[],
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );
        // Jan 1-5 precede the cycle: only 26 of the 31 days resolve,
        // 13 mornings and 13 rest days
        assert_eq!(breakdown.rest_days, 13);
        assert_eq!(breakdown.base_pay_hours, dec("104"));
    }

    #[test]
    fn test_empty_pattern_yields_zero_base_hours() {
        let (cycle, _) = simple_setup();
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &[],
            &cycle,
            &[],
            &HashMap::new(),
            &simple_rates(),
        );
        assert_eq!(breakdown.base_pay_hours, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_override_replaces_pattern_shift() {
        let (cycle, pattern) = simple_setup();
        let mut overrides = HashMap::new();
        // replace the 2025-01-07 rest day with a 4-hour override shift
        overrides.insert(
            make_date("2025-01-07"),
            ShiftOverride {
                name: "Backfill".to_string(),
                start: chrono::NaiveTime::from_hms_opt(8, 0, 0),
                end: chrono::NaiveTime::from_hms_opt(12, 0, 0),
            },
        );

        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &[],
            &cycle,
            &pattern,
            &overrides,
            &simple_rates(),
        );

        assert_eq!(breakdown.base_pay_hours, dec("108"));
        assert_eq!(breakdown.rest_days, 12);
        assert_eq!(breakdown.shift_summary.get("Backfill"), Some(&dec("4")));
    }

    // ==========================================================================
    // Holiday exclusion
    // ==========================================================================

    #[test]
    fn test_holiday_days_excluded_from_base_hours() {
        let (cycle, pattern) = simple_setup();
        // 2025-01-06 and -08 are Mornings; a 3-day holiday covers 06,07,08
        let entries = vec![holiday("2025-01-06", 3)];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );

        // two mornings and one rest day removed
        assert_eq!(breakdown.base_pay_hours, dec("88"));
        assert_eq!(breakdown.rest_days, 12);
    }

    #[test]
    fn test_holiday_spilling_from_previous_month() {
        let (cycle, pattern) = simple_setup();
        // starts in December, occupies Jan 1-3; those days resolve to nothing
        // anyway (before cycle start), so only the expansion bound matters
        let entries = vec![holiday("2024-12-30", 5)];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );
        assert_eq!(breakdown.base_pay_hours, dec("104"));
    }

    #[test]
    fn test_holiday_overlapping_cycle_days_from_previous_month() {
        let (cycle, pattern) = simple_setup();
        // 7-day holiday starting 2025-01-31 spills into February; within
        // January it only covers the 31st (a Rest day)
        let entries = vec![holiday("2025-01-31", 7)];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );
        assert_eq!(breakdown.base_pay_hours, dec("104"));
        assert_eq!(breakdown.rest_days, 12);
    }

    // ==========================================================================
    // Overtime
    // ==========================================================================

    #[test]
    fn test_paid_overtime_by_time_slot() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![
            overtime("2025-01-09", "2", TimeSlot::Day, OvertimeDestination::Paid),
            overtime("2025-01-10", "3", TimeSlot::Night, OvertimeDestination::Paid),
            overtime("2025-01-11", "1", TimeSlot::Holiday, OvertimeDestination::Paid),
        ];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );

        // day: 2h * 10.00 * 1.15 = 23.00
        assert_eq!(breakdown.overtime_day.hours, dec("2"));
        assert_eq!(breakdown.overtime_day.pay, dec("23.0000"));
        // night: 3h * 10.00 * 1.30 = 39.00
        assert_eq!(breakdown.overtime_night.pay, dec("39.0000"));
        // holiday: 1h * 10.00 * 1.50 = 15.00
        assert_eq!(breakdown.overtime_holiday.pay, dec("15.0000"));
        assert_eq!(breakdown.total, breakdown.components_total());
    }

    #[test]
    fn test_banked_overtime_never_enters_total() {
        let (cycle, pattern) = simple_setup();
        let paid = vec![overtime(
            "2025-01-09",
            "2",
            TimeSlot::Day,
            OvertimeDestination::Paid,
        )];
        let banked = vec![overtime(
            "2025-01-09",
            "2",
            TimeSlot::Day,
            OvertimeDestination::Banked,
        )];
        let rates = simple_rates();

        let with_paid =
            compute_monthly_payroll(1, 2025, &paid, &cycle, &pattern, &HashMap::new(), &rates);
        let with_banked =
            compute_monthly_payroll(1, 2025, &banked, &cycle, &pattern, &HashMap::new(), &rates);

        // toggling paid -> banked removes exactly that entry's pay and moves
        // the hours to the banked balance
        assert_eq!(with_paid.total - with_banked.total, dec("23.0000"));
        assert_eq!(with_banked.banked_hours, dec("2"));
        assert_eq!(with_paid.banked_hours, Decimal::ZERO);
        assert_eq!(with_banked.overtime_day.hours, Decimal::ZERO);
    }

    #[test]
    fn test_overtime_outside_month_ignored() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![
            overtime("2024-12-31", "2", TimeSlot::Day, OvertimeDestination::Paid),
            overtime("2025-02-01", "2", TimeSlot::Day, OvertimeDestination::Paid),
        ];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );
        assert_eq!(breakdown.overtime_day.hours, Decimal::ZERO);
    }

    // ==========================================================================
    // On-call and project
    // ==========================================================================

    #[test]
    fn test_on_call_by_type_at_flat_rates() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![
            on_call("2025-01-09", "2", OnCallType::Weekday),
            on_call("2025-01-10", "7", OnCallType::Weekday),
            on_call("2025-01-12", "9", OnCallType::Holiday),
        ];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );

        assert_eq!(breakdown.on_call_weekday.hours, dec("9"));
        assert_eq!(breakdown.on_call_weekday.pay, dec("18.00"));
        assert_eq!(breakdown.on_call_holiday.hours, dec("9"));
        assert_eq!(breakdown.on_call_holiday.pay, dec("36.00"));
    }

    #[test]
    fn test_project_hours_at_project_rate() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![project("2025-01-09", "4"), project("2025-01-16", "3.5")];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );

        assert_eq!(breakdown.project.hours, dec("7.5"));
        assert_eq!(breakdown.project.pay, dec("90.000"));
    }

    // ==========================================================================
    // Totals and degradation
    // ==========================================================================

    #[test]
    fn test_total_is_sum_of_components() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![
            holiday("2025-01-06", 2),
            overtime("2025-01-09", "2", TimeSlot::Day, OvertimeDestination::Paid),
            overtime("2025-01-10", "1", TimeSlot::Night, OvertimeDestination::Banked),
            on_call("2025-01-11", "2", OnCallType::Weekday),
            on_call("2025-01-12", "7", OnCallType::Holiday),
            project("2025-01-13", "4"),
        ];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );

        assert_eq!(breakdown.total, breakdown.components_total());
        assert_eq!(breakdown.banked_hours, dec("1"));
    }

    #[test]
    fn test_all_zero_rates_degrade_to_zero_pay() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![
            overtime("2025-01-09", "2", TimeSlot::Day, OvertimeDestination::Paid),
            on_call("2025-01-11", "2", OnCallType::Weekday),
            project("2025-01-13", "4"),
        ];
        let breakdown = compute_monthly_payroll(
            1,
            2025,
            &entries,
            &cycle,
            &pattern,
            &HashMap::new(),
            &RateTable::default(),
        );

        // hours still accumulate; pay is zero throughout
        assert_eq!(breakdown.base_pay_hours, dec("104"));
        assert_eq!(breakdown.overtime_day.hours, dec("2"));
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_no_data_at_all_yields_empty_breakdown() {
        let breakdown = compute_monthly_payroll(
            6,
            2025,
            &[],
            &ShiftCycle::default(),
            &[],
            &HashMap::new(),
            &RateTable::default(),
        );
        assert_eq!(breakdown, PayrollBreakdown::empty(6, 2025));
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let (cycle, pattern) = simple_setup();
        let entries = vec![
            holiday("2025-01-06", 2),
            overtime("2025-01-09", "2", TimeSlot::Day, OvertimeDestination::Paid),
        ];
        let rates = simple_rates();

        let first =
            compute_monthly_payroll(1, 2025, &entries, &cycle, &pattern, &HashMap::new(), &rates);
        let second =
            compute_monthly_payroll(1, 2025, &entries, &cycle, &pattern, &HashMap::new(), &rates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_month_yields_empty_breakdown() {
        let (cycle, pattern) = simple_setup();
        let breakdown = compute_monthly_payroll(
            13,
            2025,
            &[],
            &cycle,
            &pattern,
            &HashMap::new(),
            &simple_rates(),
        );
        assert_eq!(breakdown.base_pay_hours, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::ZERO);
    }
}
