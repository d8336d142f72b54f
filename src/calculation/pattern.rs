//! Shift pattern parsing and per-day resolution.
//!
//! A pattern is written as newline-separated, comma-delimited rows of
//! `(day_of_week, name, start, end)`. The ordered list of parsed rows defines
//! the cycle phases `0..L-1`; resolution maps any date inside the cycle
//! bounds onto a phase, with per-date overrides winning unconditionally.

use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

use crate::models::{
    ResolvedShift, ShiftCycle, ShiftOverride, ShiftSlot, ShiftSource, UNNAMED_SHIFT,
};

/// Parses a textual cyclic pattern into an ordered list of shift slots.
///
/// Splits on newlines, trims, drops blank lines, and splits each remaining
/// line on commas into `(day_of_week, name, start, end)`. A missing or empty
/// name becomes the [`UNNAMED_SHIFT`] sentinel; empty or unparseable times
/// become `None`. Row order is preserved and defines the cycle phase.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::parse_pattern;
/// use roster_engine::models::UNNAMED_SHIFT;
///
/// let pattern = parse_pattern("Monday,Morning,06:00,14:00\n\nTuesday,Rest,,\nWednesday");
/// assert_eq!(pattern.len(), 3);
/// assert_eq!(pattern[0].name, "Morning");
/// assert!(pattern[1].is_rest());
/// assert_eq!(pattern[2].name, UNNAMED_SHIFT);
/// ```
pub fn parse_pattern(text: &str) -> Vec<ShiftSlot> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> ShiftSlot {
    let mut fields = line.split(',').map(str::trim);

    let day_of_week = fields.next().unwrap_or_default().to_string();
    let name = match fields.next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNNAMED_SHIFT.to_string(),
    };
    let start = fields.next().and_then(parse_lenient_time);
    let end = fields.next().and_then(parse_lenient_time);

    ShiftSlot {
        day_of_week,
        name,
        start,
        end,
    }
}

fn parse_lenient_time(field: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(field, "%H:%M").ok()
}

/// Resolves the effective shift for a calendar day.
///
/// Resolution order:
/// 1. A [`ShiftOverride`] keyed by `date` wins unconditionally, including
///    over dates outside the cycle bounds.
/// 2. If the cycle has no start date, `date` precedes it, or `date` is past a
///    configured end date, no shift applies.
/// 3. Otherwise the date's offset from the cycle start selects
///    `pattern[offset % pattern.len()]`. An empty pattern resolves nothing.
///
/// For all `k >= 0` and phases `i`, `start + k*L + i` resolves to
/// `pattern[i]`, absent overrides.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{parse_pattern, resolve_shift};
/// use roster_engine::models::ShiftCycle;
/// use chrono::NaiveDate;
/// use std::collections::HashMap;
///
/// let pattern = parse_pattern("Monday,Morning,06:00,14:00\nTuesday,Rest,,");
/// let cycle = ShiftCycle {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6), // a Monday
///     end_date: None,
/// };
/// let overrides = HashMap::new();
///
/// let tuesday = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
/// let shift = resolve_shift(tuesday, &cycle, &pattern, &overrides).unwrap();
/// assert!(shift.is_rest());
/// ```
pub fn resolve_shift(
    date: NaiveDate,
    cycle: &ShiftCycle,
    pattern: &[ShiftSlot],
    overrides: &HashMap<NaiveDate, ShiftOverride>,
) -> Option<ResolvedShift> {
    if let Some(o) = overrides.get(&date) {
        return Some(ResolvedShift {
            name: o.name.clone(),
            start: o.start,
            end: o.end,
            source: ShiftSource::Override,
        });
    }

    if !cycle.contains(date) || pattern.is_empty() {
        return None;
    }

    // contains() guarantees a start date on or before `date`
    let start = cycle.start_date?;
    let offset = (date - start).num_days() as usize;
    let slot = &pattern[offset % pattern.len()];

    Some(ResolvedShift {
        name: slot.name.clone(),
        start: slot.start,
        end: slot.end,
        source: ShiftSource::Pattern,
    })
}
