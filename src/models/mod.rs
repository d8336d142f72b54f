//! Core data models for the shift and compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod entry;
mod rates;
mod shift;

pub use breakdown::{PayComponent, PayrollBreakdown};
pub use entry::{
    AppointmentEntry, Entry, HolidayEntry, OnCallEntry, OnCallType, OvertimeDestination,
    OvertimeEntry, PermitEntry, ProjectEntry, TimeSlot,
};
pub use rates::RateTable;
pub use shift::{
    REST_SHIFT, ResolvedShift, ShiftCycle, ShiftOverride, ShiftSlot, ShiftSource, UNNAMED_SHIFT,
};
