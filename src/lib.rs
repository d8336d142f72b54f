//! Shift Cycle Resolution & Compensation Calculation Engine
//!
//! This crate provides the deterministic core of a personal time-and-attendance
//! tracker for shift workers: resolving which repeating shift applies to any
//! calendar day, computing elapsed hours across midnight, splitting cross-midnight
//! on-call bookings into day-bound entries, expanding multi-day holidays, and
//! aggregating everything against a tiered rate table into a monthly pay breakdown.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod profile;
