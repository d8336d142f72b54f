//! Rate table model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The flat numeric pay settings for the compensation calculation.
///
/// Every field defaults to zero so a partially-filled profile degrades to a
/// zero contribution for that component rather than failing.
///
/// # Example
///
/// ```
/// use roster_engine::models::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates: RateTable = serde_json::from_str(r#"{"base_hourly": "12.50"}"#).unwrap();
/// assert_eq!(rates.base_hourly, Decimal::new(1250, 2));
/// assert_eq!(rates.project_hourly, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The base hourly rate applied to pattern/override shift hours.
    #[serde(default)]
    pub base_hourly: Decimal,
    /// Surcharge percentage for daytime overtime (e.g. `15` for +15%).
    #[serde(default)]
    pub overtime_day_pct: Decimal,
    /// Surcharge percentage for night overtime.
    #[serde(default)]
    pub overtime_night_pct: Decimal,
    /// Surcharge percentage for holiday overtime.
    #[serde(default)]
    pub overtime_holiday_pct: Decimal,
    /// Flat hourly rate for weekday on-call duty.
    #[serde(default)]
    pub on_call_weekday: Decimal,
    /// Flat hourly rate for holiday on-call duty.
    #[serde(default)]
    pub on_call_holiday: Decimal,
    /// Flat hourly rate for project hours.
    #[serde(default)]
    pub project_hourly: Decimal,
}
