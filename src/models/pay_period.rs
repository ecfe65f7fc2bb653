//! Pay period model.
//!
//! This module contains the [`PayPeriod`] and [`PayFrequency`] types that
//! define the calculation window for a payroll run. The frequency
//! determines the periods-per-year figure used to annualize gross pay for
//! bracket lookups and to de-annualize annual amounts back to a single
//! period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard annual hours for a full-time salaried employee (40 h × 52 wk).
pub const STANDARD_ANNUAL_HOURS: Decimal = Decimal::from_parts(2080, 0, 0, false, 0);

/// How often employees are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// 52 pay periods per year.
    Weekly,
    /// 26 pay periods per year.
    BiWeekly,
    /// 24 pay periods per year (twice a month).
    SemiMonthly,
    /// 12 pay periods per year.
    Monthly,
}

impl PayFrequency {
    /// Returns the number of pay periods in a year for this frequency.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::BiWeekly.periods_per_year(), Decimal::from(26));
    /// ```
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => Decimal::from(52),
            PayFrequency::BiWeekly => Decimal::from(26),
            PayFrequency::SemiMonthly => Decimal::from(24),
            PayFrequency::Monthly => Decimal::from(12),
        }
    }

    /// Returns the number of pay periods in a month-equivalent, used to
    /// spread monthly benefit premiums across periods.
    pub fn periods_per_month(&self) -> Decimal {
        self.periods_per_year() / Decimal::from(12)
    }

    /// Returns the standard full-time hours for one period of this
    /// frequency (2080 annual hours spread evenly).
    pub fn standard_period_hours(&self) -> Decimal {
        STANDARD_ANNUAL_HOURS / self.periods_per_year()
    }
}

/// A pay period with its date range and frequency.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, PayFrequency};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
///     frequency: PayFrequency::BiWeekly,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The pay frequency the period belongs to.
    pub frequency: PayFrequency,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_biweekly_period() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            frequency: PayFrequency::BiWeekly,
        }
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), dec("52"));
        assert_eq!(PayFrequency::BiWeekly.periods_per_year(), dec("26"));
        assert_eq!(PayFrequency::SemiMonthly.periods_per_year(), dec("24"));
        assert_eq!(PayFrequency::Monthly.periods_per_year(), dec("12"));
    }

    #[test]
    fn test_periods_per_month() {
        assert_eq!(PayFrequency::Monthly.periods_per_month(), dec("1"));
        assert_eq!(PayFrequency::SemiMonthly.periods_per_month(), dec("2"));
        // 26 / 12 is not a whole number of periods per month
        assert_eq!(
            PayFrequency::BiWeekly.periods_per_month() * dec("12"),
            dec("26")
        );
    }

    #[test]
    fn test_standard_period_hours() {
        assert_eq!(PayFrequency::Weekly.standard_period_hours(), dec("40"));
        assert_eq!(PayFrequency::BiWeekly.standard_period_hours(), dec("80"));
        // 2080 / 24 = 86.66..; verify round trip instead of the repeating digits
        assert_eq!(
            PayFrequency::SemiMonthly.standard_period_hours() * dec("24"),
            STANDARD_ANNUAL_HOURS
        );
    }

    #[test]
    fn test_contains_date_inclusive_bounds() {
        let period = create_biweekly_period();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()));
    }

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&PayFrequency::BiWeekly).unwrap(),
            "\"bi_weekly\""
        );
        assert_eq!(
            serde_json::to_string(&PayFrequency::SemiMonthly).unwrap(),
            "\"semi_monthly\""
        );
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "start_date": "2025-06-02",
            "end_date": "2025-06-15",
            "frequency": "bi_weekly"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, create_biweekly_period());
    }
}
