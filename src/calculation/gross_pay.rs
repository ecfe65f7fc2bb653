//! Gross pay calculation.
//!
//! Turns a classified [`HourBreakdown`] and a [`CompensationProfile`]
//! into a [`GrossPayBreakdown`]. Salaried profiles derive their hourly
//! rate from the standard 2080 annual hours; overtime and double-time
//! multiply the base rate by 1.5× and 2×. The total is always the
//! explicit sum of the nine named components.

use rust_decimal::Decimal;

use crate::models::{CompensationProfile, GrossPayBreakdown, HourBreakdown};

/// Overtime pay multiplier on the base hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Double-time pay multiplier on the base hourly rate.
pub const DOUBLE_TIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Calculates the gross pay breakdown for one employee and period.
///
/// Holiday, sick, and vacation hours are paid at the base rate; bonus,
/// commission, and allowance amounts pass through from the profile.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::models::{CompensationProfile, PayBasis, FilingStatus, HourBreakdown};
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     employee_id: "emp_001".to_string(),
///     pay_basis: PayBasis::Hourly { hourly_rate: Decimal::from(20) },
///     jurisdiction: "CA".to_string(),
///     filing_status: FilingStatus::Single,
///     ytd_taxable_earnings: Decimal::ZERO,
///     period_allowances: Decimal::ZERO,
///     bonus: Decimal::ZERO,
///     commission: Decimal::ZERO,
/// };
/// let hours = HourBreakdown {
///     regular: Decimal::from(8),
///     overtime: Decimal::from(2),
///     ..Default::default()
/// };
///
/// let gross = calculate_gross_pay(&hours, &profile);
/// assert_eq!(gross.base, Decimal::from(160));
/// assert_eq!(gross.overtime, Decimal::from(60)); // 2h at 1.5 x 20
/// assert_eq!(gross.total(), Decimal::from(220));
/// ```
pub fn calculate_gross_pay(
    hours: &HourBreakdown,
    profile: &CompensationProfile,
) -> GrossPayBreakdown {
    let rate = profile.base_hourly_rate();

    GrossPayBreakdown {
        base: hours.regular * rate,
        overtime: hours.overtime * rate * OVERTIME_MULTIPLIER,
        double_time: hours.double_time * rate * DOUBLE_TIME_MULTIPLIER,
        holiday: hours.holiday * rate,
        sick: hours.sick * rate,
        vacation: hours.vacation * rate,
        bonus: profile.bonus,
        commission: profile.commission,
        allowances: profile.period_allowances,
    }
}
