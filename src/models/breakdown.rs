//! Additive breakdown records.
//!
//! Every breakdown in the pipeline (hours, gross pay, taxes, deductions,
//! employer cost) follows the same rule: the total is the explicit sum of
//! the enumerated component fields. No struct carries a derived `total`
//! field, so a total can never participate in its own sum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours for one employee and pay period, classified into buckets.
///
/// The sum of all buckets equals the total attendance hours for the
/// period. Overtime and double-time are derived from daily thresholds
/// (over 8 and over 12 hours in a single day), never from weekly totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBreakdown {
    /// Regular hours (at most 8 per day).
    pub regular: Decimal,
    /// Overtime hours (daily hours between 8 and 12), paid at 1.5×.
    pub overtime: Decimal,
    /// Double-time hours (daily hours above 12), paid at 2×.
    pub double_time: Decimal,
    /// Paid holiday hours.
    pub holiday: Decimal,
    /// Paid sick hours.
    pub sick: Decimal,
    /// Paid vacation hours.
    pub vacation: Decimal,
}

impl HourBreakdown {
    /// Total hours across all buckets.
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime + self.double_time + self.holiday + self.sick + self.vacation
    }
}

/// Gross pay for one employee and pay period, as named components.
///
/// `total()` is always the sum of the nine named components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPayBreakdown {
    /// Base pay for regular hours.
    pub base: Decimal,
    /// Overtime pay (1.5× base rate).
    pub overtime: Decimal,
    /// Double-time pay (2× base rate).
    pub double_time: Decimal,
    /// Holiday pay at the base rate.
    pub holiday: Decimal,
    /// Sick pay at the base rate.
    pub sick: Decimal,
    /// Vacation pay at the base rate.
    pub vacation: Decimal,
    /// Current-period bonus.
    pub bonus: Decimal,
    /// Current-period commission.
    pub commission: Decimal,
    /// Recurring per-period allowances.
    pub allowances: Decimal,
}

impl GrossPayBreakdown {
    /// Total gross pay: the explicit sum of the nine named components.
    pub fn total(&self) -> Decimal {
        self.base
            + self.overtime
            + self.double_time
            + self.holiday
            + self.sick
            + self.vacation
            + self.bonus
            + self.commission
            + self.allowances
    }
}

/// Statutory withholding for one employee and pay period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxWithholding {
    /// Progressive federal-equivalent withholding.
    pub federal: Decimal,
    /// Flat state/local withholding for the employee's jurisdiction.
    pub state: Decimal,
    /// Social-Security-equivalent withholding, wage-base capped against
    /// true year-to-date earnings.
    pub social_security: Decimal,
    /// Medicare-equivalent base withholding.
    pub medicare: Decimal,
    /// Additional-earner Medicare-equivalent surtax.
    pub additional_medicare: Decimal,
    /// State disability insurance withholding.
    pub disability: Decimal,
}

impl TaxWithholding {
    /// Total withholding: the explicit sum of the six named components.
    pub fn total(&self) -> Decimal {
        self.federal
            + self.state
            + self.social_security
            + self.medicare
            + self.additional_medicare
            + self.disability
    }
}

/// Employee-side benefit and retirement deductions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Employee share of the health insurance premium.
    pub health_insurance: Decimal,
    /// Employee share of the dental insurance premium.
    pub dental_insurance: Decimal,
    /// Employee share of the vision insurance premium.
    pub vision_insurance: Decimal,
    /// Retirement contribution (elected rate, capped).
    pub retirement: Decimal,
    /// Employee-paid life insurance premium.
    pub life_insurance: Decimal,
}

impl DeductionBreakdown {
    /// Total deductions: the explicit sum of the five named components.
    pub fn total(&self) -> Decimal {
        self.health_insurance
            + self.dental_insurance
            + self.vision_insurance
            + self.retirement
            + self.life_insurance
    }
}

/// Employer-borne cost for one employee and pay period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCostBreakdown {
    /// Social-Security-equivalent employer match, independently
    /// wage-base capped.
    pub social_security: Decimal,
    /// Medicare-equivalent employer match (base rate only).
    pub medicare: Decimal,
    /// Unemployment-insurance contribution, wage-base capped.
    pub unemployment: Decimal,
    /// Workers-compensation premium (flat rate on gross).
    pub workers_compensation: Decimal,
    /// Employer share of the health insurance premium.
    pub health_insurance: Decimal,
    /// Employer share of the dental insurance premium.
    pub dental_insurance: Decimal,
    /// Employer share of the vision insurance premium.
    pub vision_insurance: Decimal,
    /// Retirement match (employee rate capped at the match cap).
    pub retirement_match: Decimal,
}

impl EmployerCostBreakdown {
    /// Total employer cost: the explicit sum of the eight named components.
    pub fn total(&self) -> Decimal {
        self.social_security
            + self.medicare
            + self.unemployment
            + self.workers_compensation
            + self.health_insurance
            + self.dental_insurance
            + self.vision_insurance
            + self.retirement_match
    }
}
