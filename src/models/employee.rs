//! Compensation profile model and related types.
//!
//! The compensation profile is owned by the employee directory and is
//! read-only to this engine. It carries everything the per-employee
//! pipeline needs besides attendance and benefit elections: pay basis,
//! tax jurisdiction, filing status, and the true year-to-date taxable
//! earnings used for wage-base caps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::pay_period::STANDARD_ANNUAL_HOURS;

/// Tax filing status, used to select the progressive bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single filer.
    Single,
    /// Married filing jointly.
    MarriedJoint,
    /// Married filing separately.
    MarriedSeparate,
    /// Head of household.
    HeadOfHousehold,
}

/// How an employee's base pay is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "basis")]
pub enum PayBasis {
    /// A fixed annual salary; the hourly rate is derived by dividing by
    /// the standard 2080 annual hours.
    Salaried {
        /// The annual salary.
        annual_salary: Decimal,
    },
    /// An hourly wage.
    Hourly {
        /// The hourly rate.
        hourly_rate: Decimal,
    },
}

/// An employee's compensation profile for one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationProfile, PayBasis, FilingStatus};
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     employee_id: "emp_001".to_string(),
///     pay_basis: PayBasis::Salaried { annual_salary: Decimal::from(120_000) },
///     jurisdiction: "CA".to_string(),
///     filing_status: FilingStatus::Single,
///     ytd_taxable_earnings: Decimal::ZERO,
///     period_allowances: Decimal::ZERO,
///     bonus: Decimal::ZERO,
///     commission: Decimal::ZERO,
/// };
/// assert_eq!(profile.base_hourly_rate(), Decimal::from(120_000) / Decimal::from(2080));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's pay basis (salaried or hourly).
    pub pay_basis: PayBasis,
    /// Tax jurisdiction (state code, e.g. "CA"). May be empty, in which
    /// case no state or disability tax is withheld and the run records a
    /// compliance finding.
    pub jurisdiction: String,
    /// Tax filing status.
    pub filing_status: FilingStatus,
    /// Cumulative year-to-date taxable earnings before this pay period.
    /// Updated by the directory after each finalized run; wage-base caps
    /// are computed against this real figure, never approximated from the
    /// current period's annualized gross.
    pub ytd_taxable_earnings: Decimal,
    /// Recurring per-period allowance payments (e.g. phone, vehicle).
    #[serde(default)]
    pub period_allowances: Decimal,
    /// Active bonus amount for the current period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Active commission amount for the current period.
    #[serde(default)]
    pub commission: Decimal,
}

impl CompensationProfile {
    /// Returns the base hourly rate for this profile.
    ///
    /// Salaried profiles divide the annual salary by the standard 2080
    /// annual hours; hourly profiles return their rate directly.
    pub fn base_hourly_rate(&self) -> Decimal {
        match self.pay_basis {
            PayBasis::Salaried { annual_salary } => annual_salary / STANDARD_ANNUAL_HOURS,
            PayBasis::Hourly { hourly_rate } => hourly_rate,
        }
    }

    /// Returns the annualized base salary for this profile.
    ///
    /// Used for life-insurance coverage, which is expressed as a multiple
    /// of annual salary; hourly profiles annualize at 2080 hours.
    pub fn annual_salary_equivalent(&self) -> Decimal {
        match self.pay_basis {
            PayBasis::Salaried { annual_salary } => annual_salary,
            PayBasis::Hourly { hourly_rate } => hourly_rate * STANDARD_ANNUAL_HOURS,
        }
    }

    /// Validates the profile's numeric fields.
    ///
    /// Negative pay rates, YTD earnings, or period amounts make every
    /// downstream figure meaningless, so they are rejected before the
    /// pipeline starts.
    pub fn validate(&self) -> PayrollResult<()> {
        let check = |field: &str, value: Decimal| -> PayrollResult<()> {
            if value < Decimal::ZERO {
                return Err(PayrollError::InvalidProfile {
                    employee_id: self.employee_id.clone(),
                    field: field.to_string(),
                    message: format!("cannot be negative: {}", value),
                });
            }
            Ok(())
        };

        match self.pay_basis {
            PayBasis::Salaried { annual_salary } => check("annual_salary", annual_salary)?,
            PayBasis::Hourly { hourly_rate } => check("hourly_rate", hourly_rate)?,
        }
        check("ytd_taxable_earnings", self.ytd_taxable_earnings)?;
        check("period_allowances", self.period_allowances)?;
        check("bonus", self.bonus)?;
        check("commission", self.commission)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salaried_profile(annual: &str) -> CompensationProfile {
        CompensationProfile {
            employee_id: "emp_001".to_string(),
            pay_basis: PayBasis::Salaried {
                annual_salary: dec(annual),
            },
            jurisdiction: "CA".to_string(),
            filing_status: FilingStatus::Single,
            ytd_taxable_earnings: Decimal::ZERO,
            period_allowances: Decimal::ZERO,
            bonus: Decimal::ZERO,
            commission: Decimal::ZERO,
        }
    }

    #[test]
    fn test_salaried_base_hourly_rate_uses_2080_hours() {
        let profile = salaried_profile("104000");
        assert_eq!(profile.base_hourly_rate(), dec("50"));
    }

    #[test]
    fn test_hourly_base_rate_passes_through() {
        let mut profile = salaried_profile("0");
        profile.pay_basis = PayBasis::Hourly {
            hourly_rate: dec("32.50"),
        };
        assert_eq!(profile.base_hourly_rate(), dec("32.50"));
    }

    #[test]
    fn test_annual_salary_equivalent_for_hourly() {
        let mut profile = salaried_profile("0");
        profile.pay_basis = PayBasis::Hourly {
            hourly_rate: dec("25"),
        };
        assert_eq!(profile.annual_salary_equivalent(), dec("52000"));
    }

    #[test]
    fn test_validate_accepts_well_formed_profile() {
        assert!(salaried_profile("120000").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let profile = salaried_profile("-1");
        let result = profile.validate();
        match result {
            Err(PayrollError::InvalidProfile { field, .. }) => {
                assert_eq!(field, "annual_salary");
            }
            _ => panic!("Expected InvalidProfile error"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_ytd() {
        let mut profile = salaried_profile("120000");
        profile.ytd_taxable_earnings = dec("-0.01");
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_deserialize_salaried_profile() {
        let json = r#"{
            "employee_id": "emp_001",
            "pay_basis": { "basis": "salaried", "annual_salary": "120000" },
            "jurisdiction": "CA",
            "filing_status": "single",
            "ytd_taxable_earnings": "60000"
        }"#;

        let profile: CompensationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.employee_id, "emp_001");
        assert_eq!(profile.filing_status, FilingStatus::Single);
        assert_eq!(profile.ytd_taxable_earnings, dec("60000"));
        // Defaulted period amounts
        assert_eq!(profile.bonus, Decimal::ZERO);
        assert_eq!(profile.commission, Decimal::ZERO);
    }

    #[test]
    fn test_filing_status_serialization() {
        assert_eq!(
            serde_json::to_string(&FilingStatus::MarriedJoint).unwrap(),
            "\"married_joint\""
        );
        assert_eq!(
            serde_json::to_string(&FilingStatus::HeadOfHousehold).unwrap(),
            "\"head_of_household\""
        );
    }
}
