//! Employee-side benefit and retirement deduction calculation.
//!
//! Insurance deductions spread the employee's share of the monthly
//! premium across the pay periods in a month-equivalent. The retirement
//! deduction applies the elected rate to gross, clamped to the configured
//! maximum. Life insurance is priced per $1000 of coverage, where
//! coverage is a multiple of annual salary. Unelected plans contribute
//! zero, so the total can never be negative for a non-negative gross.

use rust_decimal::Decimal;

use crate::config::BenefitConfig;
use crate::models::{
    BenefitElection, CompensationProfile, DeductionBreakdown, InsurancePlanKind, PayFrequency,
};

const THOUSAND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Employee share of one insurance plan's premium for one period, or
/// zero if the plan is not elected.
fn plan_deduction(
    plan: InsurancePlanKind,
    election: &BenefitElection,
    benefits: &BenefitConfig,
    frequency: PayFrequency,
) -> Decimal {
    if !election.is_elected(plan) {
        return Decimal::ZERO;
    }
    match benefits.plan(plan) {
        Some(config) => {
            let monthly = config.premium_for(election.coverage_tier);
            monthly * config.employee_share / frequency.periods_per_month()
        }
        None => Decimal::ZERO,
    }
}

/// Calculates the deduction breakdown for one employee and period.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{BenefitElection, CompensationProfile, PayBasis,
///     FilingStatus, PayFrequency};
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/us_2025").unwrap();
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
/// let election = BenefitElection::none_elected("emp_001");
///
/// let deductions = calculate_deductions(
///     Decimal::from(4615), &election, &profile, PayFrequency::BiWeekly, &config.benefits);
/// assert_eq!(deductions.total(), Decimal::ZERO);
/// ```
pub fn calculate_deductions(
    gross: Decimal,
    election: &BenefitElection,
    profile: &CompensationProfile,
    frequency: PayFrequency,
    benefits: &BenefitConfig,
) -> DeductionBreakdown {
    let health_insurance =
        plan_deduction(InsurancePlanKind::Health, election, benefits, frequency);
    let dental_insurance =
        plan_deduction(InsurancePlanKind::Dental, election, benefits, frequency);
    let vision_insurance =
        plan_deduction(InsurancePlanKind::Vision, election, benefits, frequency);

    // Elected rate clamped into 0..=max before applying to gross.
    let retirement_rate = election
        .retirement_rate
        .min(benefits.retirement().max_employee_rate)
        .max(Decimal::ZERO);
    let retirement = gross * retirement_rate;

    let life_insurance = if election.life_insurance_elected {
        let life = benefits.life_insurance();
        let coverage = profile.annual_salary_equivalent() * life.coverage_multiple / THOUSAND;
        coverage * life.cost_per_1000 / frequency.periods_per_year()
    } else {
        Decimal::ZERO
    };

    DeductionBreakdown {
        health_insurance,
        dental_insurance,
        vision_insurance,
        retirement,
        life_insurance,
    }
}
