//! Employer-side cost calculation.
//!
//! Mirrors the employee-side statutory rates for the tax matches (with an
//! independent wage-base cap for the Social-Security-equivalent match),
//! adds the wage-base-capped unemployment contribution and the flat
//! workers-compensation premium, and carries the employer share of each
//! elected insurance premium plus the retirement match.

use rust_decimal::Decimal;

use crate::config::{BenefitConfig, TaxConfig};
use crate::models::{
    BenefitElection, CompensationProfile, EmployerCostBreakdown, InsurancePlanKind, PayFrequency,
};

/// Employer share of one insurance plan's premium for one period, or
/// zero if the plan is not elected.
fn plan_employer_share(
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
            monthly * (Decimal::ONE - config.employee_share) / frequency.periods_per_month()
        }
        None => Decimal::ZERO,
    }
}

/// Calculates the employer-borne cost breakdown for one employee and
/// period.
///
/// The Social-Security-equivalent match and the unemployment contribution
/// are each capped against their own wage base using the profile's true
/// year-to-date earnings.
pub fn calculate_employer_cost(
    gross: Decimal,
    election: &BenefitElection,
    profile: &CompensationProfile,
    frequency: PayFrequency,
    tax: &TaxConfig,
    benefits: &BenefitConfig,
) -> EmployerCostBreakdown {
    let ss = tax.social_security();
    let ss_room = (ss.wage_base - profile.ytd_taxable_earnings).max(Decimal::ZERO);
    let social_security = ss.rate * gross.min(ss_room);

    // Employer Medicare match carries the base rate only; the
    // additional-earner surtax is employee-side.
    let medicare = tax.medicare().rate * gross;

    let employer_taxes = benefits.employer_taxes();
    let ui_room =
        (employer_taxes.unemployment_wage_base - profile.ytd_taxable_earnings).max(Decimal::ZERO);
    let unemployment = employer_taxes.unemployment_rate * gross.min(ui_room);

    let workers_compensation = employer_taxes.workers_comp_rate * gross;

    let retirement = benefits.retirement();
    let match_rate = election
        .retirement_rate
        .min(retirement.employer_match_cap)
        .max(Decimal::ZERO);
    let retirement_match = gross * match_rate;

    EmployerCostBreakdown {
        social_security,
        medicare,
        unemployment,
        workers_compensation,
        health_insurance: plan_employer_share(
            InsurancePlanKind::Health,
            election,
            benefits,
            frequency,
        ),
        dental_insurance: plan_employer_share(
            InsurancePlanKind::Dental,
            election,
            benefits,
            frequency,
        ),
        vision_insurance: plan_employer_share(
            InsurancePlanKind::Vision,
            election,
            benefits,
            frequency,
        ),
        retirement_match,
    }
}
