//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files and validated before
//! use. Every rate is a fraction (0.22, never 22), every bracket table is
//! ordered and gapless, and the last bracket is always unbounded.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{CoverageTier, FilingStatus, InsurancePlanKind};

/// One progressive tax bracket.
///
/// `max` is `None` for the last (unbounded) bracket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive).
    pub min: Decimal,
    /// Upper bound of the bracket (exclusive); `None` means unbounded.
    pub max: Option<Decimal>,
    /// Marginal rate applied to income within the bracket.
    pub rate: Decimal,
}

/// Flat-rate tax with an annual wage base (Social-Security-equivalent).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialSecurityConfig {
    /// Withholding rate on taxable earnings up to the wage base.
    pub rate: Decimal,
    /// Annual earnings ceiling above which the tax no longer applies.
    pub wage_base: Decimal,
}

/// Flat-rate tax with an additional-earner surtax (Medicare-equivalent).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MedicareConfig {
    /// Base rate applied to full gross pay.
    pub rate: Decimal,
    /// Additional rate applied to annualized income above the threshold.
    pub additional_rate: Decimal,
    /// Annualized income threshold for the additional rate.
    pub additional_threshold: Decimal,
}

/// Flat state-level rates for one jurisdiction.
///
/// Zero rates are valid and produce zero withholding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JurisdictionRates {
    /// Flat state/local income tax rate.
    pub state_rate: Decimal,
    /// State disability insurance rate.
    pub disability_rate: Decimal,
}

/// The complete statutory tax configuration for a payroll run.
///
/// Constructed once at config-load time; [`TaxConfig::new`] rejects
/// malformed tables so no run ever starts against bad data.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Progressive bracket tables keyed by filing status.
    brackets: HashMap<FilingStatus, Vec<TaxBracket>>,
    /// Social-Security-equivalent configuration.
    social_security: SocialSecurityConfig,
    /// Medicare-equivalent configuration.
    medicare: MedicareConfig,
    /// Flat rates keyed by jurisdiction (state) code.
    jurisdictions: HashMap<String, JurisdictionRates>,
}

/// All filing statuses a tax configuration must cover.
const ALL_FILING_STATUSES: [FilingStatus; 4] = [
    FilingStatus::Single,
    FilingStatus::MarriedJoint,
    FilingStatus::MarriedSeparate,
    FilingStatus::HeadOfHousehold,
];

fn check_rate(context: &str, rate: Decimal) -> PayrollResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(PayrollError::InvalidConfig {
            message: format!("{}: rate {} is outside 0..=1", context, rate),
        });
    }
    Ok(())
}

fn check_non_negative(context: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidConfig {
            message: format!("{}: {} cannot be negative", context, value),
        });
    }
    Ok(())
}

impl TaxConfig {
    /// Creates a validated tax configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidConfig`] if:
    /// - a filing status has no bracket table, or a table is empty
    /// - a table does not start at zero, has a gap or overlap between
    ///   consecutive brackets, or its last bracket is bounded
    /// - any rate is outside `0..=1`, or any wage base/threshold is
    ///   negative
    pub fn new(
        brackets: HashMap<FilingStatus, Vec<TaxBracket>>,
        social_security: SocialSecurityConfig,
        medicare: MedicareConfig,
        jurisdictions: HashMap<String, JurisdictionRates>,
    ) -> PayrollResult<Self> {
        for status in ALL_FILING_STATUSES {
            let table = brackets
                .get(&status)
                .ok_or_else(|| PayrollError::InvalidConfig {
                    message: format!("missing bracket table for filing status {:?}", status),
                })?;
            Self::validate_bracket_table(status, table)?;
        }

        check_rate("social_security", social_security.rate)?;
        check_non_negative("social_security wage_base", social_security.wage_base)?;
        check_rate("medicare", medicare.rate)?;
        check_rate("medicare additional", medicare.additional_rate)?;
        check_non_negative("medicare additional_threshold", medicare.additional_threshold)?;

        for (code, rates) in &jurisdictions {
            check_rate(&format!("jurisdiction {} state", code), rates.state_rate)?;
            check_rate(
                &format!("jurisdiction {} disability", code),
                rates.disability_rate,
            )?;
        }

        Ok(Self {
            brackets,
            social_security,
            medicare,
            jurisdictions,
        })
    }

    fn validate_bracket_table(status: FilingStatus, table: &[TaxBracket]) -> PayrollResult<()> {
        if table.is_empty() {
            return Err(PayrollError::InvalidConfig {
                message: format!("empty bracket table for filing status {:?}", status),
            });
        }
        if table[0].min != Decimal::ZERO {
            return Err(PayrollError::InvalidConfig {
                message: format!(
                    "bracket table for {:?} must start at 0, starts at {}",
                    status, table[0].min
                ),
            });
        }

        for (i, bracket) in table.iter().enumerate() {
            check_rate(&format!("bracket {} for {:?}", i, status), bracket.rate)?;

            match bracket.max {
                Some(max) => {
                    if max <= bracket.min {
                        return Err(PayrollError::InvalidConfig {
                            message: format!(
                                "bracket {} for {:?} has max {} <= min {}",
                                i, status, max, bracket.min
                            ),
                        });
                    }
                    // Gapless: the next bracket must start exactly where
                    // this one ends.
                    match table.get(i + 1) {
                        Some(next) if next.min != max => {
                            return Err(PayrollError::InvalidConfig {
                                message: format!(
                                    "bracket table for {:?} has a gap or overlap at {}: next starts at {}",
                                    status, max, next.min
                                ),
                            });
                        }
                        Some(_) => {}
                        None => {
                            return Err(PayrollError::InvalidConfig {
                                message: format!(
                                    "last bracket for {:?} must be unbounded",
                                    status
                                ),
                            });
                        }
                    }
                }
                None => {
                    if i != table.len() - 1 {
                        return Err(PayrollError::InvalidConfig {
                            message: format!(
                                "unbounded bracket {} for {:?} is not last",
                                i, status
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the bracket table for a filing status.
    ///
    /// Always present after construction; validation requires every
    /// filing status to have a table.
    pub fn brackets_for(&self, status: FilingStatus) -> &[TaxBracket] {
        self.brackets
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the Social-Security-equivalent configuration.
    pub fn social_security(&self) -> &SocialSecurityConfig {
        &self.social_security
    }

    /// Returns the Medicare-equivalent configuration.
    pub fn medicare(&self) -> &MedicareConfig {
        &self.medicare
    }

    /// Looks up the flat rates for a jurisdiction code.
    ///
    /// # Errors
    ///
    /// Returns the run-fatal [`PayrollError::JurisdictionNotFound`] if
    /// the code has no configured rates.
    pub fn jurisdiction_rates(&self, code: &str) -> PayrollResult<&JurisdictionRates> {
        self.jurisdictions
            .get(code)
            .ok_or_else(|| PayrollError::JurisdictionNotFound {
                code: code.to_string(),
            })
    }
}

/// Monthly premiums and contribution split for one insurance plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsurancePlanConfig {
    /// Monthly premium by coverage tier.
    pub premiums: HashMap<CoverageTier, Decimal>,
    /// Fraction of the premium paid by the employee; the employer pays
    /// the remainder.
    pub employee_share: Decimal,
}

impl InsurancePlanConfig {
    /// Returns the monthly premium for a coverage tier.
    ///
    /// Validation guarantees every tier has a premium.
    pub fn premium_for(&self, tier: CoverageTier) -> Decimal {
        self.premiums.get(&tier).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Retirement plan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetirementConfig {
    /// Maximum employee contribution rate; elections above it are
    /// clamped.
    pub max_employee_rate: Decimal,
    /// Employer match cap: the employer matches the employee rate up to
    /// this fraction of gross.
    pub employer_match_cap: Decimal,
}

/// Employer-sponsored life insurance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LifeInsuranceConfig {
    /// Coverage as a multiple of annual salary.
    pub coverage_multiple: Decimal,
    /// Annual cost per $1000 of coverage.
    pub cost_per_1000: Decimal,
}

/// Employer-side statutory contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployerTaxConfig {
    /// Unemployment-insurance rate.
    pub unemployment_rate: Decimal,
    /// Annual wage base for unemployment insurance.
    pub unemployment_wage_base: Decimal,
    /// Workers-compensation premium rate on gross pay.
    pub workers_comp_rate: Decimal,
}

/// The complete benefit-plan and employer-tax configuration.
#[derive(Debug, Clone)]
pub struct BenefitConfig {
    /// Insurance plans keyed by kind.
    plans: HashMap<InsurancePlanKind, InsurancePlanConfig>,
    /// Retirement plan parameters.
    retirement: RetirementConfig,
    /// Life insurance parameters.
    life_insurance: LifeInsuranceConfig,
    /// Employer statutory contribution rates.
    employer_taxes: EmployerTaxConfig,
}

const ALL_COVERAGE_TIERS: [CoverageTier; 3] = [
    CoverageTier::EmployeeOnly,
    CoverageTier::EmployeeSpouse,
    CoverageTier::Family,
];

impl BenefitConfig {
    /// Creates a validated benefit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidConfig`] if a plan is missing, a
    /// tier has no premium, a premium is negative, or any rate/share is
    /// outside `0..=1`.
    pub fn new(
        plans: HashMap<InsurancePlanKind, InsurancePlanConfig>,
        retirement: RetirementConfig,
        life_insurance: LifeInsuranceConfig,
        employer_taxes: EmployerTaxConfig,
    ) -> PayrollResult<Self> {
        for kind in InsurancePlanKind::ALL {
            let plan = plans.get(&kind).ok_or_else(|| PayrollError::InvalidConfig {
                message: format!("missing insurance plan config for {:?}", kind),
            })?;
            check_rate(&format!("{:?} employee_share", kind), plan.employee_share)?;
            for tier in ALL_COVERAGE_TIERS {
                let premium =
                    plan.premiums
                        .get(&tier)
                        .ok_or_else(|| PayrollError::InvalidConfig {
                            message: format!("{:?} plan has no premium for tier {:?}", kind, tier),
                        })?;
                check_non_negative(&format!("{:?} premium for {:?}", kind, tier), *premium)?;
            }
        }

        check_rate("retirement max_employee_rate", retirement.max_employee_rate)?;
        check_rate("retirement employer_match_cap", retirement.employer_match_cap)?;
        check_non_negative("life coverage_multiple", life_insurance.coverage_multiple)?;
        check_non_negative("life cost_per_1000", life_insurance.cost_per_1000)?;
        check_rate("unemployment_rate", employer_taxes.unemployment_rate)?;
        check_non_negative(
            "unemployment_wage_base",
            employer_taxes.unemployment_wage_base,
        )?;
        check_rate("workers_comp_rate", employer_taxes.workers_comp_rate)?;

        Ok(Self {
            plans,
            retirement,
            life_insurance,
            employer_taxes,
        })
    }

    /// Returns the configuration for an insurance plan kind.
    ///
    /// Always present after construction.
    pub fn plan(&self, kind: InsurancePlanKind) -> Option<&InsurancePlanConfig> {
        self.plans.get(&kind)
    }

    /// Returns the retirement configuration.
    pub fn retirement(&self) -> &RetirementConfig {
        &self.retirement
    }

    /// Returns the life insurance configuration.
    pub fn life_insurance(&self) -> &LifeInsuranceConfig {
        &self.life_insurance
    }

    /// Returns the employer statutory contribution configuration.
    pub fn employer_taxes(&self) -> &EmployerTaxConfig {
        &self.employer_taxes
    }
}

/// The immutable configuration snapshot a payroll run executes against.
///
/// Loaded once at run start and never mutated mid-run.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Statutory tax tables.
    pub tax: TaxConfig,
    /// Benefit plan and employer contribution tables.
    pub benefits: BenefitConfig,
}
