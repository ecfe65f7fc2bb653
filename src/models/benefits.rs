//! Benefit election model and related types.
//!
//! Elections are owned by the benefits subsystem; the engine reads them
//! to compute employee deductions and employer premium shares. Unelected
//! plans contribute zero to both sides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The insurance plan kinds an employee can elect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsurancePlanKind {
    /// Health insurance.
    Health,
    /// Dental insurance.
    Dental,
    /// Vision insurance.
    Vision,
}

impl InsurancePlanKind {
    /// All insurance plan kinds, in deduction-breakdown order.
    pub const ALL: [InsurancePlanKind; 3] = [
        InsurancePlanKind::Health,
        InsurancePlanKind::Dental,
        InsurancePlanKind::Vision,
    ];
}

/// Coverage tier for elected insurance plans.
///
/// The tier selects which monthly premium applies from the plan
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    /// Coverage for the employee only.
    EmployeeOnly,
    /// Coverage for the employee and a spouse/partner.
    EmployeeSpouse,
    /// Coverage for the whole family.
    Family,
}

/// An employee's benefit elections for the current plan year.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{BenefitElection, CoverageTier, InsurancePlanKind};
/// use rust_decimal::Decimal;
///
/// let election = BenefitElection {
///     employee_id: "emp_001".to_string(),
///     health_elected: true,
///     dental_elected: false,
///     vision_elected: false,
///     coverage_tier: CoverageTier::EmployeeOnly,
///     retirement_rate: Decimal::new(6, 2), // 6%
///     life_insurance_elected: false,
/// };
/// assert!(election.is_elected(InsurancePlanKind::Health));
/// assert!(!election.is_elected(InsurancePlanKind::Dental));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitElection {
    /// The employee these elections belong to.
    pub employee_id: String,
    /// Whether the health plan is elected.
    pub health_elected: bool,
    /// Whether the dental plan is elected.
    pub dental_elected: bool,
    /// Whether the vision plan is elected.
    pub vision_elected: bool,
    /// Coverage tier applied to all elected insurance plans.
    pub coverage_tier: CoverageTier,
    /// Elected retirement contribution rate as a fraction of gross
    /// (e.g. 0.06 for 6%). Clamped to the configured maximum during
    /// deduction calculation.
    pub retirement_rate: Decimal,
    /// Whether employer-sponsored life insurance is elected.
    pub life_insurance_elected: bool,
}

impl BenefitElection {
    /// Returns `true` if the given insurance plan is elected.
    pub fn is_elected(&self, plan: InsurancePlanKind) -> bool {
        match plan {
            InsurancePlanKind::Health => self.health_elected,
            InsurancePlanKind::Dental => self.dental_elected,
            InsurancePlanKind::Vision => self.vision_elected,
        }
    }

    /// An election with nothing opted in, used for employees with no
    /// benefits enrollment.
    pub fn none_elected(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            health_elected: false,
            dental_elected: false,
            vision_elected: false,
            coverage_tier: CoverageTier::EmployeeOnly,
            retirement_rate: Decimal::ZERO,
            life_insurance_elected: false,
        }
    }
}
