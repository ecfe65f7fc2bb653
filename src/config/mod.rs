//! Configuration for the payroll engine.
//!
//! This module provides strongly-typed, validated configuration for tax
//! tables and benefit plans. Malformed tables (unordered or gapped
//! brackets, rates outside 0..=1) are rejected at construction time,
//! before any payroll run starts. A run holds one immutable configuration
//! snapshot for its whole duration.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitConfig, EmployerTaxConfig, InsurancePlanConfig, JurisdictionRates, LifeInsuranceConfig,
    MedicareConfig, PayrollConfig, RetirementConfig, SocialSecurityConfig, TaxBracket, TaxConfig,
};
