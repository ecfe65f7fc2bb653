//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration snapshot from YAML files.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{FilingStatus, InsurancePlanKind};

use super::types::{
    BenefitConfig, EmployerTaxConfig, InsurancePlanConfig, JurisdictionRates, LifeInsuranceConfig,
    MedicareConfig, PayrollConfig, RetirementConfig, SocialSecurityConfig, TaxBracket, TaxConfig,
};

/// Raw shape of `tax.yaml` before validation.
#[derive(Debug, Deserialize)]
struct TaxFile {
    brackets: HashMap<FilingStatus, Vec<TaxBracket>>,
    social_security: SocialSecurityConfig,
    medicare: MedicareConfig,
    jurisdictions: HashMap<String, JurisdictionRates>,
}

/// Raw shape of `benefits.yaml` before validation.
#[derive(Debug, Deserialize)]
struct BenefitsFile {
    plans: HashMap<InsurancePlanKind, InsurancePlanConfig>,
    retirement: RetirementConfig,
    life_insurance: LifeInsuranceConfig,
    employer_taxes: EmployerTaxConfig,
}

/// Loads and validates the payroll configuration snapshot.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/us_2025/
/// ├── tax.yaml       # Bracket tables, FICA-equivalent rates, jurisdictions
/// └── benefits.yaml  # Insurance plans, retirement, life, employer taxes
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/us_2025").unwrap();
/// println!("SS wage base: {}", config.tax.social_security().wage_base);
/// ```
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns a run-fatal configuration error if:
    /// - either required file is missing ([`PayrollError::ConfigNotFound`])
    /// - either file contains invalid YAML ([`PayrollError::ConfigParseError`])
    /// - the parsed tables violate a structural invariant
    ///   ([`PayrollError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollConfig> {
        let path = path.as_ref();

        let tax_file = Self::load_yaml::<TaxFile>(&path.join("tax.yaml"))?;
        let benefits_file = Self::load_yaml::<BenefitsFile>(&path.join("benefits.yaml"))?;

        let tax = TaxConfig::new(
            tax_file.brackets,
            tax_file.social_security,
            tax_file.medicare,
            tax_file.jurisdictions,
        )?;
        let benefits = BenefitConfig::new(
            benefits_file.plans,
            benefits_file.retirement,
            benefits_file.life_insurance,
            benefits_file.employer_taxes,
        )?;

        info!(config_dir = %path.display(), "loaded payroll configuration snapshot");

        Ok(PayrollConfig { tax, benefits })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
