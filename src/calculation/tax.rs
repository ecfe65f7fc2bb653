//! Statutory tax withholding calculation.
//!
//! Four mechanisms feed the [`TaxWithholding`] breakdown:
//!
//! - **Progressive federal-equivalent**: the current period's gross is
//!   annualized by the pay frequency, walked through the filing-status
//!   bracket table, and the annual tax is divided back down to one
//!   period. The result is non-decreasing in income and continuous at
//!   every bracket boundary.
//! - **Wage-base-capped flat tax** (Social-Security-equivalent): computed
//!   against the profile's true year-to-date taxable earnings, so
//!   cumulative annual withholding can never exceed `wage_base × rate`.
//!   The YTD figure is never approximated from annualized gross; that
//!   approximation only holds when every period pays identically.
//! - **Flat tax with additional-earner surtax** (Medicare-equivalent):
//!   base rate on full gross plus the additional rate on the annualized
//!   excess above the threshold.
//! - **Flat jurisdiction rates**: state/local and disability rates looked
//!   up by state code; zero-rate jurisdictions withhold zero.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, TaxConfig};
use crate::error::PayrollResult;
use crate::models::{CompensationProfile, PayFrequency, TaxWithholding};

/// Computes the annual progressive tax for an annual income against an
/// ordered, gapless bracket table.
///
/// Each bracket contributes `rate × min(remaining_income, bracket_width)`
/// once income reaches its floor.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::progressive_annual_tax;
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let table = vec![
///     TaxBracket { min: Decimal::ZERO, max: Some(Decimal::from(10_000)), rate: Decimal::new(10, 2) },
///     TaxBracket { min: Decimal::from(10_000), max: None, rate: Decimal::new(20, 2) },
/// ];
///
/// // 10% of 10,000 + 20% of 5,000
/// assert_eq!(progressive_annual_tax(Decimal::from(15_000), &table), Decimal::from(2_000));
/// ```
pub fn progressive_annual_tax(annual_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;
    for bracket in brackets {
        if annual_income <= bracket.min {
            break;
        }
        let taxable_in_bracket = match bracket.max {
            Some(max) => annual_income.min(max) - bracket.min,
            None => annual_income - bracket.min,
        };
        tax += taxable_in_bracket * bracket.rate;
    }
    tax
}

/// Calculates all withholding components for one employee and period.
///
/// `gross` is the period's total gross pay; the profile supplies the
/// filing status, jurisdiction, and true YTD taxable earnings.
///
/// # Errors
///
/// Returns the run-fatal [`PayrollError::JurisdictionNotFound`] if the
/// profile names a jurisdiction absent from the configuration. An empty
/// jurisdiction code withholds zero state/disability tax instead (the
/// orchestrator records a compliance finding for it).
///
/// [`PayrollError::JurisdictionNotFound`]: crate::error::PayrollError::JurisdictionNotFound
pub fn calculate_withholding(
    gross: Decimal,
    profile: &CompensationProfile,
    frequency: PayFrequency,
    tax: &TaxConfig,
) -> PayrollResult<TaxWithholding> {
    let periods_per_year = frequency.periods_per_year();
    let annualized = gross * periods_per_year;

    // Progressive federal-equivalent: annualize, walk, de-annualize.
    let brackets = tax.brackets_for(profile.filing_status);
    let federal = progressive_annual_tax(annualized, brackets) / periods_per_year;

    // Wage-base-capped flat tax against true YTD earnings.
    let ss = tax.social_security();
    let ss_room = (ss.wage_base - profile.ytd_taxable_earnings).max(Decimal::ZERO);
    let social_security = ss.rate * gross.min(ss_room);

    // Flat tax plus additional-earner surtax on the annualized excess.
    let medicare_cfg = tax.medicare();
    let medicare = medicare_cfg.rate * gross;
    let annual_excess = (annualized - medicare_cfg.additional_threshold).max(Decimal::ZERO);
    let additional_medicare = medicare_cfg.additional_rate * annual_excess / periods_per_year;

    // Flat jurisdiction rates; an empty code means no state withholding.
    let (state, disability) = if profile.jurisdiction.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let rates = tax.jurisdiction_rates(&profile.jurisdiction)?;
        (rates.state_rate * gross, rates.disability_rate * gross)
    };

    Ok(TaxWithholding {
        federal,
        state,
        social_security,
        medicare,
        additional_medicare,
        disability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JurisdictionRates, MedicareConfig, SocialSecurityConfig};
    use crate::error::PayrollError;
    use crate::models::{FilingStatus, PayBasis};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(min: &str, max: Option<&str>, rate: &str) -> TaxBracket {
        TaxBracket {
            min: dec(min),
            max: max.map(dec),
            rate: dec(rate),
        }
    }

    /// Three-bracket table shared by every filing status.
    fn test_config() -> TaxConfig {
        let table = vec![
            bracket("0", Some("10000"), "0.10"),
            bracket("10000", Some("50000"), "0.20"),
            bracket("50000", None, "0.30"),
        ];
        let brackets: HashMap<FilingStatus, Vec<TaxBracket>> = [
            FilingStatus::Single,
            FilingStatus::MarriedJoint,
            FilingStatus::MarriedSeparate,
            FilingStatus::HeadOfHousehold,
        ]
        .iter()
        .map(|s| (*s, table.clone()))
        .collect();

        let mut jurisdictions = HashMap::new();
        jurisdictions.insert(
            "CA".to_string(),
            JurisdictionRates {
                state_rate: dec("0.05"),
                disability_rate: dec("0.012"),
            },
        );
        jurisdictions.insert(
            "TX".to_string(),
            JurisdictionRates {
                state_rate: dec("0"),
                disability_rate: dec("0"),
            },
        );

        TaxConfig::new(
            brackets,
            SocialSecurityConfig {
                rate: dec("0.062"),
                wage_base: dec("176100"),
            },
            MedicareConfig {
                rate: dec("0.0145"),
                additional_rate: dec("0.009"),
                additional_threshold: dec("200000"),
            },
            jurisdictions,
        )
        .unwrap()
    }

    fn profile(ytd: &str) -> CompensationProfile {
        CompensationProfile {
            employee_id: "emp_001".to_string(),
            pay_basis: PayBasis::Salaried {
                annual_salary: dec("120000"),
            },
            jurisdiction: "CA".to_string(),
            filing_status: FilingStatus::Single,
            ytd_taxable_earnings: dec(ytd),
            period_allowances: Decimal::ZERO,
            bonus: Decimal::ZERO,
            commission: Decimal::ZERO,
        }
    }

    // =========================================================================
    // Progressive bracket walk
    // =========================================================================

    #[test]
    fn test_progressive_tax_within_first_bracket() {
        let config = test_config();
        let table = config.brackets_for(FilingStatus::Single);
        assert_eq!(progressive_annual_tax(dec("5000"), table), dec("500"));
    }

    #[test]
    fn test_progressive_tax_spans_brackets() {
        let config = test_config();
        let table = config.brackets_for(FilingStatus::Single);
        // 10% of 10000 + 20% of 40000 + 30% of 10000
        assert_eq!(progressive_annual_tax(dec("60000"), table), dec("12000"));
    }

    #[test]
    fn test_progressive_tax_zero_income() {
        let config = test_config();
        let table = config.brackets_for(FilingStatus::Single);
        assert_eq!(progressive_annual_tax(dec("0"), table), dec("0"));
    }

    #[test]
    fn test_progressive_tax_continuous_at_boundary() {
        let config = test_config();
        let table = config.brackets_for(FilingStatus::Single);
        let below = progressive_annual_tax(dec("9999.99"), table);
        let at = progressive_annual_tax(dec("10000"), table);
        // Continuity: approaching the boundary from below converges to
        // the value at the boundary.
        assert_eq!(at, dec("1000"));
        assert!((at - below).abs() < dec("0.01"));
    }

    #[test]
    fn test_progressive_tax_monotonic() {
        let config = test_config();
        let table = config.brackets_for(FilingStatus::Single);
        let mut previous = Decimal::ZERO;
        for income in [0u32, 5000, 10000, 10001, 49999, 50000, 50001, 250000] {
            let tax = progressive_annual_tax(Decimal::from(income), table);
            assert!(tax >= previous, "tax decreased at income {}", income);
            previous = tax;
        }
    }

    // =========================================================================
    // Full withholding
    // =========================================================================

    #[test]
    fn test_federal_annualize_walk_deannualize() {
        // Bi-weekly gross 4615.384615..: annualized exactly 120000.
        let gross = dec("120000") / dec("26");
        let withholding =
            calculate_withholding(gross, &profile("0"), PayFrequency::BiWeekly, &test_config())
                .unwrap();

        // Annual tax: 1000 + 8000 + 21000 = 30000; per period 30000 / 26.
        assert_eq!(
            withholding.federal.round_dp(6),
            (dec("30000") / dec("26")).round_dp(6)
        );
    }

    #[test]
    fn test_social_security_uncapped_when_below_wage_base() {
        let withholding = calculate_withholding(
            dec("4000"),
            &profile("50000"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.social_security, dec("248")); // 0.062 x 4000
    }

    #[test]
    fn test_social_security_partial_cap_at_wage_base() {
        // Only 1000 of room remains under the wage base.
        let withholding = calculate_withholding(
            dec("4000"),
            &profile("175100"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.social_security, dec("62")); // 0.062 x 1000
    }

    #[test]
    fn test_social_security_zero_when_ytd_at_wage_base() {
        let withholding = calculate_withholding(
            dec("4000"),
            &profile("176100"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.social_security, Decimal::ZERO);
    }

    #[test]
    fn test_social_security_zero_when_ytd_beyond_wage_base() {
        let withholding = calculate_withholding(
            dec("4000"),
            &profile("200000"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.social_security, Decimal::ZERO);
    }

    #[test]
    fn test_medicare_base_rate_on_full_gross() {
        let withholding = calculate_withholding(
            dec("4000"),
            &profile("0"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.medicare, dec("58")); // 0.0145 x 4000
        // Annualized 104000 is below the 200000 threshold.
        assert_eq!(withholding.additional_medicare, Decimal::ZERO);
    }

    #[test]
    fn test_additional_medicare_above_threshold() {
        // Monthly gross 20000 annualizes to 240000; 40000 over threshold.
        let withholding = calculate_withholding(
            dec("20000"),
            &profile("0"),
            PayFrequency::Monthly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.additional_medicare, dec("30")); // 0.009 x 40000 / 12
    }

    #[test]
    fn test_state_and_disability_rates() {
        let withholding = calculate_withholding(
            dec("4000"),
            &profile("0"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.state, dec("200")); // 0.05 x 4000
        assert_eq!(withholding.disability, dec("48")); // 0.012 x 4000
    }

    #[test]
    fn test_zero_rate_jurisdiction_withholds_zero() {
        let mut p = profile("0");
        p.jurisdiction = "TX".to_string();
        let withholding =
            calculate_withholding(dec("4000"), &p, PayFrequency::BiWeekly, &test_config()).unwrap();
        assert_eq!(withholding.state, Decimal::ZERO);
        assert_eq!(withholding.disability, Decimal::ZERO);
    }

    #[test]
    fn test_empty_jurisdiction_withholds_zero_state_tax() {
        let mut p = profile("0");
        p.jurisdiction = String::new();
        let withholding =
            calculate_withholding(dec("4000"), &p, PayFrequency::BiWeekly, &test_config()).unwrap();
        assert_eq!(withholding.state, Decimal::ZERO);
        assert_eq!(withholding.disability, Decimal::ZERO);
        // Federal withholding still applies.
        assert!(withholding.federal > Decimal::ZERO);
    }

    #[test]
    fn test_unknown_jurisdiction_is_fatal_error() {
        let mut p = profile("0");
        p.jurisdiction = "ZZ".to_string();
        let result = calculate_withholding(dec("4000"), &p, PayFrequency::BiWeekly, &test_config());
        match result {
            Err(PayrollError::JurisdictionNotFound { code }) => {
                assert_eq!(code, "ZZ");
            }
            other => panic!("Expected JurisdictionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_total_is_sum_of_named_components() {
        let withholding = calculate_withholding(
            dec("20000"),
            &profile("170000"),
            PayFrequency::Monthly,
            &test_config(),
        )
        .unwrap();
        let named_sum = withholding.federal
            + withholding.state
            + withholding.social_security
            + withholding.medicare
            + withholding.additional_medicare
            + withholding.disability;
        assert_eq!(withholding.total(), named_sum);
    }

    #[test]
    fn test_zero_gross_zero_withholding() {
        let withholding = calculate_withholding(
            dec("0"),
            &profile("0"),
            PayFrequency::BiWeekly,
            &test_config(),
        )
        .unwrap();
        assert_eq!(withholding.total(), Decimal::ZERO);
    }
}
