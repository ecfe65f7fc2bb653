//! The per-employee payroll pipeline.
//!
//! Composes the calculation stages in their fixed dependency order: time
//! accounting, then gross pay, then taxes/deductions/employer cost, then
//! record assembly. The pipeline is a pure function of its inputs and the
//! shared configuration snapshot, so the orchestrator can run many of
//! them in parallel without coordination, and re-running it with
//! identical inputs yields an identical record.

use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::{
    AttendanceRecord, BenefitElection, CompensationProfile, EmployeePayrollRecord, PayPeriod,
};

use super::deductions::calculate_deductions;
use super::employer_cost::calculate_employer_cost;
use super::gross_pay::calculate_gross_pay;
use super::tax::calculate_withholding;
use super::time_accounting::{TimesheetFallback, classify_attendance};

/// Runs the full computation pipeline for one employee and one pay
/// period, producing the finished payroll record.
///
/// # Errors
///
/// Propagates validation errors from the profile and attendance inputs,
/// and the run-fatal jurisdiction error from the tax stage. A negative
/// net pay is not an error here; the orchestrator's compliance pass
/// flags it for review.
pub fn compute_employee_record(
    profile: &CompensationProfile,
    attendance: &[AttendanceRecord],
    election: &BenefitElection,
    period: &PayPeriod,
    config: &PayrollConfig,
    fallback: TimesheetFallback,
) -> PayrollResult<EmployeePayrollRecord> {
    profile.validate()?;

    let hours = classify_attendance(&profile.employee_id, attendance, period, fallback)?;
    let gross_pay = calculate_gross_pay(&hours, profile);
    let gross_total = gross_pay.total();

    let taxes = calculate_withholding(gross_total, profile, period.frequency, &config.tax)?;
    let deductions = calculate_deductions(
        gross_total,
        election,
        profile,
        period.frequency,
        &config.benefits,
    );
    let employer_cost = calculate_employer_cost(
        gross_total,
        election,
        profile,
        period.frequency,
        &config.tax,
        &config.benefits,
    );

    let net_pay = gross_total - taxes.total() - deductions.total();

    Ok(EmployeePayrollRecord {
        employee_id: profile.employee_id.clone(),
        pay_period: period.clone(),
        hours,
        gross_pay,
        taxes,
        deductions,
        employer_cost,
        net_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{AttendanceKind, FilingStatus, PayBasis, PayFrequency};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> PayrollConfig {
        ConfigLoader::load("./config/us_2025").unwrap()
    }

    fn period() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            frequency: PayFrequency::BiWeekly,
        }
    }

    fn salaried_profile() -> CompensationProfile {
        CompensationProfile {
            employee_id: "emp_001".to_string(),
            pay_basis: PayBasis::Salaried {
                annual_salary: dec("120000"),
            },
            jurisdiction: "CA".to_string(),
            filing_status: FilingStatus::Single,
            ytd_taxable_earnings: Decimal::ZERO,
            period_allowances: Decimal::ZERO,
            bonus: Decimal::ZERO,
            commission: Decimal::ZERO,
        }
    }

    fn compute(profile: &CompensationProfile) -> EmployeePayrollRecord {
        compute_employee_record(
            profile,
            &[],
            &BenefitElection::none_elected(&profile.employee_id),
            &period(),
            &config(),
            TimesheetFallback::StandardPeriodHours,
        )
        .unwrap()
    }

    #[test]
    fn test_salaried_employee_without_timesheet_gets_standard_hours() {
        let record = compute(&salaried_profile());
        assert_eq!(record.hours.regular, dec("80"));
        assert_eq!(record.gross_pay.total().round_dp(2), dec("4615.38"));
    }

    #[test]
    fn test_net_pay_reconciles_exactly() {
        let record = compute(&salaried_profile());
        assert_eq!(
            record.net_pay,
            record.gross_pay.total() - record.taxes.total() - record.deductions.total()
        );
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let a = compute(&salaried_profile());
        let b = compute(&salaried_profile());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_invalid_profile_rejected_before_computation() {
        let mut profile = salaried_profile();
        profile.pay_basis = PayBasis::Salaried {
            annual_salary: dec("-1"),
        };
        assert!(
            compute_employee_record(
                &profile,
                &[],
                &BenefitElection::none_elected("emp_001"),
                &period(),
                &config(),
                TimesheetFallback::StandardPeriodHours,
            )
            .is_err()
        );
    }

    #[test]
    fn test_hourly_employee_with_overtime_day() {
        let mut profile = salaried_profile();
        profile.pay_basis = PayBasis::Hourly {
            hourly_rate: dec("20"),
        };
        let attendance = vec![AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            hours: dec("13"),
            kind: AttendanceKind::Regular,
        }];

        let record = compute_employee_record(
            &profile,
            &attendance,
            &BenefitElection::none_elected("emp_001"),
            &period(),
            &config(),
            TimesheetFallback::StandardPeriodHours,
        )
        .unwrap();

        assert_eq!(record.hours.regular, dec("8"));
        assert_eq!(record.hours.overtime, dec("4"));
        assert_eq!(record.hours.double_time, dec("1"));
        // 8x20 + 4x30 + 1x40 = 320
        assert_eq!(record.gross_pay.total(), dec("320"));
    }
}
