//! Domain models for the payroll engine.
//!
//! This module contains the data types flowing through a payroll run:
//! compensation profiles, attendance records, pay periods, the additive
//! breakdown records (hours, gross pay, taxes, deductions, employer cost),
//! and the per-employee and run-level result types.

mod attendance;
mod benefits;
mod breakdown;
mod employee;
mod pay_period;
mod run;

pub use attendance::{AttendanceKind, AttendanceRecord};
pub use benefits::{BenefitElection, CoverageTier, InsurancePlanKind};
pub use breakdown::{
    DeductionBreakdown, EmployerCostBreakdown, GrossPayBreakdown, HourBreakdown, TaxWithholding,
};
pub use employee::{CompensationProfile, FilingStatus, PayBasis};
pub use pay_period::{PayFrequency, PayPeriod};
pub use run::{
    ComplianceFinding, EmployeeError, EmployeePayrollRecord, PayrollRun, RunStatus, RunTotals,
};
