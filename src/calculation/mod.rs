//! Calculation logic for the payroll engine.
//!
//! This module contains the per-employee computation stages: time
//! accounting (attendance classification with daily overtime/double-time
//! thresholds), gross pay calculation, statutory tax withholding,
//! benefit/retirement deduction calculation, employer cost calculation,
//! and the pipeline that composes them into a payroll record.

mod deductions;
mod employer_cost;
mod gross_pay;
mod pipeline;
mod tax;
mod time_accounting;

pub use deductions::calculate_deductions;
pub use employer_cost::calculate_employer_cost;
pub use gross_pay::{DOUBLE_TIME_MULTIPLIER, OVERTIME_MULTIPLIER, calculate_gross_pay};
pub use pipeline::compute_employee_record;
pub use tax::{calculate_withholding, progressive_annual_tax};
pub use time_accounting::{
    DOUBLE_TIME_DAILY_THRESHOLD, REGULAR_DAILY_THRESHOLD, TimesheetFallback, classify_attendance,
};
