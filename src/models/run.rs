//! Payroll run result models.
//!
//! This module contains the per-employee [`EmployeePayrollRecord`] and the
//! run-level [`PayrollRun`] aggregate, along with the error and compliance
//! entries that partition a run's employees into successes and failures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

use super::breakdown::{
    DeductionBreakdown, EmployerCostBreakdown, GrossPayBreakdown, HourBreakdown, TaxWithholding,
};
use super::pay_period::PayPeriod;

/// The lifecycle status of a payroll run.
///
/// A run starts in `Processing` and moves exactly once to one of the two
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Employees are still being processed.
    Processing,
    /// All employees processed without error.
    Completed,
    /// The run finished, but one or more employees failed.
    CompletedWithErrors,
}

/// The finished payroll computation for one employee and one pay period.
///
/// Created once per (employee, pay period) and immutable after the run
/// finalizes; a correction run supersedes it, it is never mutated in
/// place. The record carries no timestamp or generated id, so identical
/// inputs against the same configuration snapshot serialize to an
/// identical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The pay period the record covers.
    pub pay_period: PayPeriod,
    /// Classified hours for the period.
    pub hours: HourBreakdown,
    /// Gross pay components.
    pub gross_pay: GrossPayBreakdown,
    /// Statutory withholding components.
    pub taxes: TaxWithholding,
    /// Benefit and retirement deduction components.
    pub deductions: DeductionBreakdown,
    /// Employer-borne cost components.
    pub employer_cost: EmployerCostBreakdown,
    /// Net pay: gross total minus tax total minus deduction total,
    /// computed once at record assembly.
    pub net_pay: Decimal,
}

/// A per-employee failure recorded in a run's error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeError {
    /// The employee whose pipeline failed.
    pub employee_id: String,
    /// The rendered error message.
    pub message: String,
}

/// A run-level compliance finding.
///
/// Findings flag records for manual review; they never block
/// finalization and never exclude a record from the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    /// The employee the finding concerns.
    pub employee_id: String,
    /// A stable code identifying the kind of finding
    /// (e.g. "negative_net_pay", "missing_jurisdiction").
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

/// Aggregate totals across all successful records in a run.
///
/// Each field is the sum of the corresponding named total over the
/// records; aggregation happens after fan-in, so the figures are
/// independent of task completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    /// Sum of gross pay totals.
    pub gross_pay: Decimal,
    /// Sum of tax withholding totals.
    pub taxes: Decimal,
    /// Sum of deduction totals.
    pub deductions: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
    /// Sum of employer cost totals.
    pub employer_cost: Decimal,
}

impl RunTotals {
    /// Aggregates totals over a slice of successful records.
    pub fn aggregate(records: &[EmployeePayrollRecord]) -> Self {
        let mut totals = RunTotals::default();
        for record in records {
            totals.gross_pay += record.gross_pay.total();
            totals.taxes += record.taxes.total();
            totals.deductions += record.deductions.total();
            totals.net_pay += record.net_pay;
            totals.employer_cost += record.employer_cost.total();
        }
        totals
    }
}

/// A complete payroll run: the unit of work the orchestrator produces.
///
/// Every employee id submitted to the run appears exactly once, either in
/// `records` or in `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub id: Uuid,
    /// The pay period the run covers.
    pub pay_period: PayPeriod,
    /// Lifecycle status.
    pub status: RunStatus,
    /// Successful per-employee records.
    pub records: Vec<EmployeePayrollRecord>,
    /// Aggregate totals over the successful records.
    pub totals: RunTotals,
    /// Per-employee failures.
    pub errors: Vec<EmployeeError>,
    /// Compliance findings, populated after aggregation.
    pub findings: Vec<ComplianceFinding>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run was finalized. `None` while processing.
    pub finalized_at: Option<DateTime<Utc>>,
}

impl PayrollRun {
    /// Creates a new run in the `Processing` state.
    pub fn new(pay_period: PayPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            pay_period,
            status: RunStatus::Processing,
            records: Vec::new(),
            totals: RunTotals::default(),
            errors: Vec::new(),
            findings: Vec::new(),
            started_at: Utc::now(),
            finalized_at: None,
        }
    }

    /// Finalizes the run exactly once.
    ///
    /// The terminal status is `Completed` if no per-employee errors were
    /// recorded, otherwise `CompletedWithErrors`. Finalizing an already
    /// finalized run is an error.
    pub fn finalize(&mut self) -> PayrollResult<()> {
        if self.status != RunStatus::Processing {
            return Err(PayrollError::RunAlreadyFinalized { run_id: self.id });
        }
        self.status = if self.errors.is_empty() {
            RunStatus::Completed
        } else {
            RunStatus::CompletedWithErrors
        };
        self.finalized_at = Some(Utc::now());
        Ok(())
    }

    /// Returns `true` once the run has reached a terminal status.
    pub fn is_finalized(&self) -> bool {
        self.status != RunStatus::Processing
    }
}
