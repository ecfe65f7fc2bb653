//! Collaborator ports for the payroll run orchestrator.
//!
//! The engine does not own employee data, attendance, benefit elections,
//! or persistence; it consumes them through these async traits. Tests and
//! benchmarks provide in-memory implementations; production wires them to
//! the employee directory, time-tracking, benefits, and storage
//! subsystems.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::PayrollResult;
use crate::models::{
    AttendanceRecord, BenefitElection, CompensationProfile, EmployeePayrollRecord, PayrollRun,
};

/// Read-only access to the employee directory.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the ids of all employees active for payroll.
    async fn active_employee_ids(&self) -> PayrollResult<Vec<String>>;

    /// Returns the compensation profile for one employee.
    async fn compensation_profile(&self, employee_id: &str) -> PayrollResult<CompensationProfile>;
}

/// Read-only access to the time-tracking subsystem.
#[async_trait]
pub trait AttendanceProvider: Send + Sync {
    /// Returns the attendance records for one employee within a date
    /// range (inclusive).
    async fn attendance(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<Vec<AttendanceRecord>>;
}

/// Read-only access to the benefits-election subsystem.
#[async_trait]
pub trait BenefitsProvider: Send + Sync {
    /// Returns the benefit elections for one employee.
    async fn benefit_elections(&self, employee_id: &str) -> PayrollResult<BenefitElection>;
}

/// Durable storage for finalized payroll output.
///
/// Records are keyed by (employee id, pay period) and are write-once: a
/// correction run supersedes a record, it never mutates one in place.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Persists one employee's payroll record.
    async fn persist_record(&self, record: &EmployeePayrollRecord) -> PayrollResult<()>;

    /// Persists the finalized run.
    async fn persist_run(&self, run: &PayrollRun) -> PayrollResult<()>;
}

/// Receiver for the run-completion event.
///
/// Notified only after the run is finalized and persisted; downstream
/// notification/reporting subsystems hang off this.
#[async_trait]
pub trait RunCompletionListener: Send + Sync {
    /// Called once per finalized run.
    async fn run_completed(&self, run: &PayrollRun);
}
