//! Payroll run orchestration.
//!
//! This module contains the collaborator ports the engine consumes
//! (employee directory, attendance, benefits, persistence, completion
//! listener) and the [`PayrollProcessor`] that fans per-employee
//! pipelines out across a task set and merges their results into a
//! finalized [`PayrollRun`](crate::models::PayrollRun).

mod orchestrator;
mod ports;

pub use orchestrator::PayrollProcessor;
pub use ports::{
    AttendanceProvider, BenefitsProvider, EmployeeDirectory, PayrollStore, RunCompletionListener,
};
