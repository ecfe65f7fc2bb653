//! The payroll run orchestrator.
//!
//! For one pay period and a set of employees, [`PayrollProcessor`] loads
//! each employee's inputs, fans the per-employee pipelines out onto a
//! task set, and after all tasks resolve (success or caught failure)
//! aggregates totals, runs compliance checks, finalizes the run, persists
//! it, and emits the run-completion event.
//!
//! Partial-failure semantics: one employee's error is recorded in the
//! run's error list and never stops other employees. Run-fatal
//! configuration problems are rejected before any employee is processed
//! and leave no partial run persisted.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::calculation::{TimesheetFallback, compute_employee_record};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    ComplianceFinding, CompensationProfile, EmployeeError, EmployeePayrollRecord, PayPeriod,
    PayrollRun, RunTotals,
};

use super::ports::{
    AttendanceProvider, BenefitsProvider, EmployeeDirectory, PayrollStore, RunCompletionListener,
};

/// Net pay this far below zero is tolerated without a compliance
/// finding (rounding slack).
const NEGATIVE_NET_GRACE: Decimal = Decimal::from_parts(1, 0, 0, true, 2);

/// Orchestrates payroll runs against a fixed set of collaborators and an
/// immutable configuration snapshot.
///
/// The processor holds no per-run state, so it is safe to invoke
/// concurrently for disjoint pay periods. It is triggered externally (by
/// a scheduler or API layer); it runs no timers of its own.
pub struct PayrollProcessor {
    directory: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceProvider>,
    benefits: Arc<dyn BenefitsProvider>,
    store: Arc<dyn PayrollStore>,
    listener: Arc<dyn RunCompletionListener>,
    config: Arc<PayrollConfig>,
    fallback: TimesheetFallback,
}

impl PayrollProcessor {
    /// Creates a processor over the given collaborators and configuration
    /// snapshot.
    ///
    /// Employees with no attendance records receive the standard
    /// full-period hours for their frequency
    /// ([`TimesheetFallback::StandardPeriodHours`]).
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        attendance: Arc<dyn AttendanceProvider>,
        benefits: Arc<dyn BenefitsProvider>,
        store: Arc<dyn PayrollStore>,
        listener: Arc<dyn RunCompletionListener>,
        config: PayrollConfig,
    ) -> Self {
        Self {
            directory,
            attendance,
            benefits,
            store,
            listener,
            config: Arc::new(config),
            fallback: TimesheetFallback::StandardPeriodHours,
        }
    }

    /// Executes a payroll run for the given pay period.
    ///
    /// `employee_ids` restricts the run to an explicit subset; `None`
    /// processes all active employees. Every requested employee id
    /// appears exactly once in the returned run, either in `records` or
    /// in `errors`.
    ///
    /// # Errors
    ///
    /// Returns a run-fatal error (and persists nothing) if the
    /// configuration is unusable for any requested employee
    /// (e.g. [`PayrollError::JurisdictionNotFound`]) or if persistence
    /// fails after finalization.
    pub async fn run(
        &self,
        period: PayPeriod,
        employee_ids: Option<Vec<String>>,
    ) -> PayrollResult<PayrollRun> {
        let ids = match employee_ids {
            Some(ids) => dedup_preserving_order(ids),
            None => dedup_preserving_order(self.directory.active_employee_ids().await?),
        };

        let mut run = PayrollRun::new(period.clone());
        info!(
            run_id = %run.id,
            employees = ids.len(),
            period_start = %period.start_date,
            period_end = %period.end_date,
            "payroll run started"
        );

        // Load profiles up front: a jurisdiction missing from the shared
        // tables is run-fatal and must abort before any employee is
        // processed. A profile that fails to load is that employee's own
        // error and does not block the rest.
        let mut loaded: Vec<(String, PayrollResult<CompensationProfile>)> =
            Vec::with_capacity(ids.len());
        for id in &ids {
            let result = self.directory.compensation_profile(id).await;
            if let Ok(profile) = &result {
                if !profile.jurisdiction.is_empty() {
                    self.config.tax.jurisdiction_rates(&profile.jurisdiction)?;
                }
            }
            loaded.push((id.clone(), result));
        }

        // Fan out one task per employee with a loaded profile.
        let mut tasks: JoinSet<(String, PayrollResult<EmployeePayrollRecord>)> = JoinSet::new();
        let mut empty_jurisdictions: HashSet<String> = HashSet::new();
        for (id, result) in loaded {
            let profile = match result {
                Ok(profile) => profile,
                Err(error) => {
                    warn!(employee_id = %id, %error, "failed to load compensation profile");
                    run.errors.push(EmployeeError {
                        employee_id: id,
                        message: error.to_string(),
                    });
                    continue;
                }
            };
            if profile.jurisdiction.is_empty() {
                empty_jurisdictions.insert(id.clone());
            }

            let attendance = Arc::clone(&self.attendance);
            let benefits = Arc::clone(&self.benefits);
            let config = Arc::clone(&self.config);
            let period = period.clone();
            let fallback = self.fallback;
            tasks.spawn(async move {
                let result =
                    process_employee(profile, attendance, benefits, config, period, fallback).await;
                (id, result)
            });
        }

        // Fan-in barrier: wait for every task, success or caught failure.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(record))) => run.records.push(record),
                Ok((id, Err(error))) => {
                    if error.is_run_fatal() {
                        return Err(error);
                    }
                    warn!(employee_id = %id, %error, "employee pipeline failed");
                    run.errors.push(EmployeeError {
                        employee_id: id,
                        message: error.to_string(),
                    });
                }
                Err(join_error) => {
                    // A panicked task carries no employee id; surface it
                    // as a run-level failure rather than lose an employee
                    // from the partition.
                    return Err(PayrollError::PersistenceFailed {
                        message: format!("employee task failed to join: {}", join_error),
                    });
                }
            }
        }

        // Aggregation runs single-threaded after the barrier; sorting
        // makes the output independent of task completion order.
        run.records.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        run.errors.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        run.totals = RunTotals::aggregate(&run.records);

        run.findings = compliance_findings(&run.records, &empty_jurisdictions);

        run.finalize()?;

        for record in &run.records {
            self.store.persist_record(record).await?;
        }
        self.store.persist_run(&run).await?;

        info!(
            run_id = %run.id,
            status = ?run.status,
            records = run.records.len(),
            errors = run.errors.len(),
            findings = run.findings.len(),
            "payroll run finalized"
        );
        self.listener.run_completed(&run).await;

        Ok(run)
    }
}

/// Loads one employee's remaining inputs and runs the pure pipeline.
async fn process_employee(
    profile: CompensationProfile,
    attendance: Arc<dyn AttendanceProvider>,
    benefits: Arc<dyn BenefitsProvider>,
    config: Arc<PayrollConfig>,
    period: PayPeriod,
    fallback: TimesheetFallback,
) -> PayrollResult<EmployeePayrollRecord> {
    let employee_id = profile.employee_id.clone();

    let records = attendance
        .attendance(&employee_id, period.start_date, period.end_date)
        .await
        .map_err(|e| PayrollError::CollaboratorUnavailable {
            employee_id: employee_id.clone(),
            source_name: "attendance".to_string(),
            message: e.to_string(),
        })?;
    let election = benefits
        .benefit_elections(&employee_id)
        .await
        .map_err(|e| PayrollError::CollaboratorUnavailable {
            employee_id: employee_id.clone(),
            source_name: "benefit elections".to_string(),
            message: e.to_string(),
        })?;

    compute_employee_record(&profile, &records, &election, &period, &config, fallback)
}

/// Run-level compliance checks over the successful records.
///
/// Findings flag records for manual review; they never block
/// finalization.
fn compliance_findings(
    records: &[EmployeePayrollRecord],
    empty_jurisdictions: &HashSet<String>,
) -> Vec<ComplianceFinding> {
    let mut findings = Vec::new();
    for record in records {
        if record.net_pay < NEGATIVE_NET_GRACE {
            findings.push(ComplianceFinding {
                employee_id: record.employee_id.clone(),
                code: "negative_net_pay".to_string(),
                message: format!(
                    "net pay {} is negative; record flagged for manual review",
                    record.net_pay.round_dp(2)
                ),
            });
        }
        if empty_jurisdictions.contains(&record.employee_id) {
            findings.push(ComplianceFinding {
                employee_id: record.employee_id.clone(),
                code: "missing_jurisdiction".to_string(),
                message: "no tax jurisdiction on profile; state tax not withheld".to_string(),
            });
        }
    }
    findings
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
