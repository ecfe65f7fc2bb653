//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.
//!
//! Errors fall into two classes with different propagation rules:
//!
//! - **Per-employee errors** are isolated: the affected employee is
//!   excluded from the run's totals and recorded in the run's error list,
//!   and the remaining employees continue processing.
//! - **Run-fatal errors** (shared configuration problems, persistence
//!   failures) abort the whole run before any employee is processed,
//!   since every employee depends on the same tables.
//!
//! Use [`PayrollError::is_run_fatal`] to distinguish the two.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
/// assert!(error.is_run_fatal());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration was parsed but violates a structural invariant
    /// (unordered brackets, a gap between brackets, a rate outside 0..=1).
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// No tax rates are configured for the given jurisdiction code.
    ///
    /// This is run-fatal: jurisdiction rates are shared tables, and a
    /// missing entry would silently under-withhold for every affected
    /// employee.
    #[error("No tax rates configured for jurisdiction: {code}")]
    JurisdictionNotFound {
        /// The jurisdiction (state) code that was not found.
        code: String,
    },

    /// An attendance record was invalid (negative hours, wrong period).
    #[error("Invalid attendance for employee '{employee_id}': {message}")]
    InvalidAttendance {
        /// The employee whose attendance was invalid.
        employee_id: String,
        /// A description of what made the attendance invalid.
        message: String,
    },

    /// A compensation profile field was invalid or inconsistent.
    #[error("Invalid profile field '{field}' for employee '{employee_id}': {message}")]
    InvalidProfile {
        /// The employee whose profile was invalid.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An internal arithmetic precondition was violated for one employee.
    #[error("Computation error for employee '{employee_id}': {message}")]
    Computation {
        /// The employee whose computation failed.
        employee_id: String,
        /// A description of the computation error.
        message: String,
    },

    /// A collaborator (directory, attendance, benefits) failed while
    /// loading one employee's inputs.
    #[error("Failed to load {source_name} for employee '{employee_id}': {message}")]
    CollaboratorUnavailable {
        /// The employee whose inputs could not be loaded.
        employee_id: String,
        /// The collaborator that failed (e.g. "attendance").
        source_name: String,
        /// A description of the failure.
        message: String,
    },

    /// A payroll run was finalized more than once.
    #[error("Payroll run {run_id} is already finalized")]
    RunAlreadyFinalized {
        /// The id of the run.
        run_id: Uuid,
    },

    /// The persistence layer rejected a finalized run or record.
    #[error("Failed to persist payroll output: {message}")]
    PersistenceFailed {
        /// A description of the persistence failure.
        message: String,
    },
}

impl PayrollError {
    /// Returns `true` if this error aborts the entire run rather than a
    /// single employee's pipeline.
    pub fn is_run_fatal(&self) -> bool {
        matches!(
            self,
            PayrollError::ConfigNotFound { .. }
                | PayrollError::ConfigParseError { .. }
                | PayrollError::InvalidConfig { .. }
                | PayrollError::JurisdictionNotFound { .. }
                | PayrollError::RunAlreadyFinalized { .. }
                | PayrollError::PersistenceFailed { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
