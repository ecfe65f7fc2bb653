//! Attendance record model and related types.
//!
//! Attendance records are supplied by the time-tracking subsystem, one per
//! employee per day, and are immutable once recorded.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of day an attendance record covers.
///
/// Only [`AttendanceKind::Regular`] days are subject to the daily
/// overtime/double-time split; the other kinds accumulate into their own
/// hour buckets at the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceKind {
    /// A normal worked day.
    Regular,
    /// A paid holiday.
    Holiday,
    /// Paid sick leave.
    Sick,
    /// Paid vacation.
    Vacation,
}

/// A single day's attendance for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     hours: Decimal::new(80, 1), // 8.0
///     kind: AttendanceKind::Regular,
/// };
/// assert_eq!(record.kind, AttendanceKind::Regular);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The date the hours were worked (or taken, for leave kinds).
    pub date: NaiveDate,
    /// The number of hours for the day.
    pub hours: Decimal,
    /// The kind of day.
    pub kind: AttendanceKind,
}
