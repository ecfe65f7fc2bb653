//! Time accounting: classifying raw attendance into hour buckets.
//!
//! Regular worked days are split against daily thresholds: hours up to 8
//! are regular, hours between 8 and 12 are overtime, and hours above 12
//! are double-time. The split is evaluated per attendance record (one
//! record per day), never against weekly totals. Holiday, sick, and
//! vacation days accumulate directly into their own buckets.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceKind, AttendanceRecord, HourBreakdown, PayPeriod};

/// Daily hours at or below this threshold are regular time.
pub const REGULAR_DAILY_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Daily hours above this threshold are double-time; hours between the
/// regular threshold and this one are overtime.
pub const DOUBLE_TIME_DAILY_THRESHOLD: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Policy applied when an employee has no attendance records for the
/// period.
///
/// Salaried employees often submit no timesheet; granting the standard
/// full-time allotment for the period is an explicit, named policy rather
/// than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesheetFallback {
    /// Grant the standard full-time regular hours for the period's
    /// frequency (2080 annual hours spread evenly).
    StandardPeriodHours,
    /// Produce an empty breakdown (zero hours, zero pay).
    Empty,
}

/// Classifies one employee's attendance for one pay period into hour
/// buckets.
///
/// # Arguments
///
/// * `employee_id` - The employee the records must belong to
/// * `records` - The attendance records for the period
/// * `period` - The pay period being processed
/// * `fallback` - Policy applied when `records` is empty
///
/// # Errors
///
/// Returns [`PayrollError::InvalidAttendance`] if any record has negative
/// hours, belongs to a different employee, or falls outside the period.
/// (`Decimal` cannot represent non-finite values; those are rejected at
/// deserialization.)
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{classify_attendance, TimesheetFallback};
/// use payroll_engine::models::{AttendanceRecord, AttendanceKind, PayPeriod, PayFrequency};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
///     frequency: PayFrequency::BiWeekly,
/// };
/// let records = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     hours: Decimal::from(13),
///     kind: AttendanceKind::Regular,
/// }];
///
/// let hours = classify_attendance("emp_001", &records, &period,
///     TimesheetFallback::StandardPeriodHours).unwrap();
/// assert_eq!(hours.regular, Decimal::from(8));
/// assert_eq!(hours.overtime, Decimal::from(4));
/// assert_eq!(hours.double_time, Decimal::from(1));
/// ```
pub fn classify_attendance(
    employee_id: &str,
    records: &[AttendanceRecord],
    period: &PayPeriod,
    fallback: TimesheetFallback,
) -> PayrollResult<HourBreakdown> {
    if records.is_empty() {
        return Ok(match fallback {
            TimesheetFallback::StandardPeriodHours => HourBreakdown {
                regular: period.frequency.standard_period_hours(),
                ..Default::default()
            },
            TimesheetFallback::Empty => HourBreakdown::default(),
        });
    }

    let mut hours = HourBreakdown::default();

    for record in records {
        if record.employee_id != employee_id {
            return Err(PayrollError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                message: format!(
                    "record dated {} belongs to employee '{}'",
                    record.date, record.employee_id
                ),
            });
        }
        if record.hours < Decimal::ZERO {
            return Err(PayrollError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                message: format!("negative hours on {}: {}", record.date, record.hours),
            });
        }
        if !period.contains_date(record.date) {
            return Err(PayrollError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                message: format!(
                    "record dated {} is outside the pay period {}..={}",
                    record.date, period.start_date, period.end_date
                ),
            });
        }

        match record.kind {
            AttendanceKind::Regular => {
                hours.regular += record.hours.min(REGULAR_DAILY_THRESHOLD);
                if record.hours > REGULAR_DAILY_THRESHOLD {
                    hours.overtime += (record.hours - REGULAR_DAILY_THRESHOLD)
                        .min(DOUBLE_TIME_DAILY_THRESHOLD - REGULAR_DAILY_THRESHOLD);
                }
                if record.hours > DOUBLE_TIME_DAILY_THRESHOLD {
                    hours.double_time += record.hours - DOUBLE_TIME_DAILY_THRESHOLD;
                }
            }
            AttendanceKind::Holiday => hours.holiday += record.hours,
            AttendanceKind::Sick => hours.sick += record.hours,
            AttendanceKind::Vacation => hours.vacation += record.hours,
        }
    }

    Ok(hours)
}
