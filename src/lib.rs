//! Payroll Computation Engine
//!
//! This crate computes periodic payroll for a workforce: it classifies raw
//! attendance into hour buckets, derives a gross pay breakdown, statutory
//! tax withholding, benefit/retirement deductions, net pay, and the
//! employer-side cost, then aggregates per-employee results into an
//! auditable payroll run with partial-failure semantics (one employee's
//! error never aborts the run).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod run;
