//! Payroll Preview Engine
//!
//! This crate provides the payroll preview calculator used by the payroll capture
//! screen: it derives rates from an employee compensation snapshot and turns a
//! worked-time entry into a gross, statutory deduction, and net pay breakdown
//! before the entry is submitted for authoritative processing.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
