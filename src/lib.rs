//! Termination Settlement Engine for CLT-style employment rules
//!
//! This crate calculates the financial settlement owed to an employee when an
//! employment relationship ends: accrued salary for the termination month,
//! matured and prorated vacation, the proportional 13th-month bonus, the
//! notice-period indemnity, severance-fund accrual and penalty, and the
//! social withholding deducted to reach the net payable amount.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
