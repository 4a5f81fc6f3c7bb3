//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing workers in the settlement calculation system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the employment status of an employee.
///
/// The status is owned by the employee-records collaborator: after a
/// settlement is persisted, the collaborator (not the engine) moves the
/// employee to [`EmployeeStatus::Terminated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed.
    Active,
    /// Employment suspended or on leave.
    Inactive,
    /// Employment ended; a settlement has been recorded.
    Terminated,
}

fn default_status() -> EmployeeStatus {
    EmployeeStatus::Active
}

/// Represents an employee subject to settlement calculation.
///
/// The engine reads only `base_salary` and `admission_date`; the remaining
/// fields identify the employee and carry collaborator-owned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// The date the employee was admitted. Absent admission degrades the
    /// date-dependent settlement amounts to zero.
    pub admission_date: Option<NaiveDate>,
    /// The date employment ended, set by the collaborator after a settlement
    /// is persisted.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// The current employment status.
    #[serde(default = "default_status")]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana Souza".to_string(),
    ///     base_salary: Decimal::new(300000, 2),
    ///     admission_date: NaiveDate::from_ymd_opt(2020, 1, 15),
    ///     termination_date: None,
    ///     status: EmployeeStatus::Active,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Validates the employee record for settlement calculation.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` for a well-formed record, or `InvalidEmployee` if
    /// the base salary is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "base_salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
