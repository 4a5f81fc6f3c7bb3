//! Thirteenth-salary calculation functionality.
//!
//! This module computes the proportional 13th-month bonus for the calendar
//! year of the termination: a twelfth of the base salary per month worked
//! since the later of the admission date and January 1st, counting the
//! partial starting month as a full one.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::ServicePeriod;
use crate::models::{AuditStep, Employee, TerminationRequest};

/// The result of the 13th-salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ThirteenthResult {
    /// The proportional 13th-month bonus.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional 13th-month bonus.
///
/// The accrual period starts at `max(admission_date, January 1st of the
/// termination year)` and the month count is inclusive of the partial
/// starting month: the whole-month difference plus one. If either date is
/// missing, or the period start falls after the termination date, the
/// amount stays at zero.
///
/// # Arguments
///
/// * `employee` - The employee being settled
/// * `request` - The termination parameters
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Lei 4.090/1962 art. 3 grants the proportional bonus on termination.
pub fn calculate_thirteenth(
    employee: &Employee,
    request: &TerminationRequest,
    step_number: u32,
) -> ThirteenthResult {
    let (admission, termination) = match (employee.admission_date, request.termination_date) {
        (Some(a), Some(t)) => (a, t),
        _ => {
            return zero_result(
                step_number,
                serde_json::json!({
                    "admission_date": employee.admission_date.map(|d| d.to_string()),
                    "termination_date": request.termination_date.map(|d| d.to_string())
                }),
                "Admission or termination date missing - no 13th salary calculated",
            );
        }
    };

    let year_start =
        NaiveDate::from_ymd_opt(termination.year(), 1, 1).unwrap_or(termination);
    let period_start = admission.max(year_start);

    if period_start > termination {
        return zero_result(
            step_number,
            serde_json::json!({
                "period_start": period_start.to_string(),
                "termination_date": termination.to_string()
            }),
            "Accrual period starts after the termination date - no 13th salary calculated",
        );
    }

    // Whole months plus the partial starting month.
    let months_worked = ServicePeriod::between(period_start, termination).total_months() + 1;
    let amount = employee.base_salary * Decimal::from(months_worked) / Decimal::from(12);

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_salary".to_string(),
        rule_name: "Proportional 13th Salary".to_string(),
        statute_ref: "Lei 4.090/1962 art. 3".to_string(),
        input: serde_json::json!({
            "base_salary": employee.base_salary.normalize().to_string(),
            "period_start": period_start.to_string(),
            "termination_date": termination.to_string()
        }),
        output: serde_json::json!({
            "months_worked": months_worked,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} / 12 x {} month(s) worked this year = R${}",
            employee.base_salary.normalize(),
            months_worked,
            amount.normalize()
        ),
    };

    ThirteenthResult { amount, audit_step }
}

fn zero_result(step_number: u32, input: serde_json::Value, reasoning: &str) -> ThirteenthResult {
    ThirteenthResult {
        amount: Decimal::ZERO,
        audit_step: AuditStep {
            step_number,
            rule_id: "thirteenth_salary".to_string(),
            rule_name: "Proportional 13th Salary".to_string(),
            statute_ref: "Lei 4.090/1962 art. 3".to_string(),
            input,
            output: serde_json::json!({ "amount": "0" }),
            reasoning: reasoning.to_string(),
        },
    }
}
