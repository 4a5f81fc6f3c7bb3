//! Accrued-salary calculation functionality.
//!
//! This module computes the salary owed for the days worked in the
//! termination month, using the fixed payroll convention that every month
//! has the number of days given by the rule set (30 under the shipped
//! rules, regardless of the calendar month's actual length).

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::{AuditStep, Employee, TerminationRequest};

/// The result of the accrued-salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AccruedSalaryResult {
    /// The salary owed for days worked in the termination month.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary accrued in the termination month.
///
/// The amount is `base_salary / month_days * day-of-month` of the
/// termination date. A missing termination date leaves the amount at zero
/// rather than failing.
///
/// # Arguments
///
/// * `employee` - The employee being settled
/// * `request` - The termination parameters
/// * `rules` - The settlement rule set supplying `month_days`
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// CLT art. 477 governs payment of outstanding salary on termination.
pub fn calculate_accrued_salary(
    employee: &Employee,
    request: &TerminationRequest,
    rules: &RuleSet,
    step_number: u32,
) -> AccruedSalaryResult {
    let statute_ref = rules.entitlements().accrued_salary.statute.clone();
    let month_days = rules.entitlements().accrued_salary.month_days;

    let Some(termination_date) = request.termination_date else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "accrued_salary".to_string(),
            rule_name: "Accrued Salary".to_string(),
            statute_ref,
            input: serde_json::json!({
                "base_salary": employee.base_salary.normalize().to_string(),
                "termination_date": null
            }),
            output: serde_json::json!({
                "amount": "0"
            }),
            reasoning: "Termination date missing - no accrued salary calculated".to_string(),
        };
        return AccruedSalaryResult {
            amount: Decimal::ZERO,
            audit_step,
        };
    };

    let days_worked = termination_date.day();
    let amount = employee.base_salary * Decimal::from(days_worked) / Decimal::from(month_days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "accrued_salary".to_string(),
        rule_name: "Accrued Salary".to_string(),
        statute_ref,
        input: serde_json::json!({
            "base_salary": employee.base_salary.normalize().to_string(),
            "termination_date": termination_date.to_string(),
            "month_days": month_days
        }),
        output: serde_json::json!({
            "days_worked": days_worked,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} / {} x {} days worked = R${}",
            employee.base_salary.normalize(),
            month_days,
            days_worked,
            amount.normalize()
        ),
    };

    AccruedSalaryResult { amount, audit_step }
}
