//! Settlement orchestration.
//!
//! This module runs the sub-calculations in their fixed order, assembles
//! the itemized breakdown from their outputs, and aggregates the totals.
//! Each sub-calculation is pure; the orchestrator only wires their results
//! together, so calculating twice with identical inputs yields identical
//! output whether the caller persists the breakdown or discards it after a
//! simulation.

use tracing::{debug, info, warn};

use crate::config::RuleSet;
use crate::models::{
    AuditTrace, AuditWarning, Employee, SettlementBreakdown, SettlementCalculation,
    TerminationRequest,
};

use super::accrued_salary::calculate_accrued_salary;
use super::notice::calculate_notice_indemnity;
use super::severance_fund::calculate_severance_fund;
use super::thirteenth::calculate_thirteenth;
use super::vacation::calculate_vacation;
use super::withholding::calculate_withholding;

/// Calculates a termination settlement.
///
/// Runs the full pipeline (accrued salary, vacation, 13th salary, notice
/// indemnity, severance fund, withholding, totals) and returns the
/// itemized breakdown. Missing dates degrade the affected amounts to zero
/// instead of failing.
///
/// # Arguments
///
/// * `employee` - The employee snapshot (base salary, admission date)
/// * `request` - The termination parameters
/// * `rules` - The settlement rule set
///
/// # Example
///
/// ```no_run
/// use settlement_engine::calculation::calculate;
/// use settlement_engine::config::RuleSet;
/// use settlement_engine::models::{Employee, EmployeeStatus, TerminationRequest, TerminationType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::load("./config/clt").unwrap();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana Souza".to_string(),
///     base_salary: Decimal::new(300000, 2),
///     admission_date: NaiveDate::from_ymd_opt(2020, 1, 15),
///     termination_date: None,
///     status: EmployeeStatus::Active,
/// };
/// let request = TerminationRequest {
///     termination_type: TerminationType::WithoutCause,
///     termination_date: NaiveDate::from_ymd_opt(2023, 1, 15),
///     notice_date: None,
///     notice_indemnified: true,
///     notice_days: 30,
///     tax_withholding: Decimal::ZERO,
///     other_deductions: Decimal::ZERO,
///     observations: None,
/// };
///
/// let breakdown = calculate(&employee, &request, &rules);
/// assert_eq!(breakdown.gross_total, breakdown.net_total + breakdown.social_withholding);
/// ```
pub fn calculate(
    employee: &Employee,
    request: &TerminationRequest,
    rules: &RuleSet,
) -> SettlementBreakdown {
    calculate_traced(employee, request, rules).breakdown
}

/// Calculates a termination settlement with its audit trace.
///
/// Identical to [`calculate`], additionally returning the rule-by-rule
/// derivation of every amount. The trace contains no clocks or
/// identifiers, so it is as deterministic as the breakdown.
pub fn calculate_traced(
    employee: &Employee,
    request: &TerminationRequest,
    rules: &RuleSet,
) -> SettlementCalculation {
    debug!(
        employee_id = %employee.id,
        termination_type = ?request.termination_type,
        "Calculating settlement"
    );

    let mut warnings: Vec<AuditWarning> = Vec::new();
    if employee.admission_date.is_none() {
        warn!(employee_id = %employee.id, "Admission date missing; tenure-based amounts are zero");
        warnings.push(AuditWarning {
            code: "missing_admission_date".to_string(),
            message: "Admission date absent; tenure-based amounts are zero".to_string(),
            severity: "medium".to_string(),
        });
    }
    if request.termination_date.is_none() {
        warn!(employee_id = %employee.id, "Termination date missing; date-based amounts are zero");
        warnings.push(AuditWarning {
            code: "missing_termination_date".to_string(),
            message: "Termination date absent; date-based amounts are zero".to_string(),
            severity: "high".to_string(),
        });
    }

    let accrued = calculate_accrued_salary(employee, request, rules, 1);
    let vacation = calculate_vacation(employee, request, 2);
    let thirteenth = calculate_thirteenth(employee, request, 3);
    let notice = calculate_notice_indemnity(employee, request, rules, 4);
    let fund = calculate_severance_fund(employee, request, rules, 5);

    // The contribution base excludes the severance-fund amounts.
    let contribution_base = accrued.amount
        + vacation.matured
        + vacation.prorated
        + thirteenth.amount
        + notice.amount;
    let withholding = calculate_withholding(contribution_base, rules, 6);

    let mut breakdown = SettlementBreakdown::from_request(request);
    breakdown.accrued_salary = accrued.amount;
    breakdown.matured_vacation = vacation.matured;
    breakdown.prorated_vacation = vacation.prorated;
    breakdown.prorated_thirteenth = thirteenth.amount;
    breakdown.notice_indemnity = notice.amount;
    breakdown.severance_fund_penalty = fund.penalty;
    breakdown.severance_fund_withdrawal = fund.withdrawal;
    breakdown.social_withholding = withholding.amount;

    breakdown.gross_total = breakdown.accrued_salary
        + breakdown.matured_vacation
        + breakdown.prorated_vacation
        + breakdown.prorated_thirteenth
        + breakdown.notice_indemnity
        + breakdown.severance_fund_penalty
        + breakdown.severance_fund_withdrawal;
    breakdown.net_total = breakdown.gross_total
        - breakdown.social_withholding
        - breakdown.tax_withholding
        - breakdown.other_deductions;

    info!(
        employee_id = %employee.id,
        gross_total = %breakdown.gross_total,
        net_total = %breakdown.net_total,
        "Settlement calculated"
    );

    let audit_trace = AuditTrace {
        steps: vec![
            accrued.audit_step,
            vacation.audit_step,
            thirteenth.audit_step,
            notice.audit_step,
            fund.audit_step,
            withholding.audit_step,
        ],
        warnings,
    };

    SettlementCalculation {
        breakdown,
        audit_trace,
    }
}
