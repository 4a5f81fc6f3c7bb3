//! Severance-fund calculation functionality.
//!
//! This module computes the severance-fund amounts owed on termination.
//! The fund balance is approximated as a fixed fraction of the base salary
//! per month of tenure; dismissal without cause releases the balance for
//! withdrawal and adds the employer penalty on top.

use rust_decimal::Decimal;

use super::ServicePeriod;
use crate::config::RuleSet;
use crate::models::{AuditStep, Employee, TerminationRequest, TerminationType};

/// The result of the severance-fund calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SeveranceFundResult {
    /// The employer penalty on the fund balance.
    pub penalty: Decimal,
    /// The fund balance released for withdrawal.
    pub withdrawal: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the severance-fund penalty and withdrawal.
///
/// The accrued balance is `base_salary * monthly_rate * total_months` over
/// the same admission-to-termination interval used for vacation. Only a
/// dismissal without cause releases anything: the full balance for
/// withdrawal plus the dismissal penalty. Other termination types leave
/// both amounts at zero, as does a missing admission or termination date.
///
/// # Arguments
///
/// * `employee` - The employee being settled
/// * `request` - The termination parameters
/// * `rules` - The settlement rule set supplying the fund rates
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Lei 8.036/1990 art. 18 governs the fund deposit and the dismissal
/// penalty.
pub fn calculate_severance_fund(
    employee: &Employee,
    request: &TerminationRequest,
    rules: &RuleSet,
    step_number: u32,
) -> SeveranceFundResult {
    let fund_rules = &rules.entitlements().severance_fund;
    let statute_ref = fund_rules.statute.clone();

    let (admission, termination) = match (employee.admission_date, request.termination_date) {
        (Some(a), Some(t)) => (a, t),
        _ => {
            let audit_step = AuditStep {
                step_number,
                rule_id: "severance_fund".to_string(),
                rule_name: "Severance Fund".to_string(),
                statute_ref,
                input: serde_json::json!({
                    "admission_date": employee.admission_date.map(|d| d.to_string()),
                    "termination_date": request.termination_date.map(|d| d.to_string())
                }),
                output: serde_json::json!({
                    "penalty": "0",
                    "withdrawal": "0"
                }),
                reasoning: "Admission or termination date missing - no fund amounts calculated"
                    .to_string(),
            };
            return SeveranceFundResult {
                penalty: Decimal::ZERO,
                withdrawal: Decimal::ZERO,
                audit_step,
            };
        }
    };

    let total_months = ServicePeriod::between(admission, termination).total_months();
    let fund_total =
        employee.base_salary * fund_rules.monthly_rate * Decimal::from(total_months);

    let released = matches!(request.termination_type, TerminationType::WithoutCause);
    let (penalty, withdrawal) = if released {
        (fund_total * fund_rules.dismissal_penalty_rate, fund_total)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let reasoning = if released {
        format!(
            "R${} x {} x {} months accrues R${}; dismissal without cause releases it with a {} penalty of R${}",
            employee.base_salary.normalize(),
            fund_rules.monthly_rate.normalize(),
            total_months,
            fund_total.normalize(),
            fund_rules.dismissal_penalty_rate.normalize(),
            penalty.normalize()
        )
    } else {
        format!(
            "Fund balance of R${} is not released for {:?} terminations",
            fund_total.normalize(),
            request.termination_type
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "Severance Fund".to_string(),
        statute_ref,
        input: serde_json::json!({
            "base_salary": employee.base_salary.normalize().to_string(),
            "termination_type": request.termination_type,
            "total_months": total_months,
            "monthly_rate": fund_rules.monthly_rate.normalize().to_string(),
            "dismissal_penalty_rate": fund_rules.dismissal_penalty_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "fund_total": fund_total.normalize().to_string(),
            "penalty": penalty.normalize().to_string(),
            "withdrawal": withdrawal.normalize().to_string()
        }),
        reasoning,
    };

    SeveranceFundResult {
        penalty,
        withdrawal,
        audit_step,
    }
}
