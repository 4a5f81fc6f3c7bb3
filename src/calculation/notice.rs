//! Notice-period indemnity calculation functionality.
//!
//! This module computes the payment in lieu of a worked notice period. The
//! indemnity is one month's base salary and is owed only on dismissal
//! without cause when the notice is indemnified rather than worked.

use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::{AuditStep, Employee, TerminationRequest, TerminationType};

/// The result of the notice-indemnity calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NoticeResult {
    /// The notice-period indemnity.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the notice-period indemnity.
///
/// One month's base salary is owed when the termination is a dismissal
/// without cause and the request marks the notice as indemnified; every
/// other combination yields zero. Worked notice and the indemnity rules of
/// the other termination types are deliberately out of scope.
///
/// # Arguments
///
/// * `employee` - The employee being settled
/// * `request` - The termination parameters
/// * `rules` - The settlement rule set supplying the statute reference
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// CLT art. 487, §1º governs the indemnified notice period.
pub fn calculate_notice_indemnity(
    employee: &Employee,
    request: &TerminationRequest,
    rules: &RuleSet,
    step_number: u32,
) -> NoticeResult {
    let qualifies = matches!(request.termination_type, TerminationType::WithoutCause)
        && request.notice_indemnified;

    let amount = if qualifies {
        employee.base_salary
    } else {
        Decimal::ZERO
    };

    let reasoning = if qualifies {
        format!(
            "Dismissal without cause with indemnified notice pays one month's salary: R${}",
            amount.normalize()
        )
    } else if request.notice_indemnified {
        "Notice indemnity applies only to dismissal without cause".to_string()
    } else {
        "Notice was not indemnified".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_indemnity".to_string(),
        rule_name: "Notice-Period Indemnity".to_string(),
        statute_ref: rules.entitlements().notice.statute.clone(),
        input: serde_json::json!({
            "base_salary": employee.base_salary.normalize().to_string(),
            "termination_type": request.termination_type,
            "notice_indemnified": request.notice_indemnified,
            "notice_days": request.notice_days
        }),
        output: serde_json::json!({
            "qualifies": qualifies,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    NoticeResult { amount, audit_step }
}
