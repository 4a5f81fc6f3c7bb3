//! Social-withholding calculation functionality.
//!
//! This module computes the social-security withholding on the settlement.
//! The bracket table is applied as a flat rate on the entire contribution
//! base, not progressively per bracket slice, and the base excludes the
//! severance-fund amounts.

use rust_decimal::Decimal;

use crate::config::RuleSet;
use crate::models::AuditStep;

/// The result of the withholding calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct WithholdingResult {
    /// The withheld amount.
    pub amount: Decimal,
    /// The flat rate that was applied.
    pub rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the social withholding on the contribution base.
///
/// The base is the sum of accrued salary, both vacation amounts, the 13th
/// salary, and the notice indemnity (severance-fund amounts are excluded
/// by the caller). The first bracket whose inclusive upper bound contains
/// the base supplies a flat rate that multiplies the whole base.
///
/// # Arguments
///
/// * `contribution_base` - The gross amount subject to withholding
/// * `rules` - The settlement rule set supplying the bracket table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Lei 8.212/1991 art. 28 defines the contribution base.
pub fn calculate_withholding(
    contribution_base: Decimal,
    rules: &RuleSet,
    step_number: u32,
) -> WithholdingResult {
    let rate = rules.withholding().rate_for(contribution_base);
    let amount = contribution_base * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_withholding".to_string(),
        rule_name: "Social Withholding".to_string(),
        statute_ref: rules.withholding().statute.clone(),
        input: serde_json::json!({
            "contribution_base": contribution_base.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} x {} = R${}",
            contribution_base.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    WithholdingResult {
        amount,
        rate,
        audit_step,
    }
}
