//! Settlement result models for the Termination Settlement Engine.
//!
//! This module contains the [`SettlementBreakdown`] produced by every
//! calculation, the [`SettlementCalculation`] wrapper that carries the audit
//! trace alongside it, and the [`SettlementRecord`] envelope handed to the
//! persistence collaborator.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TerminationRequest, TerminationType};

/// The itemized result of a settlement calculation.
///
/// A breakdown is produced fresh by every calculation and has no identity of
/// its own: calculating twice with identical inputs yields identical
/// breakdowns, whether the caller persists the result or discards it after a
/// what-if simulation.
///
/// Two invariants hold for every breakdown the engine produces:
///
/// * `gross_total` is the exact sum of the seven entitlement amounts;
/// * `net_total` is `gross_total` minus the three deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBreakdown {
    /// The legal form of the termination, echoed from the request.
    pub termination_type: TerminationType,
    /// The termination date, echoed from the request.
    pub termination_date: Option<NaiveDate>,
    /// The notice date, echoed from the request.
    pub notice_date: Option<NaiveDate>,
    /// Whether the notice period was indemnified, echoed from the request.
    pub notice_indemnified: bool,
    /// The notice period length in days, echoed from the request.
    pub notice_days: u32,

    /// Salary owed for days worked in the termination month.
    pub accrued_salary: Decimal,
    /// Vacation entitlement from fully completed years of tenure.
    pub matured_vacation: Decimal,
    /// Vacation accrued in the current, incomplete service year.
    pub prorated_vacation: Decimal,
    /// The 13th-month bonus accrued in the termination year.
    pub prorated_thirteenth: Decimal,
    /// Payment in lieu of a worked notice period.
    pub notice_indemnity: Decimal,
    /// The dismissal penalty on the severance-fund balance.
    pub severance_fund_penalty: Decimal,
    /// The severance-fund balance released for withdrawal.
    pub severance_fund_withdrawal: Decimal,
    /// Social-security withholding from the bracket table.
    pub social_withholding: Decimal,
    /// Caller-supplied income-tax withholding.
    pub tax_withholding: Decimal,
    /// Caller-supplied additional deductions.
    pub other_deductions: Decimal,
    /// Sum of all entitlement amounts before deductions.
    pub gross_total: Decimal,
    /// Amount payable after all deductions.
    pub net_total: Decimal,
}

impl SettlementBreakdown {
    /// Creates a breakdown echoing the request fields with all amounts zero.
    ///
    /// The calculation pipeline fills in the amounts step by step; a request
    /// with no calculable entitlements yields exactly this zeroed form with
    /// the caller-supplied deductions applied.
    pub fn from_request(request: &TerminationRequest) -> Self {
        Self {
            termination_type: request.termination_type,
            termination_date: request.termination_date,
            notice_date: request.notice_date,
            notice_indemnified: request.notice_indemnified,
            notice_days: request.notice_days,
            accrued_salary: Decimal::ZERO,
            matured_vacation: Decimal::ZERO,
            prorated_vacation: Decimal::ZERO,
            prorated_thirteenth: Decimal::ZERO,
            notice_indemnity: Decimal::ZERO,
            severance_fund_penalty: Decimal::ZERO,
            severance_fund_withdrawal: Decimal::ZERO,
            social_withholding: Decimal::ZERO,
            tax_withholding: request.tax_withholding,
            other_deductions: request.other_deductions,
            gross_total: Decimal::ZERO,
            net_total: Decimal::ZERO,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application, citing the statute the rule models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute this rule models.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate degraded inputs (such as a missing admission date)
/// that zero out amounts without preventing the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every rule decision made while assembling a breakdown. The trace
/// contains no clocks or identifiers, so it is as deterministic as the
/// breakdown itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A settlement breakdown together with its audit trace.
///
/// Returned by [`calculate_traced`](crate::calculation::calculate_traced)
/// for callers that need to display or store the rule-by-rule derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementCalculation {
    /// The itemized settlement amounts.
    pub breakdown: SettlementBreakdown,
    /// The rule-by-rule derivation of the amounts.
    pub audit_trace: AuditTrace,
}

/// The persistence-facing envelope for a settlement.
///
/// The engine's breakdown carries no identity; callers that persist a
/// settlement wrap it in a record, which stamps the identifier, timestamp,
/// and engine version. Simulation callers simply never construct one. The
/// collaborator owns the rule that at most one record exists per employee.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{SettlementBreakdown, SettlementRecord, TerminationRequest, TerminationType};
///
/// let request = TerminationRequest {
///     termination_type: TerminationType::Resignation,
///     termination_date: chrono::NaiveDate::from_ymd_opt(2023, 3, 10),
///     notice_date: None,
///     notice_indemnified: false,
///     notice_days: 30,
///     tax_withholding: rust_decimal::Decimal::ZERO,
///     other_deductions: rust_decimal::Decimal::ZERO,
///     observations: None,
/// };
/// let breakdown = SettlementBreakdown::from_request(&request);
/// let record = SettlementRecord::new("emp_001", breakdown, None);
/// assert_eq!(record.employee_id, "emp_001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier for this settlement.
    pub settlement_id: Uuid,
    /// The employee the settlement belongs to.
    pub employee_id: String,
    /// When the settlement was calculated.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that produced the breakdown.
    pub engine_version: String,
    /// Free-text notes from the termination request.
    pub observations: Option<String>,
    /// The itemized settlement amounts.
    pub breakdown: SettlementBreakdown,
}

impl SettlementRecord {
    /// Wraps a breakdown in a freshly-stamped persistence record.
    pub fn new(
        employee_id: impl Into<String>,
        breakdown: SettlementBreakdown,
        observations: Option<String>,
    ) -> Self {
        Self {
            settlement_id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            observations,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// Helper function to create Decimal values from strings
    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_request() -> TerminationRequest {
        TerminationRequest {
            termination_type: TerminationType::WithoutCause,
            termination_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            notice_date: None,
            notice_indemnified: true,
            notice_days: 30,
            tax_withholding: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            observations: None,
        }
    }

    #[test]
    fn test_from_request_echoes_request_fields() {
        let request = create_test_request();
        let breakdown = SettlementBreakdown::from_request(&request);

        assert_eq!(breakdown.termination_type, TerminationType::WithoutCause);
        assert_eq!(
            breakdown.termination_date,
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert!(breakdown.notice_indemnified);
        assert_eq!(breakdown.notice_days, 30);
    }

    #[test]
    fn test_from_request_zeroes_all_amounts() {
        let request = create_test_request();
        let breakdown = SettlementBreakdown::from_request(&request);

        assert_eq!(breakdown.accrued_salary, Decimal::ZERO);
        assert_eq!(breakdown.matured_vacation, Decimal::ZERO);
        assert_eq!(breakdown.prorated_vacation, Decimal::ZERO);
        assert_eq!(breakdown.prorated_thirteenth, Decimal::ZERO);
        assert_eq!(breakdown.notice_indemnity, Decimal::ZERO);
        assert_eq!(breakdown.severance_fund_penalty, Decimal::ZERO);
        assert_eq!(breakdown.severance_fund_withdrawal, Decimal::ZERO);
        assert_eq!(breakdown.social_withholding, Decimal::ZERO);
        assert_eq!(breakdown.gross_total, Decimal::ZERO);
        assert_eq!(breakdown.net_total, Decimal::ZERO);
    }

    #[test]
    fn test_from_request_carries_caller_supplied_deductions() {
        let mut request = create_test_request();
        request.tax_withholding = dec("120.50");
        request.other_deductions = dec("35.00");

        let breakdown = SettlementBreakdown::from_request(&request);
        assert_eq!(breakdown.tax_withholding, dec("120.50"));
        assert_eq!(breakdown.other_deductions, dec("35.00"));
    }

    #[test]
    fn test_breakdown_serialization_field_names() {
        let breakdown = SettlementBreakdown::from_request(&create_test_request());
        let json = serde_json::to_string(&breakdown).unwrap();

        assert!(json.contains("\"termination_type\":\"without_cause\""));
        assert!(json.contains("\"termination_date\":\"2023-01-15\""));
        assert!(json.contains("\"accrued_salary\":\"0\""));
        assert!(json.contains("\"matured_vacation\":\"0\""));
        assert!(json.contains("\"prorated_vacation\":\"0\""));
        assert!(json.contains("\"prorated_thirteenth\":\"0\""));
        assert!(json.contains("\"notice_indemnity\":\"0\""));
        assert!(json.contains("\"severance_fund_penalty\":\"0\""));
        assert!(json.contains("\"severance_fund_withdrawal\":\"0\""));
        assert!(json.contains("\"social_withholding\":\"0\""));
        assert!(json.contains("\"gross_total\":\"0\""));
        assert!(json.contains("\"net_total\":\"0\""));
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = r#"{
            "termination_type": "resignation",
            "termination_date": "2023-03-10",
            "notice_date": null,
            "notice_indemnified": false,
            "notice_days": 30,
            "accrued_salary": "666.67",
            "matured_vacation": "0",
            "prorated_vacation": "1500.00",
            "prorated_thirteenth": "500.00",
            "notice_indemnity": "0",
            "severance_fund_penalty": "0",
            "severance_fund_withdrawal": "0",
            "social_withholding": "320.00",
            "tax_withholding": "0",
            "other_deductions": "0",
            "gross_total": "2666.67",
            "net_total": "2346.67"
        }"#;

        let breakdown: SettlementBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.termination_type, TerminationType::Resignation);
        assert_eq!(breakdown.prorated_vacation, dec("1500.00"));
        assert_eq!(breakdown.gross_total, dec("2666.67"));
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "accrued_salary".to_string(),
            rule_name: "Accrued Salary".to_string(),
            statute_ref: "CLT art. 477".to_string(),
            input: serde_json::json!({"day_of_month": 15}),
            output: serde_json::json!({"amount": "1500"}),
            reasoning: "15 of 30 days worked in the termination month".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"accrued_salary\""));
        assert!(json.contains("\"statute_ref\":\"CLT art. 477\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "missing_admission_date".to_string(),
            message: "Admission date absent; tenure-based amounts are zero".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"missing_admission_date\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }

    #[test]
    fn test_audit_trace_steps_remain_ordered() {
        let trace = AuditTrace {
            steps: (1..=3)
                .map(|n| AuditStep {
                    step_number: n,
                    rule_id: format!("rule_{:03}", n),
                    rule_name: "Test rule".to_string(),
                    statute_ref: "CLT art. 477".to_string(),
                    input: serde_json::json!({}),
                    output: serde_json::json!({}),
                    reasoning: "test".to_string(),
                })
                .collect(),
            warnings: vec![],
        };

        let step_numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_settlement_calculation_round_trip() {
        let calculation = SettlementCalculation {
            breakdown: SettlementBreakdown::from_request(&create_test_request()),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
            },
        };

        let json = serde_json::to_string(&calculation).unwrap();
        let deserialized: SettlementCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(calculation, deserialized);
    }

    #[test]
    fn test_record_stamps_identity_and_version() {
        let breakdown = SettlementBreakdown::from_request(&create_test_request());
        let record = SettlementRecord::new("emp_001", breakdown.clone(), None);

        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(record.breakdown, breakdown);
    }

    #[test]
    fn test_records_get_distinct_identifiers() {
        let breakdown = SettlementBreakdown::from_request(&create_test_request());
        let first = SettlementRecord::new("emp_001", breakdown.clone(), None);
        let second = SettlementRecord::new("emp_001", breakdown, None);

        assert_ne!(first.settlement_id, second.settlement_id);
    }

    #[test]
    fn test_record_carries_observations() {
        let breakdown = SettlementBreakdown::from_request(&create_test_request());
        let record = SettlementRecord::new(
            "emp_001",
            breakdown,
            Some("agreed with HR".to_string()),
        );

        assert_eq!(record.observations.as_deref(), Some("agreed with HR"));
    }

    #[test]
    fn test_record_serialization() {
        let breakdown = SettlementBreakdown::from_request(&create_test_request());
        let record = SettlementRecord::new("emp_001", breakdown, None);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"settlement_id\""));
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"calculated_at\""));
        assert!(json.contains("\"breakdown\":{"));
    }
}
