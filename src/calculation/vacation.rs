//! Vacation entitlement calculation functionality.
//!
//! This module computes the two vacation amounts owed on termination:
//! matured vacation (one month's salary per fully completed year of tenure)
//! and prorated vacation (a twelfth of the salary per whole month in the
//! current, incomplete service year).

use rust_decimal::Decimal;

use super::ServicePeriod;
use crate::models::{AuditStep, Employee, TerminationRequest};

/// The result of the vacation calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// Vacation entitlement from fully completed years of tenure.
    pub matured: Decimal,
    /// Vacation accrued in the current, incomplete service year.
    pub prorated: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates matured and prorated vacation.
///
/// Tenure is measured from admission to termination as a calendar interval
/// (see [`ServicePeriod::between`]): each completed year matures one
/// month's salary; each whole month beyond the completed years accrues a
/// twelfth of the salary. If either date is missing both amounts stay at
/// zero.
///
/// The per-year amount is deliberately coarse: one month's salary per
/// completed year rather than the statutory twelfth-per-month schedule.
///
/// # Arguments
///
/// * `employee` - The employee being settled
/// * `request` - The termination parameters
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// CLT arts. 129 and 146 govern vacation pay on termination.
pub fn calculate_vacation(
    employee: &Employee,
    request: &TerminationRequest,
    step_number: u32,
) -> VacationResult {
    let (admission, termination) = match (employee.admission_date, request.termination_date) {
        (Some(a), Some(t)) => (a, t),
        _ => {
            let audit_step = AuditStep {
                step_number,
                rule_id: "vacation".to_string(),
                rule_name: "Vacation Entitlement".to_string(),
                statute_ref: "CLT arts. 129, 146".to_string(),
                input: serde_json::json!({
                    "admission_date": employee.admission_date.map(|d| d.to_string()),
                    "termination_date": request.termination_date.map(|d| d.to_string())
                }),
                output: serde_json::json!({
                    "matured": "0",
                    "prorated": "0"
                }),
                reasoning: "Admission or termination date missing - no vacation calculated"
                    .to_string(),
            };
            return VacationResult {
                matured: Decimal::ZERO,
                prorated: Decimal::ZERO,
                audit_step,
            };
        }
    };

    let period = ServicePeriod::between(admission, termination);

    let matured = if period.years > 0 {
        employee.base_salary * Decimal::from(period.years)
    } else {
        Decimal::ZERO
    };

    let months_in_current_year = period.months;
    let prorated = if months_in_current_year >= 1 {
        employee.base_salary * Decimal::from(months_in_current_year) / Decimal::from(12)
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation".to_string(),
        rule_name: "Vacation Entitlement".to_string(),
        statute_ref: "CLT arts. 129, 146".to_string(),
        input: serde_json::json!({
            "base_salary": employee.base_salary.normalize().to_string(),
            "admission_date": admission.to_string(),
            "termination_date": termination.to_string()
        }),
        output: serde_json::json!({
            "years_elapsed": period.years,
            "months_in_current_year": months_in_current_year,
            "matured": matured.normalize().to_string(),
            "prorated": prorated.normalize().to_string()
        }),
        reasoning: format!(
            "{} completed year(s) mature R${}; {} month(s) into the current year accrue R${}",
            period.years,
            matured.normalize(),
            months_in_current_year,
            prorated.normalize()
        ),
    };

    VacationResult {
        matured,
        prorated,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeStatus, TerminationType};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(salary: &str, admission: Option<NaiveDate>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Ana Souza".to_string(),
            base_salary: dec(salary),
            admission_date: admission,
            termination_date: None,
            status: EmployeeStatus::Active,
        }
    }

    fn create_test_request(termination_date: Option<NaiveDate>) -> TerminationRequest {
        TerminationRequest {
            termination_type: TerminationType::WithoutCause,
            termination_date,
            notice_date: None,
            notice_indemnified: false,
            notice_days: 30,
            tax_withholding: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            observations: None,
        }
    }

    /// VC-001: three full years mature three months of salary
    #[test]
    fn test_three_full_years() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2020, 1, 15));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 1, 15));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, dec("9000"));
        assert_eq!(result.prorated, Decimal::ZERO);
        assert_eq!(result.audit_step.output["years_elapsed"], 3);
        assert_eq!(result.audit_step.output["months_in_current_year"], 0);
    }

    /// VC-002: nine months in the first year prorate nine twelfths
    #[test]
    fn test_nine_months_first_year() {
        let employee = create_test_employee("2000.00", NaiveDate::from_ymd_opt(2022, 6, 1));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 3, 10));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, dec("1500"));
    }

    /// VC-003: years and months combine
    #[test]
    fn test_years_and_months_combine() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2020, 1, 15));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 4, 20));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, dec("9000"));
        assert_eq!(result.prorated, dec("750"));
    }

    /// VC-004: under one month accrues nothing
    #[test]
    fn test_under_one_month() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2023, 1, 2));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 1, 31));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, Decimal::ZERO);
    }

    /// VC-005: eleven months stay prorated
    #[test]
    fn test_eleven_months() {
        let employee = create_test_employee("1200.00", NaiveDate::from_ymd_opt(2022, 2, 10));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 1, 10));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, dec("1100"));
    }

    /// VC-006: missing admission date degrades to zero
    #[test]
    fn test_missing_admission_date() {
        let employee = create_test_employee("3000.00", None);
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 1, 15));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("missing"));
    }

    /// VC-007: missing termination date degrades to zero
    #[test]
    fn test_missing_termination_date() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2020, 1, 15));
        let request = create_test_request(None);

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, Decimal::ZERO);
    }

    /// VC-008: admission after termination clamps to zero
    #[test]
    fn test_admission_after_termination() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2023, 6, 1));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 3, 10));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, Decimal::ZERO);
    }

    #[test]
    fn test_anniversary_eve_keeps_eleven_months() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2022, 1, 15));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 1, 14));

        let result = calculate_vacation(&employee, &request, 2);

        assert_eq!(result.matured, Decimal::ZERO);
        assert_eq!(result.prorated, dec("2750"));
    }

    #[test]
    fn test_audit_reasoning_mentions_years_and_months() {
        let employee = create_test_employee("3000.00", NaiveDate::from_ymd_opt(2020, 1, 15));
        let request = create_test_request(NaiveDate::from_ymd_opt(2023, 4, 20));

        let result = calculate_vacation(&employee, &request, 2);

        assert!(result.audit_step.reasoning.contains("3 completed year(s)"));
        assert!(result.audit_step.reasoning.contains("3 month(s)"));
    }
}
