//! Rule-set types for settlement calculation.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML rule files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the settlement rule set.
///
/// Contains identifying information about the rule set, including its
/// code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleMetadata {
    /// The rule-set code (e.g., "clt_rescisao").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective period of the rule set.
    pub version: String,
    /// URL to the source legislation.
    pub source_url: String,
}

/// One bracket of the social-withholding table.
///
/// A bracket with no upper bound is open-ended and must close the table.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingBracket {
    /// The inclusive upper bound of this bracket, or `None` for the
    /// open-ended final bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The flat rate applied to the entire amount falling in this bracket.
    pub rate: Decimal,
}

/// The social-withholding bracket table.
///
/// The table is applied as a flat rate on the whole amount: the first
/// bracket whose inclusive upper bound contains the amount supplies the
/// rate, which multiplies the entire amount rather than the bracket slice.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingTable {
    /// Reference to the statute defining the contribution base.
    pub statute: String,
    /// The brackets, ascending, closed by one open-ended bracket.
    pub brackets: Vec<WithholdingBracket>,
}

impl WithholdingTable {
    /// Returns the flat rate for the bracket containing `amount`.
    ///
    /// Bracket upper bounds are inclusive: an amount exactly at a bound
    /// uses that bracket's rate, not the next one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settlement_engine::config::RuleSet;
    /// use rust_decimal::Decimal;
    ///
    /// let rules = RuleSet::load("./config/clt").unwrap();
    /// let rate = rules.withholding().rate_for(Decimal::new(132000, 2));
    /// assert_eq!(rate, Decimal::new(75, 3));
    /// ```
    pub fn rate_for(&self, amount: Decimal) -> Decimal {
        for bracket in &self.brackets {
            match bracket.upper_bound {
                Some(upper) if amount > upper => continue,
                _ => return bracket.rate,
            }
        }
        Decimal::ZERO
    }
}

/// Parameters for the accrued-salary calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct AccruedSalaryRules {
    /// Reference to the statute governing final-pay timing.
    pub statute: String,
    /// The fixed number of days in a payroll month.
    pub month_days: u32,
}

/// Parameters for the notice-period indemnity.
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeRules {
    /// Reference to the statute governing notice periods.
    pub statute: String,
    /// The default notice period length in days.
    pub default_days: u32,
}

/// Parameters for the severance-fund accrual and penalty.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveranceFundRules {
    /// Reference to the statute governing the fund.
    pub statute: String,
    /// The fraction of one month's salary deposited per month of tenure.
    pub monthly_rate: Decimal,
    /// The penalty fraction applied to the fund balance on dismissal
    /// without cause.
    pub dismissal_penalty_rate: Decimal,
}

/// Entitlement parameters loaded from entitlements.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementRules {
    /// Accrued-salary parameters.
    pub accrued_salary: AccruedSalaryRules,
    /// Notice-period parameters.
    pub notice: NoticeRules,
    /// Severance-fund parameters.
    pub severance_fund: SeveranceFundRules,
}

/// The complete settlement rule set loaded from YAML files.
///
/// This struct aggregates the metadata, withholding table, and entitlement
/// parameters loaded from a rule directory.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Rule-set metadata.
    metadata: RuleMetadata,
    /// The social-withholding bracket table.
    withholding: WithholdingTable,
    /// Entitlement parameters.
    entitlements: EntitlementRules,
}

impl RuleSet {
    /// Creates a new RuleSet from its component parts.
    pub fn new(
        metadata: RuleMetadata,
        withholding: WithholdingTable,
        entitlements: EntitlementRules,
    ) -> Self {
        Self {
            metadata,
            withholding,
            entitlements,
        }
    }

    /// Returns the rule-set metadata.
    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    /// Returns the social-withholding table.
    pub fn withholding(&self) -> &WithholdingTable {
        &self.withholding
    }

    /// Returns the entitlement parameters.
    pub fn entitlements(&self) -> &EntitlementRules {
        &self.entitlements
    }
}
