//! Rule-set loading functionality.
//!
//! This module provides [`RuleSet::load`] for reading a settlement rule set
//! from a directory of YAML files, together with the semantic validation
//! applied after parsing.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EntitlementRules, RuleMetadata, RuleSet, WithholdingTable};

impl RuleSet {
    /// Loads a rule set from the specified directory.
    ///
    /// # Directory Structure
    ///
    /// The rule directory should have the following structure:
    /// ```text
    /// config/clt/
    /// ├── ruleset.yaml       # Rule-set metadata
    /// ├── withholding.yaml   # Social-withholding bracket table
    /// └── entitlements.yaml  # Accrued-salary, notice, and fund parameters
    /// ```
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rule directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns the loaded `RuleSet` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The parsed rules are semantically invalid (`InvalidRule`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settlement_engine::config::RuleSet;
    ///
    /// let rules = RuleSet::load("./config/clt")?;
    /// # Ok::<(), settlement_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = load_yaml::<RuleMetadata>(&path.join("ruleset.yaml"))?;
        let withholding = load_yaml::<WithholdingTable>(&path.join("withholding.yaml"))?;
        let entitlements = load_yaml::<EntitlementRules>(&path.join("entitlements.yaml"))?;

        let rules = RuleSet::new(metadata, withholding, entitlements);
        rules.validate()?;

        info!(
            code = %rules.metadata().code,
            version = %rules.metadata().version,
            "Loaded settlement rule set"
        );

        Ok(rules)
    }

    /// Validates the rule set semantics.
    ///
    /// Checks that the withholding table is non-empty, strictly ascending,
    /// and closed by exactly one open-ended bracket, and that every rate and
    /// parameter falls in its legal range.
    pub fn validate(&self) -> EngineResult<()> {
        let brackets = &self.withholding().brackets;

        let Some((last, bounded)) = brackets.split_last() else {
            return Err(EngineError::InvalidRule {
                field: "withholding.brackets".to_string(),
                message: "table must contain at least one bracket".to_string(),
            });
        };

        if last.upper_bound.is_some() {
            return Err(EngineError::InvalidRule {
                field: "withholding.brackets".to_string(),
                message: "table must end with an open-ended bracket".to_string(),
            });
        }

        let mut previous: Option<Decimal> = None;
        for bracket in bounded {
            let upper = bracket.upper_bound.ok_or_else(|| EngineError::InvalidRule {
                field: "withholding.brackets".to_string(),
                message: "only the final bracket may be open-ended".to_string(),
            })?;
            if upper <= Decimal::ZERO {
                return Err(EngineError::InvalidRule {
                    field: "withholding.brackets".to_string(),
                    message: "upper bounds must be positive".to_string(),
                });
            }
            if previous.is_some_and(|prev| upper <= prev) {
                return Err(EngineError::InvalidRule {
                    field: "withholding.brackets".to_string(),
                    message: "upper bounds must be strictly ascending".to_string(),
                });
            }
            previous = Some(upper);
        }

        for bracket in brackets {
            validate_fraction("withholding.brackets.rate", bracket.rate)?;
        }

        let entitlements = self.entitlements();
        if entitlements.accrued_salary.month_days == 0 {
            return Err(EngineError::InvalidRule {
                field: "accrued_salary.month_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        validate_fraction(
            "severance_fund.monthly_rate",
            entitlements.severance_fund.monthly_rate,
        )?;
        validate_fraction(
            "severance_fund.dismissal_penalty_rate",
            entitlements.severance_fund.dismissal_penalty_rate,
        )?;

        Ok(())
    }
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Checks that a rate lies in the inclusive range [0, 1].
fn validate_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidRule {
            field: field.to_string(),
            message: format!("{} is outside the range [0, 1]", value),
        });
    }
    Ok(())
}
