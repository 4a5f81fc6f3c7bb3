//! Termination request model and related types.
//!
//! This module defines the TerminationType enum and the TerminationRequest
//! struct that parameterize a settlement calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the legal form under which employment ended.
///
/// Several settlement amounts are gated on the termination type: the
/// notice-period indemnity and the severance-fund release apply only to
/// dismissal without cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// Dismissal by the employer without cause.
    WithoutCause,
    /// Dismissal by the employer with cause.
    WithCause,
    /// Resignation by the employee.
    Resignation,
    /// Termination agreed by both parties.
    MutualAgreement,
}

fn default_notice_days() -> u32 {
    30
}

/// Parameters for a settlement calculation.
///
/// Constructed by the caller; the engine reads it and never mutates it. The
/// `tax_withholding` and `other_deductions` fields are caller-supplied
/// overrides that flow straight into the net total; the engine never
/// computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// The legal form of the termination.
    pub termination_type: TerminationType,
    /// The date employment ends. Absence degrades the date-dependent
    /// settlement amounts to zero; callers should reject it via
    /// [`TerminationRequest::validate`] before invoking the engine.
    pub termination_date: Option<NaiveDate>,
    /// The date notice was given, if any.
    #[serde(default)]
    pub notice_date: Option<NaiveDate>,
    /// Whether the notice period is paid out rather than worked.
    #[serde(default)]
    pub notice_indemnified: bool,
    /// Length of the notice period in days.
    #[serde(default = "default_notice_days")]
    pub notice_days: u32,
    /// Caller-supplied income-tax withholding.
    #[serde(default)]
    pub tax_withholding: Decimal,
    /// Caller-supplied additional deductions.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Free-text notes carried through to the persisted record.
    #[serde(default)]
    pub observations: Option<String>,
}

impl TerminationRequest {
    /// Validates the request before a settlement is calculated.
    ///
    /// The engine itself degrades gracefully on missing dates; this helper
    /// is the reject-before-invoke surface for callers that must refuse an
    /// incomplete request instead.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` for a complete request, or `InvalidRequest` if the
    /// termination date is absent or a caller-supplied deduction is
    /// negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.termination_date.is_none() {
            return Err(EngineError::InvalidRequest {
                field: "termination_date".to_string(),
                message: "is required".to_string(),
            });
        }
        if self.tax_withholding < Decimal::ZERO {
            return Err(EngineError::InvalidRequest {
                field: "tax_withholding".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.other_deductions < Decimal::ZERO {
            return Err(EngineError::InvalidRequest {
                field: "other_deductions".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
