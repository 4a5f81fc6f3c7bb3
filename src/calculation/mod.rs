//! Calculation logic for the Termination Settlement Engine.
//!
//! This module contains all the settlement calculation functions: the
//! service-period calendar arithmetic, accrued salary for the termination
//! month, matured and prorated vacation, the proportional 13th salary, the
//! notice-period indemnity, severance-fund accrual and penalty, the
//! bracket-based social withholding, and the orchestrator that runs the
//! pipeline and aggregates the totals.

mod accrued_salary;
mod notice;
mod service_period;
mod settlement;
mod severance_fund;
mod thirteenth;
mod vacation;
mod withholding;

pub use accrued_salary::{AccruedSalaryResult, calculate_accrued_salary};
pub use notice::{NoticeResult, calculate_notice_indemnity};
pub use service_period::ServicePeriod;
pub use settlement::{calculate, calculate_traced};
pub use severance_fund::{SeveranceFundResult, calculate_severance_fund};
pub use thirteenth::{ThirteenthResult, calculate_thirteenth};
pub use vacation::{VacationResult, calculate_vacation};
pub use withholding::{WithholdingResult, calculate_withholding};
