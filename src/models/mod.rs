//! Core data models for the Termination Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod settlement;
mod termination;

pub use employee::{Employee, EmployeeStatus};
pub use settlement::{
    AuditStep, AuditTrace, AuditWarning, SettlementBreakdown, SettlementCalculation,
    SettlementRecord,
};
pub use termination::{TerminationRequest, TerminationType};
