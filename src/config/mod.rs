//! Rule-set loading and management for the Termination Settlement Engine.
//!
//! This module provides the strongly-typed settlement rule set and the
//! functionality to load it from YAML files: rule-set metadata, the
//! social-withholding bracket table, and the entitlement parameters.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::RuleSet;
//!
//! let rules = RuleSet::load("./config/clt").unwrap();
//! println!("Loaded rule set: {}", rules.metadata().name);
//! ```

mod loader;
mod types;

pub use types::{
    AccruedSalaryRules, EntitlementRules, NoticeRules, RuleMetadata, RuleSet, SeveranceFundRules,
    WithholdingBracket, WithholdingTable,
};
