//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, headers)
//!     → header_rule.rs (edge header layer)
//!         → matcher.rs (evaluate path pattern)
//!         → match: insert configured header
//!     → axum Router (page, health, integrations forwarder)
//!
//! Rule Compilation (at startup and on reload):
//!     EdgeRuleConfig
//!     → Parse pattern, header name and value
//!     → Freeze as immutable EdgeHeaderRule
//!     → Swap into the shared handle
//! ```
//!
//! # Design Decisions
//! - Rules compiled up front, immutable at runtime
//! - No regex in hot path (segment matching only)
//! - Deterministic: same path always gets the same decision

pub mod header_rule;
pub mod matcher;

pub use header_rule::{EdgeHeaderLayer, EdgeHeaderRule, EdgeRuleMatched, RuleError, SharedRule};
pub use matcher::{PathPattern, PatternError};
