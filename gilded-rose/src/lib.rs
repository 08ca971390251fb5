//! Declarative rule engine for the Gilded Rose inventory.
//!
//! Items are updated once per day by an ordered list of condition-gated
//! actions. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (conditions, actions, rules and
//!   the engine loop). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (config, inventory and rule files).
//!
//! [`rule_set`] assembles the shop's standard rules, and [`simulate`]
//! coordinates core logic with I/O to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod rule_set;
pub mod simulate;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
