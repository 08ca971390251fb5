//! Deterministic, pure rule-evaluation logic.
//!
//! Core modules must be free of I/O side effects. Conditions, actions and
//! rules are immutable after construction; the engine only mutates the items
//! handed to it.

pub mod action;
pub mod condition;
pub mod engine;
pub mod error;
pub mod item;
pub mod rule;

pub use action::{Action, AdjustQualityBy, AdjustSellInBy, NoOp, SetQualityTo};
pub use condition::{
    And, Condition, NameContains, NameMatchesPattern, Not, RemainedLessThanNDays,
    RemainedMoreThanNDays, SellDatePassed,
};
pub use engine::RuleEngine;
pub use error::RuleError;
pub use item::Item;
pub use rule::Rule;
