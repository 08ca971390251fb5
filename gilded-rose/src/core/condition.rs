//! Predicates evaluated against a single item.
//!
//! Leaf conditions inspect the name or the remaining sell-in days; [`And`] and
//! [`Not`] compose them. Every condition is immutable once built, so one
//! instance can be shared by several rules and read from several threads.

use std::fmt;

use regex::{Regex, RegexBuilder};

use super::error::RuleError;
use super::item::Item;

/// Capability shared by every condition variant.
pub trait Condition: fmt::Debug + Send + Sync {
    fn is_satisfied_by(&self, item: &Item) -> bool;
}

impl<C: Condition + ?Sized> Condition for Box<C> {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        (**self).is_satisfied_by(item)
    }
}

/// True iff the item name contains `needle`, ignoring case.
///
/// Characters are compared one by one after mapping each to its simple
/// uppercase form; a character without a one-to-one uppercase (`ß`) is
/// compared as is. No locale or context is consulted: `Σ` matches both `σ`
/// and word-final `ς`, and the Kelvin sign does not match `k`.
#[derive(Debug, Clone)]
pub struct NameContains {
    needle: String,
}

impl NameContains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: fold_case(&needle.into()),
        }
    }
}

impl Condition for NameContains {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        fold_case(&item.name).contains(&self.needle)
    }
}

fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// True iff the item name matches a case-insensitive regular expression.
///
/// The pattern is compiled once here; a syntax error is a configuration error.
#[derive(Debug, Clone)]
pub struct NameMatchesPattern {
    regex: Regex,
}

impl NameMatchesPattern {
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }
}

impl Condition for NameMatchesPattern {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        self.regex.is_match(&item.name)
    }
}

/// True iff `sell_in > days`.
#[derive(Debug, Clone, Copy)]
pub struct RemainedMoreThanNDays {
    days: i32,
}

impl RemainedMoreThanNDays {
    pub fn new(days: i32) -> Self {
        Self { days }
    }
}

impl Condition for RemainedMoreThanNDays {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        item.sell_in > self.days
    }
}

/// True iff `sell_in < days`.
#[derive(Debug, Clone, Copy)]
pub struct RemainedLessThanNDays {
    days: i32,
}

impl RemainedLessThanNDays {
    pub fn new(days: i32) -> Self {
        Self { days }
    }
}

impl Condition for RemainedLessThanNDays {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        item.sell_in < self.days
    }
}

/// True iff the sell date has passed (`sell_in < 0`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SellDatePassed;

impl Condition for SellDatePassed {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        item.sell_in < 0
    }
}

/// Conjunction of sub-conditions, evaluated in order.
///
/// Stops at the first unsatisfied condition. An empty conjunction is satisfied.
#[derive(Debug, Default)]
pub struct And {
    conditions: Vec<Box<dyn Condition>>,
}

impl And {
    pub fn new(conditions: Vec<Box<dyn Condition>>) -> Self {
        Self { conditions }
    }

    /// Append another sub-condition.
    pub fn with(mut self, condition: impl Condition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }
}

impl Condition for And {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.is_satisfied_by(item))
    }
}

/// Negation of a single sub-condition.
#[derive(Debug)]
pub struct Not {
    inner: Box<dyn Condition>,
}

impl Not {
    pub fn new(inner: impl Condition + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Condition for Not {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        !self.inner.is_satisfied_by(item)
    }
}
