//! Ordered rule evaluation over a batch of items.

use tracing::{debug, trace};

use super::item::Item;
use super::rule::Rule;

/// Applies every matching rule, in list order, to every item.
///
/// The rule list is fixed at construction and never reordered, filtered or
/// deduplicated. One [`RuleEngine::process`] call is one time tick.
#[derive(Debug, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run one pass: items outer, rules inner.
    ///
    /// Later rules observe field changes made by earlier rules on the same
    /// item within the pass.
    pub fn process(&self, items: &mut [Item]) {
        for item in items {
            debug!(
                item = %item.name,
                sell_in = item.sell_in,
                quality = item.quality,
                "processing item"
            );
            for rule in &self.rules {
                if !rule.matches(item) {
                    continue;
                }
                trace!(rule = rule.name(), item = %item.name, "rule matched");
                rule.apply(item);
                trace!(
                    rule = rule.name(),
                    sell_in = item.sell_in,
                    quality = item.quality,
                    "rule applied"
                );
            }
            debug!(
                item = %item.name,
                sell_in = item.sell_in,
                quality = item.quality,
                "processed item"
            );
        }
    }
}
