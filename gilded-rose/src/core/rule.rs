//! A named pairing of one condition with one action.

use super::action::Action;
use super::condition::Condition;
use super::item::Item;

/// Condition-gated action.
///
/// Matching and applying are separate steps: [`Rule::apply`] never re-checks
/// the condition, so callers must test [`Rule::matches`] first.
#[derive(Debug)]
pub struct Rule {
    name: String,
    condition: Box<dyn Condition>,
    action: Box<dyn Action>,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        condition: impl Condition + 'static,
        action: impl Action + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            condition: Box::new(condition),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.condition.is_satisfied_by(item)
    }

    pub fn apply(&self, item: &mut Item) {
        self.action.execute(item);
    }
}
