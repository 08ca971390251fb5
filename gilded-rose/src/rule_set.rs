//! Built-in shop rules and starting inventory.
//!
//! Rule order is load-bearing: the sell-in decrement runs after every rule
//! that reads a sell-in threshold for the same pass, except the
//! after-concert rule, which must see the decremented value.

use crate::core::{
    AdjustQualityBy, AdjustSellInBy, And, Item, NameContains, NameMatchesPattern, NoOp, Not,
    RemainedLessThanNDays, RemainedMoreThanNDays, Rule, RuleEngine, RuleError, SetQualityTo,
};

/// Name fragments that identify special item categories.
pub mod names {
    pub const AGED_BRIE: &str = "Aged Brie";
    pub const BACKSTAGE_PASSES: &str = "Backstage passes";
    pub const SULFURAS: &str = "Sulfuras";
    pub const CONJURED: &str = "Conjured";
}

pub const MAX_QUALITY: i32 = 50;
pub const MIN_QUALITY: i32 = 0;

/// Items with none of the special category fragments in their name.
const SPECIAL_CATEGORY_PATTERN: &str = "sulfuras|brie|backstage|conjured";

fn ordinary_item() -> Result<Not, RuleError> {
    Ok(Not::new(NameMatchesPattern::new(SPECIAL_CATEGORY_PATTERN)?))
}

fn backstage() -> NameContains {
    NameContains::new(names::BACKSTAGE_PASSES)
}

/// Build the standard rule list in evaluation order.
pub fn standard_rules() -> Result<Vec<Rule>, RuleError> {
    Ok(vec![
        Rule::new(
            "SulfurasProcessing",
            NameContains::new(names::SULFURAS),
            NoOp,
        ),
        Rule::new(
            "BackstagePassesProcessingLessThan10Days",
            And::default()
                .with(backstage())
                .with(RemainedLessThanNDays::new(11))
                .with(RemainedMoreThanNDays::new(5)),
            AdjustQualityBy::increase(2, MAX_QUALITY),
        ),
        Rule::new(
            "BackstagePassesProcessingLessThan5Days",
            And::default()
                .with(backstage())
                .with(RemainedLessThanNDays::new(6))
                .with(RemainedMoreThanNDays::new(0)),
            AdjustQualityBy::increase(3, MAX_QUALITY),
        ),
        Rule::new(
            "BackstagePassesProcessingMoreThan10Days",
            And::default()
                .with(backstage())
                .with(RemainedMoreThanNDays::new(10)),
            AdjustQualityBy::increase(1, MAX_QUALITY),
        ),
        Rule::new(
            "DecreaseQualityBasicBeforeSellDate",
            And::default()
                .with(ordinary_item()?)
                .with(RemainedMoreThanNDays::new(0)),
            AdjustQualityBy::degrade(1, MIN_QUALITY),
        ),
        Rule::new(
            "DecreaseQualityBasicAfterSellDate",
            And::default()
                .with(ordinary_item()?)
                .with(RemainedLessThanNDays::new(1)),
            AdjustQualityBy::degrade(2, MIN_QUALITY),
        ),
        Rule::new(
            "ConjuredProcessingBeforeSellDate",
            And::default()
                .with(NameContains::new(names::CONJURED))
                .with(RemainedMoreThanNDays::new(0)),
            AdjustQualityBy::degrade(2, MIN_QUALITY),
        ),
        // Twice the ordinary after-sell-date rate.
        Rule::new(
            "ConjuredProcessingAfterSellDate",
            And::default()
                .with(NameContains::new(names::CONJURED))
                .with(RemainedLessThanNDays::new(1)),
            AdjustQualityBy::degrade(4, MIN_QUALITY),
        ),
        Rule::new(
            "DecreaseSellInAllExceptSulfuras",
            Not::new(NameContains::new(names::SULFURAS)),
            AdjustSellInBy::decrease(1),
        ),
        Rule::new(
            "AgedBrieProcessing",
            NameContains::new(names::AGED_BRIE),
            AdjustQualityBy::increase(1, MAX_QUALITY),
        ),
        Rule::new(
            "BackstagePassesProcessingAfterConcert",
            And::default()
                .with(backstage())
                .with(RemainedLessThanNDays::new(0)),
            SetQualityTo::zero(),
        ),
    ])
}

pub fn standard_engine() -> Result<RuleEngine, RuleError> {
    Ok(RuleEngine::new(standard_rules()?))
}

/// The shop's opening stock.
pub fn default_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(names::AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Condition;

    #[test]
    fn standard_rules_keep_declared_order() {
        let rules = standard_rules().expect("rules");
        let names: Vec<&str> = rules.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "SulfurasProcessing",
                "BackstagePassesProcessingLessThan10Days",
                "BackstagePassesProcessingLessThan5Days",
                "BackstagePassesProcessingMoreThan10Days",
                "DecreaseQualityBasicBeforeSellDate",
                "DecreaseQualityBasicAfterSellDate",
                "ConjuredProcessingBeforeSellDate",
                "ConjuredProcessingAfterSellDate",
                "DecreaseSellInAllExceptSulfuras",
                "AgedBrieProcessing",
                "BackstagePassesProcessingAfterConcert",
            ]
        );
    }

    #[test]
    fn ordinary_item_excludes_every_special_category() {
        let ordinary = ordinary_item().expect("pattern");
        for item in default_inventory() {
            let expected = matches!(
                item.name.as_str(),
                "+5 Dexterity Vest" | "Elixir of the Mongoose"
            );
            assert_eq!(ordinary.is_satisfied_by(&item), expected, "{}", item.name);
        }
    }

    #[test]
    fn default_inventory_has_one_of_each_category() {
        let items = default_inventory();
        assert_eq!(items.len(), 6);
        assert!(items.iter().any(|item| item.name.contains(names::SULFURAS)));
        assert!(items.iter().any(|item| item.name.contains(names::CONJURED)));
    }
}
