//! Effects applied to a single item.
//!
//! Actions mutate `quality` or `sell_in` in place and never fail once built.
//! Additions saturate at the `i32` bounds.

use std::fmt;

use super::error::RuleError;
use super::item::Item;

/// Capability shared by every action variant.
pub trait Action: fmt::Debug + Send + Sync {
    fn execute(&self, item: &mut Item);
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn execute(&self, item: &mut Item) {
        (**self).execute(item);
    }
}

/// Add `delta` to quality, then clamp into `[min, max]`.
///
/// Increase and decrease are the same operation with opposite-signed deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustQualityBy {
    delta: i32,
    min: i32,
    max: i32,
}

impl AdjustQualityBy {
    pub fn new(delta: i32, min: i32, max: i32) -> Result<Self, RuleError> {
        if min > max {
            return Err(RuleError::InvalidBounds { min, max });
        }
        Ok(Self { delta, min, max })
    }

    /// Raise quality by `by`, capped at `max`.
    pub fn increase(by: i32, max: i32) -> Self {
        Self {
            delta: by,
            min: i32::MIN,
            max,
        }
    }

    /// Lower quality by `by`, floored at `min`.
    pub fn degrade(by: i32, min: i32) -> Self {
        Self {
            delta: by.saturating_neg(),
            min,
            max: i32::MAX,
        }
    }
}

impl Action for AdjustQualityBy {
    fn execute(&self, item: &mut Item) {
        item.quality = item
            .quality
            .saturating_add(self.delta)
            .clamp(self.min, self.max);
    }
}

/// Add `delta` to sell-in. Unbounded: negative values are days past the sell date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustSellInBy {
    delta: i32,
}

impl AdjustSellInBy {
    pub fn new(delta: i32) -> Self {
        Self { delta }
    }

    pub fn decrease(days: i32) -> Self {
        Self {
            delta: days.saturating_neg(),
        }
    }
}

impl Action for AdjustSellInBy {
    fn execute(&self, item: &mut Item) {
        item.sell_in = item.sell_in.saturating_add(self.delta);
    }
}

/// Overwrite quality with a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetQualityTo {
    value: i32,
}

impl SetQualityTo {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }
}

impl Action for SetQualityTo {
    fn execute(&self, item: &mut Item) {
        item.quality = self.value;
    }
}

/// Leaves the item untouched. Used for rules that only document an exemption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

impl Action for NoOp {
    fn execute(&self, _item: &mut Item) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;

    #[test]
    fn degrade_reduces_quality() {
        let mut target = item("Test Item", 5, 10);
        AdjustQualityBy::degrade(2, 0).execute(&mut target);
        assert_eq!(target.quality, 8);
    }

    #[test]
    fn degrade_clamps_to_floor() {
        let mut target = item("Test Item", 5, 3);
        AdjustQualityBy::degrade(5, 0).execute(&mut target);
        assert_eq!(target.quality, 0);
    }

    #[test]
    fn degrade_respects_custom_floor() {
        let mut target = item("Test Item", 5, 3);
        AdjustQualityBy::degrade(2, 1).execute(&mut target);
        assert_eq!(target.quality, 1);
    }

    #[test]
    fn increase_clamps_to_cap() {
        let mut target = item("Test Item", 5, 49);
        AdjustQualityBy::increase(2, 50).execute(&mut target);
        assert_eq!(target.quality, 50);
    }

    #[test]
    fn increase_pulls_out_of_range_quality_down_to_cap() {
        let mut target = item("Test Item", 5, 80);
        AdjustQualityBy::increase(1, 50).execute(&mut target);
        assert_eq!(target.quality, 50);
    }

    #[test]
    fn explicit_bounds_apply_both_ways() {
        let action = AdjustQualityBy::new(-3, 0, 50).expect("bounds");
        let mut low = item("x", 0, 2);
        action.execute(&mut low);
        assert_eq!(low.quality, 0);

        let action = AdjustQualityBy::new(3, 0, 50).expect("bounds");
        let mut high = item("x", 0, 49);
        action.execute(&mut high);
        assert_eq!(high.quality, 50);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = AdjustQualityBy::new(1, 10, 5).expect_err("must fail");
        assert!(matches!(err, RuleError::InvalidBounds { min: 10, max: 5 }));
    }

    #[test]
    fn quality_addition_saturates() {
        let mut target = item("x", 0, i32::MAX - 1);
        AdjustQualityBy::increase(10, i32::MAX).execute(&mut target);
        assert_eq!(target.quality, i32::MAX);
    }

    #[test]
    fn decrease_sell_in_can_go_negative() {
        let mut target = item("Test Item", 2, 10);
        AdjustSellInBy::decrease(5).execute(&mut target);
        assert_eq!(target.sell_in, -3);
    }

    #[test]
    fn set_quality_overwrites() {
        let mut target = item("Test Item", -1, 45);
        SetQualityTo::zero().execute(&mut target);
        assert_eq!(target.quality, 0);
        SetQualityTo::new(7).execute(&mut target);
        assert_eq!(target.quality, 7);
    }

    #[test]
    fn no_op_leaves_item_unchanged() {
        let mut target = item("Sulfuras, Hand of Ragnaros", 0, 80);
        let before = target.clone();
        NoOp.execute(&mut target);
        assert_eq!(target, before);
    }
}
