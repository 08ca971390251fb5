//! The mutable inventory record rules operate on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single inventory entry.
///
/// No bounds are enforced here. `sell_in` goes negative once the sell date has
/// passed, and `quality` only stays in range if the actions touching it clamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Days left to sell the item; negative means days past the sell date.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

/// Renders as a report row: `name, sell_in, quality`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
