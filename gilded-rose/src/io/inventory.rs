//! Inventory load/save helpers (JSON array of items).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::Item;
use crate::rule_set::default_inventory;

/// Load items from disk, or the default inventory if the file is missing.
///
/// Every item must carry a non-blank name.
pub fn load_inventory(path: &Path) -> Result<Vec<Item>> {
    if !path.exists() {
        debug!(path = %path.display(), "inventory missing, using default inventory");
        return Ok(default_inventory());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read inventory {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&contents)
        .with_context(|| format!("parse inventory {}", path.display()))?;
    validate_items(&items).with_context(|| format!("validate inventory {}", path.display()))?;
    Ok(items)
}

/// Write items as pretty-printed JSON with a trailing newline.
pub fn write_inventory(path: &Path, items: &[Item]) -> Result<()> {
    validate_items(items)?;
    let mut buf = serde_json::to_string_pretty(items).context("serialize inventory json")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write inventory {}", path.display()))
}

fn validate_items(items: &[Item]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            bail!("items[{}].name must be non-empty", index);
        }
    }
    Ok(())
}
