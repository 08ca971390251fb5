//! Test-only helpers for building items and shop directories.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::Item;
use crate::io::init::{InitOptions, ShopPaths, init_shop};

/// Create an item with the given fields.
pub fn item(name: &str, sell_in: i32, quality: i32) -> Item {
    Item::new(name, sell_in, quality)
}

/// Temporary project root with an initialized `.gilded-rose/` directory.
pub struct TestShop {
    dir: TempDir,
    paths: ShopPaths,
}

impl TestShop {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let paths = init_shop(dir.path(), &InitOptions { force: false })?;
        Ok(Self { dir, paths })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> &ShopPaths {
        &self.paths
    }

    /// Replace the shop's rule file.
    pub fn write_rules(&self, contents: &str) -> Result<()> {
        std::fs::write(&self.paths.rules_path, contents)?;
        Ok(())
    }

    /// Replace the shop's inventory.
    pub fn write_inventory(&self, items: &[Item]) -> Result<()> {
        crate::io::inventory::write_inventory(&self.paths.inventory_path, items)
    }
}
