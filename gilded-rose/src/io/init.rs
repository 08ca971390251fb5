//! Scaffolding for a `.gilded-rose/` working directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::config::{ShopConfig, write_config};
use super::inventory::write_inventory;
use super::rule_file::STANDARD_RULES_TOML;
use crate::rule_set::default_inventory;

/// Canonical paths within `.gilded-rose/` for a project root.
#[derive(Debug, Clone)]
pub struct ShopPaths {
    pub shop_dir: PathBuf,
    pub config_path: PathBuf,
    pub inventory_path: PathBuf,
    pub rules_path: PathBuf,
}

impl ShopPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let shop_dir = root.into().join(".gilded-rose");
        Self {
            config_path: shop_dir.join("config.toml"),
            inventory_path: shop_dir.join("inventory.json"),
            rules_path: shop_dir.join("rules.toml"),
            shop_dir,
        }
    }
}

/// Options for `init_shop`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing shop files.
    pub force: bool,
}

/// Create `.gilded-rose/` in `root` with default config, inventory and rules.
///
/// Fails if `.gilded-rose/` already exists unless `options.force` is set.
pub fn init_shop(root: &Path, options: &InitOptions) -> Result<ShopPaths> {
    let paths = ShopPaths::new(root);
    if paths.shop_dir.exists() && !paths.shop_dir.is_dir() {
        return Err(anyhow!(
            "gilded-rose init: .gilded-rose exists but is not a directory"
        ));
    }
    if paths.shop_dir.exists() && !options.force {
        return Err(anyhow!(
            "gilded-rose init: .gilded-rose already exists (use --force to overwrite)"
        ));
    }

    fs::create_dir_all(&paths.shop_dir)
        .with_context(|| format!("create directory {}", paths.shop_dir.display()))?;
    write_config(&paths.config_path, &ShopConfig::default())?;
    write_inventory(&paths.inventory_path, &default_inventory())?;
    fs::write(&paths.rules_path, STANDARD_RULES_TOML)
        .with_context(|| format!("write {}", paths.rules_path.display()))?;

    info!(dir = %paths.shop_dir.display(), "initialized shop");
    Ok(paths)
}
