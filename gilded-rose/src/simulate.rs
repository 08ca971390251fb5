//! Orchestration for `gilded-rose simulate`: one engine pass per day.
//!
//! Days are streamed: each day's section is handed on as soon as the pass
//! finishes, so memory use does not grow with the number of days.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{Item, RuleEngine};
use crate::io::config::load_config;
use crate::io::init::ShopPaths;
use crate::io::inventory::load_inventory;
use crate::io::rule_file::load_rules;

/// Result of a simulation loaded from a shop directory.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub days: u32,
    /// Inventory after the last day.
    pub items: Vec<Item>,
}

/// Advance `items` by `days` engine passes.
///
/// `on_day` sees day 0 (the untouched input) and then the state after each
/// pass. An error from `on_day` stops the run and is returned.
pub fn simulate<F>(
    engine: &RuleEngine,
    items: &mut [Item],
    days: u32,
    mut on_day: F,
) -> Result<()>
where
    F: FnMut(u32, &[Item]) -> Result<()>,
{
    on_day(0, items)?;
    for day in 1..=days {
        engine.process(items);
        on_day(day, items)?;
    }
    Ok(())
}

/// Load config, inventory and rules under `root`, run the simulation and
/// write the daily report to `report`.
///
/// Missing files fall back to the built-in defaults.
pub fn simulate_from_root(
    root: &Path,
    days_override: Option<u32>,
    report: &mut impl Write,
) -> Result<SimulationOutcome> {
    let paths = ShopPaths::new(root);
    let mut cfg = load_config(&paths.config_path)?;
    if let Some(days) = days_override {
        cfg.days = days;
        cfg.validate().context("--days")?;
    }
    let mut items = load_inventory(&paths.inventory_path)?;
    let engine = RuleEngine::new(load_rules(&paths.rules_path)?);
    info!(
        days = cfg.days,
        items = items.len(),
        rules = engine.rules().len(),
        "starting simulation"
    );

    let include_initial = cfg.report.include_initial;
    simulate(&engine, &mut items, cfg.days, |day, items| {
        if day == 0 && !include_initial {
            return Ok(());
        }
        report
            .write_all(render_day(day, items).as_bytes())
            .context("write report")
    })?;
    report.flush().context("flush report")?;
    Ok(SimulationOutcome {
        days: cfg.days,
        items,
    })
}

/// Render one day of the plain-text report.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {} --------\n", day);
    out.push_str("name, sellIn, quality\n");
    for item in items {
        out.push_str(&format!("{}\n", item));
    }
    out.push('\n');
    out
}
