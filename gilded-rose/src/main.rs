//! Gilded Rose inventory simulator.
//!
//! Reads `.gilded-rose/` (config, inventory, rules) from the project root,
//! advances the inventory one rule-engine pass per day and prints a daily
//! report. Missing files fall back to the built-in shop.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gilded_rose::core::RuleEngine;
use gilded_rose::exit_codes;
use gilded_rose::io::init::{InitOptions, ShopPaths, init_shop};
use gilded_rose::io::rule_file::load_rules;
use gilded_rose::logging;
use gilded_rose::simulate::simulate_from_root;

#[derive(Parser)]
#[command(
    name = "gilded-rose",
    version,
    about = "Rule-driven Gilded Rose inventory simulator"
)]
struct Cli {
    /// Project root containing `.gilded-rose/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.gilded-rose/` with default config, inventory and rules.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Advance the inventory and print one report section per day.
    Simulate {
        /// Number of days to run (overrides `days` in config.toml).
        #[arg(long)]
        days: Option<u32>,
    },
    /// Print rule names in evaluation order.
    Rules,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(cli.root, force),
        Command::Simulate { days } => cmd_simulate(cli.root, days),
        Command::Rules => cmd_rules(cli.root),
    }
}

fn cmd_init(root: PathBuf, force: bool) -> Result<()> {
    let paths = init_shop(&root, &InitOptions { force })?;
    println!("initialized {}", paths.shop_dir.display());
    Ok(())
}

fn cmd_simulate(root: PathBuf, days: Option<u32>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    simulate_from_root(&root, days, &mut stdout)?;
    Ok(())
}

fn cmd_rules(root: PathBuf) -> Result<()> {
    let paths = ShopPaths::new(root);
    let engine = RuleEngine::new(load_rules(&paths.rules_path)?);
    for rule in engine.rules() {
        println!("{}", rule.name());
    }
    Ok(())
}
