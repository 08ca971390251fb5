//! I/O helpers for the shop host: config, inventory and rule files.

pub mod config;
pub mod init;
pub mod inventory;
pub mod rule_file;
