//! Stable exit codes for the `gilded-rose` CLI.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid config, inventory or rule file, or an I/O error.
pub const INVALID: i32 = 1;
