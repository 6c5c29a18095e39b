//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "OmniPkg";
pub const BINARY_NAME: &str = "omnipkg";
pub const CONFIG_DIR_NAME: &str = "omnipkg";
pub const ENV_PREFIX: &str = "OMNIPKG";
pub const CONFIG_FILE_BASENAME: &str = "omnipkg.yaml";
pub const BACKENDS_FILE_BASENAME: &str = "backends.yaml";

/// Directive that carries a list of subdirectives (`update`, `upgrade`, `install: [...]`).
pub const DIRECTIVE: &str = "omnipkg";
pub const INSTALL_DIRECTIVE: &str = "omnipkg-install";
pub const UPDATE_DIRECTIVE: &str = "omnipkg-update";
pub const UPGRADE_DIRECTIVE: &str = "omnipkg-upgrade";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}
