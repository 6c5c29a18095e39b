use serde::{Deserialize, Serialize};
use std::fmt;

/// Command with a `{package}` placeholder.
///
/// A template without the placeholder gets the package name appended after a
/// single space, so `"brew install"` and `"brew install {package}"` behave the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandTemplate(String);

impl CommandTemplate {
    pub const PLACEHOLDER: &'static str = "{package}";

    /// Returns `None` for empty or whitespace-only commands.
    pub fn new(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        if template.trim().is_empty() {
            None
        } else {
            Some(Self(template))
        }
    }

    /// Interpolate a package name. No shell escaping is applied.
    pub fn render(&self, package: &str) -> String {
        if self.0.contains(Self::PLACEHOLDER) {
            self.0.replace(Self::PLACEHOLDER, package)
        } else {
            format!("{} {}", self.0.trim_end(), package)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize an optional command string: empty means "not defined".
pub fn optional_command(command: Option<String>) -> Option<String> {
    command.filter(|c| !c.trim().is_empty())
}

/// Configuration for a package manager backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendConfig {
    /// Backend identifier (e.g., "apt-get", "pacman")
    pub name: String,

    /// Key matched first in dictionary-style package specs (e.g., "apt")
    pub lookup_key: Option<String>,

    /// Platform key matched second in dictionary-style specs ("linux", "mac")
    pub platform_name: String,

    /// Binary that must be on PATH for the backend to work (reported by `detect`)
    pub binary: String,

    /// Install one package. Required for installs: without it every batch fails.
    pub install_cmd: Option<CommandTemplate>,

    /// Refresh the package index. Optional: absent means nothing to do.
    pub update_cmd: Option<String>,

    /// Upgrade installed packages. Optional: absent means nothing to do.
    pub upgrade_cmd: Option<String>,

    /// Exits 0 when the package exists in the catalog.
    /// Optional: absent means every package is assumed to exist.
    pub exists_cmd: Option<CommandTemplate>,

    /// One-shot command that installs the package manager itself
    pub bootstrap_cmd: Option<String>,
}

impl BackendConfig {
    /// A backend with no commands at all.
    pub fn bare(name: &str, platform_name: &str) -> Self {
        Self {
            name: name.to_string(),
            lookup_key: None,
            platform_name: platform_name.to_string(),
            binary: name.to_string(),
            install_cmd: None,
            update_cmd: None,
            upgrade_cmd: None,
            exists_cmd: None,
            bootstrap_cmd: None,
        }
    }

    /// Apply user overrides on top of this configuration.
    ///
    /// A field set to an empty string clears the optional value.
    pub fn apply_override(&mut self, overrides: &BackendOverride) {
        if let Some(key) = &overrides.lookup_key {
            self.lookup_key = optional_command(Some(key.clone()));
        }
        if let Some(platform) = &overrides.platform_name {
            self.platform_name = platform.clone();
        }
        if let Some(binary) = &overrides.binary {
            self.binary = binary.clone();
        }
        if let Some(install) = &overrides.install {
            self.install_cmd = CommandTemplate::new(install.clone());
        }
        if let Some(update) = &overrides.update {
            self.update_cmd = optional_command(Some(update.clone()));
        }
        if let Some(upgrade) = &overrides.upgrade {
            self.upgrade_cmd = optional_command(Some(upgrade.clone()));
        }
        if let Some(exists) = &overrides.exists {
            self.exists_cmd = CommandTemplate::new(exists.clone());
        }
        if let Some(bootstrap) = &overrides.bootstrap {
            self.bootstrap_cmd = optional_command(Some(bootstrap.clone()));
        }
    }
}

/// Partial backend definition read from the user's backends file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendOverride {
    pub lookup_key: Option<String>,
    pub platform_name: Option<String>,
    pub binary: Option<String>,
    pub install: Option<String>,
    pub update: Option<String>,
    pub upgrade: Option<String>,
    pub exists: Option<String>,
    pub bootstrap: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_replaces_placeholder() {
        let tpl = CommandTemplate::new("sudo apt-get install -y {package}").unwrap();
        assert_eq!(tpl.render("git"), "sudo apt-get install -y git");
    }

    #[test]
    fn template_without_placeholder_appends_name() {
        let tpl = CommandTemplate::new("brew install ").unwrap();
        assert_eq!(tpl.render("wget"), "brew install wget");
    }

    #[test]
    fn empty_template_is_absent() {
        assert!(CommandTemplate::new("").is_none());
        assert!(CommandTemplate::new("   ").is_none());
        assert_eq!(optional_command(Some(String::new())), None);
    }

    #[test]
    fn override_replaces_and_clears_fields() {
        let mut config = BackendConfig::bare("apt-get", "linux");
        config.update_cmd = Some("sudo apt-get update".to_string());

        let overrides = BackendOverride {
            install: Some("echo {package}".to_string()),
            update: Some(String::new()),
            lookup_key: Some("apt".to_string()),
            ..Default::default()
        };
        config.apply_override(&overrides);

        assert_eq!(config.install_cmd.unwrap().render("x"), "echo x");
        assert_eq!(config.update_cmd, None);
        assert_eq!(config.lookup_key.as_deref(), Some("apt"));
        assert_eq!(config.platform_name, "linux");
    }

    #[test]
    fn override_rejects_unknown_fields() {
        let parsed: std::result::Result<BackendOverride, _> =
            serde_yml::from_str("install: x\nremove: y\n");
        assert!(parsed.is_err());
    }
}
