use crate::backends::config::{BackendConfig, BackendOverride, CommandTemplate};
use crate::error::{OmnipkgError, Result};
use crate::utils::platform::HostPlatform;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const HOMEBREW_INSTALLER: &str = "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

fn template(cmd: &str) -> Option<CommandTemplate> {
    CommandTemplate::new(cmd)
}

/// Get built-in backend configurations
pub fn get_builtin_backends() -> BTreeMap<String, BackendConfig> {
    let mut backends = BTreeMap::new();

    // === apt-get (Debian, Ubuntu, ...) ===
    backends.insert(
        "apt-get".to_string(),
        BackendConfig {
            name: "apt-get".to_string(),
            lookup_key: Some("apt".to_string()),
            platform_name: HostPlatform::Linux.to_string(),
            binary: "apt-get".to_string(),
            install_cmd: template("sudo apt-get install -y {package}"),
            update_cmd: Some("sudo apt-get update".to_string()),
            upgrade_cmd: Some("sudo apt-get dist-upgrade -y".to_string()),
            exists_cmd: template("apt-cache show {package}"),
            bootstrap_cmd: None,
        },
    );

    // === pacman (Arch Linux and derivatives) ===
    backends.insert(
        "pacman".to_string(),
        BackendConfig {
            name: "pacman".to_string(),
            lookup_key: Some("pacman".to_string()),
            platform_name: HostPlatform::Linux.to_string(),
            binary: "pacman".to_string(),
            install_cmd: template("sudo pacman --noconfirm -S {package}"),
            update_cmd: Some("sudo pacman --noconfirm -Syy".to_string()),
            // pacman has no separate dist-upgrade
            upgrade_cmd: Some("sudo pacman --noconfirm -Syu".to_string()),
            exists_cmd: template("pacman -Si {package}"),
            bootstrap_cmd: None,
        },
    );

    // === dnf (Fedora, RHEL, ...) ===
    backends.insert(
        "dnf".to_string(),
        BackendConfig {
            name: "dnf".to_string(),
            lookup_key: Some("dnf".to_string()),
            platform_name: HostPlatform::Linux.to_string(),
            binary: "dnf".to_string(),
            install_cmd: template("sudo dnf install -y {package}"),
            update_cmd: Some("sudo dnf makecache".to_string()),
            upgrade_cmd: Some("sudo dnf upgrade -y".to_string()),
            exists_cmd: template("dnf info {package}"),
            bootstrap_cmd: None,
        },
    );

    // === Homebrew (macOS) ===
    backends.insert(
        "brew".to_string(),
        BackendConfig {
            name: "brew".to_string(),
            lookup_key: Some("brew".to_string()),
            platform_name: HostPlatform::MacOs.to_string(),
            binary: "brew".to_string(),
            install_cmd: template("brew install {package}"),
            update_cmd: Some("brew update".to_string()),
            upgrade_cmd: Some("brew upgrade".to_string()),
            exists_cmd: template("brew info {package}"),
            bootstrap_cmd: Some(format!(
                "command -v brew >/dev/null || /bin/bash -c \"$(curl -fsSL {})\"",
                HOMEBREW_INSTALLER
            )),
        },
    );

    backends
}

/// All backends known to this run: built-ins plus user overrides.
#[derive(Debug, Clone)]
pub struct BackendRegistry {
    backends: BTreeMap<String, BackendConfig>,
}

impl BackendRegistry {
    pub fn builtin() -> Self {
        Self {
            backends: get_builtin_backends(),
        }
    }

    /// Merge overrides over the built-ins. Unknown names define new backends
    /// for the current platform.
    pub fn with_overrides(overrides: &BTreeMap<String, BackendOverride>) -> Self {
        let mut registry = Self::builtin();
        for (name, backend_override) in overrides {
            registry
                .backends
                .entry(name.clone())
                .or_insert_with(|| {
                    BackendConfig::bare(name, &HostPlatform::current().to_string())
                })
                .apply_override(backend_override);
        }
        registry
    }

    /// Load the override file, or the built-ins alone when it does not exist.
    pub fn load(overrides_file: Option<&Path>) -> Result<Self> {
        match overrides_file {
            Some(path) if path.exists() => {
                let overrides = load_overrides(path)?;
                Ok(Self::with_overrides(&overrides))
            }
            _ => Ok(Self::builtin()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BackendConfig> {
        self.backends.get(name)
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<BackendConfig> {
        self.get(name)
            .cloned()
            .ok_or_else(|| OmnipkgError::BackendNotFound {
                name: name.to_string(),
                known: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }
}

/// Parse a backends file: a mapping from backend name to partial settings.
pub fn load_overrides(path: &Path) -> Result<BTreeMap<String, BackendOverride>> {
    let content = fs::read_to_string(path).map_err(|e| OmnipkgError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_yml::from_str(&content).map_err(|e| OmnipkgError::ParseError {
        file: path.display().to_string(),
        message: e.to_string(),
    })
}
