//! Backend selection
//!
//! Picks the one package manager this process will drive. macOS always gets
//! Homebrew; Linux is probed through distribution marker files, first hit wins.

use crate::backends::config::BackendConfig;
use crate::backends::registry::BackendRegistry;
use crate::error::Result;
use crate::traits::HostProbe;
use crate::utils::platform::HostPlatform;
use std::path::Path;

/// Linux package managers in probe order, with the file that marks their distro family.
pub const LINUX_MARKERS: &[(&str, &str)] = &[
    ("apt-get", "/etc/debian_version"),
    ("pacman", "/etc/arch-release"),
    ("dnf", "/etc/redhat-release"),
];

pub const MACOS_BACKEND: &str = "brew";

/// Select the backend for `platform`. Returns `None` on unsupported hosts.
pub fn select_backend(
    platform: HostPlatform,
    probe: &dyn HostProbe,
    registry: &BackendRegistry,
) -> Option<BackendConfig> {
    match platform {
        HostPlatform::MacOs => registry.get(MACOS_BACKEND).cloned(),
        HostPlatform::Linux => LINUX_MARKERS
            .iter()
            .find(|(_, marker)| probe.path_exists(Path::new(marker)))
            .and_then(|(name, _)| registry.get(name).cloned()),
        HostPlatform::Other => None,
    }
}

/// Explicitly requested backend first, host detection otherwise.
pub fn resolve_backend(
    explicit: Option<&str>,
    platform: HostPlatform,
    probe: &dyn HostProbe,
    registry: &BackendRegistry,
) -> Result<Option<BackendConfig>> {
    match explicit {
        Some(name) => registry.require(name).map(Some),
        None => Ok(select_backend(platform, probe, registry)),
    }
}

/// Marker file status for every Linux backend, in probe order.
pub fn marker_report(probe: &dyn HostProbe) -> Vec<(&'static str, &'static str, bool)> {
    LINUX_MARKERS
        .iter()
        .map(|(name, marker)| (*name, *marker, probe.path_exists(Path::new(marker))))
        .collect()
}
