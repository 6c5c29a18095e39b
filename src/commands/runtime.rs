//! Shared setup for commands that talk to a package manager.

use crate::backends::command_exec::ShellRunner;
use crate::backends::registry::BackendRegistry;
use crate::error::{OmnipkgError, Result};
use crate::packages::PackageManager;
use crate::traits::FilesystemProbe;
use crate::utils::paths;
use crate::utils::platform::HostPlatform;
use std::path::{Path, PathBuf};

/// Options every command shares (from global CLI flags).
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Directive file (`--config`)
    pub config: Option<PathBuf>,
    /// Backend override file (`--backends`)
    pub backends_file: Option<PathBuf>,
    /// Use this backend instead of detecting one (`--backend`)
    pub backend: Option<String>,
    /// Working directory for every command (`--base-dir`)
    pub base_dir: Option<PathBuf>,
    /// Print mutating commands instead of running them
    pub dry_run: bool,
}

impl RuntimeOptions {
    pub fn config_path(&self) -> Result<PathBuf> {
        paths::config_file(self.config.as_deref())
    }

    /// Built-ins merged with the explicit override file, or with the
    /// `backends.yaml` next to the directive file when present.
    pub fn registry(&self) -> Result<BackendRegistry> {
        match &self.backends_file {
            Some(file) => {
                let file = paths::expand_home(file)?;
                if !file.exists() {
                    return Err(OmnipkgError::ConfigNotFound { path: file });
                }
                BackendRegistry::load(Some(&file))
            }
            None => {
                let sibling = self
                    .config_path()
                    .ok()
                    .map(|config| paths::sibling_backends_file(&config));
                BackendRegistry::load(sibling.as_deref())
            }
        }
    }

    /// `--base-dir`, else the directive file's directory, else the current directory.
    pub fn working_dir(&self, config_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return paths::expand_home(dir);
        }

        if let Some(parent) = config_path.and_then(Path::parent)
            && !parent.as_os_str().is_empty()
        {
            return Ok(parent.to_path_buf());
        }

        Ok(std::env::current_dir()?)
    }

    /// Select the backend for this host and wrap it in a shell-backed manager.
    pub fn manager(&self, working_dir: PathBuf) -> Result<PackageManager<ShellRunner>> {
        let registry = self.registry()?;
        let manager = PackageManager::for_host(
            self.backend.as_deref(),
            HostPlatform::current(),
            &FilesystemProbe,
            &registry,
            ShellRunner,
            working_dir,
        )?;
        Ok(manager.with_dry_run(self.dry_run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_wins_over_config_dir() {
        let options = RuntimeOptions {
            base_dir: Some(PathBuf::from("/srv/dots")),
            ..Default::default()
        };
        let dir = options
            .working_dir(Some(Path::new("/home/me/omnipkg.yaml")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/srv/dots"));
    }

    #[test]
    fn config_dir_is_default_working_dir() {
        let options = RuntimeOptions::default();
        let dir = options
            .working_dir(Some(Path::new("/home/me/dots/omnipkg.yaml")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/home/me/dots"));
    }

    #[test]
    fn bare_file_name_falls_back_to_current_dir() {
        let options = RuntimeOptions::default();
        let dir = options.working_dir(Some(Path::new("omnipkg.yaml"))).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn missing_explicit_backends_file_is_an_error() {
        let options = RuntimeOptions {
            backends_file: Some(PathBuf::from("/nonexistent/backends.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            options.registry(),
            Err(OmnipkgError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn unknown_explicit_backend_is_an_error() {
        let options = RuntimeOptions {
            backend: Some("zypper".to_string()),
            config: Some(PathBuf::from("/nonexistent/omnipkg.yaml")),
            ..Default::default()
        };
        assert!(options.manager(PathBuf::from("/tmp")).is_err());
    }
}
