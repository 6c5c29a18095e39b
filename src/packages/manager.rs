use crate::backends::config::BackendConfig;
use crate::backends::registry::BackendRegistry;
use crate::backends::selector;
use crate::core::resolver;
use crate::core::types::{InstallOutcome, PackageSpec, Resolution};
use crate::error::Result;
use crate::traits::{CommandRunner, HostProbe};
use crate::ui;
use crate::utils::platform::HostPlatform;
use std::path::{Path, PathBuf};

/// Drives the one backend active for this process.
pub struct PackageManager<R: CommandRunner> {
    backend: Option<BackendConfig>,
    runner: R,
    working_dir: PathBuf,
    dry_run: bool,
}

impl<R: CommandRunner> PackageManager<R> {
    /// Use `backend` as is. `None` means the host is unsupported.
    pub fn new(backend: Option<BackendConfig>, runner: R, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            runner,
            working_dir: working_dir.into(),
            dry_run: false,
        }
    }

    /// Select the backend for the host once and keep it for the lifetime of the manager.
    pub fn for_host(
        explicit_backend: Option<&str>,
        platform: HostPlatform,
        probe: &dyn HostProbe,
        registry: &BackendRegistry,
        runner: R,
        working_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let backend = selector::resolve_backend(explicit_backend, platform, probe, registry)?;
        Ok(Self::new(backend, runner, working_dir))
    }

    /// Print mutating commands instead of running them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn backend(&self) -> Option<&BackendConfig> {
        self.backend.as_ref()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Run the backend's existence check. No check defined means the package is assumed to exist.
    pub fn package_exists(&self, name: &str) -> bool {
        match self.backend.as_ref().and_then(|b| b.exists_cmd.as_ref()) {
            Some(check) => self.runner.run(&check.render(name), true, &self.working_dir),
            None => true,
        }
    }

    /// Resolve one spec. Without a backend nothing applies.
    pub fn resolve(&self, spec: &PackageSpec) -> Resolution {
        match &self.backend {
            Some(backend) => resolver::resolve(spec, backend, |name| self.package_exists(name)),
            None => Resolution::NotApplicable,
        }
    }

    /// Resolve and install one spec. Install failures are reported in the outcome.
    pub fn install_one(&self, spec: &PackageSpec) -> InstallOutcome {
        let Some(install_cmd) = self.backend.as_ref().and_then(|b| b.install_cmd.as_ref()) else {
            return InstallOutcome::default();
        };

        let resolution = self.resolve(spec);
        let mut outcome = InstallOutcome::from(&resolution);

        match resolution {
            Resolution::Found(name) => {
                outcome.attempted = true;
                outcome.installed = self.run_mutating(&install_cmd.render(&name), true);
                if !outcome.installed {
                    ui::warning(&format!("Package {} failed to install", name));
                }
            }
            Resolution::Missing { name } => {
                ui::lowinfo(&format!(
                    "Skipping installation as package {} does not exist",
                    name.unwrap_or_else(|| spec.to_string())
                ));
            }
            Resolution::NotApplicable => {
                ui::lowinfo(&format!(
                    "Skipping {}: no entry for this backend or platform",
                    spec
                ));
            }
        }

        outcome
    }

    /// Install every spec in order.
    ///
    /// Returns `false` right away when the backend cannot install. A failed
    /// package flips the result but does not stop the batch; skipped specs
    /// never affect it.
    pub fn install_all(&self, specs: &[PackageSpec]) -> bool {
        if self.backend.as_ref().and_then(|b| b.install_cmd.as_ref()).is_none() {
            return false;
        }

        let mut success = true;
        for spec in specs {
            if ui::is_interrupted() {
                return false;
            }

            ui::info(&format!("Installing package: {}", spec));
            let outcome = self.install_one(spec);
            if outcome.is_failure() {
                success = false;
            }
        }

        success
    }

    /// Refresh the package index. No update command means nothing to do.
    pub fn update(&self) -> bool {
        match self.backend.as_ref().and_then(|b| b.update_cmd.as_deref()) {
            Some(cmd) => self.run_mutating(cmd, true),
            None => true,
        }
    }

    /// Upgrade installed packages with output visible. No upgrade command means nothing to do.
    pub fn upgrade(&self) -> bool {
        match self.backend.as_ref().and_then(|b| b.upgrade_cmd.as_deref()) {
            Some(cmd) => {
                ui::info(&format!("Begin upgrade <{}>", cmd));
                self.run_mutating(cmd, false)
            }
            None => true,
        }
    }

    /// Install the package manager itself. No bootstrap command means nothing to do.
    pub fn bootstrap(&self) -> bool {
        match self.backend.as_ref().and_then(|b| b.bootstrap_cmd.as_deref()) {
            Some(cmd) => self.run_mutating(cmd, false),
            None => true,
        }
    }

    fn run_mutating(&self, command: &str, silent: bool) -> bool {
        if self.dry_run {
            ui::indent(&format!("[dry-run] {}", command), 1);
            return true;
        }
        self.runner.run(command, silent, &self.working_dir)
    }
}
