//! Core traits for dependency injection and testability
//!
//! Everything that touches the host (spawning shell commands, probing marker
//! files) goes through these traits so the selection, resolution and batch
//! logic can be driven by test doubles.

use std::path::Path;

/// Runs one shell command to completion.
pub trait CommandRunner {
    /// Run `command` through the shell inside `working_dir`.
    ///
    /// When `silent` is set, stdout and stderr are discarded; otherwise they
    /// are passed through to the terminal. Returns `true` only for exit code 0.
    /// Spawn failures are reported as `false`, never as an error.
    fn run(&self, command: &str, silent: bool, working_dir: &Path) -> bool;
}

/// Read-only view of the host filesystem used for backend detection.
pub trait HostProbe {
    fn path_exists(&self, path: &Path) -> bool;
}

/// Probes the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemProbe;

impl HostProbe for FilesystemProbe {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for Box<T> {
    fn run(&self, command: &str, silent: bool, working_dir: &Path) -> bool {
        (**self).run(command, silent, working_dir)
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &str, silent: bool, working_dir: &Path) -> bool {
        (**self).run(command, silent, working_dir)
    }
}
