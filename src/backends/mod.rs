//! # Package manager backends
//!
//! A backend is plain data: the command templates for one native package
//! manager plus the keys dictionary-style package specs are matched against.
//!
//! ## Module Structure
//!
//! ### [`config`] - Backend Configuration
//!
//! `BackendConfig` and the `{package}` command templates. Optional commands
//! are `Option`s; an empty string in user configuration means "not defined".
//!
//! ### [`registry`] - Built-in Backends
//!
//! apt-get, pacman, dnf and Homebrew, merged with user overrides from
//! `backends.yaml`:
//!
//! ```yaml
//! pacman:
//!   install: "paru -S --noconfirm {package}"
//! mockpm:
//!   install: "mockpm add {package}"
//!   exists: ""
//! ```
//!
//! ### [`selector`] - Host Detection
//!
//! Chooses exactly one backend for the host: Homebrew on macOS, the first
//! distribution marker file found on Linux.
//!
//! ### [`command_exec`] - Shell Execution
//!
//! `ShellRunner`, the production [`CommandRunner`](crate::traits::CommandRunner).

pub mod command_exec;
pub mod config;
pub mod registry;
pub mod selector;

pub use config::{BackendConfig, BackendOverride, CommandTemplate};
pub use registry::{BackendRegistry, get_builtin_backends};
