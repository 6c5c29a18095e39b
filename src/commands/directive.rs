//! Directive handling
//!
//! Entry point for a host configuration system: it asks [`can_handle`] for
//! each directive it reads and passes ours to [`DirectiveHandler::handle`].

use crate::config::parser;
use crate::config::types::Subdirective;
use crate::error::{OmnipkgError, Result};
use crate::packages::PackageManager;
use crate::traits::CommandRunner;
use crate::ui as output;
use serde_yml::Value;

pub use crate::config::parser::can_handle;

/// Runs our directives against one package manager.
pub struct DirectiveHandler<R: CommandRunner> {
    manager: PackageManager<R>,
}

impl<R: CommandRunner> DirectiveHandler<R> {
    pub fn new(manager: PackageManager<R>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &PackageManager<R> {
        &self.manager
    }

    /// Parse and run one directive.
    ///
    /// The whole payload is validated before anything runs; a malformed
    /// payload is an error. Subdirectives run in file order, and a failing one
    /// is logged without stopping the rest.
    pub fn handle(&self, directive: &str, data: &Value) -> Result<bool> {
        let subdirectives = parser::parse_directive(directive, data)?;

        let mut success = true;
        for sub in &subdirectives {
            if output::is_interrupted() {
                return Err(OmnipkgError::Interrupted);
            }
            if !self.run_subdirective(sub) {
                success = false;
            }
        }

        if output::is_interrupted() {
            return Err(OmnipkgError::Interrupted);
        }
        Ok(success)
    }

    /// Run one subdirective, logging an error when it fails.
    pub fn run_subdirective(&self, sub: &Subdirective) -> bool {
        let ok = match sub {
            Subdirective::Install(specs) => self.manager.install_all(specs),
            Subdirective::Update => self.manager.update(),
            Subdirective::Upgrade => self.manager.upgrade(),
            Subdirective::Bootstrap => self.manager.bootstrap(),
        };

        if !ok {
            match sub {
                Subdirective::Install(_) if self.manager.backend().is_none() => {
                    output::error("No supported package manager found on this host")
                }
                Subdirective::Install(_) => output::error("Some packages were not installed"),
                Subdirective::Update => output::error("Failed to update package index"),
                Subdirective::Upgrade => output::error("Failed to upgrade packages"),
                Subdirective::Bootstrap => output::error("Failed to bootstrap package manager"),
            }
        }

        ok
    }
}
