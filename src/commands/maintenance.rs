//! Update, upgrade and bootstrap commands
//!
//! Each runs the selected backend's command once. A backend without the
//! command has nothing to do, which counts as success.

use crate::commands::runtime::RuntimeOptions;
use crate::error::{OmnipkgError, Result};
use crate::ui as output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maintenance {
    Update,
    Upgrade,
    Bootstrap,
}

impl Maintenance {
    fn failure_message(self) -> &'static str {
        match self {
            Maintenance::Update => "Failed to update package index",
            Maintenance::Upgrade => "Failed to upgrade packages",
            Maintenance::Bootstrap => "Failed to bootstrap package manager",
        }
    }
}

pub fn run(action: Maintenance, runtime: &RuntimeOptions) -> Result<()> {
    let manager = runtime.manager(runtime.working_dir(None)?)?;

    if manager.backend().is_none() {
        output::info("No supported package manager found; nothing to do");
    }

    let ok = match action {
        Maintenance::Update => manager.update(),
        Maintenance::Upgrade => manager.upgrade(),
        Maintenance::Bootstrap => manager.bootstrap(),
    };

    if ok {
        output::success("Done");
        Ok(())
    } else {
        Err(OmnipkgError::Other(action.failure_message().to_string()))
    }
}
