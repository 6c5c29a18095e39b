//! Apply command
//!
//! Runs every omnipkg directive in the directive file, in order. Directives
//! owned by other tools are skipped.

use crate::commands::directive::{DirectiveHandler, can_handle};
use crate::commands::runtime::RuntimeOptions;
use crate::config::loader;
use crate::error::{OmnipkgError, Result};
use crate::ui as output;

pub fn run(options: &RuntimeOptions) -> Result<()> {
    let config_path = options.config_path()?;
    let entries = loader::load_directives(&config_path)?;
    let working_dir = options.working_dir(Some(&config_path))?;

    let manager = options.manager(working_dir)?;
    match manager.backend() {
        Some(backend) => output::info(&format!("Using package manager: {}", backend.name)),
        None => output::warning("No supported package manager found on this host"),
    }
    let handler = DirectiveHandler::new(manager);

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for entry in &entries {
        if !can_handle(&entry.name) {
            output::warning(&format!("Skipping unknown directive '{}'", entry.name));
            continue;
        }

        output::header(&entry.name);
        if handler.handle(&entry.name, &entry.data)? {
            succeeded += 1;
        } else {
            output::error(&format!("Directive '{}' did not complete successfully", entry.name));
            failed += 1;
        }
    }

    output::separator();
    if failed == 0 {
        output::success(&format!("{} directive(s) applied", succeeded));
        Ok(())
    } else {
        Err(OmnipkgError::Other(format!(
            "{} of {} directive(s) failed",
            failed,
            succeeded + failed
        )))
    }
}
