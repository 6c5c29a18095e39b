//! Install command
//!
//! Installs packages named on the command line without a directive file.
//! `a|b` is an alternatives list: the first name that exists is installed.

use crate::commands::runtime::RuntimeOptions;
use crate::core::types::PackageSpec;
use crate::error::{OmnipkgError, Result};
use crate::ui as output;

/// Options for the install command
#[derive(Debug)]
pub struct InstallOptions {
    /// Package(s) to install
    pub packages: Vec<String>,
}

/// Turn a command line argument into a spec.
pub fn parse_package_arg(arg: &str) -> Result<PackageSpec> {
    let names: Vec<String> = arg
        .split('|')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect();

    match names.len() {
        0 => Err(OmnipkgError::ConfigError(format!(
            "Invalid package argument: '{}'",
            arg
        ))),
        1 if !arg.contains('|') => Ok(PackageSpec::Plain(names[0].clone())),
        _ => Ok(PackageSpec::Alternatives(names)),
    }
}

/// Run the install command
pub fn run(options: InstallOptions, runtime: &RuntimeOptions) -> Result<()> {
    let specs = options
        .packages
        .iter()
        .map(|arg| parse_package_arg(arg))
        .collect::<Result<Vec<_>>>()?;

    let manager = runtime.manager(runtime.working_dir(None)?)?;
    let Some(backend) = manager.backend() else {
        return Err(OmnipkgError::Other(
            "No supported package manager found on this host".to_string(),
        ));
    };
    output::info(&format!("Using package manager: {}", backend.name));

    if manager.install_all(&specs) {
        output::success(&format!("Processed {} package(s)", specs.len()));
        Ok(())
    } else if output::is_interrupted() {
        Err(OmnipkgError::Interrupted)
    } else {
        Err(OmnipkgError::Other(
            "Some packages failed to install".to_string(),
        ))
    }
}
