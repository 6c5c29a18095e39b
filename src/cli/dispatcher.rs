//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::commands::maintenance::Maintenance;
use crate::commands::runtime::RuntimeOptions;
use crate::error::Result;

/// Global flags shared by every command
pub fn runtime_options(args: &Cli) -> RuntimeOptions {
    RuntimeOptions {
        config: args.global.config.clone(),
        backends_file: args.global.backends.clone(),
        backend: args.global.backend.clone(),
        base_dir: args.global.base_dir.clone(),
        dry_run: args.global.dry_run,
    }
}

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let runtime = runtime_options(args);

    match &args.command {
        // No subcommand behaves like `apply`
        None | Some(Command::Apply) => commands::apply::run(&runtime),

        Some(Command::Install { packages }) => commands::install::run(
            commands::install::InstallOptions {
                packages: packages.clone(),
            },
            &runtime,
        ),

        Some(Command::Update) => commands::maintenance::run(Maintenance::Update, &runtime),
        Some(Command::Upgrade) => commands::maintenance::run(Maintenance::Upgrade, &runtime),
        Some(Command::Bootstrap) => commands::maintenance::run(Maintenance::Bootstrap, &runtime),

        Some(Command::Detect { json }) => commands::detect::run(*json, &runtime),

        Some(Command::Check) => commands::check::run(&runtime),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn runtime_options_mirror_global_flags() {
        let args = Cli::try_parse_from([
            "omnipkg",
            "--dry-run",
            "--base-dir",
            "/srv",
            "--backends",
            "b.yaml",
            "update",
        ])
        .unwrap();

        let runtime = runtime_options(&args);
        assert!(runtime.dry_run);
        assert_eq!(runtime.base_dir.as_deref(), Some(std::path::Path::new("/srv")));
        assert_eq!(
            runtime.backends_file.as_deref(),
            Some(std::path::Path::new("b.yaml"))
        );
        assert!(runtime.backend.is_none());
    }
}
