use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "omnipkg",
    about = "Declarative cross-platform package installation",
    long_about = "Install one platform-independent package list with whatever package manager \
                  the host has: apt-get, pacman, dnf or Homebrew",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (show skipped packages and probes)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print install/update/upgrade commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Directive file (default: ~/.config/omnipkg/omnipkg.yaml, or $OMNIPKG_CONFIG)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Backend override file (default: backends.yaml next to the directive file)
    #[arg(long, value_name = "FILE", global = true)]
    pub backends: Option<PathBuf>,

    /// Use this backend instead of detecting one (e.g. "pacman")
    #[arg(short = 'b', long, value_name = "NAME", global = true)]
    pub backend: Option<String>,

    /// Working directory for package manager commands
    #[arg(long, value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every omnipkg directive in the directive file
    Apply,

    /// Install packages by name ("a|b" installs the first one that exists)
    Install {
        /// Packages to install
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Refresh the package index
    Update,

    /// Upgrade installed packages
    Upgrade,

    /// Install the package manager itself (Homebrew on macOS)
    Bootstrap,

    /// Show the detected platform and package manager
    Detect {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the directive file without running anything
    Check,

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests;
