use super::{Cli, Command};
use crate::project_identity;
use clap::{CommandFactory, Parser};

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn install_requires_packages() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "install"]);
    assert!(parsed.is_err());
}

#[test]
fn install_collects_packages() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "install", "git", "vim|nvim"])
        .expect("install should parse");

    let Some(Command::Install { packages }) = parsed.command else {
        panic!("expected install command");
    };
    assert_eq!(packages, vec!["git", "vim|nvim"]);
}

#[test]
fn global_flags_work_after_subcommand() {
    let parsed = Cli::try_parse_from([
        project_identity::BINARY_NAME,
        "apply",
        "--dry-run",
        "--backend",
        "pacman",
        "-c",
        "dots/omnipkg.yaml",
    ])
    .expect("apply with global flags should parse");

    assert!(parsed.global.dry_run);
    assert_eq!(parsed.global.backend.as_deref(), Some("pacman"));
    assert_eq!(
        parsed.global.config.as_deref(),
        Some(std::path::Path::new("dots/omnipkg.yaml"))
    );
}

#[test]
fn quiet_and_verbose_conflict() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "apply", "-q", "-v"]);
    assert!(parsed.is_err());
}

#[test]
fn help_lists_user_facing_commands() {
    let mut cmd = Cli::command();
    let mut out = Vec::new();
    cmd.write_long_help(&mut out).expect("can render help");
    let help = String::from_utf8(out).expect("help is valid utf8");

    assert!(help.contains("apply"));
    assert!(help.contains("detect"));
    assert!(help.contains("upgrade"));
    assert!(!help.contains("completions"));
}
