//! Batch installation scenarios driven through the public API with a
//! recording command runner instead of a real package manager.

use omnipkg::backends::{BackendConfig, CommandTemplate};
use omnipkg::config::parser::parse_package_list;
use omnipkg::core::types::PackageSpec;
use omnipkg::packages::PackageManager;
use omnipkg::traits::CommandRunner;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;

/// Fails existence checks for `missing` and installs for `broken`.
#[derive(Default)]
struct FakeCatalog {
    missing: HashSet<&'static str>,
    broken: HashSet<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    fn new(missing: &[&'static str], broken: &[&'static str]) -> Self {
        Self {
            missing: missing.iter().copied().collect(),
            broken: broken.iter().copied().collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn installs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.strip_prefix("install ").map(ToString::to_string))
            .collect()
    }

    fn checks(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.strip_prefix("exists ").map(ToString::to_string))
            .collect()
    }
}

impl CommandRunner for FakeCatalog {
    fn run(&self, command: &str, _silent: bool, _working_dir: &Path) -> bool {
        self.calls.borrow_mut().push(command.to_string());
        if let Some(pkg) = command.strip_prefix("exists ") {
            return !self.missing.contains(pkg);
        }
        if let Some(pkg) = command.strip_prefix("install ") {
            return !self.broken.contains(pkg);
        }
        true
    }
}

fn apt_like() -> BackendConfig {
    BackendConfig {
        name: "apt-get".to_string(),
        lookup_key: Some("apt".to_string()),
        platform_name: "linux".to_string(),
        binary: "apt-get".to_string(),
        install_cmd: CommandTemplate::new("install {package}"),
        update_cmd: Some("update".to_string()),
        upgrade_cmd: Some("upgrade".to_string()),
        exists_cmd: CommandTemplate::new("exists {package}"),
        bootstrap_cmd: None,
    }
}

fn specs(yaml: &str) -> Vec<PackageSpec> {
    let value: serde_yml::Value = serde_yml::from_str(yaml).expect("valid yaml");
    parse_package_list(&value).expect("valid install list")
}

#[test]
fn mixed_specs_all_install() {
    let catalog = FakeCatalog::new(&["vim"], &[]);
    let manager = PackageManager::new(Some(apt_like()), &catalog, "/tmp");

    let ok = manager.install_all(&specs(r#"["git", ["vim", "nvim"], {"apt": "curl"}]"#));

    assert!(ok);
    assert_eq!(catalog.installs(), vec!["git", "nvim", "curl"]);
}

#[test]
fn one_failed_install_fails_batch_but_others_run() {
    let catalog = FakeCatalog::new(&["vim"], &["curl"]);
    let manager = PackageManager::new(Some(apt_like()), &catalog, "/tmp");

    let ok = manager.install_all(&specs(r#"["git", ["vim", "nvim"], {"apt": "curl"}]"#));

    assert!(!ok);
    assert_eq!(catalog.installs(), vec!["git", "nvim", "curl"]);
}

#[test]
fn alternatives_stop_checking_after_first_hit() {
    let catalog = FakeCatalog::new(&["a"], &[]);
    let manager = PackageManager::new(Some(apt_like()), &catalog, "/tmp");

    assert!(manager.install_all(&specs("[[a, b, c]]")));
    assert_eq!(catalog.checks(), vec!["a", "b"]);
    assert_eq!(catalog.installs(), vec!["b"]);
}

#[test]
fn keyed_specs_follow_key_precedence() {
    let catalog = FakeCatalog::new(&[], &[]);
    let manager = PackageManager::new(Some(apt_like()), &catalog, "/tmp");

    let ok = manager.install_all(&specs(
        r#"
- {apt: x, else: y}
- {mac: z, else: w}
- {}
- {pacman: p}
"#,
    ));

    assert!(ok);
    assert_eq!(catalog.installs(), vec!["x", "w"]);
}

#[test]
fn missing_plain_package_is_not_installed() {
    let catalog = FakeCatalog::new(&["ghost"], &[]);
    let manager = PackageManager::new(Some(apt_like()), &catalog, "/tmp");

    assert!(manager.install_all(&specs("[ghost, git]")));
    assert_eq!(catalog.installs(), vec!["git"]);
}

#[test]
fn unsupported_host_never_spawns_anything() {
    let catalog = FakeCatalog::new(&[], &[]);
    let manager = PackageManager::new(None, &catalog, "/tmp");

    assert!(!manager.install_all(&specs("[git]")));
    assert!(manager.update());
    assert!(manager.upgrade());
    assert!(catalog.calls.borrow().is_empty());
}

#[test]
fn repeated_batches_agree() {
    let catalog = FakeCatalog::new(&["vim"], &["curl"]);
    let manager = PackageManager::new(Some(apt_like()), &catalog, "/tmp");
    let list = specs(r#"["git", ["vim", "nvim"], {"apt": "curl"}]"#);

    assert_eq!(manager.install_all(&list), manager.install_all(&list));
}
