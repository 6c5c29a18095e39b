//! Check command
//!
//! Validates the directive file without running any package manager command,
//! and shows what each dictionary spec selects for the detected backend.

use crate::backends::config::BackendConfig;
use crate::backends::selector;
use crate::commands::runtime::RuntimeOptions;
use crate::config::types::Subdirective;
use crate::config::{loader, parser};
use crate::core::resolver;
use crate::core::types::PackageSpec;
use crate::error::Result;
use crate::traits::FilesystemProbe;
use crate::ui as output;
use crate::utils::platform::HostPlatform;

pub fn run(runtime: &RuntimeOptions) -> Result<()> {
    let config_path = runtime.config_path()?;
    let entries = loader::load_directives(&config_path)?;
    let registry = runtime.registry()?;
    let backend = selector::resolve_backend(
        runtime.backend.as_deref(),
        HostPlatform::current(),
        &FilesystemProbe,
        &registry,
    )?;

    let mut handled = 0usize;
    let mut packages = 0usize;

    for entry in &entries {
        if !parser::can_handle(&entry.name) {
            output::lowinfo(&format!("Ignoring directive '{}'", entry.name));
            continue;
        }

        let subdirectives = parser::parse_directive(&entry.name, &entry.data)?;
        handled += 1;

        for sub in &subdirectives {
            if let Subdirective::Install(specs) = sub {
                packages += specs.len();
                if output::is_verbose() {
                    for spec in specs {
                        output::indent(&describe(spec, backend.as_ref()), 1);
                    }
                }
            }
        }
    }

    println!("Configuration OK");
    println!("  Directives: {}", handled);
    println!("  Package specs: {}", packages);
    if let Some(backend) = &backend {
        println!("  Backend: {}", backend.name);
    }

    Ok(())
}

/// One line per spec: what it would select, without asking the package manager.
fn describe(spec: &PackageSpec, backend: Option<&BackendConfig>) -> String {
    match (spec, backend) {
        (PackageSpec::Keyed(entries), Some(backend)) => {
            match resolver::select_entry(entries, backend) {
                Some((key, entry)) => format!("{} -> {} (via '{}')", spec, entry, key),
                None => format!("{} -> not applicable", spec),
            }
        }
        _ => spec.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::registry::get_builtin_backends;
    use crate::core::types::KeyedEntry;
    use std::collections::BTreeMap;

    #[test]
    fn describe_shows_selected_key() {
        let mut entries = BTreeMap::new();
        entries.insert("else".to_string(), KeyedEntry::Name("fd".into()));
        let spec = PackageSpec::Keyed(entries);
        let backend = get_builtin_backends()["pacman"].clone();

        assert_eq!(describe(&spec, Some(&backend)), "{else: fd} -> fd (via 'else')");
    }

    #[test]
    fn describe_not_applicable() {
        let mut entries = BTreeMap::new();
        entries.insert("mac".to_string(), KeyedEntry::Name("gnu-sed".into()));
        let spec = PackageSpec::Keyed(entries);
        let backend = get_builtin_backends()["dnf"].clone();

        assert_eq!(describe(&spec, Some(&backend)), "{mac: gnu-sed} -> not applicable");
    }
}
