//! Detect command
//!
//! Shows which package manager would be used on this host and why.

use crate::backends::config::BackendConfig;
use crate::backends::selector;
use crate::commands::runtime::RuntimeOptions;
use crate::error::Result;
use crate::traits::FilesystemProbe;
use crate::ui as output;
use crate::utils::platform::HostPlatform;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MarkerStatus {
    backend: &'static str,
    path: &'static str,
    present: bool,
}

#[derive(Debug, Serialize)]
struct DetectReport {
    platform: String,
    markers: Vec<MarkerStatus>,
    backend: Option<BackendConfig>,
    binary_available: bool,
}

pub fn run(json: bool, runtime: &RuntimeOptions) -> Result<()> {
    let platform = HostPlatform::current();
    let registry = runtime.registry()?;
    let backend = selector::resolve_backend(
        runtime.backend.as_deref(),
        platform,
        &FilesystemProbe,
        &registry,
    )?;

    let markers = match platform {
        HostPlatform::Linux => selector::marker_report(&FilesystemProbe)
            .into_iter()
            .map(|(backend, path, present)| MarkerStatus {
                backend,
                path,
                present,
            })
            .collect(),
        _ => Vec::new(),
    };

    let binary_available = backend
        .as_ref()
        .is_some_and(|b| which::which(&b.binary).is_ok());

    let report = DetectReport {
        platform: platform.to_string(),
        markers,
        backend,
        binary_available,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &DetectReport) {
    output::keyval("Platform", &report.platform);

    for marker in &report.markers {
        let status = if marker.present { "present" } else { "missing" };
        output::indent(
            &format!("{} ({}): {}", marker.path, marker.backend, status),
            1,
        );
    }

    let Some(backend) = &report.backend else {
        output::warning("No supported package manager found on this host");
        return;
    };

    output::keyval("Backend", &backend.name);
    if !report.binary_available {
        output::warning(&format!("'{}' is not on PATH", backend.binary));
    }

    let or_none = |cmd: Option<String>| cmd.unwrap_or_else(|| "(none)".to_string());
    output::keyval("Lookup key", &or_none(backend.lookup_key.clone()));
    output::keyval("Platform key", &backend.platform_name);
    output::keyval(
        "Install",
        &or_none(backend.install_cmd.as_ref().map(ToString::to_string)),
    );
    output::keyval(
        "Exists",
        &or_none(backend.exists_cmd.as_ref().map(ToString::to_string)),
    );
    output::keyval("Update", &or_none(backend.update_cmd.clone()));
    output::keyval("Upgrade", &or_none(backend.upgrade_cmd.clone()));
    output::keyval("Bootstrap", &or_none(backend.bootstrap_cmd.clone()));
}
