//! Package name resolution
//!
//! Turns one [`PackageSpec`] into at most one concrete package name for the
//! active backend. Existence is asked through a callback so the caller decides
//! how (and whether) the catalog is queried.

use crate::backends::config::BackendConfig;
use crate::core::types::{ELSE_KEY, KeyedEntry, PackageSpec, Resolution};
use std::collections::BTreeMap;

/// Resolve `spec` against `backend`.
///
/// `exists` is called once per candidate, in order, and never again after a
/// candidate passes.
pub fn resolve<F>(spec: &PackageSpec, backend: &BackendConfig, mut exists: F) -> Resolution
where
    F: FnMut(&str) -> bool,
{
    match spec {
        PackageSpec::Plain(name) => check_single(name, &mut exists),
        PackageSpec::Alternatives(names) => first_existing(names, &mut exists),
        PackageSpec::Keyed(entries) => match select_entry(entries, backend) {
            Some((_, KeyedEntry::Name(name))) => check_single(name, &mut exists),
            Some((_, KeyedEntry::Alternatives(names))) => first_existing(names, &mut exists),
            None => Resolution::NotApplicable,
        },
    }
}

/// Pick the dictionary entry for this backend: lookup key, platform, then `"else"`.
pub fn select_entry<'a>(
    entries: &'a BTreeMap<String, KeyedEntry>,
    backend: &BackendConfig,
) -> Option<(&'a str, &'a KeyedEntry)> {
    let candidates = backend
        .lookup_key
        .as_deref()
        .into_iter()
        .chain([backend.platform_name.as_str(), ELSE_KEY]);

    for key in candidates {
        if let Some((key, entry)) = entries.get_key_value(key) {
            return Some((key.as_str(), entry));
        }
    }
    None
}

fn check_single<F>(name: &str, exists: &mut F) -> Resolution
where
    F: FnMut(&str) -> bool,
{
    if exists(name) {
        Resolution::Found(name.to_string())
    } else {
        Resolution::Missing {
            name: Some(name.to_string()),
        }
    }
}

fn first_existing<F>(names: &[String], exists: &mut F) -> Resolution
where
    F: FnMut(&str) -> bool,
{
    names
        .iter()
        .find(|name| exists(name.as_str()))
        .map(|name| Resolution::Found(name.clone()))
        .unwrap_or(Resolution::Missing { name: None })
}
