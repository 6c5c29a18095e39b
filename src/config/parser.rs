//! Payload parsing
//!
//! Package specs and subdirectives are decided here, once, from the YAML
//! payload. Anything that does not fit one of the known shapes is a
//! configuration error; nothing is silently dropped.

use crate::config::types::Subdirective;
use crate::core::types::{KeyedEntry, PackageSpec};
use crate::error::{OmnipkgError, Result};
use crate::project_identity;
use serde_yml::Value;
use std::collections::BTreeMap;

pub const INSTALL_KEY: &str = "install";
pub const UPDATE_KEYWORD: &str = "update";
pub const UPGRADE_KEYWORD: &str = "upgrade";
pub const BOOTSTRAP_KEYWORD: &str = "bootstrap";

/// Human name of a YAML value's shape, for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn package_name(value: &Value, context: &str) -> Result<String> {
    match value {
        Value::String(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Value::String(_) => Err(OmnipkgError::ConfigError(format!(
            "Empty package name in {}",
            context
        ))),
        other => Err(OmnipkgError::ConfigError(format!(
            "Expected a package name in {}, found {}",
            context,
            kind(other)
        ))),
    }
}

fn name_list(items: &[Value], context: &str) -> Result<Vec<String>> {
    items.iter().map(|item| package_name(item, context)).collect()
}

/// Parse one entry of an install list.
pub fn parse_package_spec(value: &Value) -> Result<PackageSpec> {
    match value {
        Value::String(_) => Ok(PackageSpec::Plain(package_name(value, "install list")?)),
        Value::Sequence(items) => Ok(PackageSpec::Alternatives(name_list(
            items,
            "alternatives list",
        )?)),
        Value::Mapping(mapping) => {
            let mut entries = BTreeMap::new();
            for (key, entry) in mapping {
                let key = key.as_str().ok_or_else(|| {
                    OmnipkgError::ConfigError(format!(
                        "Package dictionary keys must be strings, found {}",
                        kind(key)
                    ))
                })?;
                let context = format!("dictionary entry '{}'", key);
                let entry = match entry {
                    Value::Sequence(items) => {
                        KeyedEntry::Alternatives(name_list(items, &context)?)
                    }
                    other => KeyedEntry::Name(package_name(other, &context)?),
                };
                entries.insert(key.to_string(), entry);
            }
            Ok(PackageSpec::Keyed(entries))
        }
        other => Err(OmnipkgError::ConfigError(format!(
            "Unrecognized install entry of type {}",
            kind(other)
        ))),
    }
}

/// Parse an install list. A missing (null) list is empty.
pub fn parse_package_list(value: &Value) -> Result<Vec<PackageSpec>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items.iter().map(parse_package_spec).collect(),
        other => Err(OmnipkgError::ConfigError(format!(
            "Install list must be a list, found {}",
            kind(other)
        ))),
    }
}

fn parse_keyword(keyword: &str) -> Result<Subdirective> {
    match keyword {
        UPDATE_KEYWORD => Ok(Subdirective::Update),
        UPGRADE_KEYWORD => Ok(Subdirective::Upgrade),
        BOOTSTRAP_KEYWORD => Ok(Subdirective::Bootstrap),
        other => Err(OmnipkgError::ConfigError(format!(
            "Unknown subdirective '{}'",
            other
        ))),
    }
}

fn parse_subdirective(value: &Value) -> Result<Subdirective> {
    match value {
        Value::String(keyword) => parse_keyword(keyword),
        Value::Mapping(mapping) => {
            let mut install = None;
            for (key, data) in mapping {
                match key.as_str() {
                    Some(INSTALL_KEY) => install = Some(parse_package_list(data)?),
                    Some(other) => {
                        return Err(OmnipkgError::ConfigError(format!(
                            "Unknown subdirective '{}'",
                            other
                        )));
                    }
                    None => {
                        return Err(OmnipkgError::ConfigError(format!(
                            "Subdirective keys must be strings, found {}",
                            kind(key)
                        )));
                    }
                }
            }
            install.map(Subdirective::Install).ok_or_else(|| {
                OmnipkgError::ConfigError("Empty subdirective mapping".to_string())
            })
        }
        other => Err(OmnipkgError::ConfigError(format!(
            "Unrecognized subdirective of type {}",
            kind(other)
        ))),
    }
}

/// Parse the payload of the combined directive: a list of keywords and
/// `install:` mappings. A single keyword string is accepted as a shorthand.
pub fn parse_subdirectives(value: &Value) -> Result<Vec<Subdirective>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(_) => Ok(vec![parse_subdirective(value)?]),
        Value::Sequence(items) => items.iter().map(parse_subdirective).collect(),
        other => Err(OmnipkgError::ConfigError(format!(
            "Directive payload must be a list, found {}",
            kind(other)
        ))),
    }
}

/// Whether `directive` is one of ours.
pub fn can_handle(directive: &str) -> bool {
    [
        project_identity::DIRECTIVE,
        project_identity::INSTALL_DIRECTIVE,
        project_identity::UPDATE_DIRECTIVE,
        project_identity::UPGRADE_DIRECTIVE,
    ]
    .contains(&directive)
}

/// Turn a directive and its payload into the subdirectives to run.
pub fn parse_directive(directive: &str, data: &Value) -> Result<Vec<Subdirective>> {
    match directive {
        project_identity::DIRECTIVE => parse_subdirectives(data),
        project_identity::INSTALL_DIRECTIVE => {
            Ok(vec![Subdirective::Install(parse_package_list(data)?)])
        }
        project_identity::UPDATE_DIRECTIVE => Ok(vec![Subdirective::Update]),
        project_identity::UPGRADE_DIRECTIVE => Ok(vec![Subdirective::Upgrade]),
        other => Err(OmnipkgError::UnsupportedDirective(other.to_string())),
    }
}
