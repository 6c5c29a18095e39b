use crate::core::types::PackageSpec;
use serde_yml::Value;

/// One step of a directive, in the order it appears in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subdirective {
    Install(Vec<PackageSpec>),
    Update,
    Upgrade,
    Bootstrap,
}

impl Subdirective {
    pub fn label(&self) -> &'static str {
        match self {
            Subdirective::Install(_) => "install",
            Subdirective::Update => "update",
            Subdirective::Upgrade => "upgrade",
            Subdirective::Bootstrap => "bootstrap",
        }
    }
}

/// A directive name and its raw payload, as read from the directive file.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveEntry {
    pub name: String,
    pub data: Value,
}
