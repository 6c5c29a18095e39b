use std::collections::BTreeMap;
use std::fmt;

/// Reserved dictionary key used when neither the backend key nor the platform matches.
pub const ELSE_KEY: &str = "else";

/// One entry of an install list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSpec {
    /// Install exactly this name.
    Plain(String),
    /// Try each name in order; the first one that exists wins.
    Alternatives(Vec<String>),
    /// Pick an entry by backend lookup key, then platform name, then `"else"`.
    Keyed(BTreeMap<String, KeyedEntry>),
}

/// Value of a dictionary-style spec entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyedEntry {
    Name(String),
    Alternatives(Vec<String>),
}

/// What a spec turned into for the active backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Install this name.
    Found(String),
    /// Nothing installable. `name` is the candidate that failed the existence
    /// check, when there was exactly one.
    Missing { name: Option<String> },
    /// Keyed spec with no entry for this backend or platform.
    NotApplicable,
}

/// Result of processing one spec in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutcome {
    pub attempted: bool,
    pub resolved_name: Option<String>,
    pub exists: bool,
    pub installed: bool,
}

impl InstallOutcome {
    /// Skipped specs never count against the batch.
    pub fn is_failure(&self) -> bool {
        self.attempted && !self.installed
    }
}

impl From<&Resolution> for InstallOutcome {
    fn from(resolution: &Resolution) -> Self {
        match resolution {
            Resolution::Found(name) => InstallOutcome {
                resolved_name: Some(name.clone()),
                exists: true,
                ..Default::default()
            },
            Resolution::Missing { name } => InstallOutcome {
                resolved_name: name.clone(),
                ..Default::default()
            },
            Resolution::NotApplicable => InstallOutcome::default(),
        }
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    write!(f, "[{}]", names.join(" | "))
}

impl fmt::Display for KeyedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyedEntry::Name(name) => f.write_str(name),
            KeyedEntry::Alternatives(names) => write_names(f, names),
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageSpec::Plain(name) => f.write_str(name),
            PackageSpec::Alternatives(names) => write_names(f, names),
            PackageSpec::Keyed(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(key, entry)| format!("{}: {}", key, entry))
                    .collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_readable() {
        assert_eq!(PackageSpec::Plain("git".into()).to_string(), "git");
        assert_eq!(
            PackageSpec::Alternatives(vec!["vim".into(), "nvim".into()]).to_string(),
            "[vim | nvim]"
        );

        let mut entries = BTreeMap::new();
        entries.insert("apt".to_string(), KeyedEntry::Name("fd-find".into()));
        entries.insert(ELSE_KEY.to_string(), KeyedEntry::Name("fd".into()));
        assert_eq!(
            PackageSpec::Keyed(entries).to_string(),
            "{apt: fd-find, else: fd}"
        );
    }

    #[test]
    fn only_attempted_uninstalled_outcomes_fail() {
        let skipped = InstallOutcome::default();
        assert!(!skipped.is_failure());

        let failed = InstallOutcome {
            attempted: true,
            ..Default::default()
        };
        assert!(failed.is_failure());
    }

    #[test]
    fn outcome_from_missing_keeps_candidate() {
        let outcome = InstallOutcome::from(&Resolution::Missing {
            name: Some("git".into()),
        });
        assert_eq!(outcome.resolved_name.as_deref(), Some("git"));
        assert!(!outcome.exists);
        assert!(!outcome.attempted);
    }
}
