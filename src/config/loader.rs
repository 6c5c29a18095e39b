use crate::config::types::DirectiveEntry;
use crate::error::{OmnipkgError, Result};
use serde_yml::Value;
use std::fs;
use std::path::Path;

/// Read a directive file: a list of tasks, each a mapping of directive name to payload.
pub fn load_directives(path: &Path) -> Result<Vec<DirectiveEntry>> {
    if !path.exists() {
        return Err(OmnipkgError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| OmnipkgError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_directives(&content).map_err(|message| OmnipkgError::ParseError {
        file: path.display().to_string(),
        message,
    })
}

/// Parse directive file content. A top-level mapping is treated as a single task.
pub fn parse_directives(content: &str) -> std::result::Result<Vec<DirectiveEntry>, String> {
    let root: Value = serde_yml::from_str(content).map_err(|e| e.to_string())?;

    let tasks = match root {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(tasks) => tasks,
        task @ Value::Mapping(_) => vec![task],
        _ => return Err("Top level must be a list of directive mappings".to_string()),
    };

    let mut entries = Vec::new();
    for (index, task) in tasks.into_iter().enumerate() {
        let Value::Mapping(mapping) = task else {
            return Err(format!("Task #{} is not a mapping", index + 1));
        };

        for (name, data) in mapping {
            let Value::String(name) = name else {
                return Err(format!("Task #{} has a non-string directive name", index + 1));
            };
            entries.push(DirectiveEntry { name, data });
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_task_list_in_order() {
        let entries = parse_directives(
            r#"
- link:
    ~/.vimrc: vimrc
- omnipkg:
    - update
    - install: [git]
- omnipkg-upgrade:
"#,
        )
        .unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["link", "omnipkg", "omnipkg-upgrade"]);
        assert_eq!(entries[2].data, Value::Null);
    }

    #[test]
    fn single_mapping_is_one_task() {
        let entries = parse_directives("omnipkg-install: [git, curl]\n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "omnipkg-install");
    }

    #[test]
    fn empty_file_has_no_directives() {
        assert!(parse_directives("").unwrap().is_empty());
    }

    #[test]
    fn scalar_task_is_rejected() {
        let err = parse_directives("- omnipkg\n").unwrap_err();
        assert!(err.contains("#1"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_directives(Path::new("/nonexistent/omnipkg.yaml")).unwrap_err();
        assert!(matches!(err, OmnipkgError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- omnipkg: [update").unwrap();

        let err = load_directives(file.path()).unwrap_err();
        assert!(matches!(err, OmnipkgError::ParseError { .. }));
    }
}
