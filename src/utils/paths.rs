use crate::error::{OmnipkgError, Result};
use crate::project_identity;
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| OmnipkgError::Other("Could not determine user home directory".to_string()))?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| OmnipkgError::Other(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", project_identity::CONFIG_DIR_NAME, project_identity::CONFIG_DIR_NAME)
        .ok_or_else(|| OmnipkgError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

/// Directive file to use: explicit path, then `OMNIPKG_CONFIG`, then the default location.
pub fn config_file(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return expand_home(path);
    }

    if let Some(env_path) = std::env::var_os(project_identity::env_key("CONFIG")) {
        return expand_home(Path::new(&env_path));
    }

    Ok(config_dir()?.join(project_identity::CONFIG_FILE_BASENAME))
}

/// Backend override file sitting next to the directive file.
pub fn sibling_backends_file(config_file: &Path) -> PathBuf {
    config_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(project_identity::BACKENDS_FILE_BASENAME)
}
