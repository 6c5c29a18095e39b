use crate::traits::CommandRunner;
use crate::ui;
use crate::utils::platform::build_shell_command;
use std::path::Path;
use std::process::Stdio;

/// Runs commands through the system shell and waits for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, silent: bool, working_dir: &Path) -> bool {
        let mut cmd = match build_shell_command(command) {
            Ok(cmd) => cmd,
            Err(e) => {
                ui::lowinfo(&format!("Cannot build shell command '{}': {}", command, e));
                return false;
            }
        };

        // stdin stays attached so sudo can ask for a password
        cmd.current_dir(working_dir).stdin(Stdio::inherit());
        if silent {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        match cmd.status() {
            Ok(status) => status.code() == Some(0),
            Err(e) => {
                ui::lowinfo(&format!("Failed to run '{}': {}", command, e));
                false
            }
        }
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        assert!(ShellRunner.run("true", true, Path::new(".")));
    }

    #[test]
    fn non_zero_exit_is_failure() {
        assert!(!ShellRunner.run("exit 3", true, Path::new(".")));
    }

    #[test]
    fn runs_inside_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ShellRunner.run("touch marker", true, dir.path()));
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn missing_working_dir_is_failure() {
        assert!(!ShellRunner.run("true", true, Path::new("/nonexistent/omnipkg-dir")));
    }
}
