use crate::error::Result;
use std::fmt;
use std::process::Command;

/// Operating system family, as far as backend selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Linux,
    MacOs,
    Other,
}

impl HostPlatform {
    /// Platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => HostPlatform::Linux,
            "macos" => HostPlatform::MacOs,
            _ => HostPlatform::Other,
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::Linux => write!(f, "linux"),
            HostPlatform::MacOs => write!(f, "mac"),
            HostPlatform::Other => write!(f, "{}", std::env::consts::OS),
        }
    }
}

/// Build a shell command in a platform-aware way.
///
/// - Unix: `sh -c <command>`
/// - Windows: `cmd /C <command>`
pub fn build_shell_command(command: &str) -> Result<Command> {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        return Ok(cmd);
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        Ok(cmd)
    }
}
