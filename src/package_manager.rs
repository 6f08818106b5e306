//! Package manager selection and install process spawning.
//!
//! The install runs as a child process attached to the user's terminal. Its
//! exit code is delivered once through a oneshot channel, so the caller keeps
//! every other step sequential and simply awaits the result at the end.

use log::debug;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::oneshot;

use crate::constants::YARN_LOCK_FILE;
use crate::error::{Error, Result};

/// Package manager used to install the project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Picks yarn when the project has a `yarn.lock`, npm otherwise.
    pub async fn detect<P: AsRef<Path>>(app_path: P) -> Self {
        let lock_file = app_path.as_ref().join(YARN_LOCK_FILE);
        if tokio::fs::try_exists(&lock_file).await.unwrap_or(false) {
            debug!("Found {}, using yarn", lock_file.display());
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Builds the install command.
    ///
    /// yarn runs with no arguments. npm runs `install --save`, plus
    /// `--verbose` when requested.
    pub fn invocation(&self, verbose: bool) -> InstallInvocation {
        let args = match self {
            PackageManager::Yarn => Vec::new(),
            PackageManager::Npm => {
                let mut args = vec!["install".to_string(), "--save".to_string()];
                if verbose {
                    args.push("--verbose".to_string());
                }
                args
            }
        };

        InstallInvocation { program: self.program().to_string(), args }
    }
}

/// A fully built install command, consumed once by an [`InstallRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for InstallInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Handle to a running install. Resolves to the exit code once the process
/// terminates; `None` means no exit code was available (killed by a signal,
/// or the wait itself failed).
#[derive(Debug)]
pub struct PendingInstall {
    exit: oneshot::Receiver<Option<i32>>,
}

impl PendingInstall {
    pub fn new(exit: oneshot::Receiver<Option<i32>>) -> Self {
        Self { exit }
    }

    pub async fn exit_code(self) -> Option<i32> {
        self.exit.await.unwrap_or(None)
    }
}

/// Starts install processes.
pub trait InstallRunner {
    /// Spawns `invocation` without waiting for it to finish.
    fn spawn(&self, invocation: &InstallInvocation) -> Result<PendingInstall>;
}

/// Runs the install as a real child process with inherited stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner {}

impl ProcessRunner {
    pub fn new() -> Self {
        Self {}
    }
}

impl InstallRunner for ProcessRunner {
    /// # Errors
    /// * `Error::Spawn` if the program cannot be started
    fn spawn(&self, invocation: &InstallInvocation) -> Result<PendingInstall> {
        debug!("Spawning `{}`", invocation);

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::Spawn { command: invocation.to_string(), source })?;

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let code = match child.wait().await {
                Ok(status) => status.code(),
                Err(e) => {
                    log::error!("Failed to wait for install process: {}", e);
                    None
                }
            };
            let _ = tx.send(code);
        });

        Ok(PendingInstall::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display() {
        assert_eq!(PackageManager::Npm.invocation(true).to_string(), "npm install --save --verbose");
        assert_eq!(PackageManager::Yarn.invocation(true).to_string(), "yarn");
    }

    #[tokio::test]
    async fn test_dropped_sender_has_no_exit_code() {
        let (tx, rx) = oneshot::channel::<Option<i32>>();
        drop(tx);
        assert_eq!(PendingInstall::new(rx).exit_code().await, None);
    }
}
