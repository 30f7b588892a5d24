//! playerctl process runner
//!
//! Runs `<program> <action>` once per call, captures both output streams and
//! abandons the child after a fixed timeout. The child is spawned with
//! `kill_on_drop`, so a timed-out invocation is killed rather than left
//! running.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::action::Action;

/// Executable looked up on `PATH` when nothing else is configured
pub const DEFAULT_PROGRAM: &str = "playerctl";

/// Upper bound on a single playerctl invocation
pub const PLAYERCTL_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of one playerctl invocation that was successfully spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exited with status 0
    Completed { stdout: Vec<u8> },
    /// Exited nonzero, or was terminated by a signal (`code` is `None`)
    Failed { code: Option<i32>, stderr: Vec<u8> },
    /// Did not finish within the timeout
    TimedOut,
}

/// Handle on the external media-control utility
#[derive(Debug, Clone)]
pub struct Playerctl {
    program: PathBuf,
    timeout: Duration,
}

impl Default for Playerctl {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Playerctl {
    /// Runner for `program` with the standard timeout
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: PLAYERCTL_TIMEOUT,
        }
    }

    /// Override the invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invoke the utility with `action` as its only argument
    ///
    /// Returns `Err` only when the process could not be spawned or its
    /// output could not be collected. Exit status and timeout are reported
    /// through [`Outcome`].
    pub async fn run(&self, action: Action) -> std::io::Result<Outcome> {
        debug!("Running {} {}", self.program.display(), action);

        let child = Command::new(&self.program)
            .arg(action.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            // Dropping the wait future drops the child, which kills it
            Err(_) => return Ok(Outcome::TimedOut),
        };

        if output.status.success() {
            Ok(Outcome::Completed {
                stdout: output.stdout,
            })
        } else {
            Ok(Outcome::Failed {
                code: output.status.code(),
                stderr: output.stderr,
            })
        }
    }
}
