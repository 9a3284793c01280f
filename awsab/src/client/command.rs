use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "aws";

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(success: bool, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the CLI with `args` and waits for it to exit.
    async fn run(&self, args: &[String]) -> Result<CommandOutput>;
}

#[async_trait]
impl<'a, T: CommandRunner + ?Sized> CommandRunner for &'a T {
    async fn run(&self, args: &[String]) -> Result<CommandOutput> {
        (**self).run(args).await
    }
}

/// Runs the AWS CLI as a child process. Arguments are handed to the process
/// as-is, never through a shell.
#[derive(Debug, Clone)]
pub struct AwsCli {
    program: String,
    timeout: Duration,
}

impl AwsCli {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program(DEFAULT_PROGRAM, timeout)
    }

    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

#[async_trait]
impl CommandRunner for AwsCli {
    async fn run(&self, args: &[String]) -> Result<CommandOutput> {
        log::debug!("run {} {:?}", self.program, args);
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Dropping the child on timeout kills it.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| Error::Timeout {
                program: self.program.clone(),
                timeout: self.timeout,
            })??;

        log::debug!("{} exited with {}", self.program, output.status);
        Ok(CommandOutput::new(
            output.status.success(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}
