//! Child process adapter using std::process.

use std::process::{Command, Stdio};

use tracing::debug;

use barrelize_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandInvocation,
    error::BarrelizeResult,
};

/// Runs commands with the parent's stdin/stdout/stderr attached, so
/// interactive generators can prompt the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> BarrelizeResult<i32> {
        debug!(command = %invocation, "Spawning");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(&invocation.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::SpawnFailed {
                command: invocation.to_string(),
                reason: e.to_string(),
            })?;

        // Killed by a signal: no code to forward.
        let code = status.code().unwrap_or(1);
        debug!(command = %invocation, code, "Exited");
        Ok(code)
    }
}
