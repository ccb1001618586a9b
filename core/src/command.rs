//! External process invocation.
//!
//! This is the only place the crate creates OS processes. Strategies describe
//! what to run as an [`Invocation`] and hand it to a [`CommandRunner`]; the
//! runner reports raw bytes and exit status, and [`execute`] folds a failed
//! launch or a non-zero exit into [`DnsError::ExternalCommandFailed`].
//!
//! No timeout is imposed. A hung utility blocks the caller.

use std::fmt;
use std::io;
use std::process::Command;

use dnswitch_common::{DnsError, Result};
use tracing::debug;

/// A program and its argument vector, passed to the OS verbatim (no shell parsing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    /// Combined stdout and stderr, prefixed with the exit status.
    pub fn diagnostic(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        let mut combined = String::from_utf8_lossy(&self.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&self.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            if !combined.is_empty() {
                combined.push(' ');
            }
            combined.push_str(stderr);
        }
        if combined.is_empty() {
            status
        } else {
            format!("{status}: {}", combined.replace(['\r', '\n'], " "))
        }
    }
}

/// Capability to run one external program to completion.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// Runs programs with [`std::process::Command`], capturing both streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Runs `invocation` and returns its stdout, or a structured failure.
pub fn execute(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<Vec<u8>> {
    debug!(command = %invocation, "running external command");

    let output = runner
        .run(invocation)
        .map_err(|err| DnsError::command_failed(format!("{}: {err}", invocation.program)))?;

    if !output.success {
        let diagnostic = output.diagnostic();
        debug!(command = %invocation, %diagnostic, "external command failed");
        return Err(DnsError::command_failed(diagnostic));
    }

    Ok(output.stdout)
}
