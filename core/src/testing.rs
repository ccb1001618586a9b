//! Test doubles for the OS boundary.
//!
//! [`FakeRunner`] replays canned process results and records every
//! invocation, so callers can assert on the exact argv that would have been
//! sent to the OS. Clones share the same state.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use dnswitch_common::Result;

use crate::command::{CommandOutput, CommandRunner, Invocation};
use crate::platform::linux::{Link, LinkSource};

#[derive(Debug, Clone)]
enum Reply {
    Output(CommandOutput),
    LaunchError(io::ErrorKind),
}

#[derive(Debug, Default)]
struct FakeState {
    rules: Vec<(String, Reply)>,
    calls: Vec<Invocation>,
}

#[derive(Debug, Default, Clone)]
pub struct FakeRunner {
    state: Rc<RefCell<FakeState>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `stdout` for any invocation whose rendered command line contains `needle`.
    ///
    /// Rules are checked in the order they were added. Unmatched invocations succeed with
    /// empty output.
    pub fn on(self, needle: &str, stdout: impl Into<Vec<u8>>) -> Self {
        self.rule(needle, Reply::Output(CommandOutput::ok(stdout)))
    }

    pub fn fail_on(self, needle: &str, code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        self.rule(needle, Reply::Output(CommandOutput::failed(code, stderr)))
    }

    /// Fail to launch, as if the program were not installed.
    pub fn missing_binary(self, needle: &str) -> Self {
        self.rule(needle, Reply::LaunchError(io::ErrorKind::NotFound))
    }

    fn rule(self, needle: &str, reply: Reply) -> Self {
        self.state
            .borrow_mut()
            .rules
            .push((needle.to_string(), reply));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let mut state = self.state.borrow_mut();
        state.calls.push(invocation.clone());

        let rendered = invocation.to_string();
        let reply = state
            .rules
            .iter()
            .find(|(needle, _)| rendered.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::LaunchError(kind)) => Err(io::Error::new(kind, "No such file or directory")),
            None => Ok(CommandOutput::ok(Vec::new())),
        }
    }
}

/// A fixed set of kernel links, standing in for pnet enumeration.
#[derive(Debug, Default, Clone)]
pub struct StaticLinks(pub Vec<Link>);

impl LinkSource for StaticLinks {
    fn links(&self) -> Result<Vec<Link>> {
        Ok(self.0.clone())
    }
}

pub fn link(name: &str, is_up: bool, has_routable_ipv4: bool) -> Link {
    Link {
        name: name.to_string(),
        is_up,
        is_loopback: name == "lo",
        has_routable_ipv4,
    }
}
