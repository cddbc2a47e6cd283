//! Execution of external programs (`git`, `cookiecutter`, `copier`).
//!
//! Everything that leaves the process goes through [`CommandRunner`] so that
//! the git wrappers and engine adapters can be exercised without the real
//! executables.

use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Whether the child inherits the terminal (interactive engines) or is captured.
    pub interactive: bool,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new(), interactive: false }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
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

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn display_args(&self) -> String {
        self.args.join(" ")
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs.
pub trait CommandRunner {
    /// Runs the command to completion and returns whatever it produced,
    /// regardless of exit status. Fails only when the program cannot be started.
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput>;

    /// Runs the command and turns a non-zero exit status into [`Error::CommandFailed`].
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let output = self.execute(spec)?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: spec.program.clone(),
                args: spec.display_args(),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        log::debug!("Running `{} {}`", spec.program, spec.display_args());

        let mut command = Command::new(&spec.program);
        command.args(&spec.args);

        if spec.interactive {
            let status = command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?;
            return Ok(CommandOutput { status, stdout: String::new(), stderr: String::new() });
        }

        let output = command.stdin(Stdio::null()).output()?;
        Ok(CommandOutput {
            status: output.status,
            stdout: decode(&spec.program, &output.stdout).into_owned(),
            stderr: decode(&spec.program, &output.stderr).into_owned(),
        })
    }
}

fn decode<'a>(program: &str, bytes: &'a [u8]) -> Cow<'a, str> {
    let decoded = String::from_utf8_lossy(bytes);
    if matches!(decoded, Cow::Owned(_)) {
        log::warn!("{program} emitted non-UTF8 output; performing lossy conversion");
    }
    decoded
}

/// Renders a path for use as a command argument.
pub fn path_arg<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().display().to_string()
}
