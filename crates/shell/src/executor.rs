// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor (§4.9): runs shell-level actions against the host, either
//! for real or by only printing the command that would have run.

use std::io::Read;
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::quote::quote_argv;

/// An executor run returned a non-zero exit status, or the child
/// process could not be spawned at all.
#[derive(Debug, Error)]
pub enum CommandFailure {
    #[error("command `{cmdline}` failed with exit code {exit_code}")]
    NonZeroExit { cmdline: String, exit_code: i32, stderr_capture: Option<String> },
    #[error("failed to spawn `{cmdline}`: {source}")]
    SpawnFailed { cmdline: String, #[source] source: std::io::Error },
}

impl CommandFailure {
    pub fn cmdline(&self) -> &str {
        match self {
            CommandFailure::NonZeroExit { cmdline, .. } | CommandFailure::SpawnFailed { cmdline, .. } => {
                cmdline
            }
        }
    }
}

/// Runs argv commands and shell snippets produced by the reconciliation
/// engine. Two implementations: [`LiveExecutor`] spawns a child
/// process; [`PreviewExecutor`] only prints.
pub trait Executor {
    fn run_command(&self, argv: &[String]) -> Result<(), CommandFailure>;
    fn run_shell(&self, script: &str) -> Result<(), CommandFailure>;
}

/// Spawns a real child process for every action; surfaces a non-zero
/// exit (or a spawn failure) as [`CommandFailure`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveExecutor;

impl Executor for LiveExecutor {
    fn run_command(&self, argv: &[String]) -> Result<(), CommandFailure> {
        let display = quote_argv(argv);
        println!("> {display}");
        tracing::info!(cmdline = %display, "running command");

        let Some((program, args)) = argv.split_first() else {
            return Ok(());
        };
        run(Command::new(program).args(args), &display)
    }

    fn run_shell(&self, script: &str) -> Result<(), CommandFailure> {
        println!("> {script}");
        tracing::info!(cmdline = %script, "running shell script");
        run(Command::new("/bin/sh").arg("-c").arg(script), script)
    }
}

fn run(command: &mut Command, display: &str) -> Result<(), CommandFailure> {
    let child = command
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CommandFailure::SpawnFailed { cmdline: display.to_string(), source })?;

    let output = child
        .wait_with_output()
        .map_err(|source| CommandFailure::SpawnFailed { cmdline: display.to_string(), source })?;

    if output.status.success() {
        return Ok(());
    }

    let mut stderr_capture = String::new();
    let _ = std::io::Cursor::new(&output.stderr).read_to_string(&mut stderr_capture);
    if !stderr_capture.is_empty() {
        eprint!("{stderr_capture}");
    }

    tracing::error!(cmdline = display, exit_code = output.status.code(), "command failed");

    Err(CommandFailure::NonZeroExit {
        cmdline: display.to_string(),
        exit_code: output.status.code().unwrap_or(-1),
        stderr_capture: if stderr_capture.is_empty() { None } else { Some(stderr_capture) },
    })
}

/// Prints the would-be command and returns success without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewExecutor;

impl Executor for PreviewExecutor {
    fn run_command(&self, argv: &[String]) -> Result<(), CommandFailure> {
        println!("{}", quote_argv(argv));
        Ok(())
    }

    fn run_shell(&self, script: &str) -> Result<(), CommandFailure> {
        println!("{script}");
        Ok(())
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
