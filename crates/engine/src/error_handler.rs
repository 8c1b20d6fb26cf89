// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error Handler (§4.11): decides what happens to a step of the plan
//! whose action failed.

use std::io::{self, Write};

use scm_shell::CommandFailure;

const MAX_ATTEMPTS: u32 = 5;

/// What happened to a single plan step after it was handed to an
/// [`ErrorHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Skipped,
    Failed,
}

/// Runs one plan step's action, deciding what to do if it fails.
/// `CommandFailure` is the only error type this contract sees — it is
/// the whitelisted exception per §7; anything else propagates through
/// the engine's own `Result` plumbing instead of going through here.
pub trait ErrorHandler {
    fn try_run(&self, task: &mut dyn FnMut() -> Result<(), CommandFailure>) -> Outcome;
}

/// One of the four choices offered when a command fails interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Retry,
    Skip,
    Abort,
    MarkSuccessful,
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "r" | "retry" => Some(Choice::Retry),
        "s" | "skip" => Some(Choice::Skip),
        "a" | "abort" => Some(Choice::Abort),
        "m" | "mark" | "mark as successful" | "mark-as-successful" => Some(Choice::MarkSuccessful),
        _ => None,
    }
}

/// Prompts on standard input. Retry/skip/abort/mark-as-successful; up
/// to [`MAX_ATTEMPTS`] task attempts, an unrecognized answer re-prompts
/// without consuming one.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptUserErrorHandler;

impl PromptUserErrorHandler {
    fn prompt_choice(&self) -> Choice {
        loop {
            print!("Command failed. [r]etry / [s]kip / [a]bort / [m]ark as successful? ");
            let _ = io::stdout().flush();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                return Choice::Abort;
            }
            if let Some(choice) = parse_choice(&input) {
                return choice;
            }
            println!("Unrecognized answer: {input:?}");
        }
    }
}

impl ErrorHandler for PromptUserErrorHandler {
    fn try_run(&self, task: &mut dyn FnMut() -> Result<(), CommandFailure>) -> Outcome {
        for attempt in 1..=MAX_ATTEMPTS {
            match task() {
                Ok(()) => return Outcome::Success,
                Err(failure) => {
                    eprintln!("{failure}");
                    if attempt == MAX_ATTEMPTS {
                        return Outcome::Failed;
                    }
                    match self.prompt_choice() {
                        Choice::Retry => continue,
                        Choice::Skip => return Outcome::Skipped,
                        Choice::Abort => return Outcome::Failed,
                        Choice::MarkSuccessful => return Outcome::Success,
                    }
                }
            }
        }
        Outcome::Failed
    }
}

/// Always aborts on failure without prompting. For tests and
/// unattended runs (§4.11).
#[derive(Debug, Default, Clone, Copy)]
pub struct AbortErrorHandler;

impl ErrorHandler for AbortErrorHandler {
    fn try_run(&self, task: &mut dyn FnMut() -> Result<(), CommandFailure>) -> Outcome {
        match task() {
            Ok(()) => Outcome::Success,
            Err(failure) => {
                eprintln!("{failure}");
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "error_handler_tests.rs"]
mod tests;
