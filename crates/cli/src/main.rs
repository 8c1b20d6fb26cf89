// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;

use sysconf::cli::Cli;
use sysconf::exit_error::{code, ExitError};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match sysconf::run(cli) {
        Ok(()) => ExitCode::from(code::SUCCESS as u8),
        Err(err) => {
            if let Some(exit_error) = err.downcast_ref::<ExitError>() {
                eprintln!("{exit_error}");
                return exit_code(exit_error.code);
            }
            eprintln!("error: {err:#}");
            exit_code(code::GENERIC_FAILURE)
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}

fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
}
