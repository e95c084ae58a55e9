// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `pew in` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Exit code used when the requested command does not exist.
const COMMAND_NOT_FOUND: i32 = 2;

/// Run a command inside a virtual environment
#[derive(Debug, Args)]
pub struct CmdIn {
    /// Name of the environment
    pub env: String,

    /// Command and arguments to run (default: $SHELL)
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CmdIn {
    pub fn run(&mut self, config: &pew::Config) -> Result<i32> {
        let mut iter = self.command.iter().cloned();
        let options = pew::ActivateOptions {
            command: iter.next(),
            args: iter.collect(),
        };

        let outcome = pew::activate(config, &self.env, &options)?;
        Ok(report(outcome))
    }
}

/// Turn an activation outcome into this process's exit code.
pub fn report(outcome: pew::Activation) -> i32 {
    match outcome {
        pew::Activation::Exited(code) => code,
        pew::Activation::CommandNotFound(command) => {
            eprintln!("{} {}", "Unable to find".red(), command);
            COMMAND_NOT_FOUND
        }
    }
}
