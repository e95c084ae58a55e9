// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the deprecated `pew workon` command.

use clap::Args;
use miette::Result;

/// Enter a virtual environment
#[derive(Debug, Args)]
pub struct CmdWorkon {
    /// Name of the environment
    env: String,
}

impl CmdWorkon {
    pub fn run(&mut self, config: &pew::Config) -> Result<i32> {
        tracing::warn!("'pew workon' is deprecated, use 'pew in {}' instead", self.env);

        #[allow(deprecated)]
        let outcome = pew::activate::workon(config, &self.env)?;
        Ok(super::cmd_in::report(outcome))
    }
}
