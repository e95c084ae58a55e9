// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `pew rm` command.

use clap::Args;
use miette::Result;

/// Remove one or more virtual environments
#[derive(Debug, Args)]
pub struct CmdRm {
    /// Names of the environments to delete
    #[clap(required = true)]
    envs: Vec<String>,
}

impl CmdRm {
    pub fn run(&mut self, config: &pew::Config) -> Result<i32> {
        let removed = pew::remove(config, self.envs.as_slice())?;
        for path in removed {
            tracing::info!("Removed {}", path.display());
        }
        Ok(0)
    }
}
