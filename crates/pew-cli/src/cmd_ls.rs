// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `pew ls` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

/// List available virtual environments
#[derive(Debug, Args)]
pub struct CmdLs {
    /// Directory below $WORKON_HOME to list
    path: Option<PathBuf>,
}

impl CmdLs {
    pub fn run(&mut self, config: &pew::Config) -> Result<i32> {
        let sub_path = self.path.clone().unwrap_or_default();
        let listing = pew::scan(&config.home, sub_path)?;
        println!("{listing}");
        Ok(0)
    }
}
