// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `pew show` command.

use clap::Args;
use miette::Result;

/// Show the active virtual environment
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Print the path relative to $WORKON_HOME when it is inside it
    #[clap(short, long)]
    relative: bool,
}

impl CmdShow {
    pub fn run(&mut self, config: &pew::Config) -> Result<i32> {
        match config.active_display(self.relative) {
            Some(active) => println!("{}", active.display()),
            None => tracing::info!("No virtual environment active"),
        }
        Ok(0)
    }
}
