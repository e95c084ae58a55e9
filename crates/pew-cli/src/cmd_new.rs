// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `pew new` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

/// Create a new virtual environment
#[derive(Debug, Args)]
pub struct CmdNew {
    /// Name of the environment
    env: String,

    /// Interpreter to create the environment with
    #[clap(short, long)]
    python: Option<PathBuf>,

    /// Project directory to enter when the environment is activated
    #[clap(short = 'a', long)]
    project: Option<PathBuf>,

    /// Program used to build the environment
    #[clap(long, env = "PEW_VENV_TOOL", default_value = pew::lifecycle::DEFAULT_VENV_TOOL)]
    venv_tool: String,
}

impl CmdNew {
    pub fn run(&mut self, config: &pew::Config) -> Result<i32> {
        let options = pew::CreateOptions {
            venv_tool: self.venv_tool.clone(),
            python: self.python.clone(),
            project: self.project.clone(),
        };

        let target = pew::create(config, &self.env, &options)?;
        tracing::info!("Created {}", target.display());
        Ok(0)
    }
}
