// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Creating and removing environments.

use std::path::PathBuf;
use std::process::Command;

use crate::{Config, Error, Result, stays_inside, write_project_link};

#[cfg(test)]
#[path = "./lifecycle_test.rs"]
mod lifecycle_test;

/// Default program used to build new environments.
pub const DEFAULT_VENV_TOOL: &str = "virtualenv";

/// Options for environment creation.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Program that builds the environment, called as `<tool> <target>`.
    pub venv_tool: String,
    /// Interpreter to build the environment from (`--python=<path>`).
    pub python: Option<PathBuf>,
    /// Project directory to link to the new environment.
    pub project: Option<PathBuf>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            venv_tool: DEFAULT_VENV_TOOL.to_string(),
            python: None,
            project: None,
        }
    }
}

/// Create the environment `name` under the home directory.
///
/// The tool's own output goes straight to the terminal. Returns the path of
/// the new environment.
pub fn create(config: &Config, name: &str, options: &CreateOptions) -> Result<PathBuf> {
    if name.is_empty() || !stays_inside(name) {
        return Err(Error::OutsideHome(name.into()));
    }
    let target = config.env_path(name);

    let mut cmd = Command::new(&options.venv_tool);
    cmd.arg(&target);
    if let Some(python) = &options.python {
        let mut flag = std::ffi::OsString::from("--python=");
        flag.push(python);
        cmd.arg(flag);
    }

    tracing::info!("Creating environment {target:?} with {}", options.venv_tool);
    let status = cmd.status().map_err(|error| Error::LaunchFailed {
        command: options.venv_tool.clone(),
        error,
    })?;
    if !status.success() {
        return Err(Error::VenvToolFailed {
            tool: options.venv_tool.clone(),
            status,
        });
    }

    if let Some(project) = &options.project {
        let project = write_project_link(&target, project)?;
        tracing::info!("Linked {target:?} to project {project:?}");
    }
    Ok(target)
}

/// Delete the named environments, in order.
///
/// Stops at the first name that is the active environment or is not an
/// environment under the home directory. Environments deleted before that
/// point stay deleted.
pub fn remove<S: AsRef<str>>(config: &Config, names: &[S]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let path = config.environment(name)?;
        if config.is_active(&path) {
            return Err(Error::RemoveActive(path));
        }
        tracing::info!("Removing {path:?}");
        std::fs::remove_dir_all(&path)?;
        removed.push(path);
    }
    Ok(removed)
}
