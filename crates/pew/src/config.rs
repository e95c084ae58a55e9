// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Locating the environments home and the active environment.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::{Error, Result, VIRTUAL_ENV_VAR, WORKON_HOME_VAR, is_environment, stays_inside};

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// Invocation-wide settings, resolved once and passed to every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that holds all environments (tilde-expanded).
    pub home: PathBuf,
    /// Environment the calling shell is running in, if any.
    pub active: Option<PathBuf>,
}

impl Config {
    /// Read `$WORKON_HOME` and `$VIRTUAL_ENV` from the process environment.
    pub fn from_env() -> Result<Self> {
        let home = std::env::var_os(WORKON_HOME_VAR);
        let active = std::env::var_os(VIRTUAL_ENV_VAR).map(PathBuf::from);
        Self::from_values(home, active)
    }

    /// Build a config from explicit values.
    ///
    /// An empty active path is treated the same as an unset one.
    pub fn from_values<H: AsRef<OsStr>>(
        home: Option<H>,
        active: Option<PathBuf>,
    ) -> Result<Self> {
        let home: &OsStr = match &home {
            Some(home) => home.as_ref(),
            None => return Err(Error::HomeNotSet),
        };
        if home.is_empty() {
            return Err(Error::HomeNotSet);
        }
        let home = shellexpand::path::tilde(Path::new(home)).into_owned();
        let active = active.filter(|p| !p.as_os_str().is_empty());
        tracing::debug!(?home, ?active, "resolved config");
        Ok(Self { home, active })
    }

    /// Full path of the environment with the given name.
    pub fn env_path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.home.join(name)
    }

    /// Full path of the existing environment `name`.
    ///
    /// The name must stay inside the home directory and lead to a directory
    /// holding an interpreter, otherwise the environment does not exist.
    pub fn environment(&self, name: &str) -> Result<PathBuf> {
        let not_found = || Error::EnvironmentNotFound(name.to_string());
        if name.is_empty() || !stays_inside(name) {
            return Err(not_found());
        }
        let path = self.env_path(name);
        if !is_environment(&path) {
            return Err(not_found());
        }
        Ok(path)
    }

    /// The active environment as `show` prints it.
    ///
    /// With `relative`, the path is made relative to the home directory when
    /// it lies inside it and left absolute otherwise.
    pub fn active_display(&self, relative: bool) -> Option<PathBuf> {
        let active = self.active.as_ref()?;
        if relative {
            if let Ok(rel) = active.strip_prefix(&self.home) {
                return Some(rel.to_owned());
            }
        }
        Some(active.clone())
    }

    /// Whether `path` names the active environment.
    pub fn is_active<P: AsRef<Path>>(&self, path: P) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let path = path.as_ref();
        if active == path {
            return true;
        }
        match (dunce::canonicalize(active), dunce::canonicalize(path)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
