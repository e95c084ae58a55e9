// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Guards that change process-wide state and put it back on drop.
//!
//! The process environment and working directory are shared by the whole
//! process. pew is single-threaded while a guard is held, which is what makes
//! mutating them sound; tests that use these guards must be `#[serial]`.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./scoped_test.rs"]
mod scoped_test;

/// Snapshot of the process environment, restored exactly when dropped.
#[derive(Debug)]
#[must_use = "the environment is restored as soon as the guard is dropped"]
pub struct ScopedEnvironment {
    saved: BTreeMap<OsString, OsString>,
}

impl ScopedEnvironment {
    /// Remember the current environment without changing it.
    pub fn capture() -> Self {
        Self {
            saved: std::env::vars_os().collect(),
        }
    }

    /// Remember the current environment and replace it wholesale with `vars`.
    pub fn apply(vars: &BTreeMap<OsString, OsString>) -> Self {
        let guard = Self::capture();
        replace_environment(&guard.saved, vars);
        guard
    }

    /// The environment as it was when the guard was created.
    pub fn saved(&self) -> &BTreeMap<OsString, OsString> {
        &self.saved
    }

    /// Set a variable in the process environment.
    pub fn set<K: AsRef<OsStr>, V: AsRef<OsStr>>(key: K, value: V) {
        // SAFETY: no other thread touches the environment while pew runs.
        unsafe { std::env::set_var(key, value) }
    }

    /// Remove a variable from the process environment.
    pub fn unset<K: AsRef<OsStr>>(key: K) {
        // SAFETY: no other thread touches the environment while pew runs.
        unsafe { std::env::remove_var(key) }
    }
}

impl Drop for ScopedEnvironment {
    fn drop(&mut self) {
        let current: BTreeMap<OsString, OsString> = std::env::vars_os().collect();
        replace_environment(&current, &self.saved);
    }
}

fn replace_environment(
    current: &BTreeMap<OsString, OsString>,
    wanted: &BTreeMap<OsString, OsString>,
) {
    for key in current.keys() {
        if !wanted.contains_key(key) {
            ScopedEnvironment::unset(key);
        }
    }
    for (key, value) in wanted {
        if current.get(key) != Some(value) {
            ScopedEnvironment::set(key, value);
        }
    }
}

/// Changes the working directory and changes it back when dropped.
#[derive(Debug)]
#[must_use = "the working directory is restored as soon as the guard is dropped"]
pub struct ScopedWorkingDir {
    previous: PathBuf,
}

impl ScopedWorkingDir {
    /// Enter `dir`, remembering where we came from.
    pub fn enter<P: AsRef<Path>>(dir: P) -> std::io::Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(dir.as_ref())?;
        tracing::debug!(from = ?previous, to = ?dir.as_ref(), "changed directory");
        Ok(Self { previous })
    }

    /// The directory that will be restored.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for ScopedWorkingDir {
    fn drop(&mut self) {
        if let Err(err) = std::env::set_current_dir(&self.previous) {
            tracing::warn!("Failed to return to {:?}: {err}", self.previous);
        }
    }
}
