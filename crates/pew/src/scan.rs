// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Discovery of environments under the home directory.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::{BIN_DIR, Error};

#[cfg(test)]
#[path = "./scan_test.rs"]
mod scan_test;

/// Result of scanning one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Entries that contain an interpreter at `<entry>/bin/python*`.
    pub environments: BTreeSet<PathBuf>,
    /// Subdirectories that are not environments.
    pub directories: BTreeSet<PathBuf>,
}

impl Listing {
    /// Environment names and directory names (with a trailing separator),
    /// merged and sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = self
            .environments
            .iter()
            .map(|env| env.display().to_string())
            .chain(
                self.directories
                    .iter()
                    .map(|dir| format!("{}{MAIN_SEPARATOR}", dir.display())),
            )
            .collect();
        entries.sort();
        entries
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries().join(" "))
    }
}

/// Scan `home/sub_path` for environments and plain directories.
///
/// An empty `sub_path` scans the home directory itself. A missing scan
/// location is an error, and so is a `sub_path` that leaves the home.
pub fn scan<H: AsRef<Path>, S: AsRef<Path>>(home: H, sub_path: S) -> crate::Result<Listing> {
    let sub_path = sub_path.as_ref();
    if !stays_inside(sub_path) {
        return Err(Error::OutsideHome(sub_path.to_owned()));
    }
    let base = home.as_ref().join(sub_path);
    let environments = find_environments(&base)?;

    let mut directories = BTreeSet::new();
    let read_dir = std::fs::read_dir(&base).map_err(|error| Error::ScanFailed {
        path: base.clone(),
        error,
    })?;
    for entry in read_dir {
        let entry = entry.map_err(|error| Error::ScanFailed {
            path: base.clone(),
            error,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = PathBuf::from(entry.file_name());
        if !environments.contains(&name) {
            directories.insert(name);
        }
    }

    tracing::debug!(
        ?base,
        environments = environments.len(),
        directories = directories.len(),
        "scanned"
    );
    Ok(Listing {
        environments,
        directories,
    })
}

/// Whether `name` only walks down from where it is joined.
///
/// Only plain segments are allowed: no root, drive prefix, `.` or `..`. The
/// empty path passes.
pub fn stays_inside<P: AsRef<Path>>(name: P) -> bool {
    name.as_ref()
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Whether `path` holds an interpreter at `<path>/bin/python*`.
pub fn is_environment<P: AsRef<Path>>(path: P) -> bool {
    let Ok(paths) = interpreters(path.as_ref(), false) else {
        return false;
    };
    paths.flatten().next().is_some()
}

/// Glob for interpreters in `base`, or in each directory of `base` when
/// `children` is set.
fn interpreters(base: &Path, children: bool) -> crate::Result<glob::Paths> {
    let base_str = base
        .to_str()
        .ok_or_else(|| Error::InvalidPattern(format!("{base:?} is not valid unicode")))?;
    let mut pattern = PathBuf::from(glob::Pattern::escape(base_str));
    if children {
        pattern.push("*");
    }
    pattern.push(BIN_DIR);
    pattern.push("python*");
    glob::glob(&pattern.to_string_lossy()).map_err(|e| Error::InvalidPattern(e.to_string()))
}

/// Names of the environments directly below `base`.
fn find_environments(base: &Path) -> crate::Result<BTreeSet<PathBuf>> {
    let mut environments = BTreeSet::new();
    for path in interpreters(base, true)? {
        let path = match path {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!("Skipping unreadable path during scan: {err}");
                continue;
            }
        };
        // strip `<bin>/<python>` to get back to the environment itself
        let Some(env) = path.parent().and_then(Path::parent) else {
            continue;
        };
        if let Ok(name) = env.strip_prefix(base) {
            environments.insert(name.to_owned());
        }
    }
    Ok(environments)
}
