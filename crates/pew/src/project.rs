// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Project links: the `.project` file that ties an environment to a directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::PROJECT_FILENAME;

#[cfg(test)]
#[path = "./project_test.rs"]
mod project_test;

/// The project directory linked to the environment at `env_path`, if any.
///
/// A missing or unreadable `.project` file means "no link"; it is never an
/// error. The path is returned as written and may not exist.
pub fn project_dir<P: AsRef<Path>>(env_path: P) -> Option<PathBuf> {
    let path = env_path.as_ref().join(PROJECT_FILENAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            match err.kind() {
                ErrorKind::NotFound => {}
                ErrorKind::PermissionDenied | ErrorKind::InvalidData | ErrorKind::IsADirectory => {
                    tracing::debug!("Ignoring unreadable {path:?}: {err}");
                }
                _ => tracing::warn!("Failed to read {path:?}, ignoring project link: {err}"),
            }
            return None;
        }
    };

    let line = content.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    Some(PathBuf::from(line))
}

/// Link `project` to the environment at `env_path`.
///
/// The absolute form of `project` is written as the whole file content.
pub fn write_project_link<E: AsRef<Path>, P: AsRef<Path>>(
    env_path: E,
    project: P,
) -> crate::Result<PathBuf> {
    let project = std::path::absolute(project.as_ref())?;
    let path = env_path.as_ref().join(PROJECT_FILENAME);
    std::fs::write(&path, project.as_os_str().as_encoded_bytes())?;
    tracing::debug!(?path, ?project, "wrote project link");
    Ok(project)
}
