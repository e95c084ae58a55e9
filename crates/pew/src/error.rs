// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for pew operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with pew Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during pew operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// $WORKON_HOME is unset or empty
    #[error("home directory not set")]
    #[diagnostic(
        code(pew::home_not_set),
        help("Set WORKON_HOME to the directory that holds your environments")
    )]
    HomeNotSet,

    /// No environment with the given name under the home directory
    #[error("Environment '{0}' does not exist.")]
    #[diagnostic(
        code(pew::environment_not_found),
        help("Run 'pew ls' to see the available environments")
    )]
    EnvironmentNotFound(String),

    /// Name or sub-path that would reach outside the home directory
    #[error("{0:?} is not a path inside the environments home")]
    #[diagnostic(
        code(pew::outside_home),
        help("Use a relative name such as 'web' or 'clients/acme'")
    )]
    OutsideHome(PathBuf),

    /// Attempted to delete the environment this shell is running in
    #[error("you cannot remove the active environment ({0:?})")]
    #[diagnostic(
        code(pew::remove_active),
        help("Exit the environment's shell first")
    )]
    RemoveActive(PathBuf),

    /// No command given and no shell to fall back on
    #[error("No command given and SHELL is not set")]
    #[diagnostic(code(pew::shell_not_set))]
    ShellNotSet,

    /// Failed to list a directory while scanning
    #[error("Failed to scan directory: {path:?}")]
    #[diagnostic(code(pew::scan_failed))]
    ScanFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Scan location could not be turned into a glob pattern
    #[error("Invalid scan pattern: {0}")]
    #[diagnostic(code(pew::invalid_pattern))]
    InvalidPattern(String),

    /// New PATH could not be assembled
    #[error("Failed to build PATH")]
    #[diagnostic(code(pew::join_paths))]
    JoinPaths(#[from] std::env::JoinPathsError),

    /// Child process failed to start for a reason other than a missing program
    #[error("Failed to launch {command}")]
    #[diagnostic(code(pew::launch_failed))]
    LaunchFailed {
        command: String,
        #[source]
        error: std::io::Error,
    },

    /// The external environment creation tool reported failure
    #[error("{tool} failed with {status}")]
    #[diagnostic(code(pew::venv_tool_failed))]
    VenvToolFailed {
        tool: String,
        status: std::process::ExitStatus,
    },

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(pew::io_error))]
    Io(#[from] std::io::Error),
}
