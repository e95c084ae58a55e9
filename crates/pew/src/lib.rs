// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! pew - Virtual Environment Discovery and Activation
//!
//! This crate provides the core library for working with virtual environments
//! kept under a single home directory (`$WORKON_HOME`).
//!
//! # Overview
//!
//! An environment is any directory below the home that contains an interpreter
//! at `<env>/bin/python*` (`<env>\Scripts\python*` on Windows). pew does not
//! build environments itself; it discovers them, launches shells and commands
//! "inside" them by handing the child process a modified environment, and
//! delegates creation to an external tool such as `virtualenv`.
//!
//! ```text
//! $WORKON_HOME/
//!   web/bin/python3        <- environment "web"
//!   web/.project           <- optional project directory for "web"
//!   clients/               <- plain directory
//!     acme/bin/python3     <- environment "clients/acme"
//! ```

pub mod activate;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod project;
pub mod scan;
pub mod scoped;

pub use activate::{ActivateOptions, Activation, activate, child_environment};
pub use config::Config;
pub use error::{Error, Result};
pub use lifecycle::{CreateOptions, create, remove};
pub use project::{project_dir, write_project_link};
pub use scan::{Listing, is_environment, scan, stays_inside};
pub use scoped::{ScopedEnvironment, ScopedWorkingDir};

/// Environment variable naming the directory that holds all environments.
pub const WORKON_HOME_VAR: &str = "WORKON_HOME";

/// Environment variable naming the currently active environment.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Well-known filename for the project link inside an environment.
pub const PROJECT_FILENAME: &str = ".project";

/// Directory inside an environment that holds its executables.
#[cfg(windows)]
pub const BIN_DIR: &str = "Scripts";

/// Directory inside an environment that holds its executables.
#[cfg(not(windows))]
pub const BIN_DIR: &str = "bin";
