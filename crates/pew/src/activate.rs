// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Running shells and commands inside an environment.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::{
    BIN_DIR, Config, Error, Result, ScopedEnvironment, ScopedWorkingDir, VIRTUAL_ENV_VAR,
    project_dir,
};

#[cfg(test)]
#[path = "./activate_test.rs"]
mod activate_test;

/// Whether child commands are started through the command interpreter.
///
/// Windows only resolves executables against the inherited PATH consistently
/// when going through `cmd /C`.
pub const SHELL_INDIRECT: bool = cfg!(windows);

/// Variables that would make the interpreter ignore the activated environment.
const CLEARED_VARS: &[&str] = &["PYTHONHOME", "__PYVENV_LAUNCHER__"];

/// What to run inside the environment.
#[derive(Debug, Clone, Default)]
pub struct ActivateOptions {
    /// Program to run, defaults to the user's shell.
    pub command: Option<String>,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

/// How an activation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The child ran and exited with this code.
    Exited(i32),
    /// The program could not be found.
    CommandNotFound(String),
}

/// Run a command inside the environment `name`, blocking until it exits.
///
/// The child gets the environment's `bin` directory first on PATH, `VIRTUAL_ENV`
/// pointing at the environment and the interpreter-home variables removed. It
/// starts in the environment's project directory if one is linked. The process
/// environment and working directory are put back before this returns, on
/// every path.
pub fn activate(config: &Config, name: &str, options: &ActivateOptions) -> Result<Activation> {
    let env_path = config.environment(name)?;

    let command = match &options.command {
        Some(command) => command.clone(),
        None => default_shell(SHELL_INDIRECT)?,
    };
    let workdir = working_dir(&env_path);
    let vars = child_environment(std::env::vars_os(), &env_path)?;

    let _dir = workdir.map(ScopedWorkingDir::enter).transpose()?;
    let _env = ScopedEnvironment::apply(&vars);

    tracing::debug!(?env_path, %command, args = ?options.args, "launching");
    let mut cmd = launch_command(&command, &options.args, SHELL_INDIRECT);
    match cmd.status() {
        Ok(status) => Ok(Activation::Exited(exit_code(status))),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!("{command}: {error}");
            Ok(Activation::CommandNotFound(command))
        }
        Err(error) => Err(Error::LaunchFailed { command, error }),
    }
}

/// Enter the environment `name` with the default shell.
#[deprecated(note = "use `activate` with default options")]
pub fn workon(config: &Config, name: &str) -> Result<Activation> {
    activate(config, name, &ActivateOptions::default())
}

/// Build the environment a child of `env_path` runs with.
///
/// `base` is copied as-is apart from VIRTUAL_ENV, PATH and the cleared
/// interpreter variables.
pub fn child_environment<I>(base: I, env_path: &Path) -> Result<BTreeMap<OsString, OsString>>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut vars: BTreeMap<OsString, OsString> = base.into_iter().collect();

    vars.insert(VIRTUAL_ENV_VAR.into(), env_path.as_os_str().to_owned());

    let path_key = path_key(&vars);
    let bin = env_path.join(BIN_DIR);
    let existing = vars.get(&path_key).cloned().unwrap_or_default();
    let search = std::iter::once(bin).chain(std::env::split_paths(&existing));
    vars.insert(path_key, std::env::join_paths(search)?);

    for name in CLEARED_VARS {
        vars.remove(OsStr::new(name));
    }
    Ok(vars)
}

/// Windows spells PATH in whatever case it likes.
fn path_key(vars: &BTreeMap<OsString, OsString>) -> OsString {
    if cfg!(windows) {
        if let Some(key) = vars.keys().find(|k| k.eq_ignore_ascii_case("PATH")) {
            return key.clone();
        }
    }
    "PATH".into()
}

fn default_shell(shell_indirect: bool) -> Result<String> {
    if shell_indirect {
        return Ok(command_interpreter());
    }
    match std::env::var("SHELL") {
        Ok(shell) if !shell.is_empty() => Ok(shell),
        _ => Err(Error::ShellNotSet),
    }
}

fn command_interpreter() -> String {
    std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
}

/// The linked project directory, if it can be entered.
fn working_dir(env_path: &Path) -> Option<PathBuf> {
    let dir = project_dir(env_path)?;
    if !dir.is_dir() {
        tracing::warn!(
            "Project directory {dir:?} does not exist, staying in the current directory"
        );
        return None;
    }
    Some(dir)
}

/// Build the child process, optionally going through the command interpreter.
pub(crate) fn launch_command(command: &str, args: &[String], shell_indirect: bool) -> Command {
    let mut cmd = if shell_indirect {
        let mut cmd = Command::new(command_interpreter());
        cmd.arg("/C").arg(command);
        cmd
    } else {
        Command::new(command)
    };
    cmd.args(args);
    cmd
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
