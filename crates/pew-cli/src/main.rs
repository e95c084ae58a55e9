// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! pew - Virtual Environment Discovery and Activation CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_in;
mod cmd_ls;
mod cmd_new;
mod cmd_rm;
mod cmd_show;
mod cmd_workon;

use cmd_in::CmdIn;
use cmd_ls::CmdLs;
use cmd_new::CmdNew;
use cmd_rm::CmdRm;
use cmd_show::CmdShow;
use cmd_workon::CmdWorkon;

#[derive(Parser)]
#[clap(
    name = "pew",
    about = "Manage your virtual environments",
    version,
    long_about = "Discover, enter, create and remove the virtual environments kept under $WORKON_HOME"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the active virtual environment
    Show(CmdShow),

    /// List available virtual environments
    Ls(CmdLs),

    /// Run a command (default: your shell) inside a virtual environment
    In(CmdIn),

    /// Enter a virtual environment (deprecated, use `pew in`)
    Workon(CmdWorkon),

    /// Create a new virtual environment
    New(CmdNew),

    /// Remove one or more virtual environments
    Rm(CmdRm),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        // Resolve configuration once for the whole invocation
        let config = pew::Config::from_env()?;

        // Dispatch to command
        match self.cmd {
            Command::Show(mut cmd) => cmd.run(&config),
            Command::Ls(mut cmd) => cmd.run(&config),
            Command::In(mut cmd) => cmd.run(&config),
            Command::Workon(mut cmd) => cmd.run(&config),
            Command::New(mut cmd) => cmd.run(&config),
            Command::Rm(mut cmd) => cmd.run(&config),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
