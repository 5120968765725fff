// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use todolist_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_list::{
    CmdDone, CmdDoneAll, CmdFilter, CmdFind, CmdRemove, CmdShow, CmdUndo, CmdUndoAll,
};
use crate::config::parse_config;

/// Run the todolist command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    report(result)
}

/// Print a failed command to stderr and turn the outcome into an exit code.
fn report(result: Result<(), Box<dyn Error>>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new("todo")
            .about("Keep an ordered, titled list of todos.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(format!(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/{APP_NAME}/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/{APP_NAME}/config.toml on Windows."
                    ))
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdShow::command())
            .subcommand(CmdDone::command())
            .subcommand(CmdUndo::command())
            .subcommand(CmdRemove::command())
            .subcommand(CmdDoneAll::command())
            .subcommand(CmdUndoAll::command())
            .subcommand(CmdFilter::command())
            .subcommand(CmdFind::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdDone::NAME, matches)) => Done(CmdDone::from(matches)),
            Some((CmdUndo::NAME, matches)) => Undo(CmdUndo::from(matches)),
            Some((CmdRemove::NAME, matches)) => Remove(CmdRemove::from(matches)),
            Some((CmdDoneAll::NAME, matches)) => DoneAll(CmdDoneAll::from(matches)),
            Some((CmdUndoAll::NAME, matches)) => UndoAll(CmdUndoAll::from(matches)),
            Some((CmdFilter::NAME, matches)) => Filter(CmdFilter::from(matches)),
            Some((CmdFind::NAME, matches)) => Find(CmdFind::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show a todo list
    Show(CmdShow),

    /// Mark todos as done
    Done(CmdDone),

    /// Mark todos as undone
    Undo(CmdUndo),

    /// Remove a todo
    Remove(CmdRemove),

    /// Mark every todo as done
    DoneAll(CmdDoneAll),

    /// Mark every todo as undone
    UndoAll(CmdUndoAll),

    /// Show todos with a given status
    Filter(CmdFilter),

    /// Find a todo by title
    Find(CmdFind),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        if let GenerateCompletion(a) = self {
            return a.run();
        }

        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        match self {
            Show(a)    => a.run(&config).await,
            Done(a)    => a.run(&config).await,
            Undo(a)    => a.run(&config).await,
            Remove(a)  => a.run(&config).await,
            DoneAll(a) => a.run(&config).await,
            UndoAll(a) => a.run(&config).await,
            Filter(a)  => a.run(&config).await,
            Find(a)    => a.run(&config).await,
            GenerateCompletion(a) => a.run(),
        }
    }
}
