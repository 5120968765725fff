// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, arg, value_parser};
use todolist_core::{TodoList, TodoListDocument, TodoListError, TodoRef, TodoStatus};
use tokio::fs;

use crate::config::Config;
use crate::list_formatter::ListFormatter;
use crate::util::{
    ArgOutputFormat, arg_file, arg_index, arg_indices, get_file, get_index, get_indices,
};

/// The list document and output options shared by every list command.
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub file: PathBuf,
    pub output_format: Option<ArgOutputFormat>,
}

impl ListArgs {
    fn command(name: &'static str) -> Command {
        Command::new(name)
            .arg(arg_file())
            .arg(ArgOutputFormat::arg())
    }

    fn from(matches: &ArgMatches) -> Self {
        Self {
            file: get_file(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// Load the list document, picking the parser from the file extension.
    pub async fn load(&self, config: &Config) -> Result<TodoList, Box<dyn Error>> {
        tracing::debug!(file = %self.file.display(), "loading todo list...");
        let content = fs::read_to_string(&self.file).await.map_err(|e| {
            format!(
                "Failed to read todo list at {}: {}",
                self.file.display(),
                e
            )
        })?;

        let doc = match self.file.extension().and_then(|a| a.to_str()) {
            Some("json") => TodoListDocument::from_json(&content)?,
            Some("toml") => TodoListDocument::from_toml(&content)?,
            _ => {
                return Err(format!(
                    "Unsupported todo list file: {}, expected a .toml or .json file",
                    self.file.display()
                )
                .into());
            }
        };
        Ok(doc.into_list(&config.default_title)?)
    }

    fn print(&self, config: &Config, list: &TodoList) -> Result<(), Box<dyn Error>> {
        let output_format = self.output_format.unwrap_or(config.output_format);
        let formatter = ListFormatter::new(output_format).with_color(config.color);
        println!("{}", formatter.format(list)?);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub args: ListArgs,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME)
            .alias("list")
            .about("Show a todo list")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing todo list...");
        let list = self.args.load(config).await?;
        self.args.print(config, &list)
    }
}

#[derive(Debug, Clone)]
pub struct CmdDone {
    pub args: ListArgs,
    pub indices: Vec<usize>,
}

impl CmdDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME)
            .about("Mark todo items as done")
            .arg(arg_indices())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
            indices: get_indices(matches),
        }
    }

    pub fn apply(&self, list: &TodoList) -> Result<(), TodoListError> {
        // Validate first so a bad index leaves every item untouched
        for &index in &self.indices {
            list.item_at(index)?;
        }
        for &index in &self.indices {
            list.mark_done_at(index)?;
        }
        Ok(())
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking todos as done...");
        let list = self.args.load(config).await?;
        self.apply(&list)?;
        self.args.print(config, &list)
    }
}

#[derive(Debug, Clone)]
pub struct CmdUndo {
    pub args: ListArgs,
    pub indices: Vec<usize>,
}

impl CmdUndo {
    pub const NAME: &str = "undo";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME)
            .about("Mark todo items as undone")
            .arg(arg_indices())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
            indices: get_indices(matches),
        }
    }

    pub fn apply(&self, list: &TodoList) -> Result<(), TodoListError> {
        for &index in &self.indices {
            list.item_at(index)?;
        }
        for &index in &self.indices {
            list.mark_undone_at(index)?;
        }
        Ok(())
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking todos as undone...");
        let list = self.args.load(config).await?;
        self.apply(&list)?;
        self.args.print(config, &list)
    }
}

#[derive(Debug, Clone)]
pub struct CmdRemove {
    pub args: ListArgs,
    pub index: usize,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME)
            .alias("rm")
            .about("Remove a todo item")
            .arg(arg_index())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
            index: get_index(matches),
        }
    }

    pub fn apply(&self, list: &mut TodoList) -> Result<TodoRef, TodoListError> {
        list.remove_at(self.index)
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing todo...");
        let mut list = self.args.load(config).await?;
        let removed = self.apply(&mut list)?;
        tracing::info!(title = removed.title(), "removed todo");
        self.args.print(config, &list)
    }
}

#[derive(Debug, Clone)]
pub struct CmdDoneAll {
    pub args: ListArgs,
}

impl CmdDoneAll {
    pub const NAME: &str = "done-all";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME).about("Mark every todo item as done")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking all todos as done...");
        let list = self.args.load(config).await?;
        list.mark_all_done();
        self.args.print(config, &list)
    }
}

#[derive(Debug, Clone)]
pub struct CmdUndoAll {
    pub args: ListArgs,
}

impl CmdUndoAll {
    pub const NAME: &str = "undo-all";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME).about("Mark every todo item as undone")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking all todos as undone...");
        let list = self.args.load(config).await?;
        list.mark_all_undone();
        self.args.print(config, &list)
    }
}

#[derive(Debug, Clone)]
pub struct CmdFilter {
    pub args: ListArgs,
    pub status: TodoStatus,
}

impl CmdFilter {
    pub const NAME: &str = "filter";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME)
            .about("Show only the todo items with the given status")
            .arg(
                arg!(-s --status <STATUS> "Status to keep")
                    .value_parser(value_parser!(TodoStatus))
                    .default_value("undone"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
            status: matches
                .get_one::<TodoStatus>("status")
                .copied()
                .unwrap_or_default(),
        }
    }

    pub fn apply(&self, list: &TodoList) -> TodoList {
        match self.status {
            TodoStatus::Done => list.all_done(),
            TodoStatus::Undone => list.all_not_done(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "filtering todos...");
        let list = self.args.load(config).await?;
        self.args.print(config, &self.apply(&list))
    }
}

#[derive(Debug, Clone)]
pub struct CmdFind {
    pub args: ListArgs,
    pub title: String,
}

impl CmdFind {
    pub const NAME: &str = "find";

    pub fn command() -> Command {
        ListArgs::command(Self::NAME)
            .about("Find a todo item by its exact title")
            .arg(arg!(title: <TITLE> "The title to look for"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ListArgs::from(matches),
            title: matches
                .get_one::<String>("title")
                .expect("title is required")
                .clone(),
        }
    }

    /// The matching item as a one-item list under the source title.
    pub fn apply(&self, list: &TodoList) -> Result<TodoList, TodoListError> {
        let found = list.find(&self.title)?;

        let mut result = TodoList::new(list.title.clone());
        result.add(found.clone());
        Ok(result)
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "finding todo...");
        let list = self.args.load(config).await?;
        let found = self.apply(&list)?;
        self.args.print(config, &found)
    }
}
