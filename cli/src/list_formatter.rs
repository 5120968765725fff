// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use todolist_core::{Todo, TodoList, TodoStatus};

use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct ListFormatter {
    pub output_format: ArgOutputFormat,
    pub color: bool,
}

impl ListFormatter {
    pub fn new(output_format: ArgOutputFormat) -> Self {
        Self {
            output_format,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self, list: &TodoList) -> Result<String, Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => Ok(list.to_json()?),
            ArgOutputFormat::Text if self.color => Ok(self.format_colored(list)),
            ArgOutputFormat::Text => Ok(list.to_string()),
        }
    }

    fn format_colored(&self, list: &TodoList) -> String {
        let header = format!("---- {} ----", list.title).bold().to_string();
        list.iter()
            .map(|todo| format_todo_colored(todo))
            .fold(header, |acc, line| acc + "\n" + &line)
    }
}

fn format_todo_colored(todo: &Todo) -> String {
    let status = todo.status();
    let marker = match status {
        TodoStatus::Done => status.marker().green(),
        TodoStatus::Undone => status.marker().normal(),
    };
    let title = match status {
        TodoStatus::Done => todo.title().dimmed(),
        TodoStatus::Undone => todo.title().normal(),
    };
    format!("{marker} {title}")
}
