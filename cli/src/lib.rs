// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for `todolist-core`.
//!
//! Every command reads a list document, applies one operation in memory and
//! prints the resulting list. Documents are never written back.

mod cli;
mod cmd_generate_completion;
mod cmd_list;
mod config;
mod list_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
