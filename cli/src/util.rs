// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgOutputFormat {
    Json,
    #[default]
    Text,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format, defaults to the configured one")
            .required(false)
            .value_parser(value_parser!(ArgOutputFormat))
    }

    pub fn from(matches: &ArgMatches) -> Option<Self> {
        matches.get_one("output-format").copied()
    }
}

pub fn arg_file() -> Arg {
    arg!(file: <FILE> "Path to the todo list document (.toml or .json)")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

pub fn get_file(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("file")
        .expect("file is required")
        .clone()
}

pub fn arg_index() -> Arg {
    arg!(index: <INDEX> "Zero-based position of the todo in the list")
        .value_parser(value_parser!(usize))
}

pub fn get_index(matches: &ArgMatches) -> usize {
    *matches
        .get_one::<usize>("index")
        .expect("index is required")
}

pub fn arg_indices() -> Arg {
    arg!(indices: <INDEX> ... "Zero-based positions of the todos in the list")
        .value_parser(value_parser!(usize))
}

pub fn get_indices(matches: &ArgMatches) -> Vec<usize> {
    matches
        .get_many::<usize>("indices")
        .expect("at least one index is required")
        .copied()
        .collect()
}
