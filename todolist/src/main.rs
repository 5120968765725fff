// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! todo - keep an ordered, titled list of todos

use std::process::ExitCode;

use todolist_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
