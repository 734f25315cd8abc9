/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod commands;
mod config;
mod input;
mod scope;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    commands::base::run_cli().await
}
