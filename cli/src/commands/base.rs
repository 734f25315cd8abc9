/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::input::*;
use crate::scope::{load_scope, save_scope};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::process::exit;
use std::str::FromStr;
use strum::IntoEnumIterator;

use super::{module, project, test_case};

#[derive(Parser, Debug)]
#[command(name = "TestForge", display_name = "TestForge", bin_name = "testforge", author = "TestForge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Back,
    Project {
        #[command(subcommand)]
        cmd: project::Commands,
    },
    Module {
        #[command(subcommand)]
        cmd: module::Commands,
    },
    TestCase {
        #[command(subcommand)]
        cmd: test_case::Commands,
    },
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "testforge", &mut io::stdout());
        return Ok(());
    }

    match cli.cmd {
        Some(MainCommands::Config { key, value }) => handle_config(key, value),
        Some(MainCommands::Status) => handle_status().await,
        Some(MainCommands::Back) => handle_back(),
        Some(MainCommands::Project { cmd }) => project::handle(cmd).await,
        Some(MainCommands::Module { cmd }) => module::handle(cmd).await,
        Some(MainCommands::TestCase { cmd }) => test_case::handle(cmd).await,
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

fn handle_config(key: String, value: Option<String>) {
    let key = match ConfigKey::from_str(&key) {
        Ok(key) => key,
        Err(()) => {
            eprintln!("Invalid key: {}", key);
            eprintln!("Valid keys are:");
            for config_key in ConfigKey::iter() {
                eprintln!("{}", config_key);
            }
            exit(1);
        }
    };

    set_get_value(key, value, false);
}

async fn handle_status() {
    let config = get_request_config(load_config())
        .map_err(|e| {
            eprintln!("{}", e);
            exit(1);
        })
        .unwrap();

    match connector::health(&config).await {
        Ok(res) => println!("Server is reachable ({}).", res.status),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }

    println!("Scope: {}", load_scope());
}

fn handle_back() {
    let scope = load_scope().back();
    save_scope(scope);
    println!("Scope: {}", scope);
}
