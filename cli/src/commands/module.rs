/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::make_client;
use crate::input::*;
use crate::scope::{load_scope, save_scope};
use clap::Subcommand;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Select {
        module: i64,
    },
    Show,
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        url: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        tags: Option<String>,
    },
    List,
    Edit {
        #[arg(short, long)]
        new_name: Option<String>,
        #[arg(short, long)]
        url: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        tags: Option<String>,
    },
    Delete,
}

fn require_project() -> i64 {
    match load_scope().project() {
        Some(id) => id,
        None => {
            eprintln!("Project is required for command. Use `testforge project select <id>`.");
            exit(1);
        }
    }
}

fn require_module() -> i64 {
    match load_scope().module() {
        Some(id) => id,
        None => {
            eprintln!("Module is required for command. Use `testforge module select <id>`.");
            exit(1);
        }
    }
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::Select { module } => {
            let project_id = require_project();
            let client = make_client();

            let module = client
                .module(module)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if module.project_id != project_id {
                eprintln!(
                    "Module {} is not part of project {}.",
                    module.id, project_id
                );
                exit(1);
            }

            let scope = load_scope()
                .select_module(module.id)
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            save_scope(scope);
            println!("Module \"{}\" selected.", module.name);
        }

        Commands::Show => {
            let module_id = require_module();
            let client = make_client();

            let module = client
                .module(module_id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("===== Module =====");
            println!("Name: {}", module.name);
            println!("URL: {}", module.url.unwrap_or_else(|| "[unset]".to_string()));
            println!(
                "Description: {}",
                module.description.unwrap_or_else(|| "[unset]".to_string())
            );
            println!(
                "Tags: {}",
                module
                    .tags
                    .map(|t| t.join(", "))
                    .unwrap_or_else(|| "[unset]".to_string())
            );
            println!("Project ID: {}", module.project_id);
            println!("Created At: {}", module.created_at);
            println!("Updated At: {}", module.updated_at);
            println!();

            let test_cases = client
                .test_cases(Some(module_id))
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if test_cases.is_empty() {
                println!("No test cases.");
            } else {
                println!("===== Test Cases =====");
                for test_case in test_cases {
                    println!("{}: {} [{}]", test_case.name, test_case.id, test_case.kind);
                }
            }
        }

        Commands::Create {
            name,
            url,
            description,
            tags,
        } => {
            let project_id = require_project();

            let input_fields = vec![("Name".to_string(), name)];

            let input = handle_input(input_fields, true);
            let name = input.get("Name").unwrap().clone();

            let client = make_client();
            client
                .create_module(
                    project_id,
                    name,
                    url,
                    description,
                    tags.map(|t| parse_tag_list(&t)),
                )
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Module created.");
        }

        Commands::List => {
            let project_id = require_project();
            let client = make_client();

            let res = client
                .modules(Some(project_id))
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if res.is_empty() {
                println!("You have no modules in this project.");
            } else {
                for module in res {
                    println!("{}: {}", module.name, module.id);
                }
            }
        }

        Commands::Edit {
            new_name,
            url,
            description,
            tags,
        } => {
            let module_id = require_module();

            if new_name.is_none() && url.is_none() && description.is_none() && tags.is_none() {
                eprintln!("Nothing to edit.");
                exit(1);
            }

            let client = make_client();
            let res = client
                .update_module(
                    module_id,
                    new_name,
                    url,
                    description,
                    tags.map(|t| parse_tag_list(&t)),
                )
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Module \"{}\" updated.", res.name);
        }

        Commands::Delete => {
            let module_id = require_module();
            let client = make_client();

            client
                .delete_module(module_id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            save_scope(load_scope().back());
            println!("Module deleted.");
        }
    }
}
