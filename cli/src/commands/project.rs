/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::make_client;
use crate::input::*;
use crate::scope::{load_scope, save_scope, Scope};
use clap::Subcommand;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Select {
        project: i64,
    },
    Show,
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    List,
    Edit {
        #[arg(short, long)]
        new_name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
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

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::Select { project } => {
            let client = make_client();

            let project = client
                .project(project)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            save_scope(load_scope().select_project(project.id));
            println!("Project \"{}\" selected.", project.name);
        }

        Commands::Show => {
            let project_id = require_project();
            let client = make_client();

            let project = client
                .project(project_id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("===== Project =====");
            println!("Name: {}", project.name);
            println!("Description: {}", project.description);
            println!("Created At: {}", project.created_at);
            println!("Updated At: {}", project.updated_at);
            println!();

            let modules = client
                .modules(Some(project.id))
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if modules.is_empty() {
                println!("No modules.");
            } else {
                println!("===== Modules =====");
                for module in modules {
                    println!("{}: {}", module.name, module.id);
                }
            }
        }

        Commands::Create { name, description } => {
            let input_fields = vec![("Name".to_string(), name)];

            let input = handle_input(input_fields, true);
            let name = input.get("Name").unwrap().clone();

            let client = make_client();
            let project = client
                .create_project(name, description.unwrap_or_default())
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            save_scope(load_scope().select_project(project.id));
            println!("Project created.");
        }

        Commands::List => {
            let client = make_client();

            let res = client
                .projects()
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if res.is_empty() {
                println!("You have no projects.");
            } else {
                for project in res {
                    println!("{}: {}", project.name, project.id);
                }
            }
        }

        Commands::Edit {
            new_name,
            description,
        } => {
            let project_id = require_project();
            let client = make_client();

            let current = client
                .project(project_id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            let input_fields = vec![
                ("Name".to_string(), Some(new_name.unwrap_or(current.name))),
                (
                    "Description".to_string(),
                    Some(description.unwrap_or(current.description)),
                ),
            ];

            let input = handle_input(input_fields, false);

            let res = client
                .update_project(
                    project_id,
                    input.get("Name").cloned(),
                    input.get("Description").cloned(),
                )
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Project \"{}\" updated.", res.name);
        }

        Commands::Delete => {
            let project_id = require_project();
            let client = make_client();

            client
                .delete_project(project_id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            save_scope(Scope::Projects);
            println!("Project deleted.");
        }
    }
}
