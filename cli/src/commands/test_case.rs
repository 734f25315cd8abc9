/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::make_client;
use crate::input::*;
use crate::scope::load_scope;
use clap::Subcommand;
use connector::test_cases::{GenerateTestCasesRequest, ImagesPayload, RequirementsPayload};
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show {
        test_case: i64,
    },
    List,
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, value_parser = ["images", "requirements"])]
        kind: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    Edit {
        test_case: i64,
        #[arg(short, long)]
        new_name: Option<String>,
        #[arg(short, long, value_parser = ["images", "requirements"])]
        kind: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    Delete {
        test_case: i64,
    },
    Generate {
        #[command(subcommand)]
        cmd: GenerateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    Images {
        #[arg(short, long)]
        image_urls: Option<String>,
    },
    Requirements {
        #[arg(short, long)]
        text: Option<String>,
    },
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

fn ask_for_kind() -> String {
    let kind = ask_for_input("Generation kind (images|requirements)");

    if kind != "images" && kind != "requirements" {
        eprintln!("Unknown generation kind: {}", kind);
        exit(1);
    }

    kind
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::Show { test_case } => {
            let client = make_client();

            let test_case = client
                .test_case(test_case)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("===== Test Case =====");
            println!("Name: {}", test_case.name);
            println!("Type: {}", test_case.kind);
            println!("Module ID: {}", test_case.module_id);
            println!("Created At: {}", test_case.created_at);
            println!("Updated At: {}", test_case.updated_at);
            println!();
            println!("{}", test_case.content);
        }

        Commands::List => {
            let module_id = require_module();
            let client = make_client();

            let res = client
                .test_cases(Some(module_id))
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if res.is_empty() {
                println!("You have no test cases in this module.");
            } else {
                for test_case in res {
                    println!("{}: {} [{}]", test_case.name, test_case.id, test_case.kind);
                }
            }
        }

        Commands::Create {
            name,
            kind,
            content,
        } => {
            let module_id = require_module();

            let input_fields = vec![
                ("Name".to_string(), name),
                ("Content".to_string(), content),
            ];

            let input = handle_input(input_fields, true);
            let kind = kind.unwrap_or_else(ask_for_kind);

            let client = make_client();
            client
                .create_test_case(
                    module_id,
                    input.get("Name").unwrap().clone(),
                    kind,
                    input.get("Content").unwrap().clone(),
                )
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Test case created.");
        }

        Commands::Edit {
            test_case,
            new_name,
            kind,
            content,
        } => {
            if new_name.is_none() && kind.is_none() && content.is_none() {
                eprintln!("Nothing to edit.");
                exit(1);
            }

            let client = make_client();
            let res = client
                .update_test_case(test_case, new_name, kind, content)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Test case \"{}\" updated.", res.name);
        }

        Commands::Delete { test_case } => {
            let client = make_client();

            client
                .delete_test_case(test_case)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Test case deleted.");
        }

        Commands::Generate { cmd } => {
            let module_id = require_module();

            let request = match cmd {
                GenerateCommands::Images { image_urls } => {
                    let image_urls = image_urls
                        .unwrap_or_else(|| ask_for_input("Image URLs (comma separated)"));
                    let image_urls = parse_tag_list(&image_urls);

                    if image_urls.is_empty() {
                        eprintln!("Image URLs cannot be empty.");
                        exit(1);
                    }

                    GenerateTestCasesRequest::Images(ImagesPayload { image_urls })
                }
                GenerateCommands::Requirements { text } => {
                    let text = text.unwrap_or_else(|| ask_for_input("Requirements text"));

                    GenerateTestCasesRequest::Requirements(RequirementsPayload { text })
                }
            };

            let client = make_client();
            let test_case = client
                .generate_test_cases(module_id, &request)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            println!("Test case \"{}\" generated.", test_case.name);
        }
    }
}
