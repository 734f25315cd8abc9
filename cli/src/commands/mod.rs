/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod base;
pub mod module;
pub mod project;
pub mod test_case;

use crate::config::load_config;
use crate::input::get_request_config;
use connector::queries::QueryClient;
use std::process::exit;

pub fn make_client() -> QueryClient {
    match get_request_config(load_config()) {
        Ok(config) => QueryClient::new(config),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
