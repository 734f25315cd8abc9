/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Client for the upstream test case generation service.
//!
//! The generation model itself lives behind an HTTP endpoint; this module
//! only forwards the module context together with the typed payload and
//! maps the answer back. One attempt per request, no retries.

use anyhow::{Context, Result};
use app_core::types::ServerState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::endpoints::test_cases::GenerateTestCasesRequest;

#[derive(Serialize, Debug)]
struct GeneratorRequest<'a> {
    pub module_id: i64,
    pub module_name: &'a str,
    #[serde(flatten)]
    pub request: &'a GenerateTestCasesRequest,
}

#[derive(Deserialize, Debug)]
pub struct GeneratedTestCase {
    pub name: String,
    pub content: String,
}

pub async fn generate_test_case(
    state: Arc<ServerState>,
    module: &entity::module::Model,
    request: &GenerateTestCasesRequest,
) -> Result<GeneratedTestCase> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(state.cli.generator_timeout))
        .build()
        .context("Failed to build generator client")?;

    let req = GeneratorRequest {
        module_id: module.id,
        module_name: &module.name,
        request,
    };

    let res = client
        .post(format!("{}/generate", state.cli.generator_url))
        .json(&req)
        .send()
        .await
        .context("Generator service unreachable")?;

    if !res.status().is_success() {
        anyhow::bail!("Generator service returned {}", res.status());
    }

    res.json::<GeneratedTestCase>()
        .await
        .context("Invalid generator response")
}
