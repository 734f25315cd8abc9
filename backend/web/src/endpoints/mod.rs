/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod modules;
pub mod projects;
pub mod test_cases;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use app_core::types::HealthResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<HealthResponse>> {
    let res = HealthResponse {
        status: "ok".to_string(),
    };

    Ok(Json(res))
}
