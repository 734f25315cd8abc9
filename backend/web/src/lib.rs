/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;
pub mod generator;

use axum::Router;
use axum::routing::{get, post};

use app_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/projects",
            get(endpoints::projects::get).post(endpoints::projects::post),
        )
        .route(
            "/projects/{project}",
            get(endpoints::projects::get_project)
                .put(endpoints::projects::put_project)
                .delete(endpoints::projects::delete_project),
        )
        .route(
            "/modules",
            get(endpoints::modules::get).post(endpoints::modules::post),
        )
        .route(
            "/modules/{module}",
            get(endpoints::modules::get_module)
                .put(endpoints::modules::put_module)
                .delete(endpoints::modules::delete_module),
        )
        .route(
            "/modules/{module}/generate-test-cases",
            post(endpoints::test_cases::post_generate),
        )
        .route(
            "/test-cases",
            get(endpoints::test_cases::get).post(endpoints::test_cases::post),
        )
        .route(
            "/test-cases/{test_case}",
            get(endpoints::test_cases::get_test_case)
                .put(endpoints::test_cases::put_test_case)
                .delete(endpoints::test_cases::delete_test_case),
        )
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
