/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use app_core::init_state;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TESTFORGE_LOG_LEVEL")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = init_state().await?;

    let _sentry_guard = if state.cli.report_errors {
        Some(sentry::init(
            "https://public@reports.testforge.dev/1",
        ))
    } else {
        None
    };

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
