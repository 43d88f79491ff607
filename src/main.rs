// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use seo_inspector::app::{create_app, AppState};
use std::env;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "seo_inspector=info".into()),
        )
        .with_target(false)
        .init();

    let port = env::var("PORT")
        .map(|value| value.parse::<u16>().expect("PORT must be a valid port number"))
        .unwrap_or(5000);

    let state = AppState::new()?;
    let app = create_app(state);

    // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "seo-inspector v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
