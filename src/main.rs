// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use reel::common::ReelConfig;
use reel::oauth::new_oauth_client;
use reel::server::{new_router, AppContext, SessionStore};
use reel::studio::new_studio_host;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "reel.toml";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let reel_config = ReelConfig::builder()
        .toml_file(CONFIG_FILE)
        .build()
        .expect(CONFIG_FILE);

    #[derive(Deserialize)]
    struct ServerConfig {
        bind_addr: Option<String>,
    }
    #[derive(Deserialize)]
    struct ConfigToml {
        server: Option<ServerConfig>,
    }
    let bind_addr = reel_config
        .get::<ConfigToml>()
        .ok()
        .and_then(|toml| toml.server)
        .and_then(|server| server.bind_addr)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let studio = new_studio_host(&reel_config).expect("youtube configuration");
    let oauth = new_oauth_client(&reel_config);
    tracing::info!("oauth providers: {:?}", oauth.providers());
    let context = AppContext {
        oauth: Arc::new(oauth),
        sessions: SessionStore::new(),
        studio: Arc::new(studio),
    };

    let app = new_router(context).layer(TraceLayer::new_for_http());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("{bind_addr}: cannot bind: {e}"));
    tracing::info!("listening on {bind_addr}");
    axum::serve(listener, app).await.expect("server error");
}
