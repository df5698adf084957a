// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{login, page, videos, SessionStore};
use crate::oauth::OAuthClient;
use crate::studio::StudioHost;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Shared state available to every handler. Handlers are stateless beyond
/// this context; each request is independent.
#[derive(Clone)]
pub struct AppContext {
    /// OAuth2 registry used by the sign-in routes.
    pub oauth: Arc<OAuthClient>,
    /// Session-cookie to grant mapping.
    pub sessions: SessionStore,
    /// Constructor paths into the cloud studio service.
    pub studio: Arc<dyn StudioHost + Send + Sync>,
}

/// Create the application router.
pub fn new_router(context: AppContext) -> Router {
    Router::new()
        .route("/", get(page::home))
        .route(
            "/api/videos",
            get(videos::list_videos).put(videos::update_video),
        )
        .route("/api/categories", get(videos::list_categories))
        .route("/auth/login", get(login::login))
        .route("/auth/callback", get(login::callback))
        .route("/auth/logout", get(login::logout))
        .with_state(context)
}
