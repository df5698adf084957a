// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::router::AppContext;
use super::sessions::{session_cookie, SESSION_COOKIE};
use crate::common::create_error_response;
use crate::oauth::OAuthProvider;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use hyper::StatusCode;
use serde::Deserialize;

/// `GET /auth/login`: redirect the browser to the OAuth2 provider.
pub(crate) async fn login(State(context): State<AppContext>) -> Response {
    match context.oauth.redirect(OAuthProvider::Google) {
        Ok(url) => Redirect::temporary(url.as_str()).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "login redirect failed");
            create_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Sign-in unavailable".to_string(),
            )
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct CallbackParams {
    code: String,
}

/// `GET /auth/callback`: exchange the provider's code for a grant, open a
/// session and return to the catalog page.
pub(crate) async fn callback(
    State(context): State<AppContext>,
    Query(params): Query<CallbackParams>,
) -> Response {
    match context
        .oauth
        .authenticated(OAuthProvider::Google, params.code)
        .await
    {
        Ok(grant) => {
            tracing::info!(login_id = %grant.identity.login_id, "signed in");
            let session_id = context.sessions.insert(grant);
            let cookie = format!("{SESSION_COOKIE}={session_id}; HttpOnly; SameSite=Lax; Path=/");
            ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "sign-in failed");
            create_error_response(StatusCode::UNAUTHORIZED, "Sign-in failed".to_string())
        }
    }
}

/// `GET /auth/logout`: drop the session and clear the cookie.
pub(crate) async fn logout(State(context): State<AppContext>, headers: HeaderMap) -> Response {
    if let Some(session_id) = session_cookie(&headers) {
        context.sessions.remove(&session_id);
    }
    let cookie = format!("{SESSION_COOKIE}=; Max-Age=0; HttpOnly; Path=/");
    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}
