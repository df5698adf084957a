// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::AuthGrant;
use axum::http::{header, HeaderMap};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Session ID stored in the browser cookie.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SessionId(pub String);
crate::impl_wrapper_str!(SessionId);

/// Cookie that carries the session ID.
pub(crate) const SESSION_COOKIE: &str = "reel_session";

const SESSION_ID_LEN: usize = 32;

/// Thread-safe, in-memory mapping from session ID to the grant obtained at
/// sign-in. Token lifecycle (expiry, refresh) stays with the OAuth provider;
/// a stale token simply surfaces as an upstream failure.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<SessionId, AuthGrant>>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a grant under a fresh random session ID.
    pub fn insert(&self, grant: AuthGrant) -> SessionId {
        let id = SessionId(
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(SESSION_ID_LEN)
                .map(char::from)
                .collect(),
        );
        if let Ok(mut sessions) = self.inner.lock() {
            sessions.insert(id.clone(), grant);
        }
        id
    }

    /// Look up the grant of a session ID.
    pub fn get(&self, id: &SessionId) -> Option<AuthGrant> {
        self.inner.lock().ok()?.get(id).cloned()
    }

    /// Drop a session.
    pub fn remove(&self, id: &SessionId) {
        if let Ok(mut sessions) = self.inner.lock() {
            sessions.remove(id);
        }
    }

    /// Look up the grant of the request's session cookie, if any.
    pub fn grant_for(&self, headers: &HeaderMap) -> Option<AuthGrant> {
        session_cookie(headers).and_then(|id| self.get(&id))
    }
}

/// Parse the session cookie from request headers.
pub(crate) fn session_cookie(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| SessionId(value.to_string()))
}
