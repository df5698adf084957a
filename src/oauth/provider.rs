// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Url;
use crate::common::{AuthGrant, Error};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The `OAuthProvider` enum contains the list of supported `OAuth2` providers.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Hash, Serialize)]
pub enum OAuthProvider {
    /// https://google.com
    Google,
}

impl Display for OAuthProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Google => Display::fmt("Google", f),
        }
    }
}

/// Convert from provider name to `OAuthProvider` enum.
impl TryFrom<String> for OAuthProvider {
    type Error = Error;
    fn try_from(oauth_provider: String) -> Result<Self, Error> {
        match oauth_provider.as_str() {
            "Google" | "google" => Ok(OAuthProvider::Google),
            _ => Err(Error::String(format!(
                "{}: not an oauth2 provider",
                oauth_provider
            ))),
        }
    }
}

/// OAuth2 provider trait
#[async_trait]
pub trait OAuthService {
    /// Handles the callback from an OAuth2 provider. The grant carries the
    /// bearer token used for subsequent cloud studio calls.
    async fn authenticated(&self, code: String) -> Result<AuthGrant, Error>;
    /// Returns provider.
    fn provider(&self) -> OAuthProvider;
    /// Returns a `Url` that redirects to the specified OAuth2 provider.
    fn redirect(&self) -> Url;
}
