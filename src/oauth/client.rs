// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{google, OAuthProvider, OAuthService};
use crate::common::{AuthGrant, Error, ReelConfig};
use std::collections::HashMap;

/// A convenient alias for URL so consuming code doesn't need to add it to `Cargo.toml`
pub type Url = reqwest::Url;

/// The `OAuthClient` calls the necessary OAuth2 provider APIs to authenticate a user.
pub struct OAuthClient {
    provider_clients: HashMap<OAuthProvider, Box<dyn OAuthService + Send + Sync>>,
}

impl OAuthClient {
    /// Returns a new Oauth2 wrapper service. Providers whose configuration
    /// is absent are skipped.
    pub fn new(reel_config: &ReelConfig) -> Self {
        let mut provider_clients: HashMap<_, Box<dyn OAuthService + Send + Sync>> = HashMap::new();
        if let Ok(p) = google::GoogleOAuth2Service::new(reel_config) {
            provider_clients.insert(p.provider(), Box::new(p));
        }
        Self { provider_clients }
    }

    /// Handles the callback from an OAuth2 provider.
    pub async fn authenticated(
        &self,
        provider: OAuthProvider,
        code: String,
    ) -> Result<AuthGrant, Error> {
        self.get_provider_client(provider)?
            .authenticated(code)
            .await
    }

    fn get_provider_client(
        &self,
        provider: OAuthProvider,
    ) -> Result<&(dyn OAuthService + Send + Sync), Error> {
        self.provider_clients
            .get(&provider)
            .map(|p| p.as_ref())
            .ok_or(Error::String(format!("{provider}: invalid provider")))
    }

    /// Enumerate supported OAuth providers.
    pub fn providers(&self) -> Vec<OAuthProvider> {
        self.provider_clients.keys().copied().collect()
    }

    /// Returns a `Url` that redirects to the specified OAuth2 provider.
    pub fn redirect(&self, provider: OAuthProvider) -> Result<Url, Error> {
        Ok(self.get_provider_client(provider)?.redirect())
    }
}

/// Creates an OAuth client.
pub fn new_oauth_client(reel_config: &ReelConfig) -> OAuthClient {
    OAuthClient::new(reel_config)
}
