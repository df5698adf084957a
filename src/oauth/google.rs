// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{OAuthProvider, OAuthService, Url};
use crate::common::{AccessToken, AuthGrant, AuthenticatedId, Error, Identity, ReelConfig, UserName};
use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    reqwest::async_http_client, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;
use std::time::Duration;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo?alt=json";

/// Scope that allows managing the signed-in user's video catalog.
const STUDIO_SCOPE: &str = "https://www.googleapis.com/auth/youtube";

/// Google Oauth2 provider API.
pub struct GoogleOAuth2Service {
    http_client: reqwest::Client,
    oauth2_client: BasicClient,
}

impl GoogleOAuth2Service {
    /// Create a `GoogleOAuth2Service` from the `[google]` configuration.
    pub fn new(reel_config: &ReelConfig) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct GoogleConfig {
            client_id: String,
            client_secret: String,
            redirect_url: String,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            google: GoogleConfig,
        }
        let ConfigToml {
            google:
                GoogleConfig {
                    client_id,
                    client_secret,
                    redirect_url,
                },
        } = reel_config.get()?;

        let oauth2_client = BasicClient::new(
            ClientId::new(client_id),
            Some(ClientSecret::new(client_secret)),
            AuthUrl::new(AUTH_URL.to_string()).map_err(|e| Error::String(format!("{e}")))?,
            Some(TokenUrl::new(TOKEN_URL.to_string()).map_err(|e| Error::String(format!("{e}")))?),
        )
        .set_redirect_uri(
            RedirectUrl::new(redirect_url)
                .map_err(|e| Error::String(format!("invalid redirect URL: {e}")))?,
        );

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(4))
            .build()
            .map_err(|e| Error::String(format!("cannot create http client: {e}")))?;

        Ok(Self {
            http_client,
            oauth2_client,
        })
    }

    async fn userinfo(&self, access_token: &AccessToken) -> Result<Identity, Error> {
        let userinfo_response = self
            .http_client
            .get(USERINFO_URL)
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .map_err(|e| Error::String(format!("userinfo: {e}")))?;
        if !userinfo_response.status().is_success() {
            return match userinfo_response.text().await {
                Ok(body) => Err(Error::String(format!("userinfo: {body}"))),
                Err(e) => Err(Error::String(format!("userinfo: {e}"))),
            };
        }
        #[derive(Deserialize)]
        struct GoogleUserinfoResponse {
            email: Option<String>,
            id: String,
            name: Option<String>,
        }
        let userinfo_text = userinfo_response
            .text()
            .await
            .map_err(|e| Error::String(format!("userinfo response: {e}")))?;
        let GoogleUserinfoResponse { email, id, name } = serde_json::from_str(&userinfo_text)
            .map_err(|e| Error::String(format!("google userinfo parse: {e}\n{userinfo_text}")))?;
        let user_name = name.or(email);
        Ok(Identity {
            login_id: AuthenticatedId(format!("google/{}", id)),
            user_name: user_name.map(UserName),
        })
    }
}

#[async_trait]
impl OAuthService for GoogleOAuth2Service {
    async fn authenticated(&self, code: String) -> Result<AuthGrant, Error> {
        let token = self
            .oauth2_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(async_http_client)
            .await
            .map_err(|e| Error::String(format!("google token post: {e}")))?;
        let access_token = AccessToken(token.access_token().secret().clone());
        let identity = self.userinfo(&access_token).await?;
        Ok(AuthGrant {
            identity,
            access_token,
        })
    }

    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Google
    }

    fn redirect(&self) -> Url {
        let (auth_url, _csrf_token) = self
            .oauth2_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new(STUDIO_SCOPE.to_string()))
            .url();
        auth_url
    }
}
