// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
/// This is used, for example, with Oauth2 authentication.
pub struct AuthenticatedId(pub String);
crate::impl_wrapper_str!(AuthenticatedId);

/// A bearer token obtained from an OAuth2 provider, used to call the
/// cloud video service on behalf of the signed-in user.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct AccessToken(pub String);
crate::impl_wrapper_str!(AccessToken);

/// Redacted so tokens never reach logs.
impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str("AccessToken(..)")
    }
}

/// The `AuthGrant` struct is returned upon successful `OAuth2` authentication.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthGrant {
    /// The identity of the authenticated user.
    pub identity: Identity,
    /// The bearer token of the authenticated user.
    pub access_token: AccessToken,
}

/// Who the authenticated user is.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Identity {
    /// The login ID of the authenticated user.
    pub login_id: AuthenticatedId,
    /// The user name, if any, of the authenticated user.
    pub user_name: Option<UserName>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
/// A user name.
pub struct UserName(pub String);
crate::impl_wrapper_str!(UserName);
