// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod auth;
#[cfg(feature = "toml")]
mod config;
/// An enum that encapsulates a variety of error types.
mod error;
#[cfg(feature = "axum")]
mod http;

pub use self::auth::{AccessToken, AuthGrant, AuthenticatedId, Identity, UserName};
#[cfg(feature = "toml")]
pub use self::config::ReelConfig;
pub use self::error::Error;
#[cfg(feature = "axum")]
pub use self::http::create_error_response;
