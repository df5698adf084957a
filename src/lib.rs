// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! This crate is a small web application that lets a signed-in creator
//! browse their own video catalog on a cloud video service and edit
//! video metadata.

/// Types common to multiple modules.
pub mod common;
pub use common::*;

#[cfg(feature = "oauth")]
/// A wrapper which provides access to Oauth2 authentication.
pub mod oauth;
#[cfg(feature = "oauth")]
pub use oauth::*;

/// Macros used with `serde` serialization and serialization.
pub mod serde_utils;
pub use serde_utils::*;

#[cfg(feature = "server")]
/// The HTTP application: routes, sessions and the catalog page.
pub mod server;
#[cfg(feature = "server")]
pub use server::*;

#[cfg(feature = "studio")]
/// A wrapper which provides access to cloud video studio services.
pub mod studio;
#[cfg(feature = "studio")]
pub use studio::*;
