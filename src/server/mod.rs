// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// OAuth sign-in routes.
mod login;

/// The catalog page.
mod page;

/// Route table and shared handler state.
mod router;

/// In-memory sessions keyed by a browser cookie.
mod sessions;

/// Unit tests
mod tests;

/// Video catalog handlers.
mod videos;

pub use self::router::{new_router, AppContext};
pub use self::sessions::{SessionId, SessionStore};
