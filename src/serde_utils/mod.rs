// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Macros for serializing default values.
mod defaults;

/// Macros for serializing tuples.
mod tuples;

pub use self::defaults::*;
#[allow(unused)]
pub use self::tuples::*;
