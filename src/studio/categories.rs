// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::cloud_studio::VideoId;
use serde::{Deserialize, Serialize};

/// A video category: identifier plus display name. The set is a fixed
/// enumeration per region on the cloud service.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: String,
    /// Display name.
    pub title: String,
}

/// Category substituted when a caller supplies an ID outside the allow-list.
pub const DEFAULT_CATEGORY_ID: &str = "22";

/// Categories commonly assignable across regions. Doubles as the fallback
/// when the category lookup fails upstream and as the allow-list for update
/// validation.
const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("1", "Film & Animation"),
    ("2", "Autos & Vehicles"),
    ("10", "Music"),
    ("15", "Pets & Animals"),
    ("17", "Sports"),
    ("19", "Travel & Events"),
    ("20", "Gaming"),
    ("22", "People & Blogs"),
    ("23", "Comedy"),
    ("24", "Entertainment"),
    ("25", "News & Politics"),
    ("26", "Howto & Style"),
    ("27", "Education"),
    ("28", "Science & Technology"),
];

/// Return the built-in category list.
pub fn builtin_categories() -> Vec<Category> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|(id, title)| Category {
            id: id.to_string(),
            title: title.to_string(),
        })
        .collect()
}

/// Replace a category ID outside the allow-list with the default category.
/// The substitution is deliberate policy: an edit with a bad category still
/// goes through, and the repair is logged rather than surfaced.
pub(crate) fn repair_category(video_id: &VideoId, category_id: String) -> String {
    if BUILTIN_CATEGORIES.iter().any(|(id, _)| *id == category_id) {
        category_id
    } else {
        tracing::warn!(
            video_id = %video_id,
            category_id = %category_id,
            "unknown category replaced by default {DEFAULT_CATEGORY_ID}"
        );
        DEFAULT_CATEGORY_ID.to_string()
    }
}
