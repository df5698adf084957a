// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Video categories and the built-in fallback list.
mod categories;

/// Video studio trait
mod cloud_studio;

/// Support for Youtube.
mod youtube;

/// Unit tests
mod tests;

pub use self::categories::{builtin_categories, Category, DEFAULT_CATEGORY_ID};
pub use self::cloud_studio::{
    CloudStudio, ResourceSnippet, ResourceStatus, SnippetPatch, StatusPatch, StudioHost, Video,
    VideoId, VideoResource, VideoSnippet, VideoStatistics, VideoStatus, VideoUpdate,
};
pub use self::youtube::{new_studio_host, YoutubeStudioHost};
