// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::categories::{repair_category, Category};
use crate::common::{AccessToken, Error};
use crate::serde_utils::is_default;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video ID on the cloud studio service.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct VideoId(pub String);
crate::impl_wrapper_str!(VideoId);

/// Video studio.
#[async_trait]
pub trait CloudStudio {
    /// List the IDs of the videos the signed-in user has published, newest
    /// first, bounded to one page.
    async fn uploaded_videos(&self) -> Result<Vec<VideoId>, Error>;

    /// Fetch full metadata for the specified IDs in one batched call.
    async fn video_details(&self, ids: &[VideoId]) -> Result<Vec<Video>, Error>;

    /// Merge the change set onto the video's current metadata and submit it.
    async fn update_video(&self, id: &VideoId, update: VideoUpdate) -> Result<Video, Error>;

    /// List the categories of the configured region.
    async fn categories(&self) -> Result<Vec<Category>, Error>;
}

/// Constructor paths over the `CloudStudio` capability: one client
/// authenticated by the service's static credential for public reads, and
/// one per-request client authenticated by a signed-in user's bearer token.
pub trait StudioHost {
    /// Client for public, unauthenticated reads.
    fn public(&self) -> Box<dyn CloudStudio + Send + Sync>;

    /// Client acting on behalf of the signed-in user.
    fn authenticated(&self, access_token: &AccessToken) -> Box<dyn CloudStudio + Send + Sync>;
}

/// A video in the signed-in user's catalog. Sourced entirely from the
/// cloud service; never persisted locally.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Video ID.
    pub id: VideoId,
    /// Human-facing metadata.
    pub snippet: VideoSnippet,
    /// Publication state.
    #[serde(default)]
    pub status: VideoStatus,
    /// View and like counts.
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// The service's grouping of human-facing metadata.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// Video title.
    pub title: String,
    /// Video description.
    #[serde(default)]
    pub description: String,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category ID, constrained to the service's category enumeration.
    #[serde(default)]
    pub category_id: String,
    /// When the video was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// The service's grouping of publication state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    /// One of the service's privacy values, e.g. "public", "private",
    /// "unlisted".
    #[serde(default)]
    pub privacy_status: String,
}

/// View and like counts. The service serializes counts as JSON strings, so
/// they are kept verbatim.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    /// View count.
    #[serde(default)]
    pub view_count: String,
    /// Like count.
    #[serde(default)]
    pub like_count: String,
}

/// A partial change set for one video, accepted in either the grouped shape
/// (`snippet`/`status`) or the flat shape (`title`, `tags`, ...). Grouped
/// fields win when present.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoUpdate {
    /// Grouped metadata changes.
    pub snippet: Option<SnippetPatch>,
    /// Grouped publication-state changes.
    pub status: Option<StatusPatch>,
    /// Flat form of `snippet.title`.
    pub title: Option<String>,
    /// Flat form of `snippet.description`.
    pub description: Option<String>,
    /// Flat form of `snippet.tags`.
    pub tags: Option<Vec<String>>,
    /// Flat form of `snippet.categoryId`.
    pub category_id: Option<String>,
    /// Flat form of `status.privacyStatus`.
    pub privacy_status: Option<String>,
}

impl VideoUpdate {
    /// Normalize to the grouped shape.
    pub fn normalized(self) -> (SnippetPatch, StatusPatch) {
        if self.snippet.is_some() || self.status.is_some() {
            (
                self.snippet.unwrap_or_default(),
                self.status.unwrap_or_default(),
            )
        } else {
            (
                SnippetPatch {
                    title: self.title,
                    description: self.description,
                    tags: self.tags,
                    category_id: self.category_id,
                },
                StatusPatch {
                    privacy_status: self.privacy_status,
                },
            )
        }
    }

    /// Merge onto the current metadata, producing the object to submit.
    /// A caller-supplied category ID that is not in the category allow-list
    /// is replaced by the default category rather than failing the update.
    pub fn merged(self, current: &Video) -> VideoResource {
        let (mut snippet, status) = self.normalized();
        if let Some(category_id) = snippet.category_id.take() {
            snippet.category_id = Some(repair_category(&current.id, category_id));
        }
        VideoResource {
            id: current.id.clone(),
            snippet: snippet.apply(&current.snippet),
            status: status.apply(&current.status),
        }
    }
}

/// Metadata fields of a change set, grouped the way the service groups them.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement tags. A supplied list fully replaces the prior one.
    pub tags: Option<Vec<String>>,
    /// Replacement category ID.
    pub category_id: Option<String>,
}

impl SnippetPatch {
    /// Field-level override of the current snippet.
    pub fn apply(self, current: &VideoSnippet) -> ResourceSnippet {
        ResourceSnippet {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
            tags: self.tags.unwrap_or_else(|| current.tags.clone()),
            category_id: self
                .category_id
                .unwrap_or_else(|| current.category_id.clone()),
        }
    }
}

/// Publication-state fields of a change set.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
    /// Replacement privacy value.
    pub privacy_status: Option<String>,
}

impl StatusPatch {
    /// Field-level override of the current status.
    pub fn apply(self, current: &VideoStatus) -> ResourceStatus {
        ResourceStatus {
            privacy_status: self
                .privacy_status
                .unwrap_or_else(|| current.privacy_status.clone()),
        }
    }
}

/// The merged object submitted to the service's update operation. Fields
/// the caller never mentioned carry the freshly fetched current values, so
/// an update can never drop them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    /// Video ID.
    pub id: VideoId,
    /// Merged metadata.
    pub snippet: ResourceSnippet,
    /// Merged publication state.
    pub status: ResourceStatus,
}

/// Snippet fields as submitted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnippet {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Tags; an empty list is omitted from the wire.
    #[serde(skip_serializing_if = "is_default")]
    pub tags: Vec<String>,
    /// Category ID.
    pub category_id: String,
}

/// Status fields as submitted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    /// Privacy value.
    pub privacy_status: String,
}
