// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::categories::{builtin_categories, Category};
use super::cloud_studio::{CloudStudio, StudioHost, Video, VideoId, VideoUpdate};
use crate::common::{AccessToken, Error, ReelConfig};
use async_trait::async_trait;
use hyper::StatusCode;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const API_PREFIX: &str = "https://www.googleapis.com/youtube/v3";

/// Fixed page size of the uploads listing; no further pages are fetched.
const PAGE_SIZE: u32 = 50;

/// Youtube studio host. Hands out `CloudStudio` clients over a shared HTTP
/// connection pool: a public one carrying the static API key and a
/// per-request one carrying a user's bearer token.
pub struct YoutubeStudioHost {
    api_key: String,
    client: Client,
    region: String,
}

impl YoutubeStudioHost {
    const TIMEOUT_SECS: u64 = 5;

    /// Create a `YoutubeStudioHost` from the `[youtube]` configuration.
    pub fn new(reel_config: &ReelConfig) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct YoutubeConfig {
            api_key: String,
            region: Option<String>,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            youtube: YoutubeConfig,
        }
        let ConfigToml {
            youtube: YoutubeConfig { api_key, region },
        } = reel_config.get()?;

        Ok(Self {
            api_key,
            client: Client::builder()
                .timeout(Duration::from_secs(Self::TIMEOUT_SECS))
                .http1_only()
                .build()
                .map_err(map_error)?,
            region: region.unwrap_or_else(|| "US".to_string()),
        })
    }
}

impl StudioHost for YoutubeStudioHost {
    fn public(&self) -> Box<dyn CloudStudio + Send + Sync> {
        Box::new(YoutubeStudio {
            auth: StudioAuth::ApiKey(self.api_key.clone()),
            client: self.client.clone(),
            region: self.region.clone(),
        })
    }

    fn authenticated(&self, access_token: &AccessToken) -> Box<dyn CloudStudio + Send + Sync> {
        Box::new(YoutubeStudio {
            auth: StudioAuth::Bearer(access_token.clone()),
            client: self.client.clone(),
            region: self.region.clone(),
        })
    }
}

/// Creates a Youtube studio host.
pub fn new_studio_host(reel_config: &ReelConfig) -> Result<YoutubeStudioHost, Error> {
    YoutubeStudioHost::new(reel_config)
}

enum StudioAuth {
    ApiKey(String),
    Bearer(AccessToken),
}

struct YoutubeStudio {
    auth: StudioAuth,
    client: Client,
    region: String,
}

impl YoutubeStudio {
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, format!("{API_PREFIX}/{path}"));
        match &self.auth {
            StudioAuth::ApiKey(key) => builder.query(&[("key", key.as_str())]),
            StudioAuth::Bearer(token) => builder.bearer_auth(token.as_str()),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, Error> {
        let response = request.send().await.map_err(map_error)?;
        let text = response.text().await.map_err(map_error)?;
        parse_result(&text)
    }

    async fn uploads_playlist(&self) -> Result<String, Error> {
        let request = self
            .request(Method::GET, "channels")
            .query(&[("part", "contentDetails"), ("mine", "true")]);
        let response: ChannelListResponse = self.send(request).await?;
        response
            .items
            .into_iter()
            .next()
            .map(|item| item.content_details.related_playlists.uploads)
            .ok_or_else(|| {
                Error::Http(
                    StatusCode::NOT_FOUND,
                    "channel has no uploads playlist".to_string(),
                )
            })
    }
}

#[async_trait]
impl CloudStudio for YoutubeStudio {
    async fn uploaded_videos(&self) -> Result<Vec<VideoId>, Error> {
        let playlist_id = self.uploads_playlist().await?;
        let request = self
            .request(Method::GET, "playlistItems")
            .query(&[
                ("part", "snippet,contentDetails"),
                ("playlistId", playlist_id.as_str()),
            ])
            .query(&[("maxResults", PAGE_SIZE)]);
        let response: PlaylistItemListResponse = self.send(request).await?;
        Ok(response
            .items
            .into_iter()
            .map(|item| VideoId(item.content_details.video_id))
            .collect())
    }

    async fn video_details(&self, ids: &[VideoId]) -> Result<Vec<Video>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_batch = ids
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let request = self.request(Method::GET, "videos").query(&[
            ("part", "snippet,statistics,contentDetails,status"),
            ("id", id_batch.as_str()),
        ]);
        let response: VideoListResponse = self.send(request).await?;
        Ok(response.items)
    }

    async fn update_video(&self, id: &VideoId, update: VideoUpdate) -> Result<Video, Error> {
        let current = self
            .video_details(std::slice::from_ref(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Http(StatusCode::NOT_FOUND, format!("{id}: not found")))?;
        let resource = update.merged(&current);
        let request = self
            .request(Method::PUT, "videos")
            .query(&[("part", "snippet,status")])
            .json(&resource);
        self.send(request).await
    }

    async fn categories(&self) -> Result<Vec<Category>, Error> {
        let request = self
            .request(Method::GET, "videoCategories")
            .query(&[("part", "snippet"), ("regionCode", self.region.as_str())]);
        let response: Result<CategoryListResponse, Error> = self.send(request).await;
        match response {
            Ok(response) => Ok(response
                .items
                .into_iter()
                .map(|item| Category {
                    id: item.id,
                    title: item.snippet.title,
                })
                .collect()),
            Err(e) => {
                tracing::warn!(error = %e, "category lookup failed, serving built-in list");
                Ok(builtin_categories())
            }
        }
    }
}

fn map_error(e: reqwest::Error) -> Error {
    Error::Http(StatusCode::FAILED_DEPENDENCY, format!("{}", e))
}

fn parse_result<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    match serde_json::from_str(text) {
        Ok(response) => Ok(response),
        Err(_) => {
            #[derive(Deserialize)]
            struct YoutubeErrorItem {
                reason: Option<String>,
            }
            #[derive(Deserialize)]
            struct YoutubeReason {
                message: String,
                #[serde(default)]
                errors: Vec<YoutubeErrorItem>,
            }
            #[derive(Deserialize)]
            struct YoutubeError {
                error: YoutubeReason,
            }
            match serde_json::from_str(text) {
                Ok(YoutubeError {
                    error: YoutubeReason { message, errors },
                }) => {
                    let status = if errors
                        .iter()
                        .any(|e| e.reason.as_deref() == Some("invalidCategoryId"))
                    {
                        StatusCode::UNPROCESSABLE_ENTITY
                    } else {
                        StatusCode::FAILED_DEPENDENCY
                    };
                    Err(Error::Http(status, format!("youtube error: {message}")))
                }
                Err(_) => Err(Error::Http(
                    StatusCode::FAILED_DEPENDENCY,
                    format!("cannot parse youtube response: {text}"),
                )),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemListResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemContentDetails {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryListResponse {
    #[serde(default)]
    items: Vec<CategoryItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryItem {
    id: String,
    snippet: CategorySnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategorySnippet {
    title: String,
}
