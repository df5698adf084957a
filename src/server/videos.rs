// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::router::AppContext;
use crate::common::{create_error_response, Error};
use crate::studio::{Category, CloudStudio, StudioHost, Video, VideoId, VideoUpdate};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct VideoList {
    videos: Vec<Video>,
}

#[derive(Serialize)]
struct UpdatedVideo {
    video: Video,
}

#[derive(Serialize)]
struct CategoryList {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateRequest {
    video_id: VideoId,
    updates: VideoUpdate,
}

/// `GET /api/videos`: the signed-in user's catalog with full details.
pub(crate) async fn list_videos(
    State(context): State<AppContext>,
    headers: HeaderMap,
) -> Response {
    let Some(grant) = context.sessions.grant_for(&headers) else {
        return create_error_response(StatusCode::UNAUTHORIZED, "Not authenticated".to_string());
    };
    let studio = context.studio.authenticated(&grant.access_token);
    let details = match studio.uploaded_videos().await {
        Ok(ids) => studio.video_details(&ids).await,
        Err(e) => Err(e),
    };
    match details {
        Ok(videos) => Json(VideoList { videos }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "video list failed");
            create_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch videos".to_string(),
            )
        }
    }
}

/// `PUT /api/videos`: merge a change set onto one video and submit it.
pub(crate) async fn update_video(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Json(request): Json<UpdateRequest>,
) -> Response {
    let Some(grant) = context.sessions.grant_for(&headers) else {
        return create_error_response(StatusCode::UNAUTHORIZED, "Not authenticated".to_string());
    };
    let studio = context.studio.authenticated(&grant.access_token);
    match studio.update_video(&request.video_id, request.updates).await {
        Ok(video) => Json(UpdatedVideo { video }).into_response(),
        Err(e) => {
            tracing::error!(video_id = %request.video_id, error = %e, "video update failed");
            let message = match &e {
                Error::Http(status, _) if *status == StatusCode::NOT_FOUND => "Video not found",
                Error::Http(status, _) if *status == StatusCode::UNPROCESSABLE_ENTITY => {
                    "Invalid video category"
                }
                _ => "Failed to update video",
            };
            create_error_response(StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
        }
    }
}

/// `GET /api/categories`: region-scoped category list; a public read.
pub(crate) async fn list_categories(State(context): State<AppContext>) -> Response {
    match context.studio.public().categories().await {
        Ok(categories) => Json(CategoryList { categories }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "category list failed");
            create_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch categories".to_string(),
            )
        }
    }
}
