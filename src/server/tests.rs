// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod server_test {
    use crate::common::{
        AccessToken, AuthGrant, AuthenticatedId, Error, Identity, ReelConfig,
    };
    use crate::oauth::OAuthClient;
    use crate::server::{new_router, AppContext, SessionStore};
    use crate::studio::{
        builtin_categories, Category, CloudStudio, StudioHost, Video, VideoId, VideoSnippet,
        VideoStatistics, VideoStatus, VideoUpdate,
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Stands in for the cloud service and records every call, so tests can
    /// verify which upstream operations a request triggered.
    #[derive(Clone, Default)]
    struct RecordingStudio {
        calls: Arc<Mutex<Vec<&'static str>>>,
        last_update: Arc<Mutex<Option<VideoUpdate>>>,
    }

    impl RecordingStudio {
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn sample_video(id: &VideoId) -> Video {
        Video {
            id: id.clone(),
            snippet: VideoSnippet {
                title: format!("Video {id}"),
                description: String::new(),
                tags: Vec::new(),
                category_id: "22".to_string(),
                published_at: None,
            },
            status: VideoStatus {
                privacy_status: "public".to_string(),
            },
            statistics: VideoStatistics::default(),
        }
    }

    #[async_trait]
    impl CloudStudio for RecordingStudio {
        async fn uploaded_videos(&self) -> Result<Vec<VideoId>, Error> {
            self.record("uploaded_videos");
            Ok(vec![
                VideoId("v1".to_string()),
                VideoId("v2".to_string()),
            ])
        }

        async fn video_details(&self, ids: &[VideoId]) -> Result<Vec<Video>, Error> {
            self.record("video_details");
            Ok(ids.iter().map(sample_video).collect())
        }

        async fn update_video(&self, id: &VideoId, update: VideoUpdate) -> Result<Video, Error> {
            self.record("update_video");
            *self.last_update.lock().unwrap() = Some(update);
            Ok(sample_video(id))
        }

        async fn categories(&self) -> Result<Vec<Category>, Error> {
            self.record("categories");
            Ok(builtin_categories())
        }
    }

    impl StudioHost for RecordingStudio {
        fn public(&self) -> Box<dyn CloudStudio + Send + Sync> {
            Box::new(self.clone())
        }

        fn authenticated(&self, _access_token: &AccessToken) -> Box<dyn CloudStudio + Send + Sync> {
            Box::new(self.clone())
        }
    }

    fn test_app(studio: &RecordingStudio) -> (Router, SessionStore) {
        let reel_config = ReelConfig::builder().toml_str("").build().expect("config");
        let sessions = SessionStore::new();
        let context = AppContext {
            oauth: Arc::new(OAuthClient::new(&reel_config)),
            sessions: sessions.clone(),
            studio: Arc::new(studio.clone()),
        };
        (new_router(context), sessions)
    }

    fn signed_in(sessions: &SessionStore) -> String {
        let session_id = sessions.insert(AuthGrant {
            identity: Identity {
                login_id: AuthenticatedId("google/1".to_string()),
                user_name: None,
            },
            access_token: AccessToken("token".to_string()),
        });
        format!("reel_session={session_id}")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn list_requires_authentication() {
        let studio = RecordingStudio::default();
        let (app, _sessions) = test_app(&studio);

        let request = Request::builder()
            .uri("/api/videos")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Not authenticated");
        assert!(studio.calls().is_empty());
    }

    #[tokio::test]
    async fn update_requires_authentication() {
        let studio = RecordingStudio::default();
        let (app, _sessions) = test_app(&studio);

        let body = serde_json::json!({
            "videoId": "v1",
            "updates": {"snippet": {"title": "New title"}},
        });
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/api/videos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(studio.calls().is_empty());
    }

    #[tokio::test]
    async fn list_returns_the_catalog_in_order() {
        let studio = RecordingStudio::default();
        let (app, sessions) = test_app(&studio);

        let request = Request::builder()
            .uri("/api/videos")
            .header(header::COOKIE, signed_in(&sessions))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let videos = body["videos"].as_array().expect("videos");
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0]["id"], "v1");
        assert_eq!(videos[1]["id"], "v2");
        assert_eq!(studio.calls(), vec!["uploaded_videos", "video_details"]);
    }

    #[tokio::test]
    async fn update_forwards_the_change_set() {
        let studio = RecordingStudio::default();
        let (app, sessions) = test_app(&studio);

        let body = serde_json::json!({
            "videoId": "v1",
            "updates": {"snippet": {"title": "New title"}},
        });
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/api/videos")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::COOKIE, signed_in(&sessions))
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["video"]["id"], "v1");
        assert_eq!(studio.calls(), vec!["update_video"]);
        let update = studio.last_update.lock().unwrap().clone().expect("update");
        assert_eq!(
            update.snippet.expect("snippet").title.as_deref(),
            Some("New title")
        );
    }

    #[tokio::test]
    async fn categories_are_a_public_read() {
        let studio = RecordingStudio::default();
        let (app, _sessions) = test_app(&studio);

        let request = Request::builder()
            .uri("/api/categories")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["categories"].as_array().expect("categories").len(),
            builtin_categories().len()
        );
        assert_eq!(studio.calls(), vec!["categories"]);
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let studio = RecordingStudio::default();
        let (app, sessions) = test_app(&studio);

        let cookie = signed_in(&sessions);
        let session_id = crate::server::SessionId(
            cookie.trim_start_matches("reel_session=").to_string(),
        );
        assert!(sessions.get(&session_id).is_some());

        let request = Request::builder()
            .uri("/auth/logout")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(sessions.get(&session_id).is_none());
    }
}
