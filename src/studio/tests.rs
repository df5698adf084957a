// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod studio_test {
    use crate::common::ReelConfig;
    use crate::studio::{
        builtin_categories, CloudStudio, StudioHost, Video, VideoId, VideoSnippet,
        VideoStatistics, VideoStatus, VideoUpdate, YoutubeStudioHost, DEFAULT_CATEGORY_ID,
    };

    fn current_video() -> Video {
        Video {
            id: VideoId("v1".to_string()),
            snippet: VideoSnippet {
                title: "Old title".to_string(),
                description: "Old description".to_string(),
                tags: vec!["old".to_string(), "tags".to_string()],
                category_id: "10".to_string(),
                published_at: None,
            },
            status: VideoStatus {
                privacy_status: "private".to_string(),
            },
            statistics: VideoStatistics::default(),
        }
    }

    fn update_from(value: serde_json::Value) -> VideoUpdate {
        serde_json::from_value(value).expect("update")
    }

    #[test]
    fn title_only_update_preserves_untouched_fields() {
        let update = update_from(serde_json::json!({"snippet": {"title": "New title"}}));
        let resource = update.merged(&current_video());
        assert_eq!(resource.snippet.title, "New title");
        assert_eq!(resource.snippet.description, "Old description");
        assert_eq!(resource.snippet.tags, vec!["old", "tags"]);
        assert_eq!(resource.snippet.category_id, "10");
        assert_eq!(resource.status.privacy_status, "private");
    }

    #[test]
    fn supplied_tags_fully_replace_prior_tags() {
        let update = update_from(serde_json::json!({"snippet": {"tags": ["fresh"]}}));
        let resource = update.merged(&current_video());
        assert_eq!(resource.snippet.tags, vec!["fresh"]);
    }

    #[test]
    fn flat_and_nested_updates_submit_identical_payloads() {
        let flat = update_from(serde_json::json!({
            "title": "New title",
            "tags": ["one", "two"],
        }));
        let nested = update_from(serde_json::json!({
            "snippet": {"title": "New title", "tags": ["one", "two"]},
        }));
        let current = current_video();
        assert_eq!(flat.merged(&current), nested.merged(&current));
    }

    #[test]
    fn flat_privacy_maps_onto_the_status_group() {
        let flat = update_from(serde_json::json!({"privacyStatus": "public"}));
        let nested = update_from(serde_json::json!({"status": {"privacyStatus": "public"}}));
        let current = current_video();
        assert_eq!(flat.merged(&current), nested.merged(&current));
    }

    #[test]
    fn unknown_category_is_replaced_by_default() {
        let update = update_from(serde_json::json!({"categoryId": "9999"}));
        let resource = update.merged(&current_video());
        assert_eq!(resource.snippet.category_id, DEFAULT_CATEGORY_ID);
    }

    #[test]
    fn allowed_category_is_submitted_unchanged() {
        let update = update_from(serde_json::json!({"categoryId": "27"}));
        let resource = update.merged(&current_video());
        assert_eq!(resource.snippet.category_id, "27");
    }

    #[test]
    fn untouched_category_is_not_validated() {
        // "18" is valid on the service but outside the built-in list; an
        // update that never mentions the category must not rewrite it.
        let mut current = current_video();
        current.snippet.category_id = "18".to_string();
        let update = update_from(serde_json::json!({"title": "New title"}));
        let resource = update.merged(&current);
        assert_eq!(resource.snippet.category_id, "18");
    }

    #[test]
    fn submitted_payload_uses_the_wire_shape() {
        let update = update_from(serde_json::json!({"snippet": {"tags": []}}));
        let resource = update.merged(&current_video());
        let value = serde_json::to_value(&resource).expect("resource");
        let snippet = value.get("snippet").expect("snippet");
        assert!(snippet.get("categoryId").is_some());
        // An empty tags list is omitted entirely.
        assert!(snippet.get("tags").is_none());
        assert!(value
            .get("status")
            .and_then(|status| status.get("privacyStatus"))
            .is_some());
    }

    #[test]
    fn builtin_categories_cover_the_common_ids() {
        let categories = builtin_categories();
        let ids: Vec<&str> = categories
            .iter()
            .map(|category| category.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "1", "2", "10", "15", "17", "19", "20", "22", "23", "24", "25", "26", "27", "28"
            ]
        );
    }

    #[tokio::test]
    async fn categories_fall_back_when_the_upstream_call_fails() {
        let secrets_toml = r#"
            [youtube]
            api_key = "TBD"
        "#;
        let reel_config = ReelConfig::builder()
            .toml_str(secrets_toml)
            .build()
            .expect("studio_test.toml");
        let host = YoutubeStudioHost::new(&reel_config).expect("studio host");
        // The placeholder key is rejected upstream (or the call cannot be
        // made at all), so the built-in list is served either way.
        let categories = host.public().categories().await.expect("categories");
        assert_eq!(categories, builtin_categories());
    }
}
