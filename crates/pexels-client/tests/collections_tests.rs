// SPDX-License-Identifier: GPL-3.0-or-later

use pexels_client::{MediaItem, MediaKind, MediaQuery, Pagination, PexelsClient, SortOrder};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "collections-key";

fn client_for(server: &MockServer) -> PexelsClient {
    PexelsClient::builder(API_KEY)
        .collection_base_url(format!("{}/v1/collections/", server.uri()))
        .build()
        .unwrap()
}

fn collections_page() -> serde_json::Value {
    json!({
        "collections": [
            {
                "id": "9mp14cx",
                "title": "Cool Cats",
                "description": null,
                "private": false,
                "media_count": 6,
                "photos_count": 5,
                "videos_count": 1
            },
            {
                "id": "5qa21sj",
                "title": "Elephants",
                "description": "Big and grey",
                "private": true,
                "media_count": 12,
                "photos_count": 12,
                "videos_count": 0
            }
        ],
        "page": 1,
        "per_page": 2,
        "total_results": 8,
        "next_page": "https://api.pexels.com/v1/collections/?page=2&per_page=2"
    })
}

#[tokio::test]
async fn test_all_collections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .and(header("authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(collections_page()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .collections()
        .all(Pagination::new().page(1).per_page(2))
        .await
        .unwrap();

    assert_eq!(response.collections.len(), 2);
    assert_eq!(response.collections[0].title, "Cool Cats");
    assert_eq!(response.collections[0].description, None);
    assert_eq!(
        response.collections[1].description.as_deref(),
        Some("Big and grey")
    );
    assert!(response.collections[1].private);
    assert!(response.prev_page.is_none());
    assert!(response.next_page.is_some());
}

#[tokio::test]
async fn test_all_collections_without_pagination_sends_no_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("per_page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collections_page()))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .collections()
        .all(Pagination::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_featured_collections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/featured"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collections_page()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .collections()
        .featured(Pagination::new().per_page(1))
        .await
        .unwrap();

    assert_eq!(response.total_results, 8);
}

#[tokio::test]
async fn test_collection_media_mixed_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/5qa21sj"))
        .and(query_param("sort", "desc"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "5"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5qa21sj",
            "media": [
                {
                    "type": "Photo",
                    "id": 4148015,
                    "width": 3456,
                    "height": 5184,
                    "url": "https://www.pexels.com/photo/4148015/",
                    "photographer": "Anna Shvets",
                    "photographer_url": "https://www.pexels.com/@shvetsa",
                    "photographer_id": 2331,
                    "avg_color": "#6F6E67",
                    "src": {"original": "https://images.pexels.com/photos/4148015/original.jpeg"},
                    "liked": false,
                    "alt": ""
                },
                {
                    "type": "Video",
                    "id": 2499611,
                    "width": 1080,
                    "height": 1920,
                    "url": "https://www.pexels.com/video/2499611/",
                    "image": "https://images.pexels.com/videos/2499611/preview.jpeg",
                    "duration": 22,
                    "user": {"id": 680589, "name": "Joey Farina", "url": "https://www.pexels.com/@joey"},
                    "video_files": [],
                    "video_pictures": []
                }
            ],
            "page": 1,
            "per_page": 5,
            "total_results": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = MediaQuery::new("5qa21sj")
        .sort(SortOrder::Desc)
        .page(1)
        .per_page(5);
    let response = client_for(&server)
        .collections()
        .media(&query)
        .await
        .unwrap();

    assert_eq!(response.id, "5qa21sj");
    assert_eq!(response.media.len(), 2);

    match &response.media[0] {
        MediaItem::Photo(photo) => assert_eq!(photo.photographer, "Anna Shvets"),
        other => panic!("expected a photo, got {:?}", other),
    }
    match &response.media[1] {
        MediaItem::Video(video) => assert_eq!(video.user.name, "Joey Farina"),
        other => panic!("expected a video, got {:?}", other),
    }

    let tags: Vec<&str> = response.media.iter().map(MediaItem::type_tag).collect();
    assert_eq!(tags, ["Photo", "Video"]);
    let ids: Vec<u64> = response.media.iter().map(MediaItem::id).collect();
    assert_eq!(ids, [4148015, 2499611]);
}

#[tokio::test]
async fn test_collection_media_filtered_by_kind() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/9mp14cx"))
        .and(query_param("type", "videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9mp14cx",
            "media": [],
            "page": 1,
            "per_page": 15,
            "total_results": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .collections()
        .media(&MediaQuery::new("9mp14cx").kind(MediaKind::Videos))
        .await
        .unwrap();

    assert!(response.media.is_empty());
}

#[tokio::test]
async fn test_collection_id_is_escaped_as_one_path_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/a%2Fb%3Fc%23d"))
        .and(query_param("type", "photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a/b?c#d",
            "media": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .collections()
        .media(&MediaQuery::new("a/b?c#d").kind(MediaKind::Photos))
        .await
        .unwrap();

    assert_eq!(response.id, "a/b?c#d");
}

#[tokio::test]
async fn test_collection_media_unknown_item_type_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/9mp14cx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9mp14cx",
            "media": [{"type": "Audio", "id": 1}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .collections()
        .media(&MediaQuery::new("9mp14cx"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().contains("unmarshaling media response"));
}

#[tokio::test]
async fn test_collection_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/featured"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .collections()
        .featured(Pagination::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
}
