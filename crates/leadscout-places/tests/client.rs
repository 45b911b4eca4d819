//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use leadscout_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 10, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn text_search_returns_candidates_in_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "pid-1",
                "name": "Maria's Tacos",
                "formatted_address": "101 Congress Ave, Austin, TX"
            },
            {
                "place_id": "pid-2",
                "name": "Smoke Shack BBQ"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "restaurants in Austin, TX"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .text_search("restaurants in Austin, TX")
        .await
        .expect("should parse search results");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].place_id, "pid-1");
    assert_eq!(results[0].name.as_deref(), Some("Maria's Tacos"));
    assert_eq!(results[1].place_id, "pid-2");
    assert!(results[1].formatted_address.is_none());
}

#[tokio::test]
async fn text_search_surfaces_non_ok_status() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "error_message": "You have exceeded your daily request quota.",
        "results": []
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .text_search("restaurants in Austin, TX")
        .await
        .expect_err("non-OK status should error");

    match err {
        PlacesError::Status { status, message } => {
            assert_eq!(status, "OVER_QUERY_LIMIT");
            assert_eq!(
                message.as_deref(),
                Some("You have exceeded your daily request quota.")
            );
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn place_details_returns_parsed_detail() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Maria's Tacos",
            "formatted_address": "101 Congress Ave, Austin, TX",
            "formatted_phone_number": "(512) 555-0142",
            "rating": 4.6,
            "user_ratings_total": 230,
            "types": ["restaurant", "food", "point_of_interest"],
            "opening_hours": { "open_now": true }
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "pid-1"))
        .and(query_param("fields", "name,website,rating"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .place_details("pid-1", &["name", "website", "rating"])
        .await
        .expect("should parse detail");

    assert_eq!(detail.name.as_deref(), Some("Maria's Tacos"));
    assert!(detail.website().is_none());
    assert!((detail.rating - 4.6).abs() < 1e-9);
    assert_eq!(detail.user_ratings_total, 230);
    assert_eq!(detail.types.len(), 3);
    assert_eq!(detail.open_now(), Some(true));
}

#[tokio::test]
async fn place_details_not_found_is_a_status_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "NOT_FOUND" });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .place_details("gone", &["name"])
        .await
        .expect_err("NOT_FOUND should error");

    assert!(matches!(err, PlacesError::Status { ref status, .. } if status == "NOT_FOUND"));
}

#[tokio::test]
async fn http_level_failure_maps_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .text_search("anything")
        .await
        .expect_err("500 should error");

    assert!(matches!(err, PlacesError::Http(_)));
}
