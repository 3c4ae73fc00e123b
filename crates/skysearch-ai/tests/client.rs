//! Integration tests for `QueryParserClient` using wiremock HTTP mocks.

use skysearch_ai::{ParseError, QueryParserClient};
use skysearch_core::{CabinClass, StopsFilter, TimeOfDay};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> QueryParserClient {
    QueryParserClient::new(base_url, 30, "skysearch-tests/0.1", None, 3)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn parse_query_returns_intent() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "has_destination": true,
        "destination_code": "NRT",
        "destination_city": "Tokyo",
        "departure_code": "HKG",
        "date": "2024-06-02",
        "time_preference": "morning",
        "passengers": 2,
        "cabin_class": "business",
        "stops": "nonstop",
        "airlines": ["CX"]
    });

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .and(body_partial_json(
            serde_json::json!({"query": "fly to Tokyo"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let intent = client
        .parse_query("fly to Tokyo")
        .await
        .expect("should parse intent");

    assert!(intent.has_destination);
    assert_eq!(intent.destination_code, "NRT");
    assert_eq!(intent.departure_code, "HKG");
    assert_eq!(intent.date.as_deref(), Some("2024-06-02"));
    assert_eq!(intent.time_preference, TimeOfDay::Morning);
    assert_eq!(intent.passengers, 2);
    assert_eq!(intent.cabin_class, CabinClass::Business);
    assert_eq!(intent.stops, StopsFilter::Nonstop);
    assert_eq!(intent.airlines, vec!["CX"]);
}

#[tokio::test]
async fn sparse_intent_gets_defaults() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "has_destination": true,
        "destination_code": "CDG"
    });

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let intent = client.parse_query("paris").await.expect("should parse");

    assert_eq!(intent.destination_code, "CDG");
    assert_eq!(intent.departure_code, "");
    assert_eq!(intent.time_preference, TimeOfDay::Any);
    assert_eq!(intent.passengers, 1);
}

#[tokio::test]
async fn truncated_responses_are_retried_then_succeed() {
    let server = MockServer::start().await;

    let truncated = serde_json::json!({
        "status": "error",
        "error": {"code": "truncated", "message": "model output cut off"}
    });
    let ok = serde_json::json!({
        "status": "ok",
        "has_destination": true,
        "destination_code": "NRT"
    });

    // First two attempts come back truncated, the third parses cleanly.
    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&truncated))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ok))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let intent = client
        .parse_query("fly to Tokyo")
        .await
        .expect("third attempt should succeed");
    assert_eq!(intent.destination_code, "NRT");
}

#[tokio::test]
async fn truncation_on_every_attempt_exhausts_the_budget() {
    let server = MockServer::start().await;

    let truncated = serde_json::json!({
        "status": "error",
        "error": {"code": "truncated", "message": "model output cut off"}
    });

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&truncated))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.parse_query("fly to Tokyo").await;
    assert!(matches!(result, Err(ParseError::Truncated)));
}

#[tokio::test]
async fn non_truncation_error_is_not_retried() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "error": {"code": "unparseable", "message": "query made no sense"}
    });

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.parse_query("???").await;

    match result {
        Err(ParseError::Api(msg)) => assert_eq!(msg, "query made no sense"),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn http_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.parse_query("fly to Tokyo").await;
    assert!(matches!(result, Err(ParseError::Http(_))));
}

#[tokio::test]
async fn garbage_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.parse_query("fly to Tokyo").await;
    assert!(matches!(result, Err(ParseError::Deserialize { .. })));
}

#[tokio::test]
async fn api_key_is_sent_as_bearer_token() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "has_destination": true,
        "destination_code": "NRT"
    });

    Mock::given(method("POST"))
        .and(path("/v1/ai/parse-query"))
        .and(wiremock::matchers::header(
            "authorization",
            "Bearer parser-key",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = QueryParserClient::new(
        &server.uri(),
        30,
        "skysearch-tests/0.1",
        Some("parser-key"),
        3,
    )
    .expect("client construction should not fail");
    client
        .parse_query("fly to Tokyo")
        .await
        .expect("authenticated request should succeed");
}
