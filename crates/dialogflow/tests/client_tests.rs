#![allow(clippy::unwrap_used, clippy::expect_used)]
use {
    flowgate_dialogflow::{DialogflowClient, DialogflowError},
    secrecy::Secret,
    serde_json::json,
};

fn token() -> Secret<String> {
    Secret::new("test-access-token".to_string())
}

#[tokio::test]
async fn relays_success_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/v2/projects/demo/agent/sessions/abc:detectIntent",
        )
        .match_header("authorization", "Bearer test-access-token")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"queryResult":{"fulfillmentText":"hi"}}"#)
        .create_async()
        .await;

    let client = DialogflowClient::with_base_url(server.url());
    let body = json!({"queryInput": {"text": {"text": "hello", "languageCode": "en"}}});
    let resp = client
        .detect_intent("demo", "abc", &body, &token())
        .await
        .expect("dispatch should succeed");

    assert_eq!(resp.status.as_u16(), 200);
    assert_eq!(resp.body, json!({"queryResult": {"fulfillmentText": "hi"}}));
    mock.assert_async().await;
}

#[tokio::test]
async fn relays_upstream_error_unchanged() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "POST",
            "/v2/projects/demo/agent/sessions/abc:detectIntent",
        )
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"denied"}"#)
        .create_async()
        .await;

    let client = DialogflowClient::with_base_url(server.url());
    let body = json!({"queryInput": {"text": {"text": "hello", "languageCode": "en"}}});
    let resp = client
        .detect_intent("demo", "abc", &body, &token())
        .await
        .expect("upstream errors are relayed, not raised");

    assert_eq!(resp.status.as_u16(), 403);
    assert_eq!(resp.body, json!({"error": "denied"}));
}

#[tokio::test]
async fn session_id_is_percent_encoded_in_request_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/v2/projects/demo/agent/sessions/a%2Fb%20c:detectIntent",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = DialogflowClient::with_base_url(server.url());
    let body = json!({"queryInput": {"text": {"text": "x", "languageCode": "en"}}});
    client
        .detect_intent("demo", "a/b c", &body, &token())
        .await
        .expect("encoded session id should reach the mock");

    mock.assert_async().await;
}

#[tokio::test]
async fn forwards_request_body_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let expected = json!({"queryInput": {"event": {"name": "WELCOME", "languageCode": "en"}}});
    let mock = server
        .mock("POST", "/v2/projects/demo/agent/sessions/s:detectIntent")
        .match_body(mockito::Matcher::Json(expected.clone()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = DialogflowClient::with_base_url(server.url());
    client
        .detect_intent("demo", "s", &expected, &token())
        .await
        .expect("dispatch should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_upstream_body_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v2/projects/demo/agent/sessions/s:detectIntent")
        .with_status(200)
        .with_body("<html>gateway timeout</html>")
        .create_async()
        .await;

    let client = DialogflowClient::with_base_url(server.url());
    let body = json!({"queryInput": {"text": {"text": "x", "languageCode": "en"}}});
    let err = client
        .detect_intent("demo", "s", &body, &token())
        .await
        .unwrap_err();
    assert!(matches!(err, DialogflowError::Request(_)));
}
