use std::collections::BTreeMap;

use pc_remote::db::{CommandProfile, Method};
use pc_remote::exec::{normalize_base_address, DispatchClient, Outcome};
use serde_json::json;
use tokio::sync::oneshot;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_normalize_base_address() {
    assert_eq!(normalize_base_address("192.168.1.5:8090"), "http://192.168.1.5:8090");
    assert_eq!(normalize_base_address("http://pc.local:8090"), "http://pc.local:8090");
    assert_eq!(normalize_base_address("https://pc.local"), "https://pc.local");
}

#[test]
fn test_set_base_address() {
    let mut client = DispatchClient::default();
    client.set_base_address("192.168.1.5:8090");
    assert_eq!(client.base_address(), "http://192.168.1.5:8090");
    assert_eq!(client.url_for("/api/volume/up"), "http://192.168.1.5:8090/api/volume/up");
}

#[test]
fn test_post_request_uses_json_body() {
    let client = DispatchClient::new("192.168.1.5:8090");
    let request = client
        .build_request("/api/app/launch", Method::Post, &params(&[("path", "chrome.exe")]))
        .build()
        .unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(request.url().as_str(), "http://192.168.1.5:8090/api/app/launch");
    assert_eq!(
        request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(body, br#"{"path":"chrome.exe"}"#);
}

#[test]
fn test_post_without_parameters_sends_empty_object() {
    let client = DispatchClient::new("192.168.1.5:8090");
    let request = client
        .build_request("/api/system/lock", Method::Post, &BTreeMap::new())
        .build()
        .unwrap();
    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(body, b"{}");
}

#[test]
fn test_get_request_uses_query_string() {
    let client = DispatchClient::new("192.168.1.5:8090");
    let request = client
        .build_request("/api/app/launch", Method::Get, &params(&[("path", "chrome.exe")]))
        .build()
        .unwrap();

    assert_eq!(request.method(), reqwest::Method::GET);
    assert_eq!(request.url().query(), Some("path=chrome.exe"));
    assert!(request.body().is_none());
}

#[test]
fn test_get_without_parameters_has_no_query() {
    let client = DispatchClient::new("192.168.1.5:8090");
    let request = client
        .build_request("/api/volume/up", Method::Get, &BTreeMap::new())
        .build()
        .unwrap();
    assert_eq!(request.url().as_str(), "http://192.168.1.5:8090/api/volume/up");
}

#[test]
fn test_query_values_are_encoded() {
    let client = DispatchClient::new("192.168.1.5:8090");
    let request = client
        .build_request("/api/app/kill", Method::Get, &params(&[("name", "a&b=c")]))
        .build()
        .unwrap();
    let pairs: Vec<_> = request.url().query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("name".to_string(), "a&b=c".to_string())]);
}

#[test]
fn test_outcome_from_response() {
    assert_eq!(
        Outcome::from_response(200, r#"{"success": false, "message": "busy"}"#),
        Outcome::new(false, "busy")
    );
    assert_eq!(
        Outcome::from_response(200, r#"{"success": true, "message": "done"}"#),
        Outcome::new(true, "done")
    );
    assert_eq!(Outcome::from_response(200, "{}"), Outcome::new(true, "operation complete"));
    assert_eq!(
        Outcome::from_response(201, r#"{"message": "created"}"#),
        Outcome::new(true, "created")
    );
}

#[test]
fn test_outcome_server_error_ignores_body() {
    let outcome = Outcome::from_response(500, r#"{"success": true, "message": "fine"}"#);
    assert_eq!(outcome, Outcome::new(false, "server error: 500"));

    let outcome = Outcome::from_response(404, "not json at all");
    assert_eq!(outcome.message, "server error: 404");
}

#[test]
fn test_outcome_parse_error() {
    let outcome = Outcome::from_response(200, "<html>oops</html>");
    assert!(!outcome.ok);
    assert!(outcome.message.starts_with("response parse error: "));

    let outcome = Outcome::from_response(200, "[1, 2]");
    assert!(!outcome.ok);
    assert!(outcome.message.starts_with("response parse error: "));
}

#[test]
fn test_user_message() {
    assert_eq!(Outcome::new(true, "ignored").user_message("Volume raised"), "Volume raised");
    assert_eq!(Outcome::new(false, "busy").user_message("Volume raised"), "error: busy");
}

#[tokio::test]
async fn test_dispatch_post_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/app/launch"))
        .and(body_json(json!({"path": "chrome.exe"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "launched"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    let profile = CommandProfile::new("Chrome", "/api/app/launch", Method::Post)
        .with_parameter("path", "chrome.exe");
    let outcome = client.execute(&profile).await;

    assert_eq!(outcome, Outcome::new(true, "launched"));
}

#[tokio::test]
async fn test_dispatch_get_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/volume/up"))
        .and(query_param("steps", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    let outcome = client
        .send("/api/volume/up", Method::Get, &params(&[("steps", "5")]))
        .await;

    assert_eq!(outcome, Outcome::new(true, "operation complete"));
}

#[tokio::test]
async fn test_dispatch_reports_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/info"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    let outcome = client.send("/api/system/info", Method::Get, &BTreeMap::new()).await;

    assert_eq!(outcome, Outcome::new(false, "server error: 500"));
}

#[tokio::test]
async fn test_dispatch_reports_busy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/system/shutdown"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "busy"})),
        )
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    let outcome = client
        .send("/api/system/shutdown", Method::Post, &params(&[("force", "true")]))
        .await;

    assert_eq!(outcome, Outcome::new(false, "busy"));
}

#[tokio::test]
async fn test_dispatch_network_error() {
    // Nothing listens on port 1
    let client = DispatchClient::new("127.0.0.1:1");
    let outcome = client.send("/api/test", Method::Get, &BTreeMap::new()).await;

    assert!(!outcome.ok);
    assert!(outcome.message.starts_with("network error: "), "{}", outcome.message);
}

#[tokio::test]
async fn test_dispatch_invalid_address_is_network_error() {
    let client = DispatchClient::new("not a host:port");
    let outcome = client.send("/api/test", Method::Get, &BTreeMap::new()).await;

    assert!(!outcome.ok);
    assert!(outcome.message.starts_with("network error: "), "{}", outcome.message);
}

#[tokio::test]
async fn test_connection_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "pong"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    assert_eq!(client.test_connection().await, Outcome::new(true, "pong"));
}

#[tokio::test]
async fn test_spawned_dispatches_resolve_once_each() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/media/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "next"})))
        .expect(5)
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    let handles: Vec<_> = (0..5)
        .map(|_| client.spawn_send("/api/media/next", Method::Get, BTreeMap::new()))
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Outcome::new(true, "next"));
    }
}

#[tokio::test]
async fn test_callback_receives_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/volume/up"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "up"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DispatchClient::new(&server.uri());
    let (tx, rx) = oneshot::channel();
    let handle = client.send_with_callback(
        "/api/volume/up",
        Method::Post,
        params(&[("steps", "5")]),
        move |outcome| {
            let _ = tx.send(outcome);
        },
    );

    handle.await.unwrap();
    assert_eq!(rx.await.unwrap(), Outcome::new(true, "up"));
}
