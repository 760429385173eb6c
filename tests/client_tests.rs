//! Integration tests for the recommendation client against an in-process
//! stub server standing in for the backend API.

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde_json::{Value, json};

use rs_rag_ui::client::RecommendClient;
use rs_rag_ui::error::ClientError;

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/recommend", addr)
}

#[tokio::test]
async fn test_ask_direct_shape() {
    let app = Router::new().route(
        "/recommend",
        post(|| async {
            Json(json!({
                "answer": "42",
                "keywords": ["a", "b"],
                "num_results": 2,
            }))
        }),
    );
    let endpoint = spawn_stub(app).await;

    let client = RecommendClient::new(&endpoint);
    let rec = client.ask("anything").await.unwrap();

    assert_eq!(rec.answer, "42");
    assert_eq!(rec.keywords, vec!["a", "b"]);
    assert_eq!(rec.num_results, 2);
}

#[tokio::test]
async fn test_ask_wrapped_shape() {
    // Some deployments return the lambda proxy envelope with the payload
    // JSON-encoded in `body`
    let app = Router::new().route(
        "/recommend",
        post(|| async {
            let inner = json!({
                "answer": "42",
                "keywords": ["a", "b"],
                "num_results": 2,
            });
            Json(json!({
                "statusCode": 200,
                "body": inner.to_string(),
            }))
        }),
    );
    let endpoint = spawn_stub(app).await;

    let client = RecommendClient::new(&endpoint);
    let rec = client.ask("anything").await.unwrap();

    assert_eq!(rec.answer, "42");
    assert_eq!(rec.keywords, vec!["a", "b"]);
    assert_eq!(rec.num_results, 2);
}

#[tokio::test]
async fn test_ask_sends_question_field() {
    // The stub echoes the question back as the answer
    let app = Router::new().route(
        "/recommend",
        post(|Json(req): Json<Value>| async move {
            Json(json!({
                "answer": req["question"],
                "keywords": [],
                "num_results": 0,
            }))
        }),
    );
    let endpoint = spawn_stub(app).await;

    let client = RecommendClient::new(&endpoint);
    let rec = client.ask("best hiking boots").await.unwrap();

    assert_eq!(rec.answer, "best hiking boots");
}

#[tokio::test]
async fn test_ask_missing_optional_fields() {
    let app = Router::new().route(
        "/recommend",
        post(|| async { Json(json!({"answer": "bare"})) }),
    );
    let endpoint = spawn_stub(app).await;

    let client = RecommendClient::new(&endpoint);
    let rec = client.ask("anything").await.unwrap();

    assert_eq!(rec.answer, "bare");
    assert!(rec.keywords.is_empty());
    assert_eq!(rec.num_results, 0);
}

#[tokio::test]
async fn test_ask_non_2xx_is_network_error() {
    let app = Router::new().route(
        "/recommend",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "An internal error occurred"})),
            )
        }),
    );
    let endpoint = spawn_stub(app).await;

    let client = RecommendClient::new(&endpoint);
    let err = client.ask("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_ask_error_payload_is_decode_error() {
    // 200 with an error body (no `answer`) fails at the decode boundary
    let app = Router::new().route(
        "/recommend",
        post(|| async { Json(json!({"error": "No question provided"})) }),
    );
    let endpoint = spawn_stub(app).await;

    let client = RecommendClient::new(&endpoint);
    let err = client.ask("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_ask_connection_refused_is_network_error() {
    // Grab a free port and release it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RecommendClient::new(format!("http://{}/recommend", addr));
    let err = client.ask("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
