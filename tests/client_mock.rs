//! HTTP-level tests for the dispatch pipeline against a mock server.

use mockito::Matcher;
use serde_json::json;

use botwire::methods::{GetMe, GetUpdates, SendMessage};
use botwire::transport::TransportError;
use botwire::{BotClient, Error};

const TOKEN: &str = "123456:TESTTOKEN";

async fn client_for(server: &mockito::ServerGuard) -> BotClient {
    BotClient::builder()
        .token(TOKEN)
        .api_root(&server.url())
        .expect("mock server URL must parse")
        .build()
        .expect("client must build")
}

#[tokio::test]
async fn success_result_resolves_unmodified() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TOKEN}/getMe").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ok": true,
                "result": {"id": 42, "is_bot": true, "first_name": "wire", "username": "wirebot"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let me = client_for(&server).await.call(&GetMe {}).await.unwrap();
    assert_eq!(me.id, 42);
    assert_eq!(me.username.as_deref(), Some("wirebot"));
    mock.assert_async().await;
}

#[tokio::test]
async fn request_body_is_the_serialized_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TOKEN}/sendMessage").as_str())
        .match_header(
            "x-client-request-id",
            Matcher::Regex("^[0-9a-f-]{36}$".to_string()),
        )
        .match_body(Matcher::Json(json!({"chat_id": 7, "text": "hello"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ok": true,
                "result": {
                    "message_id": 9,
                    "chat": {"id": 7, "type": "private"},
                    "date": 1700000000,
                    "text": "hello"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let sent = client_for(&server)
        .await
        .call(&SendMessage::new(7, "hello"))
        .await
        .unwrap();
    assert_eq!(sent.message_id, 9);
    assert_eq!(sent.text(), Some("hello"));
    mock.assert_async().await;
}

#[tokio::test]
async fn failure_envelope_preserves_code_description_and_parameters() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", format!("/bot{TOKEN}/getUpdates").as_str())
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 5",
                "parameters": {"retry_after": 5}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let outcome = client_for(&server)
        .await
        .call(&GetUpdates::default())
        .await;
    match outcome {
        Err(Error::Api(err)) => {
            assert_eq!(err.code, 429);
            assert_eq!(err.description, "Too Many Requests: retry after 5");
            assert_eq!(err.parameters.unwrap().retry_after, Some(5));
            assert!(err.is_retryable());
        }
        other => unreachable!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", format!("/bot{TOKEN}/getMe").as_str())
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let outcome = client_for(&server).await.call(&GetMe {}).await;
    assert!(matches!(
        outcome,
        Err(Error::Transport(TransportError::Http(_)))
    ));
}

#[tokio::test]
async fn json_body_without_envelope_shape_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", format!("/bot{TOKEN}/getMe").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ok": false}).to_string())
        .create_async()
        .await;

    let outcome = client_for(&server).await.call(&GetMe {}).await;
    assert!(matches!(
        outcome,
        Err(Error::Transport(TransportError::Envelope(_)))
    ));
}

#[tokio::test]
async fn result_shape_mismatch_is_a_decode_error_naming_the_method() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", format!("/bot{TOKEN}/getMe").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ok": true, "result": [1, 2, 3]}).to_string())
        .create_async()
        .await;

    let outcome = client_for(&server).await.call(&GetMe {}).await;
    match outcome {
        Err(Error::Transport(TransportError::Decode { method, .. })) => {
            assert_eq!(method, "getMe");
        }
        other => unreachable!("expected decode error, got {other:?}"),
    }
}
