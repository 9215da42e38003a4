//! End-to-end: `Installations` over `RestTransport` against a mock API.

use std::sync::Arc;

use hubkit_apps::models::{self, InstallationToken, RepositoryList};
use hubkit_apps::{AppsError, Installations};
use hubkit_transport::{RestTransport, TransportConfig, TransportError};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};

const PREVIEW: &str = "application/vnd.github.machine-man-preview+json";
const V3: &str = "application/vnd.github.v3+json";

fn installations(server: &ServerGuard) -> anyhow::Result<Installations> {
    let config = TransportConfig {
        base_url: server.url(),
        token: Some("jwt-or-token".to_string()),
        ..TransportConfig::default()
    };
    Ok(Installations::new(Arc::new(RestTransport::new(&config)?)))
}

#[tokio::test]
async fn test_create_installation_token_round_trip() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/app/installations/42/access_tokens")
        .match_header("accept", PREVIEW)
        .match_header("authorization", "Bearer jwt-or-token")
        .match_body(Matcher::Json(json!({"user_id": 7})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token": "v1.1f699f1069f60xxx", "expires_at": "2016-07-11T22:14:10Z"}"#)
        .create_async()
        .await;

    let body = installations(&server)?
        .create_installation_token(42u64, Some(7))
        .await?;
    let token: InstallationToken = models::from_body(body)?;

    assert_eq!(token.token, "v1.1f699f1069f60xxx");
    assert_eq!(token.expires_at, "2016-07-11T22:14:10Z");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_token_without_user_sends_no_body() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/app/installations/42/access_tokens")
        .match_header("accept", PREVIEW)
        .match_body("")
        .with_status(201)
        .with_body(r#"{"token": "t", "expires_at": "2016-07-11T22:14:10Z"}"#)
        .create_async()
        .await;

    installations(&server)?
        .create_installation_token(42u64, None)
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_list_repositories_with_user_query() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/installation/repositories")
        .match_query(Matcher::UrlEncoded("user_id".into(), "7".into()))
        .match_header("accept", PREVIEW)
        .with_status(200)
        .with_body(
            r#"{"total_count": 1, "repositories": [{"id": 1, "name": "r", "full_name": "o/r", "private": true}]}"#,
        )
        .create_async()
        .await;

    let body = installations(&server)?.list_repositories(Some(7)).await?;
    let list: RepositoryList = models::from_body(body)?;

    assert_eq!(list.total_count, 1);
    assert!(list.repositories[0].private);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_plain_get_keeps_default_accept() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/app/installations/42")
        .match_header("accept", V3)
        .with_status(200)
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    let body = installations(&server)?.get_installation(42u64).await?;

    assert_eq!(body["id"], 42);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_encoded_repo_name_reaches_server_escaped() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/octocat/a%2Fb/installation")
        .with_status(200)
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;

    installations(&server)?
        .get_installation_for_repo("octocat", "a/b")
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_remove_repository_no_content() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/installations/1/repositories/2")
        .match_header("accept", PREVIEW)
        .with_status(204)
        .create_async()
        .await;

    let body = installations(&server)?.remove_repository(1u64, 2u64).await?;

    assert_eq!(body, Value::Null);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_not_found_propagates_unchanged() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/users/ghost/installation")
        .with_status(404)
        .with_body(r#"{"message": "Not Found", "documentation_url": "https://docs.github.com"}"#)
        .create_async()
        .await;

    let err = installations(&server)?
        .get_installation_for_user("ghost")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppsError::Transport(TransportError::Status { status: 404, message: Some(ref m) }) if m == "Not Found"
    ));
    Ok(())
}
