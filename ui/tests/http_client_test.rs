use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use signup_ui::features::signup::{submit_sign_up, SignUpAction, SignUpRequest};
use signup_ui::services::client::{HttpSignUpClient, SignUpClient};
use signup_ui::services::config::ApiConfig;
use signup_ui::services::errors::ClientError;

fn user1() -> SignUpRequest {
    SignUpRequest {
        username: "user1".to_string(),
        email: "user1@mail.com".to_string(),
        password: "P4ssword".to_string(),
    }
}

/// The users endpoint receives exactly the three public fields as JSON
#[tokio::test]
async fn test_posts_username_email_and_password() -> Result<()> {
    let server = MockServer::start_async().await;
    let users_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/1.0/users").json_body(json!({
                "username": "user1",
                "email": "user1@mail.com",
                "password": "P4ssword"
            }));
            then.status(200);
        })
        .await;

    let client = HttpSignUpClient::new(ApiConfig::default().with_base_url(server.base_url()))?;
    client.sign_up(&user1()).await?;

    users_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_any_2xx_is_success_and_body_is_ignored() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/1.0/users");
            then.status(201).body("not json at all");
        })
        .await;

    let client = HttpSignUpClient::new(ApiConfig::default().with_base_url(server.base_url()))?;
    let action = submit_sign_up(&client, user1()).await;

    assert_eq!(action, SignUpAction::SubmitSucceeded);
    Ok(())
}

#[tokio::test]
async fn test_error_status_becomes_client_error() -> Result<()> {
    let server = MockServer::start_async().await;
    let users_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/1.0/users");
            then.status(400).body("username already in use");
        })
        .await;

    let client = HttpSignUpClient::new(ApiConfig::default().with_base_url(server.base_url()))?;
    let error = client.sign_up(&user1()).await.unwrap_err();

    assert_eq!(
        error,
        ClientError::Status {
            status: 400,
            body: "username already in use".to_string()
        }
    );
    assert_eq!(users_mock.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_failed_submit_reports_message() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/1.0/users");
            then.status(500);
        })
        .await;

    let client = HttpSignUpClient::new(ApiConfig::default().with_base_url(server.base_url()))?;
    let action = submit_sign_up(&client, user1()).await;

    assert_eq!(
        action,
        SignUpAction::SubmitFailed(
            "The server failed to process the sign up (500). Please try again.".to_string()
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() -> Result<()> {
    let client = HttpSignUpClient::new(ApiConfig::default().with_base_url("http://127.0.0.1:1"))?;
    let error = client.sign_up(&user1()).await.unwrap_err();

    assert!(matches!(error, ClientError::Network { .. }), "got {error:?}");
    assert_eq!(
        error.user_message(),
        "Could not reach the server. Please try again."
    );
    Ok(())
}
