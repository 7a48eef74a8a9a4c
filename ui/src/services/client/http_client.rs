use std::fmt::Display;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::instrument;

use super::SignUpClient;
use crate::features::signup::SignUpRequest;
use crate::services::config::ApiConfig;
use crate::services::errors::{ClientError, ClientResult};
use crate::console_warn;

/// Posts sign-up requests as JSON with reqwest
#[derive(Clone)]
pub struct HttpSignUpClient {
    pub(crate) http_client: Client,
    pub(crate) config: ApiConfig,
}

impl HttpSignUpClient {
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        Ok(Self {
            http_client: build_http_client(&config)?,
            config,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> ClientResult<Client> {
    Ok(Client::builder().user_agent(&config.user_agent).build()?)
}

// The browser owns the User-Agent header
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ApiConfig) -> ClientResult<Client> {
    Ok(Client::builder().build()?)
}

/// Body of an error response, or empty when it could not be read
fn body_or_empty<E: Display>(status: StatusCode, body: Result<String, E>) -> String {
    body.unwrap_or_else(|error| {
        console_warn!(
            "[SignUp] Could not read body of {} response: {}",
            status,
            error
        );
        String::new()
    })
}

#[async_trait(?Send)]
impl SignUpClient for HttpSignUpClient {
    #[instrument(skip(self, request), fields(username = %request.username), err)]
    async fn sign_up(&self, request: &SignUpRequest) -> ClientResult<()> {
        let endpoint = self.config.endpoint()?;

        let response = self.http_client.post(&endpoint).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = body_or_empty(status, response.text().await);
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
