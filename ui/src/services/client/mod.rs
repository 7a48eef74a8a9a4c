//! Sign-up HTTP client
//!
//! [`SignUpClient`] is the seam between the form and the backend. The
//! browser build uses [`HttpSignUpClient`]; tests substitute their own.

mod http_client;

pub use http_client::HttpSignUpClient;

use std::rc::Rc;

use async_trait::async_trait;

use crate::features::signup::SignUpRequest;
use crate::services::config::ApiConfig;
use crate::services::errors::ClientResult;

#[async_trait(?Send)]
pub trait SignUpClient {
    /// Create the account. Any 2xx response is success; the body is ignored.
    async fn sign_up(&self, request: &SignUpRequest) -> ClientResult<()>;
}

/// Context handle that lets the form reach whichever client the page provided
#[derive(Clone)]
pub struct SignUpService {
    client: Rc<dyn SignUpClient>,
}

impl SignUpService {
    pub fn new(client: impl SignUpClient + 'static) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    /// Service backed by the real HTTP client
    pub fn from_config(config: ApiConfig) -> ClientResult<Self> {
        Ok(Self::new(HttpSignUpClient::new(config)?))
    }

    pub fn client(&self) -> &dyn SignUpClient {
        self.client.as_ref()
    }
}

impl PartialEq for SignUpService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
