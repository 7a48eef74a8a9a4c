use crate::services::errors::{ClientError, ClientResult};
use crate::utils::platform;

/// Path the sign-up request is posted to
pub const USERS_PATH: &str = "/api/1.0/users";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute origin such as `https://example.com`. `None` means the
    /// origin the page was served from.
    pub base_url: Option<String>,
    pub users_path: String,
    /// Only applied by native clients; browsers do not allow overriding it
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            users_path: USERS_PATH.to_string(),
            user_agent: concat!("signup-ui/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Full URL of the users endpoint
    pub fn endpoint(&self) -> ClientResult<String> {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => platform::current_origin().ok_or_else(|| ClientError::InvalidEndpoint {
                endpoint: self.users_path.clone(),
            })?,
        };

        Ok(format!(
            "{}{}",
            base.trim_end_matches('/'),
            self.users_path
        ))
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.users_path.is_empty() {
            errors.push("users_path must not be empty".to_string());
        } else if !self.users_path.starts_with('/') {
            errors.push(format!(
                "users_path must start with '/', got {}",
                self.users_path
            ));
        }

        if let Some(base) = &self.base_url {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                errors.push(format!("base_url must include an http(s) scheme, got {base}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
