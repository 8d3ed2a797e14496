//! Authentication endpoint bindings.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::api::error::ApiError;
use crate::api::transport::{ApiRequest, Transport};

/// Session data returned by a successful login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub jwt: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Typed client for `/auth`.
pub struct AuthApi<T> {
    transport: Arc<T>,
}

impl<T> Clone for AuthApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> AuthApi<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// `POST /auth/sent/login-signup-otp`
    ///
    /// Asks the server to mail a one-time code to `email`. The body is
    /// discarded; only success matters to the store.
    pub async fn send_login_otp(&self, email: &str) -> Result<(), ApiError> {
        self.transport
            .execute(
                ApiRequest::post("/auth/sent/login-signup-otp")
                    .with_body(json!({ "email": email })),
            )
            .await?;
        Ok(())
    }

    /// `POST /auth/signing`
    pub async fn signin(&self, email: &str, otp: &str) -> Result<AuthResponse, ApiError> {
        let value = self
            .transport
            .execute(
                ApiRequest::post("/auth/signing").with_body(json!({ "email": email, "otp": otp })),
            )
            .await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }
}
