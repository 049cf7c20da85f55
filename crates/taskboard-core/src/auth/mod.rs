//! Authentication
//!
//! Layered like the rest of the core:
//! - `AuthBackend`: raw calls to the identity provider / custodial endpoint
//! - `AuthGateway`: validation, error mapping and Session normalization
//! - `Session`: the normalized result handed to the application

mod gateway;
mod session;
#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BackendError;
use crate::models::EntityId;

pub use gateway::AuthGateway;
pub use session::Session;

/// Password sign-in request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

/// Custodial sign-up request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Free-form metadata the provider keeps per user
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// User as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderUser {
    pub id: EntityId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
}

/// Successful sign-in payload; either half may be missing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignInData {
    pub user: Option<ProviderUser>,
    pub session: Option<ProviderSession>,
}

/// Status and decoded JSON body of a custodial endpoint call
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `error` field of the body, if it is a string
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(|e| e.as_str())
    }
}

/// External identity calls. Futures are not `Send`: everything runs on the
/// browser event loop.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Provider password sign-in. Structured refusals are `BackendError::Provider`.
    async fn sign_in_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<SignInData, BackendError>;

    /// Custodial account creation. Any HTTP status is returned as a reply;
    /// only transport/decoding failures are errors.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<HttpReply, BackendError>;
}
