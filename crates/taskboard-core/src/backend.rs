//! HTTP Backend
//!
//! `AuthBackend` over the hosted identity provider (GoTrue REST) and the
//! custodial server function, plus the authenticated task/user listings.
//! Uses `reqwest`, which runs on the browser `fetch` API under wasm32.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{
    AuthBackend, HttpReply, PasswordCredentials, ProviderSession, ProviderUser, Session, SignInData,
    SignUpRequest,
};
use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::models::{Task, User};

/// Token endpoint success body; only the fields we read
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<ProviderUser>,
}

/// Listing bodies come either bare or wrapped under a key
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Tasks { tasks: Vec<T> },
    Users { users: Vec<T> },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(v) | Listing::Tasks { tasks: v } | Listing::Users { users: v } => v,
        }
    }
}

/// Provider failure message, in the order GoTrue versions populate them
pub fn provider_message(body: &Value) -> Option<String> {
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Decode each record on its own; malformed records are skipped
fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SupabaseBackend {
    client: Client,
    config: BackendConfig,
}

impl SupabaseBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Request carrying the application key as both apikey and bearer
    fn app_request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn list<T: DeserializeOwned>(
        &self,
        url: String,
        session: &Session,
    ) -> Result<Vec<T>, BackendError> {
        debug!(%url, "fetching listing");
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        if !status.is_success() {
            let message =
                provider_message(&body).unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(BackendError::Provider { message });
        }
        let listing: Listing<Value> = serde_json::from_value(body)?;
        Ok(decode_records(listing.into_vec()))
    }

    pub async fn list_tasks(&self, session: &Session) -> Result<Vec<Task>, BackendError> {
        self.list(self.config.tasks_url(), session).await
    }

    pub async fn list_users(&self, session: &Session) -> Result<Vec<User>, BackendError> {
        self.list(self.config.users_url(), session).await
    }
}

#[async_trait(?Send)]
impl AuthBackend for SupabaseBackend {
    async fn sign_in_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<SignInData, BackendError> {
        let response = self
            .app_request(self.client.post(self.config.sign_in_url()))
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        if !status.is_success() {
            return match provider_message(&body) {
                Some(message) => Err(BackendError::Provider { message }),
                None => Err(BackendError::Transport {
                    message: format!("sign-in returned HTTP {} without a message", status.as_u16()),
                }),
            };
        }

        let token: TokenResponse = serde_json::from_value(body)?;
        Ok(SignInData {
            user: token.user,
            session: token.access_token.map(|access_token| ProviderSession { access_token }),
        })
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<HttpReply, BackendError> {
        let response = self
            .app_request(self.client.post(self.config.sign_up_url()))
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: Value = response.json().await?;
        Ok(HttpReply { status, body })
    }
}
