//! Error Types
//!
//! `BackendError` is what a transport reports; `AuthError` is what a form
//! shows. Every `AuthError` maps to one user-facing message.

use thiserror::Error;

/// Failure reported by an auth backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// The provider answered with a structured failure
    #[error("provider error: {message}")]
    Provider { message: String },

    /// Network failure, unexpected status or undecodable body
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        BackendError::Transport { message: e.to_string() }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Transport { message: e.to_string() }
    }
}

/// Failure of a sign-in or registration submission
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Rejected locally before any network call
    #[error("{message}")]
    Validation { message: String },

    /// Provider or custodial endpoint refused the request
    #[error("{message}")]
    Provider { message: String },

    /// Request/response cycle failed
    #[error("{message}")]
    Transport { message: String },

    /// Provider reported success without a usable session
    #[error("{message}")]
    MissingSession { message: String },

    /// Account created but the follow-up sign-in failed
    #[error("{message}")]
    RegisteredManualLogin { message: String },

    /// Another submission from the same form is still in flight
    #[error("{message}")]
    Busy { message: String },
}

impl AuthError {
    /// Message to show in the form's error banner
    pub fn user_message(&self) -> &str {
        match self {
            AuthError::Validation { message }
            | AuthError::Provider { message }
            | AuthError::Transport { message }
            | AuthError::MissingSession { message }
            | AuthError::RegisteredManualLogin { message }
            | AuthError::Busy { message } => message,
        }
    }
}

/// Invalid application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backend project_url is empty")]
    MissingProjectUrl,

    #[error("backend project_url must start with http:// or https://, got {0}")]
    InvalidProjectUrl(String),
}
